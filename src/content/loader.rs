//! Content loader - indexes the configured source directories

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{excerpt, ContentNode, FileNode, FrontMatter, MarkdownRenderer, NodeStore};
use crate::config::SourceConfig;
use crate::Folio;

/// Loads content from the source directories into a [`NodeStore`]
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        let highlight = &folio.config.highlight;
        let renderer = MarkdownRenderer::with_options(&highlight.theme, highlight.line_number);
        Self { folio, renderer }
    }

    /// Index every source directory
    pub fn load(&self) -> Result<NodeStore> {
        let mut store = NodeStore::new(self.folio.config.slug.clone());

        for source in &self.folio.config.sources {
            self.load_source(source, &mut store)?;
        }

        tracing::info!(
            "Indexed {} files and {} markdown nodes",
            store.files().count(),
            store.len()
        );
        Ok(store)
    }

    fn load_source(&self, source: &SourceConfig, store: &mut NodeStore) -> Result<()> {
        let root = self.folio.base_dir.join(&source.path);
        if !root.exists() {
            tracing::warn!("Source {:?} not found at {:?}, skipping", source.name, root);
            return Ok(());
        }

        for entry in WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();
            let file = FileNode::new(&source.name, path.to_path_buf(), relative);

            if file.is_markdown() {
                match self.load_markdown(&file) {
                    Ok(node) => {
                        store.create_file_node(file);
                        store
                            .create_node(node)
                            .with_context(|| format!("Failed to create node for {:?}", path))?;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {:?}: {}", path, e);
                        store.create_file_node(file);
                    }
                }
            } else {
                store.create_file_node(file);
            }
        }

        Ok(())
    }

    /// Read and render a markdown file into a content node
    fn load_markdown(&self, file: &FileNode) -> Result<ContentNode> {
        let content = fs::read_to_string(&file.absolute_path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let mut node = ContentNode::new(file, fm, body.to_string());
        node.html = self.renderer.render(body);
        node.excerpt = excerpt(&node.html, self.folio.config.excerpt_length);

        if node.frontmatter.date.is_some() && node.date.is_none() {
            tracing::warn!(
                "Unrecognised date {:?} in {:?}",
                node.frontmatter.date,
                file.absolute_path
            );
        }

        Ok(node)
    }
}

/// Dot-files and dot-directories are never indexed
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentQuery, NodeQuery, SortBy};
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "content/blog/second/index.md",
            "---\ntitle: Second\ndate: 2021-02-01\n---\nBody of the second post.\n",
        );
        write(
            dir.path(),
            "content/blog/first/index.md",
            "---\ntitle: First\ndate: 2020-01-01\ndescription: The first\n---\n# Hi\n",
        );
        write(dir.path(), "content/blog/first/cover.png", "not really a png");
        write(dir.path(), "content/pages/about.md", "---\ntitle: About\n---\nHi, I am Peter.\n");
        write(dir.path(), "content/pages/.draft.md", "---\ntitle: Hidden\n---\n");
        dir
    }

    #[test]
    fn test_load_indexes_markdown_and_files() {
        let dir = site();
        let folio = Folio::new(dir.path()).unwrap();
        let store = ContentLoader::new(&folio).load().unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.files().count(), 4);

        let about = store
            .nodes()
            .find(|n| n.frontmatter.title.as_deref() == Some("About"))
            .unwrap();
        assert_eq!(about.slug(), Some("/about/"));
        assert!(about.html.contains("Hi, I am Peter."));
        assert_eq!(about.excerpt, "Hi, I am Peter.");
    }

    #[test]
    fn test_blog_query_over_loaded_content() {
        let dir = site();
        let folio = Folio::new(dir.path()).unwrap();
        let store = ContentLoader::new(&folio).load().unwrap();

        let result = store.query(
            &NodeQuery::all()
                .filter(folio.config.blog.filter.clone())
                .sort(SortBy::DateAsc),
        );
        let slugs: Vec<_> = result.data.unwrap().into_iter().map(|n| n.slug).collect();
        assert_eq!(slugs, vec!["/first/", "/second/"]);
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let store = ContentLoader::new(&folio).load().unwrap();
        assert!(store.is_empty());
    }
}
