//! Generator module - renders registered pages to static HTML

use anyhow::{bail, Context as _, Result};
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::content::{ContentNode, ContentQuery, NodeQuery, NodeStore, SortBy};
use crate::error::join_errors;
use crate::helpers::format_date;
use crate::pages::{PageContext, PageRegistry};
use crate::templates::{LocationData, NodeData, SeoData, SiteData, TemplateRenderer};
use crate::Folio;

/// Writes the site to the public directory
pub struct Generator<'a> {
    folio: &'a Folio,
    renderer: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(folio: &'a Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new(Some(&folio.templates_dir))?;
        Ok(Self { folio, renderer })
    }

    /// Render every registered page, the index and the static files
    ///
    /// Returns the number of HTML files written.
    pub fn generate(&self, store: &NodeStore, registry: &PageRegistry) -> Result<usize> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_source_assets(store)?;

        let site_data = self.build_site_data();
        let mut written = 0;

        for page in registry.pages() {
            if !self.renderer.has_template(&page.component) {
                bail!("Page {} uses unknown template {}", page.path, page.component);
            }
            let node = lookup(store, page.context.id())
                .with_context(|| format!("Failed to render page {}", page.path))?;

            let mut context = self.create_base_context(&site_data, &page.path);
            context.insert("seo", &self.seo_data(node));
            context.insert("page", &self.node_data(node)?);

            if let PageContext::Post {
                previous_post_id,
                next_post_id,
                ..
            } = &page.context
            {
                context.insert("previous", &self.neighbour(store, previous_post_id.as_deref())?);
                context.insert("next", &self.neighbour(store, next_post_id.as_deref())?);
            }

            let html = self.renderer.render(&page.component, &context)?;
            self.write_page(&page.path, &html)?;
            written += 1;
        }

        if registry.get("/").is_none() {
            self.generate_index_page(store, &site_data)?;
            written += 1;
        }

        tracing::info!(
            "Generated {} pages in {:?}",
            written,
            self.folio.public_dir
        );
        Ok(written)
    }

    /// Render the post listing at `/`, newest first
    fn generate_index_page(&self, store: &NodeStore, site_data: &SiteData) -> Result<()> {
        let blog = &self.folio.config.blog;
        let result = store.query(
            &NodeQuery::all()
                .filter(blog.filter.clone())
                .sort(SortBy::DateAsc)
                .limit(blog.limit),
        );
        if result.has_errors() {
            bail!("Failed to list blog posts: {}", join_errors(&result.errors));
        }
        let posts = result
            .data
            .unwrap_or_default()
            .iter()
            .rev()
            .map(|post| self.node_data(lookup(store, &post.id)?))
            .collect::<Result<Vec<_>>>()?;

        let mut context = self.create_base_context(site_data, "/");
        context.insert(
            "seo",
            &SeoData {
                title: site_data.title.clone(),
                description: site_data
                    .metadata
                    .description
                    .clone()
                    .unwrap_or_default(),
            },
        );
        context.insert("posts", &posts);

        let html = self.renderer.render("index.html", &context)?;
        self.write_page("/", &html)
    }

    fn build_site_data(&self) -> SiteData {
        let config = &self.folio.config;
        SiteData {
            title: config.site_title(),
            metadata: config.site_metadata.clone(),
            nav: config.nav.clone(),
            current_year: chrono::Local::now().format("%Y").to_string(),
        }
    }

    /// Create a base context with the variables every template sees
    fn create_base_context(&self, site_data: &SiteData, pathname: &str) -> Context {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert(
            "location",
            &LocationData {
                pathname: pathname.to_string(),
                is_root_path: pathname == "/",
            },
        );
        context
    }

    fn node_data(&self, node: &ContentNode) -> Result<NodeData> {
        let description = node.frontmatter.description.clone();
        Ok(NodeData {
            id: node.id.clone(),
            slug: node.slug().unwrap_or_default().to_string(),
            title: node.title().to_string(),
            summary: description.clone().unwrap_or_else(|| node.excerpt.clone()),
            description,
            date: node.date.map(|d| d.to_rfc3339()),
            formatted_date: node
                .date
                .map(|d| format_date(&d, &self.folio.config.date_format)),
            html: node.html.clone(),
            excerpt: node.excerpt.clone(),
            frontmatter: serde_json::to_value(&node.frontmatter)?,
        })
    }

    fn seo_data(&self, node: &ContentNode) -> SeoData {
        SeoData {
            title: node.title().to_string(),
            description: node
                .frontmatter
                .description
                .clone()
                .unwrap_or_else(|| node.excerpt.clone()),
        }
    }

    fn neighbour(&self, store: &NodeStore, id: Option<&str>) -> Result<Option<NodeData>> {
        match id {
            Some(id) => Ok(Some(self.node_data(lookup(store, id)?)?)),
            None => Ok(None),
        }
    }

    /// Write `html` to `<public>/<path>/index.html`
    fn write_page(&self, path: &str, html: &str) -> Result<()> {
        // Strip leading slash from path to avoid creating absolute paths
        let clean_path = path.trim_start_matches('/');
        let output_path = self.folio.public_dir.join(clean_path).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated page: {:?}", output_path);
        Ok(())
    }

    /// Copy non-markdown source files to the public directory
    fn copy_source_assets(&self, store: &NodeStore) -> Result<()> {
        let mut copied = 0;
        for file in store.files().filter(|f| !f.is_markdown()) {
            let dest: PathBuf = self.folio.public_dir.join(&file.relative_path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&file.absolute_path, &dest)
                .with_context(|| format!("Failed to copy {:?}", file.absolute_path))?;
            copied += 1;
        }
        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

fn lookup<'s>(store: &'s NodeStore, id: &str) -> Result<&'s ContentNode> {
    match store.get(id) {
        Some(node) => Ok(node),
        None => bail!("No content node with id {}", id),
    }
}
