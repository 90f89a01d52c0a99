//! In-memory index of file and content nodes

use indexmap::IndexMap;
use regex::Regex;

use super::node::{ContentNode, FileNode};
use super::query::{ContentQuery, NodeQuery, QueriedNode, QueryResult, SortBy};
use super::slug::{self, GetNode};
use crate::config::SlugConfig;
use crate::error::{QueryError, SlugError};

/// Holds every node created during a build, in creation order
#[derive(Debug, Default)]
pub struct NodeStore {
    files: IndexMap<String, FileNode>,
    nodes: IndexMap<String, ContentNode>,
    slug_options: SlugConfig,
}

impl NodeStore {
    pub fn new(slug_options: SlugConfig) -> Self {
        Self {
            files: IndexMap::new(),
            nodes: IndexMap::new(),
            slug_options,
        }
    }

    /// Register a file node
    pub fn create_file_node(&mut self, file: FileNode) {
        self.files.insert(file.id.clone(), file);
    }

    /// Register a content node, running the node-creation hook first
    pub fn create_node(&mut self, mut node: ContentNode) -> Result<(), SlugError> {
        slug::on_create_node(&mut node, &*self, &self.slug_options)?;
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Look up a content node by id
    pub fn get(&self, id: &str) -> Option<&ContentNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.values()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl GetNode for NodeStore {
    fn get_node(&self, id: &str) -> Option<&FileNode> {
        self.files.get(id)
    }
}

impl ContentQuery for NodeStore {
    fn query(&self, query: &NodeQuery) -> QueryResult {
        let mut errors = Vec::new();
        let filter = compile("filter", query.filter.as_deref(), &mut errors);
        let exclude = compile("exclude", query.exclude.as_deref(), &mut errors);
        if !errors.is_empty() {
            return QueryResult::failed(errors);
        }

        let mut selected: Vec<&ContentNode> = self
            .nodes
            .values()
            .filter(|n| filter.as_ref().map_or(true, |re| re.is_match(&n.file_absolute_path)))
            .filter(|n| !exclude.as_ref().map_or(false, |re| re.is_match(&n.file_absolute_path)))
            .collect();

        if let Some(SortBy::DateAsc) = query.sort {
            selected.sort_by(|a, b| {
                a.date
                    .cmp(&b.date)
                    .then_with(|| a.file_absolute_path.cmp(&b.file_absolute_path))
            });
        }

        if let Some(limit) = query.limit {
            selected.truncate(limit);
        }

        let mut data = Vec::with_capacity(selected.len());
        for node in selected {
            match node.slug() {
                Some(slug) => data.push(QueriedNode::new(&node.id, slug)),
                None => errors.push(QueryError::UnresolvedField {
                    node_id: node.id.clone(),
                    field: "fields.slug",
                }),
            }
        }

        if errors.is_empty() {
            QueryResult::ok(data)
        } else {
            QueryResult::failed(errors)
        }
    }
}

fn compile(
    field: &'static str,
    pattern: Option<&str>,
    errors: &mut Vec<QueryError>,
) -> Option<Regex> {
    let pattern = pattern?;
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            errors.push(QueryError::InvalidPattern {
                field,
                pattern: pattern.to_string(),
                message: e.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn add(store: &mut NodeStore, relative: &str, date: Option<&str>) -> String {
        let absolute = PathBuf::from("/site/content").join(relative);
        let file = FileNode::new("content", absolute, PathBuf::from(relative));
        let fm = FrontMatter {
            date: date.map(str::to_string),
            ..FrontMatter::default()
        };
        let node = ContentNode::new(&file, fm, String::new());
        let id = node.id.clone();
        store.create_file_node(file);
        store.create_node(node).unwrap();
        id
    }

    fn slugs(result: &QueryResult) -> Vec<&str> {
        result
            .data
            .as_ref()
            .unwrap()
            .iter()
            .map(|n| n.slug.as_str())
            .collect()
    }

    #[test]
    fn test_create_node_assigns_slug() {
        let mut store = NodeStore::default();
        let id = add(&mut store, "blog/hello/index.md", None);
        assert_eq!(store.get(&id).unwrap().slug(), Some("/blog/hello/"));

        let parent = store.get(&id).unwrap().parent.clone();
        let file = store.get_node(&parent).unwrap();
        assert_eq!(file.relative_path, PathBuf::from("blog/hello/index.md"));
    }

    #[test]
    fn test_create_node_without_file_fails() {
        let mut store = NodeStore::default();
        let file = FileNode::new("content", PathBuf::from("/x.md"), PathBuf::from("x.md"));
        let node = ContentNode::new(&file, FrontMatter::default(), String::new());
        assert!(store.create_node(node).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_filter_sort_limit() {
        let mut store = NodeStore::default();
        add(&mut store, "blog/c/index.md", Some("2021-03-01"));
        add(&mut store, "about.md", None);
        add(&mut store, "blog/a/index.md", Some("2019-01-01"));
        add(&mut store, "blog/b/index.md", Some("2020-06-15"));

        let result = store.query(&NodeQuery::all().filter("/content/blog/").sort(SortBy::DateAsc));
        assert!(!result.has_errors());
        assert_eq!(slugs(&result), vec!["/blog/a/", "/blog/b/", "/blog/c/"]);

        let limited = store.query(
            &NodeQuery::all()
                .filter("/content/blog/")
                .sort(SortBy::DateAsc)
                .limit(2),
        );
        assert_eq!(slugs(&limited), vec!["/blog/a/", "/blog/b/"]);
    }

    #[test]
    fn test_unfiltered_keeps_index_order() {
        let mut store = NodeStore::default();
        add(&mut store, "b.md", Some("2020-01-01"));
        add(&mut store, "a.md", Some("2019-01-01"));
        let result = store.query(&NodeQuery::all());
        assert_eq!(slugs(&result), vec!["/b/", "/a/"]);
    }

    #[test]
    fn test_undated_sort_first_then_by_path() {
        let mut store = NodeStore::default();
        add(&mut store, "z.md", Some("2020-01-01"));
        add(&mut store, "y.md", None);
        add(&mut store, "x.md", None);
        let result = store.query(&NodeQuery::all().sort(SortBy::DateAsc));
        assert_eq!(slugs(&result), vec!["/x/", "/y/", "/z/"]);
    }

    #[test]
    fn test_exclude() {
        let mut store = NodeStore::default();
        add(&mut store, "blog/a/index.md", None);
        add(&mut store, "about.md", None);
        let result = store.query(&NodeQuery::all().exclude(Some("/content/blog/".to_string())));
        assert_eq!(slugs(&result), vec!["/about/"]);
    }

    #[test]
    fn test_invalid_pattern_reports_error() {
        let mut store = NodeStore::default();
        add(&mut store, "a.md", None);
        let result = store.query(&NodeQuery::all().filter("(unclosed"));
        assert_eq!(result.data, None);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            result.errors[0],
            QueryError::InvalidPattern { field: "filter", .. }
        ));
    }

    #[test]
    fn test_empty_store_returns_empty_data() {
        let store = NodeStore::default();
        let result = store.query(&NodeQuery::all());
        assert_eq!(result, QueryResult::ok(Vec::new()));
    }
}
