//! Content queries over indexed markdown nodes

use serde::Serialize;

use crate::error::QueryError;

/// Sort order for a node query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Ascending by front-matter date; undated nodes first, ties by file path
    DateAsc,
}

/// Selection of content nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeQuery {
    /// Regex a node's absolute file path must match
    pub filter: Option<String>,
    /// Regex a node's absolute file path must not match
    pub exclude: Option<String>,
    pub sort: Option<SortBy>,
    pub limit: Option<usize>,
}

impl NodeQuery {
    /// Every content node, in index order
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter = Some(pattern.into());
        self
    }

    pub fn exclude(mut self, pattern: Option<String>) -> Self {
        self.exclude = pattern;
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The part of a content node a page query selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueriedNode {
    pub id: String,
    pub slug: String,
}

impl QueriedNode {
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
        }
    }
}

/// Outcome of a query: `data` is only present when `errors` is empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub data: Option<Vec<QueriedNode>>,
    pub errors: Vec<QueryError>,
}

impl QueryResult {
    pub fn ok(nodes: Vec<QueriedNode>) -> Self {
        Self {
            data: Some(nodes),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<QueryError>) -> Self {
        Self { data: None, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Capability to run content queries
pub trait ContentQuery {
    fn query(&self, query: &NodeQuery) -> QueryResult;
}
