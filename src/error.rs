//! Error types for content queries, slug derivation and page creation

use std::path::PathBuf;

use thiserror::Error;

/// An error reported by a content query
///
/// Queries never fail as a whole; they collect these into
/// [`QueryResult::errors`](crate::content::QueryResult) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A filter or exclude pattern is not a valid regular expression
    #[error("invalid {field} pattern {pattern:?}: {message}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        message: String,
    },

    /// A selected node is missing a field the query asked for
    #[error("cannot return null for non-nullable field {field} on node {node_id}")]
    UnresolvedField { node_id: String, field: &'static str },
}

/// Failure to derive a slug from a node's file path
#[derive(Error, Debug)]
pub enum SlugError {
    /// The node's parent could not be resolved to a file node
    #[error("node {node_id} has no resolvable file node (parent {parent:?})")]
    MissingFileNode { node_id: String, parent: String },

    /// The file node's relative path has no file name
    #[error("file node {0:?} has no file name")]
    NoFileName(PathBuf),
}

/// Fatal build failure
#[derive(Error, Debug)]
pub enum BuildError {
    /// A content query reported errors; page creation for the branch stopped
    #[error("{message}: {}", join_errors(.errors))]
    QueryFailed {
        message: String,
        errors: Vec<QueryError>,
    },

    /// The page-creation capability rejected a page
    #[error("failed to create page at {path}: {source}")]
    CreatePage {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

pub(crate) fn join_errors(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
