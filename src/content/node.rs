//! File and content node models

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

use super::FrontMatter;

/// Field key the derived slug is stored under
pub const SLUG_FIELD: &str = "slug";

/// Derive a stable node id from a seed
///
/// The same seed always yields the same id across builds.
pub fn create_node_id(seed: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes()).to_string()
}

/// An indexed file in one of the source directories
#[derive(Debug, Clone, Serialize)]
pub struct FileNode {
    pub id: String,

    /// Name of the source instance the file was found in
    pub source_instance_name: String,

    /// Full path on disk
    pub absolute_path: PathBuf,

    /// Path relative to the source instance root
    pub relative_path: PathBuf,

    /// Lowercased extension without the dot
    pub extension: String,
}

impl FileNode {
    pub fn new(source_instance_name: &str, absolute_path: PathBuf, relative_path: PathBuf) -> Self {
        let extension = absolute_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        Self {
            id: create_node_id(&format!("File >>> {}", absolute_path.display())),
            source_instance_name: source_instance_name.to_string(),
            absolute_path,
            relative_path,
            extension,
        }
    }

    /// Whether this file is a markdown document
    pub fn is_markdown(&self) -> bool {
        matches!(self.extension.as_str(), "md" | "markdown")
    }
}

/// A markdown document indexed from a file node
#[derive(Debug, Clone, Serialize)]
pub struct ContentNode {
    pub id: String,

    /// Id of the file node this content was read from
    pub parent: String,

    /// Absolute path of the source file, with `/` separators
    pub file_absolute_path: String,

    pub frontmatter: FrontMatter,

    /// Parsed `frontmatter.date`
    pub date: Option<DateTime<FixedOffset>>,

    /// Raw markdown body
    #[serde(skip)]
    pub raw: String,

    /// Rendered HTML body
    pub html: String,

    /// Plain-text summary of the body
    pub excerpt: String,

    /// Fields attached after creation
    pub fields: IndexMap<String, String>,
}

impl ContentNode {
    /// Create a content node for a file node
    pub fn new(file: &FileNode, frontmatter: FrontMatter, raw: String) -> Self {
        let file_absolute_path = file.absolute_path.to_string_lossy().replace('\\', "/");
        let date = frontmatter.parse_date();
        Self {
            id: create_node_id(&format!("MarkdownRemark >>> {}", file_absolute_path)),
            parent: file.id.clone(),
            file_absolute_path,
            frontmatter,
            date,
            raw,
            html: String::new(),
            excerpt: String::new(),
            fields: IndexMap::new(),
        }
    }

    /// Attach a field to the node, replacing any previous value
    pub fn create_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }

    /// The derived slug, once assigned
    pub fn slug(&self) -> Option<&str> {
        self.fields.get(SLUG_FIELD).map(String::as_str)
    }

    /// Title from front-matter, falling back to the slug
    pub fn title(&self) -> &str {
        self.frontmatter
            .title
            .as_deref()
            .or_else(|| self.slug())
            .unwrap_or_default()
    }
}
