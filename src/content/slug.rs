//! Slug derivation from a node's location in the file tree

use indexmap::IndexMap;
use std::path::{Component, Path};

use super::node::{ContentNode, FileNode, SLUG_FIELD};
use crate::config::SlugConfig;
use crate::error::SlugError;

/// Resolves node ids to file nodes
pub trait GetNode {
    fn get_node(&self, id: &str) -> Option<&FileNode>;
}

impl GetNode for IndexMap<String, FileNode> {
    fn get_node(&self, id: &str) -> Option<&FileNode> {
        self.get(id)
    }
}

/// Derive the URL path for a content node from its file's relative path
///
/// `content/blog/hello-world/index.md` under a `content/blog` source
/// becomes `/hello-world/`; `about.md` becomes `/about/`.
pub fn create_file_path(
    node: &ContentNode,
    get_node: &impl GetNode,
    options: &SlugConfig,
) -> Result<String, SlugError> {
    let file_node = get_node
        .get_node(&node.parent)
        .ok_or_else(|| SlugError::MissingFileNode {
            node_id: node.id.clone(),
            parent: node.parent.clone(),
        })?;

    let relative = file_node
        .relative_path
        .strip_prefix(&options.base_path)
        .unwrap_or(&file_node.relative_path);

    let name = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SlugError::NoFileName(file_node.relative_path.clone()))?;

    let mut segments: Vec<String> = Vec::new();
    push_normalized(&mut segments, relative.parent().unwrap_or(Path::new("")));
    if name != "index" {
        push_normalized(&mut segments, Path::new(name));
    }

    let mut slug = format!("/{}", segments.join("/"));
    if options.trailing_slash && !slug.ends_with('/') {
        slug.push('/');
    }
    Ok(slug)
}

/// Append path components, resolving `.` and `..` without leaving the root
fn push_normalized(segments: &mut Vec<String>, path: &Path) {
    for component in path.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().to_string()),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
}

/// Node-creation hook: derive the slug and attach it to the node
pub fn on_create_node(
    node: &mut ContentNode,
    get_node: &impl GetNode,
    options: &SlugConfig,
) -> Result<(), SlugError> {
    let value = create_file_path(node, get_node, options)?;
    tracing::debug!("Assigned slug {} to {}", value, node.file_absolute_path);
    node.create_field(SLUG_FIELD, value);
    Ok(())
}
