//! Generic markdown pages

use super::{PageContext, PageRequest};
use crate::content::QueriedNode;

/// One page per node, with only the node id in its context
pub fn build_generic_pages(nodes: &[QueriedNode], template: &str) -> Vec<PageRequest> {
    nodes
        .iter()
        .map(|node| PageRequest {
            path: node.slug.clone(),
            component: template.to_string(),
            context: PageContext::Page {
                id: node.id.clone(),
            },
        })
        .collect()
}
