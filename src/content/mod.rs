//! Content module - indexes markdown files into nodes and queries them

mod frontmatter;
pub mod loader;
mod markdown;
mod node;
mod query;
pub mod slug;
mod store;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use markdown::{excerpt, strip_html, MarkdownRenderer};
pub use node::{create_node_id, ContentNode, FileNode, SLUG_FIELD};
pub use query::{ContentQuery, NodeQuery, QueriedNode, QueryResult, SortBy};
pub use slug::GetNode;
pub use store::NodeStore;
