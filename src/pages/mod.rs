//! Page creation - turns queried content nodes into page requests

mod blog;
mod generic;
mod registry;

pub use blog::build_blog_pages;
pub use generic::build_generic_pages;
pub use registry::PageRegistry;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentQuery, NodeQuery, SortBy};
use crate::error::BuildError;
use crate::reporter::Reporter;

/// Template variables handed to a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageContext {
    /// A blog post with its chronological neighbours
    Post {
        id: String,
        #[serde(rename = "previousPostId")]
        previous_post_id: Option<String>,
        #[serde(rename = "nextPostId")]
        next_post_id: Option<String>,
    },
    /// Any other markdown page
    Page { id: String },
}

impl PageContext {
    /// Id of the content node the page renders
    pub fn id(&self) -> &str {
        match self {
            PageContext::Post { id, .. } | PageContext::Page { id } => id,
        }
    }
}

/// A request to create one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// URL path, the node's slug
    pub path: String,
    /// Template name
    pub component: String,
    pub context: PageContext,
}

/// Capability to register pages
pub trait CreatePage {
    fn create_page(&mut self, page: PageRequest) -> anyhow::Result<()>;
}

/// Query content and register every page the site needs
///
/// Blog posts come first, sorted by ascending date and linked to their
/// neighbours, then one generic page per markdown node. If either query
/// reports errors the failure is reported as fatal and no further pages
/// are created.
pub fn create_pages(
    store: &impl ContentQuery,
    actions: &mut impl CreatePage,
    reporter: &mut Reporter,
    config: &SiteConfig,
) -> Result<(), BuildError> {
    let blog_query = NodeQuery::all()
        .filter(config.blog.filter.clone())
        .sort(SortBy::DateAsc)
        .limit(config.blog.limit);
    let result = store.query(&blog_query);
    if result.has_errors() {
        return Err(reporter.panic_on_build(
            "There was an error loading your blog posts",
            result.errors,
        ));
    }
    let posts = result.data.unwrap_or_default();

    for page in build_blog_pages(&posts, &config.blog.template) {
        register(actions, page)?;
    }
    tracing::info!("Created {} blog post pages", posts.len());

    let pages_query = NodeQuery::all().exclude(config.pages.exclude.clone());
    let result = store.query(&pages_query);
    if result.has_errors() {
        return Err(reporter.panic_on_build(
            "There was an error loading your markdown pages",
            result.errors,
        ));
    }
    let pages = result.data.unwrap_or_default();

    for page in build_generic_pages(&pages, &config.pages.template) {
        register(actions, page)?;
    }
    tracing::info!("Created {} markdown pages", pages.len());

    Ok(())
}

fn register(actions: &mut impl CreatePage, page: PageRequest) -> Result<(), BuildError> {
    let path = page.path.clone();
    actions
        .create_page(page)
        .map_err(|source| BuildError::CreatePage { path, source })
}
