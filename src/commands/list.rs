//! List site content

use anyhow::{bail, Result};

use crate::content::loader::ContentLoader;
use crate::content::{ContentQuery, NodeQuery, NodeStore, SortBy};
use crate::error::join_errors;
use crate::pages::{create_pages, PageRegistry};
use crate::reporter::Reporter;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = ContentLoader::new(folio).load()?;

    for line in lines(folio, &store, content_type)? {
        println!("{}", line);
    }

    Ok(())
}

/// Build the listing for one content type
fn lines(folio: &Folio, store: &NodeStore, content_type: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" => {
            let blog = &folio.config.blog;
            let result = store.query(
                &NodeQuery::all()
                    .filter(blog.filter.clone())
                    .sort(SortBy::DateAsc)
                    .limit(blog.limit),
            );
            if result.has_errors() {
                bail!("{}", join_errors(&result.errors));
            }
            let posts = result.data.unwrap_or_default();
            out.push(format!("Posts ({}):", posts.len()));
            for post in posts.iter().filter_map(|p| store.get(&p.id)) {
                let date = post
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                out.push(format!(
                    "  {} - {} [{}]",
                    date,
                    post.title(),
                    post.slug().unwrap_or_default()
                ));
            }
        }
        "page" | "pages" => {
            out.push(format!("Pages ({}):", store.len()));
            for page in store.nodes() {
                out.push(format!(
                    "  {} [{}]",
                    page.title(),
                    page.slug().unwrap_or_default()
                ));
            }
        }
        "route" | "routes" => {
            let mut registry = PageRegistry::new();
            create_pages(store, &mut registry, &mut Reporter::new(), &folio.config)?;
            out.push(format!("Routes ({}):", registry.len()));
            for page in registry.pages() {
                out.push(format!("  {} ({})", page.path, page.component));
            }
        }
        _ => {
            bail!(
                "Unknown type: {}. Available: post, page, route",
                content_type
            );
        }
    }

    Ok(out)
}
