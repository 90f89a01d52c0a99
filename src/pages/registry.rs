//! Page registry - the page-creation capability used during a build

use anyhow::{bail, Result};
use indexmap::IndexMap;

use super::{CreatePage, PageRequest};

/// Registered pages keyed by path, in registration order
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: IndexMap<String, PageRequest>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&PageRequest> {
        self.pages.get(path)
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageRequest> {
        self.pages.values()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl CreatePage for PageRegistry {
    /// Register a page; a page already at the same path is replaced
    fn create_page(&mut self, page: PageRequest) -> Result<()> {
        if !page.path.starts_with('/') {
            bail!("page path {:?} must start with '/'", page.path);
        }
        if page.component.is_empty() {
            bail!("page {} has no template", page.path);
        }

        if let Some(previous) = self.pages.get(&page.path) {
            tracing::warn!(
                "Page {} ({}) replaces an earlier page ({}) at the same path",
                page.path,
                page.component,
                previous.component
            );
        }
        self.pages.insert(page.path.clone(), page);
        Ok(())
    }
}
