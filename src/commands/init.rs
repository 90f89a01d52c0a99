//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# folio site configuration

site_metadata:
  title: My Blog
  description: A blog built with folio
  author:
    name: Your Name
    summary: who writes about things.
  site_url: https://example.com
  social:
    twitter: ''

sources:
  - name: blog
    path: content/blog
  - name: pages
    path: content/pages
  - name: assets
    path: content/assets

public_dir: public
templates_dir: templates
date_format: MMMM DD, YYYY
excerpt_length: 140

blog:
  filter: /content/blog/
  limit: 1000
  template: blog-post.html

pages:
  template: markdown-page.html
  # Blog posts already get a page from the blog builder
  exclude: /content/blog/

slug:
  base_path: src/pages
  trailing_slash: true

highlight:
  theme: InspiredGitHub
  line_number: false

nav:
  - label: Blog
    href: /
  - label: About
    href: /about/
"#;

const HELLO_WORLD: &str = r#"---
title: Hello World
date: 2024-01-01
description: The first post on this blog.
---

Welcome to your new site. Edit or delete this post, then run `folio generate`.

```rust
fn main() {
    println!("Hello, world!");
}
```
"#;

const ABOUT: &str = r#"---
title: About
---

Write something about yourself here.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        bail!("A site already exists in {:?}", target_dir);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("content/blog/hello-world"))?;
    fs::create_dir_all(target_dir.join("content/pages"))?;
    fs::create_dir_all(target_dir.join("content/assets"))?;
    fs::create_dir_all(target_dir.join("templates"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(
        target_dir.join("content/blog/hello-world/index.md"),
        HELLO_WORLD,
    )?;
    fs::write(target_dir.join("content/pages/about.md"), ABOUT)?;

    tracing::info!("Initialized site in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.site_title(), "My Blog");
        assert_eq!(folio.config.pages.exclude.as_deref(), Some("/content/blog/"));
        assert_eq!(folio.config.nav.len(), 2);
        assert!(dir.path().join("content/blog/hello-world/index.md").exists());
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
