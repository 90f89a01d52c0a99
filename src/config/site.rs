//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Metadata exposed to templates
    pub site_metadata: SiteMetadata,

    // Content
    pub sources: Vec<SourceConfig>,
    pub excerpt_length: usize,
    pub date_format: String,

    // Directory
    pub public_dir: String,
    pub templates_dir: String,

    // Page creation
    pub blog: BlogConfig,
    pub pages: PagesConfig,
    pub slug: SlugConfig,

    // Rendering
    pub highlight: HighlightConfig,
    pub nav: Vec<NavItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_metadata: SiteMetadata::default(),

            sources: vec![
                SourceConfig::new("blog", "content/blog"),
                SourceConfig::new("pages", "content/pages"),
                SourceConfig::new("assets", "content/assets"),
            ],
            excerpt_length: 140,
            date_format: "MMMM DD, YYYY".to_string(),

            public_dir: "public".to_string(),
            templates_dir: "templates".to_string(),

            blog: BlogConfig::default(),
            pages: PagesConfig::default(),
            slug: SlugConfig::default(),

            highlight: HighlightConfig::default(),
            nav: vec![
                NavItem::new("Blog", "/"),
                NavItem::new("Projects", "/projects/"),
                NavItem::new("About", "/about/"),
                NavItem::new("Contact", "/contact/"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Title shown in the header, falling back to the author name
    pub fn site_title(&self) -> String {
        self.site_metadata
            .title
            .clone()
            .or_else(|| {
                self.site_metadata
                    .author
                    .as_ref()
                    .and_then(|a| a.name.clone())
            })
            .unwrap_or_else(|| "Blog".to_string())
    }
}

/// Site metadata
///
/// Every field is optional so that templates see `null` instead of the
/// build failing when a site leaves something out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub site_url: Option<String>,
    pub social: Option<Social>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub twitter: Option<String>,
}

/// A directory of content to index, relative to the site root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub path: String,
}

impl SourceConfig {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Blog post page creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Regex matched against each node's absolute file path
    pub filter: String,
    pub limit: usize,
    pub template: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            filter: "/content/blog/".to_string(),
            limit: 1000,
            template: "blog-post.html".to_string(),
        }
    }
}

/// Generic markdown page creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub template: String,
    /// Regex of absolute file paths that get no generic page
    pub exclude: Option<String>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            template: "markdown-page.html".to_string(),
            exclude: None,
        }
    }
}

/// Slug derivation options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub base_path: String,
    pub trailing_slash: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            base_path: "src/pages".to_string(),
            trailing_slash: true,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "InspiredGitHub".to_string(),
            line_number: false,
        }
    }
}

/// A link in the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.blog.filter, "/content/blog/");
        assert_eq!(config.blog.limit, 1000);
        assert_eq!(config.pages.template, "markdown-page.html");
        assert_eq!(config.nav.len(), 4);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site_metadata:
  title: Peter's Blog
  author:
    name: Peter
    summary: full stack engineer
  social:
    twitter: peter
blog:
  filter: /posts/
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site_title(), "Peter's Blog");
        assert_eq!(
            config.site_metadata.author,
            Some(Author {
                name: Some("Peter".to_string()),
                summary: Some("full stack engineer".to_string()),
            })
        );
        assert_eq!(config.blog.filter, "/posts/");
        assert_eq!(config.blog.template, "blog-post.html");
    }

    #[test]
    fn test_missing_metadata_is_null() {
        let config: SiteConfig = serde_yaml::from_str("public_dir: out\n").unwrap();
        assert_eq!(config.site_metadata, SiteMetadata::default());
        assert_eq!(config.site_metadata.social, None);
        assert_eq!(config.site_title(), "Blog");
    }

    #[test]
    fn test_partial_author_is_null_per_field() {
        let yaml = "site_metadata:\n  author:\n    name: Peter\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        let author = config.site_metadata.author.as_ref().unwrap();
        assert_eq!(author.summary, None);
        assert_eq!(config.site_title(), "Peter");
    }
}
