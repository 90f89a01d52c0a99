//! Built-in site templates using the Tera template engine
//!
//! The default templates are embedded in the binary. Any `*.html` file in
//! the site's templates directory is added on top, replacing a built-in
//! template with the same name.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};
use walkdir::WalkDir;

use crate::config::{NavItem, SiteMetadata};
use crate::content::parse_date_string;
use crate::helpers::format_date;

/// Templates compiled into the binary
const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    ("layout.html", include_str!("site/layout.html")),
    ("index.html", include_str!("site/index.html")),
    ("blog-post.html", include_str!("site/blog-post.html")),
    ("markdown-page.html", include_str!("site/markdown-page.html")),
    ("partials/seo.html", include_str!("site/partials/seo.html")),
];

/// Template renderer with the built-in templates and any site overrides
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load the built-in templates, then everything under `templates_dir`
    pub fn new(templates_dir: Option<&Path>) -> Result<Self> {
        let mut templates: Vec<(String, String)> = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, body)| (name.to_string(), body.to_string()))
            .collect();

        if let Some(dir) = templates_dir.filter(|d| d.is_dir()) {
            for entry in WalkDir::new(dir)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
                    continue;
                }
                let name = path
                    .strip_prefix(dir)?
                    .to_string_lossy()
                    .replace('\\', "/");
                let body = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read template {:?}", path))?;
                tracing::debug!("Loaded site template {}", name);
                templates.push((name, body));
            }
        }

        let mut tera = Tera::default();
        // Paths and rendered markdown go out verbatim; templates escape text with `| escape`
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(templates)?;
        tera.register_filter("date_format", date_format_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Whether a template with this name is loaded
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template_name, context)
            .with_context(|| format!("Failed to render template {}", template_name))
    }
}

/// Tera filter: format an RFC 3339 date with a Moment.js-style format
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "MMMM DD, YYYY".to_string(),
    };

    match parse_date_string(&s) {
        Some(date) => Ok(tera::Value::String(format_date(&date, &format))),
        None => Ok(tera::Value::String(s)),
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub metadata: SiteMetadata,
    pub nav: Vec<NavItem>,
    pub current_year: String,
}

/// A content node as templates see it
#[derive(Debug, Clone, Serialize)]
pub struct NodeData {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339, for `<time>` and the `date_format` filter
    pub date: Option<String>,
    /// Date in the site's configured format
    pub formatted_date: Option<String>,
    pub html: String,
    pub excerpt: String,
    /// Description, or the excerpt when there is none
    pub summary: String,
    pub frontmatter: serde_json::Value,
}

/// Title and description for the page's meta tags
#[derive(Debug, Clone, Serialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationData {
    pub pathname: String,
    pub is_root_path: bool,
}
