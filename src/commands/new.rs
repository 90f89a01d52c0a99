//! Create a new markdown post or page

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::Folio;

/// Scaffold `<source>/<slug>/index.md` for a new document
///
/// `source` names one of the configured sources and defaults to `blog`.
/// Returns the path of the created file.
pub fn create_post(folio: &Folio, title: &str, source: Option<&str>) -> Result<PathBuf> {
    let source_name = source.unwrap_or("blog");
    let Some(source) = folio.config.sources.iter().find(|s| s.name == source_name) else {
        let known: Vec<_> = folio.config.sources.iter().map(|s| s.name.as_str()).collect();
        bail!(
            "Unknown source: {}. Available: {}",
            source_name,
            known.join(", ")
        );
    };

    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = folio.base_dir.join(&source.path).join(&slug);
    let file_path = target_dir.join("index.md");
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let frontmatter = FrontMatter {
        title: Some(title.to_string()),
        description: Some(String::new()),
        date: Some(chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string()),
        ..Default::default()
    };
    let content = format!("---\n{}---\n", serde_yaml::to_string(&frontmatter)?);

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create dir {:?}", target_dir))?;
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}
