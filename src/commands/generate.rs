//! Generate static files

use anyhow::Result;
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::pages::{create_pages, PageRegistry};
use crate::reporter::Reporter;
use crate::Folio;

/// Index content, create pages and render them
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let store = ContentLoader::new(folio).load()?;

    let mut registry = PageRegistry::new();
    let mut reporter = Reporter::new();
    create_pages(&store, &mut registry, &mut reporter, &folio.config)?;
    tracing::info!("Registered {} pages", registry.len());

    let generator = Generator::new(folio)?;
    generator.generate(&store, &registry)?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_blog_filter_fails_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "blog:\n  filter: \"(\"\n").unwrap();
        fs::create_dir_all(dir.path().join("content/blog")).unwrap();
        fs::write(dir.path().join("content/blog/a.md"), "# A\n").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = run(&folio).unwrap_err();
        assert!(err
            .to_string()
            .contains("There was an error loading your blog posts"));
        assert!(!folio.public_dir.exists());
    }
}
