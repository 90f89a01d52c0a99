//! End-to-end tests for folio.
//!
//! These tests build whole sites in temporary directories and check the
//! generated output.

use std::{fs, path::Path};

use folio_rs::commands::{init, new};
use folio_rs::Folio;
use tempfile::TempDir;

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().expect("has parent")).expect("Failed to create dir");
    fs::write(path, content).expect("Failed to write");
}

fn read(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative)).expect("Failed to read output")
}

#[test]
fn test_init_then_generate() {
    let dir = TempDir::new().expect("tempdir");
    init::init_site(dir.path()).expect("init should succeed");

    let folio = Folio::new(dir.path()).expect("config should load");
    new::create_post(&folio, "Second Thoughts", None).expect("new post");
    folio.generate().expect("generate should succeed");

    let hello = read(dir.path(), "public/hello-world/index.html");
    assert!(hello.contains("Hello World"));
    assert!(hello.contains("January 01, 2024"));
    assert!(hello.contains("gatsby-highlight"));
    assert!(hello.contains(r#"href="/second-thoughts/" rel="next""#));
    assert!(hello.contains("Written by <strong>Your Name</strong>"));

    let second = read(dir.path(), "public/second-thoughts/index.html");
    assert!(second.contains(r#"href="/hello-world/" rel="prev""#));

    let about = read(dir.path(), "public/about/index.html");
    assert!(about.contains("Write something about yourself here."));

    let index = read(dir.path(), "public/index.html");
    assert!(index.contains("<title>My Blog</title>"));
    let newest = index.find("Second Thoughts").expect("new post listed");
    let oldest = index.find("Hello World").expect("starter post listed");
    assert!(newest < oldest);

    folio.clean().expect("clean should succeed");
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_generic_page_replaces_blog_page_without_exclude() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "content/blog/only/index.md",
        "---\ntitle: Only Post\ndate: 2020-05-01\n---\nJust one.\n",
    );

    let folio = Folio::new(dir.path()).expect("defaults");
    folio.generate().expect("generate should succeed");

    // Both builders register /only/; the generic page is registered last
    let only = read(dir.path(), "public/only/index.html");
    assert!(only.contains(r#"class="markdown-page""#));
    assert!(!only.contains(r#"class="blog-post""#));

    // The index still lists the post
    assert!(read(dir.path(), "public/index.html").contains("Only Post"));
}

#[test]
fn test_index_summary_escaped_once() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "content/blog/food/index.md",
        "---\ntitle: Food\ndate: 2020-05-01\n---\nFish & Chips <3 x\n",
    );

    let folio = Folio::new(dir.path()).expect("defaults");
    folio.generate().expect("generate should succeed");

    let index = read(dir.path(), "public/index.html");
    assert!(index.contains(r#"<p itemprop="description">Fish &amp; Chips &lt;3 x</p>"#));
    assert_eq!(index.matches("Fish &amp; Chips").count(), 1);
    assert!(!index.contains("&amp;amp;"));

    let post = read(dir.path(), "public/food/index.html");
    assert!(post.contains(r#"<meta name="description" content="Fish &amp; Chips &lt;3 x">"#));
}

#[test]
fn test_site_templates_override_builtins() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "content/pages/contact.md",
        "---\ntitle: Contact\n---\nMail me.\n",
    );
    write(
        dir.path(),
        "templates/markdown-page.html",
        "<h1>{{ page.title }}</h1>{{ page.html }}",
    );

    let folio = Folio::new(dir.path()).expect("defaults");
    folio.generate().expect("generate should succeed");

    assert_eq!(
        read(dir.path(), "public/contact/index.html"),
        "<h1>Contact</h1><p>Mail me.</p>\n"
    );
}

#[test]
fn test_nested_index_without_trailing_slash() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "_config.yml",
        "slug:\n  base_path: docs\n  trailing_slash: false\nsources:\n  - name: docs\n    path: docs\n",
    );
    write(dir.path(), "docs/guide/index.md", "# Guide\n");
    write(dir.path(), "docs/guide/setup.md", "# Setup\n");

    let folio = Folio::new(dir.path()).expect("config should load");
    folio.generate().expect("generate should succeed");

    assert!(dir.path().join("public/guide/index.html").exists());
    assert!(dir.path().join("public/guide/setup/index.html").exists());
}
