//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `corpus`: the three-article list most search tests run against
//! - `site`: a temporary site with one page in each content collection
//! - `index_file`: `corpus` written as an index artifact in a temp directory

use docs_search::{Article, Config, Group, SiteConfig};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for test isolation.
///
/// Cleaned up automatically when dropped.
///
/// # Example
///
/// ```ignore
/// let workspace = TempWorkspace::new();
/// workspace.create_file("src/content/docs/intro.md", "---\ntitle: Intro\n---\n");
/// assert!(workspace.path().join("src/content/docs/intro.md").exists());
/// ```
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, creating parent directories.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes `articles` as a JSON index artifact and returns its path.
    pub fn write_index(&self, path: &str, articles: &[Article]) -> PathBuf {
        let json = serde_json::to_string(articles).expect("Failed to serialize articles");
        self.create_file(path, &json);
        self.root.join(path)
    }

    /// Site configuration rooted at this workspace, writing into `public/`.
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            content_root: self.root.clone(),
            output: self.root.join("public/search-index.json"),
            ..Config::default().site
        }
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The three articles from the widget's usage examples.
#[fixture]
pub fn corpus() -> Vec<Article> {
    vec![
        Article::new("/a", "Getting Started", Group::Docs, "install guide"),
        Article::new("/b", "Example One", Group::Example, "installing and running"),
        Article::new(
            "/c",
            "Render Loop",
            Group::Principle,
            "getting the frame ready before drawing",
        ),
    ]
}

/// A site with one valid page per collection.
#[fixture]
pub fn site() -> TempWorkspace {
    let site = TempWorkspace::new();
    site.create_file(
        "src/content/docs/guide/getting-started.md",
        "---\ntitle: Getting Started\n---\n# Getting Started\n\nRun `cargo add ratatui-kit` to install the crate.\n",
    );
    site.create_file(
        "src/example/counter.mdx",
        "---\ntitle: Counter\nindex: 1\nimage: ./counter.png\n---\nimport { Card } from '@astrojs/starlight/components';\n\nA counter built with **hooks**.\n",
    );
    site.create_file(
        "src/principle/render-loop.md",
        "---\ntitle: Render Loop\npubDate: 2025-05-01\n---\nHow each frame is drawn.\n",
    );
    site
}

/// Index artifact for [`corpus`], with the workspace kept alive alongside.
#[allow(dead_code)] // Used in search_test.rs
#[fixture]
pub fn index_file(corpus: Vec<Article>) -> (TempWorkspace, PathBuf) {
    let workspace = TempWorkspace::new();
    let path = workspace.write_index("search-index.json", &corpus);
    (workspace, path)
}
