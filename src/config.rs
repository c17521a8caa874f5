//! Configuration loaded from `docs-search.toml`.
//!
//! Every key is optional; the defaults describe the documentation site the
//! index is built for. CLI flags override file values after loading.

use crate::article::Group;
use crate::error::ConfigError;
use crate::source::IndexSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "docs-search.toml";

/// File name of the index artifact, relative to the site base.
pub const INDEX_FILE_NAME: &str = "search-index.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub site: SiteConfig,
    pub index: IndexOptions,
    pub search: SearchOptions,
}

impl Config {
    /// Loads `path`, or `docs-search.toml` from the working directory if it
    /// exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Where the widget loads its index from when none is given explicitly:
    /// the locally built artifact if present, otherwise the published site.
    pub fn default_source(&self) -> IndexSource {
        if self.site.output.is_file() {
            IndexSource::Path(self.site.output.clone())
        } else {
            IndexSource::Url(self.site.index_url())
        }
    }
}

/// Where the site lives and where its content collections are.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin the site is published under
    pub url: String,
    /// Path prefix every page (and the index artifact) is served below
    pub base: String,
    /// Directory the collection directories are resolved against
    pub content_root: PathBuf,
    /// Where `build` writes the index artifact
    pub output: PathBuf,
    pub collections: Vec<CollectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://yexiyue.github.io".to_string(),
            base: "/ratatui-kit-website".to_string(),
            content_root: PathBuf::from("."),
            output: PathBuf::from("public").join(INDEX_FILE_NAME),
            collections: vec![
                CollectionConfig {
                    group: Group::Docs,
                    dir: PathBuf::from("src/content/docs"),
                    route: String::new(),
                },
                CollectionConfig {
                    group: Group::Example,
                    dir: PathBuf::from("src/example"),
                    route: "example".to_string(),
                },
                CollectionConfig {
                    group: Group::Principle,
                    dir: PathBuf::from("src/principle"),
                    route: "principle".to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Site-relative path the index artifact is served at.
    pub fn index_path(&self) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), INDEX_FILE_NAME)
    }

    /// Absolute URL of the published index artifact.
    pub fn index_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.index_path())
    }
}

/// One content collection: a directory of Markdown pages sharing a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    pub group: Group,
    /// Directory relative to `content_root`
    pub dir: PathBuf,
    /// Route segment inserted between the base and the page path
    #[serde(default)]
    pub route: String,
}

/// Per-field granularity of the in-memory index.
///
/// A field's resolution is the number of rank slots its terms are spread
/// over by word position; a coarse field ranks most of its hits alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexOptions {
    pub title_resolution: u8,
    pub content_resolution: u8,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            title_resolution: 9,
            content_resolution: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Return partial and fuzzy matches instead of requiring every query word
    pub suggest: bool,
    /// Minimum Jaro-Winkler similarity for a fuzzy word match
    pub fuzzy_threshold: f64,
    /// Maximum number of merged results
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            suggest: true,
            fuzzy_threshold: 0.85,
            limit: 100,
        }
    }
}
