//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for docs-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the application boundary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the index artifact cannot be turned into a search index.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The artifact file could not be read.
    #[error("failed to read search index at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The artifact could not be fetched over HTTP.
    #[error("failed to fetch search index from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The payload is not a JSON array of articles.
    #[error("failed to parse search index from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// The articles parsed but do not form a valid index.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Error returned when an article list or a content collection is rejected.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Two records share a slug; the later one would silently replace the earlier.
    #[error("duplicate slug '{slug}' (titles '{first_title}' and '{second_title}')")]
    DuplicateSlug {
        slug: String,
        first_title: String,
        second_title: String,
    },
    /// A content file could not be read.
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A content file has no `---` delimited front-matter block.
    #[error("missing front-matter in {}", path.display())]
    MissingFrontMatter { path: PathBuf },
    /// Front-matter is not valid YAML or misses a field the collection requires.
    #[error("invalid front-matter in {}: {reason}", path.display())]
    InvalidFrontMatter { path: PathBuf, reason: String },
}

/// Error returned when the configuration file is unreadable or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
