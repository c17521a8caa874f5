//! Full-text search over a documentation site's articles.
//!
//! The site's content collections are flattened into a JSON article list at
//! build time ([`IndexBuilder`]). At runtime a [`SearchWidget`] loads that
//! list from disk or over HTTP, builds an in-memory prefix index over titles
//! and bodies, and answers each keystroke with results grouped by collection.

pub mod article;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod search;
pub mod source;
pub mod tracing;
pub mod widget;

pub use article::{Article, Group, StoredFields, ensure_unique_slugs};
pub use builder::{IndexBuilder, slug_for};
pub use config::{CollectionConfig, Config, IndexOptions, SearchOptions, SiteConfig};
pub use error::{BuildError, ConfigError, LoadError};
pub use search::{Field, GroupedResults, SearchIndex, SearchMatch, group_results};
pub use source::IndexSource;
pub use widget::{IndexState, SearchWidget};
