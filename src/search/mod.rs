//! Full-text search over the documentation site's articles.
//!
//! This module provides character folding, forward tokenization, the
//! two-field in-memory index, query resolution and result grouping.

// Module declarations
pub(crate) mod encoder;
pub(crate) mod group;
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use group::{GroupedResults, group_results};
pub use index::{Field, SearchIndex};
pub use query::SearchMatch;
