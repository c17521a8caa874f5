//! Article records and the display groups they belong to.

use crate::error::BuildError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category an article is displayed under.
///
/// Any group string other than the three known ones deserializes to
/// [`Group::Unknown`]. Unknown articles stay searchable but never appear in a
/// [`GroupedResults`](crate::GroupedResults) bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Docs,
    Example,
    Principle,
    #[serde(other)]
    Unknown,
}

impl Group {
    /// The groups shown in the dropdown, in display order.
    pub const DISPLAYED: [Self; 3] = [Self::Docs, Self::Example, Self::Principle];

    /// Wire name used in the index artifact.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Example => "example",
            Self::Principle => "principle",
            Self::Unknown => "unknown",
        }
    }

    /// Heading shown above the group's results.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Docs => "文档",
            Self::Example => "示例",
            Self::Principle => "原理",
            Self::Unknown => "其他",
        }
    }

    pub const fn is_displayed(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the search index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique, navigable path of the page
    pub slug: String,
    pub title: String,
    pub group: Group,
    /// Plain-text body; matched against but never displayed
    pub content: String,
}

impl Article {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        group: Group,
        content: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            group,
            content: content.into(),
        }
    }
}

/// Rejects an article list in which two records share a slug.
pub fn ensure_unique_slugs(articles: &[Article]) -> Result<(), BuildError> {
    let mut seen: AHashMap<&str, &str> = AHashMap::with_capacity(articles.len());
    for article in articles {
        if let Some(first_title) = seen.insert(&article.slug, &article.title) {
            return Err(BuildError::DuplicateSlug {
                slug: article.slug.clone(),
                first_title: first_title.to_string(),
                second_title: article.title.clone(),
            });
        }
    }
    Ok(())
}

/// Fields kept alongside each indexed document so results render without
/// going back to the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFields {
    pub title: String,
    pub group: Group,
}

impl From<&Article> for StoredFields {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            group: article.group,
        }
    }
}
