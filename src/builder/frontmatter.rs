//! YAML front-matter extraction and per-collection validation.

use crate::article::Group;
use crate::error::BuildError;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::path::Path;

/// The front-matter fields any collection recognizes. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FrontMatter {
    pub(crate) title: Option<String>,
    pub(crate) pub_date: Option<String>,
    pub(crate) index: Option<f64>,
    pub(crate) image: Option<String>,
}

/// Splits a page into its front-matter YAML and the Markdown body after it.
///
/// The block must open on the first line with `---` and close with a line
/// containing only `---`. Returns `None` if either fence is missing.
pub(crate) fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

impl FrontMatter {
    pub(crate) fn parse(yaml: &str, path: &Path) -> Result<Self, BuildError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_norway::from_str(yaml).map_err(|e| BuildError::InvalidFrontMatter {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Checks the fields `group`'s collection requires and returns the title.
    ///
    /// - every collection: non-empty `title`
    /// - example: numeric `index` and an `image` reference
    /// - principle: a `pubDate` that parses as a date
    pub(crate) fn validate(self, group: Group, path: &Path) -> Result<String, BuildError> {
        let invalid = |reason: &str| BuildError::InvalidFrontMatter {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| invalid("missing required field 'title'"))?;

        match group {
            Group::Example => {
                if self.index.is_none() {
                    return Err(invalid("missing required field 'index'"));
                }
                if self.image.as_deref().is_none_or(|i| i.trim().is_empty()) {
                    return Err(invalid("missing required field 'image'"));
                }
            }
            Group::Principle => {
                let date = self
                    .pub_date
                    .ok_or_else(|| invalid("missing required field 'pubDate'"))?;
                if !is_date(&date) {
                    return Err(invalid(&format!("'pubDate' is not a date: {}", date)));
                }
            }
            Group::Docs | Group::Unknown => {}
        }

        Ok(title)
    }
}

fn is_date(value: &str) -> bool {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}
