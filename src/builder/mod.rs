//! Build-time generation of the index artifact from the site's content
//! collections.
//!
//! Each collection is a directory of Markdown (or MDX) pages. Every page
//! becomes one [`Article`] whose slug is the page's route, whose group is the
//! collection's group, and whose content is the page body as plain text.

mod frontmatter;
mod markdown;

use crate::article::{Article, ensure_unique_slugs};
use crate::config::{CollectionConfig, SiteConfig};
use crate::error::{BuildError, Result};
use anyhow::Context;
use ignore::WalkBuilder;
use std::path::{Component, Path};

use frontmatter::{FrontMatter, split_front_matter};
use markdown::{plain_text, strip_mdx_statements};

/// Collects articles from the configured collections and writes the artifact.
#[derive(Debug)]
pub struct IndexBuilder<'a> {
    site: &'a SiteConfig,
}

impl<'a> IndexBuilder<'a> {
    pub const fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Reads every page of every collection, in path order per collection.
    ///
    /// A missing collection directory is skipped with a warning; an invalid
    /// page or a duplicate slug fails the whole build.
    pub fn collect(&self) -> std::result::Result<Vec<Article>, BuildError> {
        let start = std::time::Instant::now();
        let mut articles = vec![];

        for collection in &self.site.collections {
            let dir = self.site.content_root.join(&collection.dir);
            if !dir.is_dir() {
                tracing::warn!(
                    "Collection '{}' not found at {}, skipping",
                    collection.group,
                    dir.display()
                );
                continue;
            }

            let mut entries: Vec<_> = WalkBuilder::new(&dir)
                .build()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
                .filter(|e| is_page(e.path()))
                .collect();

            entries.sort_by(|a, b| a.path().cmp(b.path()));

            let before = articles.len();
            for entry in entries {
                articles.push(self.read_page(collection, &dir, entry.path())?);
            }
            tracing::debug!(
                "Collected {} pages from collection '{}'",
                articles.len() - before,
                collection.group
            );
        }

        ensure_unique_slugs(&articles)?;

        tracing::info!(
            "Collected {} articles from {} collections in {:?}",
            articles.len(),
            self.site.collections.len(),
            start.elapsed()
        );

        Ok(articles)
    }

    fn read_page(
        &self,
        collection: &CollectionConfig,
        dir: &Path,
        path: &Path,
    ) -> std::result::Result<Article, BuildError> {
        let source = std::fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (yaml, body) = split_front_matter(&source).ok_or_else(|| {
            BuildError::MissingFrontMatter {
                path: path.to_path_buf(),
            }
        })?;
        let title = FrontMatter::parse(yaml, path)?.validate(collection.group, path)?;

        let content = if path.extension().is_some_and(|ext| ext == "mdx") {
            plain_text(&strip_mdx_statements(body))
        } else {
            plain_text(body)
        };

        let relative = path.strip_prefix(dir).unwrap_or(path);
        Ok(Article {
            slug: slug_for(&self.site.base, &collection.route, relative),
            title,
            group: collection.group,
            content,
        })
    }

    /// Writes `articles` as the JSON index artifact to the configured output,
    /// creating parent directories as needed. Refuses lists with duplicate
    /// slugs.
    pub fn write(&self, articles: &[Article]) -> Result<()> {
        ensure_unique_slugs(articles)?;
        let output = self.site.output.as_path();

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_vec(articles).context("Failed to serialize search index")?;
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write search index to {}", output.display()))?;

        tracing::info!("Wrote {} articles to {}", articles.len(), output.display());
        Ok(())
    }
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "md" || ext == "mdx")
}

/// Route of a page: `{base}/{route}/{relative path without extension}`.
///
/// Page path segments are lowercased with spaces turned into dashes, and a
/// trailing `index` segment is dropped so `guide/index.md` routes to `guide`.
pub fn slug_for(base: &str, route: &str, relative: &Path) -> String {
    let mut segments: Vec<String> = base
        .split('/')
        .chain(route.split('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let mut page: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slugify(&s.to_string_lossy())),
            _ => None,
        })
        .collect();
    if page.last().is_some_and(|s| s == "index") {
        page.pop();
    }
    segments.extend(page);

    format!("/{}", segments.join("/"))
}

fn slugify(segment: &str) -> String {
    segment
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("/ratatui-kit-website", "principle", "hooks/use-state.md", "/ratatui-kit-website/principle/hooks/use-state")]
    #[case("/ratatui-kit-website", "", "guide/intro.mdx", "/ratatui-kit-website/guide/intro")]
    #[case("/ratatui-kit-website/", "example", "Counter App.md", "/ratatui-kit-website/example/counter-app")]
    #[case("/ratatui-kit-website", "", "guide/index.md", "/ratatui-kit-website/guide")]
    #[case("", "", "index.md", "/")]
    fn test_slug_for(
        #[case] base: &str,
        #[case] route: &str,
        #[case] relative: &str,
        #[case] expected: &str,
    ) {
        check!(slug_for(base, route, Path::new(relative)) == expected);
    }

    #[rstest]
    #[case("page.md", true)]
    #[case("page.mdx", true)]
    #[case("image.png", false)]
    #[case("README", false)]
    fn test_is_page(#[case] path: &str, #[case] expected: bool) {
        check!(is_page(Path::new(path)) == expected);
    }
}
