//! Locations the index artifact can be loaded from.

use crate::article::Article;
use crate::error::LoadError;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the serialized article list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    /// A locally built artifact
    Path(PathBuf),
    /// The artifact as served by the published site
    Url(String),
}

impl FromStr for IndexSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

impl IndexSource {
    /// Fetches the raw artifact bytes.
    pub async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Path(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            Self::Url(url) => {
                let http = |source| LoadError::Http {
                    url: url.clone(),
                    source,
                };
                let response = reqwest::get(url)
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(http)?;
                let body = response.bytes().await.map_err(http)?;
                Ok(body.to_vec())
            }
        }
    }

    /// Fetches and parses the artifact as a JSON array of articles.
    pub async fn load(&self) -> Result<Vec<Article>, LoadError> {
        let bytes = self.fetch().await?;
        let articles: Vec<Article> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                origin: self.to_string(),
                source,
            })?;
        tracing::debug!("Loaded {} articles from {}", articles.len(), self);
        Ok(articles)
    }
}
