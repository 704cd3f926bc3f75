use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read message catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse message catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read-only translation store keyed by dotted paths such as
/// `articles.articles.<slug>.content`.
pub trait MessageCatalog {
    /// A single translated string.
    fn text(&self, key: &str) -> Option<String>;
    /// A translated string array, such as an article body.
    fn lines(&self, key: &str) -> Option<Vec<String>>;
}

/// A message catalog backed by one locale's JSON messages file.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonCatalog {
    root: Value,
}

impl JsonCatalog {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let root = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { root })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }
}

impl std::str::FromStr for JsonCatalog {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self::new)
    }
}

impl MessageCatalog for JsonCatalog {
    fn text(&self, key: &str) -> Option<String> {
        self.lookup(key)?.as_str().map(str::to_string)
    }

    fn lines(&self, key: &str) -> Option<Vec<String>> {
        self.lookup(key)?
            .as_array()?
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

/// Key of an article's body array.
pub fn article_content_key(slug: &str) -> String {
    format!("articles.articles.{slug}.content")
}

/// The body lines of an article; empty when the catalog has none.
pub fn article_content(catalog: &impl MessageCatalog, slug: &str) -> Vec<String> {
    catalog
        .lines(&article_content_key(slug))
        .unwrap_or_default()
}
