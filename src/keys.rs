//! Loads the champion key list from a JSON object.
//!
//! Only the top-level keys are used; their values are ignored. Keys come back
//! in the order they appear in the document.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum KeysError {
    #[error("cannot read key file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("key file {path:?} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyList {
    keys: Vec<String>,
}

impl KeyList {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeysError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| KeysError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let keys = Self::parse(&content, path)?;

        debug!(path = %path.display(), count = keys.len(), "loaded key list");

        Ok(keys)
    }

    pub fn from_json_str(json: &str) -> Result<Self, KeysError> {
        Self::parse(json, Path::new("<memory>"))
    }

    fn parse(json: &str, path: &Path) -> Result<Self, KeysError> {
        let value: Value = serde_json::from_str(json).map_err(|source| KeysError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let Value::Object(object) = value else {
            return Err(KeysError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        Ok(Self::from(object))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Map<String, Value>> for KeyList {
    fn from(object: Map<String, Value>) -> Self {
        Self {
            keys: object.into_iter().map(|(key, _)| key).collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for KeyList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
