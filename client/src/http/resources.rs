// File: client/src/http/resources.rs
//! Helpers around resource payloads: building copy batches and decoding the
//! listing document the agent embeds in `ResourceResponse::resource`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{ResourceItem, ResourceResponse};

impl ResourceItem {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            overwrite: false,
            rename: false,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    /// Build an ordered batch where every item shares the same flags
    pub fn batch<I, S, D>(pairs: I, overwrite: bool, rename: bool) -> Vec<ResourceItem>
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(source, destination)| {
                ResourceItem::new(source, destination)
                    .overwrite(overwrite)
                    .rename(rename)
            })
            .collect()
    }
}

/// File or directory description served by the agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListing {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub items: Vec<ResourceEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Directory entry inside a `ResourceListing`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceEntry {
    /// Path of this entry below `parent`; directories end with `/`
    pub fn child_path(&self, parent: &str) -> String {
        let mut path = parent.to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(&self.name);
        if self.is_dir {
            path.push('/');
        }
        path
    }
}

impl ResourceListing {
    pub fn files(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.items.iter().filter(|entry| !entry.is_dir)
    }

    pub fn directories(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.items.iter().filter(|entry| entry.is_dir)
    }
}

impl ResourceResponse {
    /// Decode the listing carried as a JSON document inside `resource`.
    ///
    /// Some agents double-encode it as a JSON string; both forms are accepted.
    pub fn listing(&self) -> serde_json::Result<ResourceListing> {
        let value: Value = serde_json::from_str(&self.resource)?;
        match value {
            Value::String(inner) => serde_json::from_str(&inner),
            other => serde_json::from_value(other),
        }
    }
}
