//! Collection-level named vector mapping.
//!
//! A collection carries its named vectors as one mapping keyed by name:
//!
//! ```json
//! {
//!   "title": { "vectorizer": { "text2vec-openai": { ... } }, "vectorIndexType": "hnsw" },
//!   "image": { "vectorizer": { "img2vec-neural": { ... } }, "vectorIndexType": "flat", ... }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{NamedVectorError, Result};
use crate::named::NamedVectorConfig;

/// The named vectors of one collection, in insertion order.
///
/// Names are unique: adding a second vector under an existing name fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorConfigs {
    vectors: Vec<NamedVectorConfig>,
}

impl VectorConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> VectorConfigsBuilder {
        VectorConfigsBuilder::default()
    }

    /// Add a named vector.
    pub fn add(&mut self, config: NamedVectorConfig) -> Result<()> {
        if self.contains(config.name()) {
            return Err(NamedVectorError::validation(
                "name",
                format!("named vector '{}' is already defined", config.name()),
            ));
        }
        self.vectors.push(config);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NamedVectorConfig> {
        self.vectors.iter().find(|v| v.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedVectorConfig> {
        self.vectors.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.vectors.iter().map(NamedVectorConfig::name).collect()
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a `{ "<name>": <named vector mapping>, ... }` object, keeping
    /// the names in document order.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            NamedVectorError::validation("vector_config", "expected an object keyed by name")
        })?;
        let mut configs = VectorConfigs::new();
        for (name, entry) in object {
            configs.add(NamedVectorConfig::from_value(name.as_str(), entry)?)?;
        }
        Ok(configs)
    }
}

impl Serialize for VectorConfigs {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.vectors.len()))?;
        for vector in &self.vectors {
            map.serialize_entry(vector.name(), vector)?;
        }
        map.end()
    }
}

impl TryFrom<Vec<NamedVectorConfig>> for VectorConfigs {
    type Error = NamedVectorError;

    fn try_from(vectors: Vec<NamedVectorConfig>) -> Result<Self> {
        let mut configs = VectorConfigs::new();
        for vector in vectors {
            configs.add(vector)?;
        }
        Ok(configs)
    }
}

impl<'a> IntoIterator for &'a VectorConfigs {
    type Item = &'a NamedVectorConfig;
    type IntoIter = std::slice::Iter<'a, NamedVectorConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// Builder for [`VectorConfigs`]; duplicate names surface at `build`.
#[derive(Default)]
pub struct VectorConfigsBuilder {
    vectors: Vec<NamedVectorConfig>,
}

impl VectorConfigsBuilder {
    pub fn add(mut self, config: NamedVectorConfig) -> Self {
        self.vectors.push(config);
        self
    }

    pub fn build(self) -> Result<VectorConfigs> {
        VectorConfigs::try_from(self.vectors)
    }
}
