//! Named vectors.
//!
//! A named vector is one labeled embedding slot of a collection. It pairs a
//! name with exactly one vectorizer and, optionally, an explicit index
//! configuration. [`NamedVectors`] provides one factory per vectorizer
//! backend.
//!
//! # Example
//!
//! ```
//! use named_vectors::{CohereModel, NamedVectors, Text2VecCohereConfig};
//! use serde_json::json;
//!
//! # fn example() -> named_vectors::Result<()> {
//! let config = NamedVectors::text2vec_cohere(
//!     "title_vector",
//!     Text2VecCohereConfig::new().model(CohereModel::EmbedMultilingualV2),
//!     None,
//! )?;
//!
//! assert_eq!(
//!     config.to_value()?,
//!     json!({
//!         "vectorizer": {
//!             "text2vec-cohere": {"model": "embed-multilingual-v2.0", "vectorizeClassName": true}
//!         },
//!         "vectorIndexType": "hnsw"
//!     })
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{NamedVectorError, Result};
use crate::index::config::{VectorIndexConfig, VectorIndexType};
use crate::vectorizer::config::VectorizerConfig;
use crate::vectorizer::multi::{
    Img2VecNeuralConfig, Multi2VecBindConfig, Multi2VecClipConfig, NoneConfig,
    Ref2VecCentroidConfig,
};
use crate::vectorizer::text::{
    Text2VecAwsConfig, Text2VecAzureOpenAiConfig, Text2VecCohereConfig,
    Text2VecContextionaryConfig, Text2VecGpt4AllConfig, Text2VecHuggingFaceConfig,
    Text2VecJinaAiConfig, Text2VecOpenAiConfig, Text2VecPalmConfig, Text2VecTransformersConfig,
};

/// A validated named vector definition.
///
/// Immutable once built; fields are reachable through accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVectorConfig {
    name: String,
    vectorizer: VectorizerConfig,
    vector_index_type: VectorIndexType,
    vector_index_config: Option<VectorIndexConfig>,
}

impl NamedVectorConfig {
    /// Validate the parts and assemble a named vector.
    ///
    /// The index type is taken from `vector_index_config` when one is given
    /// and is HNSW otherwise.
    pub fn new(
        name: impl Into<String>,
        vectorizer: impl Into<VectorizerConfig>,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<Self> {
        let name = name.into();
        let vectorizer = vectorizer.into();
        vectorizer.validate()?;
        if let Some(index) = &vector_index_config {
            index.validate()?;
        }

        let vector_index_type = vector_index_config
            .as_ref()
            .map(VectorIndexConfig::vector_index_type)
            .unwrap_or_default();

        log::debug!(
            "named vector '{name}' configured with vectorizer '{}' and {vector_index_type} index",
            vectorizer.kind()
        );

        Ok(Self {
            name,
            vectorizer,
            vector_index_type,
            vector_index_config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vectorizer(&self) -> &VectorizerConfig {
        &self.vectorizer
    }

    pub fn vector_index_type(&self) -> VectorIndexType {
        self.vector_index_type
    }

    pub fn vector_index_config(&self) -> Option<&VectorIndexConfig> {
        self.vector_index_config.as_ref()
    }

    /// Serialize into the wire mapping.
    ///
    /// The name is not part of the mapping; it keys the entry at collection
    /// level (see [`crate::schema::VectorConfigs`]).
    pub fn to_value(&self) -> Result<Value> {
        log::trace!("serializing named vector '{}'", self.name);
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a wire mapping back into a validated named vector.
    pub fn from_value(name: impl Into<String>, value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            NamedVectorError::validation("named_vector", "expected a JSON object")
        })?;

        let vectorizer = object
            .get("vectorizer")
            .ok_or_else(|| NamedVectorError::missing_field("vectorizer"))?;
        let vectorizer = VectorizerConfig::from_value(vectorizer)?;

        let vector_index_type = match object.get("vectorIndexType") {
            None => VectorIndexType::default(),
            Some(Value::String(s)) => VectorIndexType::parse(s)?,
            Some(other) => {
                return Err(NamedVectorError::validation(
                    "vector_index_type",
                    format!("expected a string, got {other}"),
                ));
            }
        };

        let vector_index_config = object
            .get("vectorIndexConfig")
            .map(|cfg| VectorIndexConfig::from_value(vector_index_type, cfg.clone()))
            .transpose()?;

        Ok(Self {
            name: name.into(),
            vectorizer,
            vector_index_type,
            vector_index_config,
        })
    }
}

impl Serialize for NamedVectorConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.vector_index_config.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("NamedVectorConfig", len)?;
        state.serialize_field("vectorizer", &self.vectorizer)?;
        state.serialize_field("vectorIndexType", &self.vector_index_type)?;
        if let Some(index) = &self.vector_index_config {
            state.serialize_field("vectorIndexConfig", index)?;
        }
        state.end()
    }
}

/// Factories for named vectors, one per vectorizer backend.
///
/// Every factory validates its input and either returns a complete
/// [`NamedVectorConfig`] or a validation error; nothing else happens.
pub struct NamedVectors;

impl NamedVectors {
    /// Create a named vector without a vectorizer. Vectors must be supplied
    /// with the objects.
    pub fn none(
        name: impl Into<String>,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, NoneConfig::default(), vector_index_config)
    }

    /// Create a named vector using `text2vec-cohere`.
    pub fn text2vec_cohere(
        name: impl Into<String>,
        config: Text2VecCohereConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-contextionary`.
    pub fn text2vec_contextionary(
        name: impl Into<String>,
        config: Text2VecContextionaryConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-openai`.
    pub fn text2vec_openai(
        name: impl Into<String>,
        config: Text2VecOpenAiConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-aws`.
    ///
    /// Fails if `model` or `region` is missing.
    pub fn text2vec_aws(
        name: impl Into<String>,
        config: Text2VecAwsConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `img2vec-neural`.
    ///
    /// `image_fields` must name at least one blob property.
    pub fn img2vec_neural(
        name: impl Into<String>,
        config: Img2VecNeuralConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `multi2vec-clip`.
    pub fn multi2vec_clip(
        name: impl Into<String>,
        config: Multi2VecClipConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `multi2vec-bind`.
    pub fn multi2vec_bind(
        name: impl Into<String>,
        config: Multi2VecBindConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `ref2vec-centroid`.
    pub fn ref2vec_centroid(
        name: impl Into<String>,
        config: Ref2VecCentroidConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using an Azure-hosted OpenAI deployment.
    ///
    /// Fails if `resource_name` or `deployment_id` is missing.
    pub fn text2vec_azure_openai(
        name: impl Into<String>,
        config: Text2VecAzureOpenAiConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-gpt4all`.
    pub fn text2vec_gpt4all(
        name: impl Into<String>,
        config: Text2VecGpt4AllConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-huggingface`.
    ///
    /// Fails if the model selection options are combined inconsistently.
    pub fn text2vec_huggingface(
        name: impl Into<String>,
        config: Text2VecHuggingFaceConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-palm`.
    ///
    /// Fails if `project_id` is missing.
    pub fn text2vec_palm(
        name: impl Into<String>,
        config: Text2VecPalmConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-transformers`.
    pub fn text2vec_transformers(
        name: impl Into<String>,
        config: Text2VecTransformersConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }

    /// Create a named vector using `text2vec-jinaai`.
    pub fn text2vec_jinaai(
        name: impl Into<String>,
        config: Text2VecJinaAiConfig,
        vector_index_config: Option<VectorIndexConfig>,
    ) -> Result<NamedVectorConfig> {
        NamedVectorConfig::new(name, config, vector_index_config)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::index::config::{FlatIndexConfig, HnswIndexConfig, VectorDistance};

    #[test]
    fn test_none_defaults_to_hnsw() {
        let cfg = NamedVectors::none("v1", None).unwrap();
        assert_eq!(cfg.name(), "v1");
        assert_eq!(cfg.vector_index_type(), VectorIndexType::Hnsw);
        assert!(cfg.vector_index_config().is_none());
        assert_eq!(
            cfg.to_value().unwrap(),
            json!({"vectorizer": {"none": {}}, "vectorIndexType": "hnsw"})
        );
    }

    #[test]
    fn test_explicit_index_overrides_type() {
        let cfg = NamedVectors::none(
            "v1",
            Some(FlatIndexConfig::new().distance(VectorDistance::Cosine).into()),
        )
        .unwrap();
        assert_eq!(cfg.vector_index_type(), VectorIndexType::Flat);
        assert_eq!(
            cfg.to_value().unwrap(),
            json!({
                "vectorizer": {"none": {}},
                "vectorIndexType": "flat",
                "vectorIndexConfig": {"distance": "cosine"}
            })
        );
    }

    #[test]
    fn test_invalid_index_config_fails_construction() {
        let err = NamedVectors::none("v1", Some(HnswIndexConfig::new().ef(0).into())).unwrap_err();
        assert_eq!(err.field(), Some("ef"));
    }

    #[test]
    fn test_vectorizer_validation_propagates() {
        let err = NamedVectors::text2vec_palm("v1", Text2VecPalmConfig::default(), None)
            .unwrap_err();
        assert_eq!(err.field(), Some("project_id"));
    }

    #[test]
    fn test_from_value_roundtrip() {
        let cfg = NamedVectors::text2vec_transformers(
            "body",
            Text2VecTransformersConfig::new().source_properties(["body"]),
            Some(HnswIndexConfig::new().max_connections(64).into()),
        )
        .unwrap();
        let value = cfg.to_value().unwrap();
        assert_eq!(NamedVectorConfig::from_value("body", &value).unwrap(), cfg);
    }

    #[test]
    fn test_from_value_requires_vectorizer() {
        let err = NamedVectorConfig::from_value("v1", &json!({"vectorIndexType": "hnsw"}))
            .unwrap_err();
        assert_eq!(err.field(), Some("vectorizer"));
    }

    #[test]
    fn test_from_value_rejects_non_string_index_type() {
        let err = NamedVectorConfig::from_value(
            "v1",
            &json!({"vectorizer": {"none": {}}, "vectorIndexType": 7}),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("vector_index_type"));
    }
}
