//! The vectorizer configuration union.
//!
//! [`VectorizerConfig`] holds exactly one backend's options. It serializes as
//! a single-entry mapping keyed by the backend's wire identifier:
//!
//! ```json
//! { "text2vec-cohere": { "model": "embed-multilingual-v2.0", "vectorizeClassName": true } }
//! ```
//!
//! Azure-hosted OpenAI shares the `text2vec-openai` key with OpenAI; when
//! parsing, the presence of `resourceName` or `deploymentId` selects Azure.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{NamedVectorError, Result};
use crate::vectorizer::kind::Vectorizer;
use crate::vectorizer::multi::{
    Img2VecNeuralConfig, Multi2VecBindConfig, Multi2VecClipConfig, NoneConfig,
    Ref2VecCentroidConfig,
};
use crate::vectorizer::text::{
    Text2VecAwsConfig, Text2VecAzureOpenAiConfig, Text2VecCohereConfig,
    Text2VecContextionaryConfig, Text2VecGpt4AllConfig, Text2VecHuggingFaceConfig,
    Text2VecJinaAiConfig, Text2VecOpenAiConfig, Text2VecPalmConfig, Text2VecTransformersConfig,
};

/// Backend-specific vectorizer options.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorizerConfig {
    None(NoneConfig),
    Text2VecOpenAi(Text2VecOpenAiConfig),
    Text2VecAzureOpenAi(Text2VecAzureOpenAiConfig),
    Text2VecCohere(Text2VecCohereConfig),
    Text2VecContextionary(Text2VecContextionaryConfig),
    Text2VecAws(Text2VecAwsConfig),
    Text2VecHuggingFace(Text2VecHuggingFaceConfig),
    Text2VecPalm(Text2VecPalmConfig),
    Text2VecGpt4All(Text2VecGpt4AllConfig),
    Text2VecTransformers(Text2VecTransformersConfig),
    Text2VecJinaAi(Text2VecJinaAiConfig),
    Img2VecNeural(Img2VecNeuralConfig),
    Multi2VecClip(Multi2VecClipConfig),
    Multi2VecBind(Multi2VecBindConfig),
    Ref2VecCentroid(Ref2VecCentroidConfig),
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig::None(NoneConfig::default())
    }
}

impl VectorizerConfig {
    /// Get the backend this configuration targets.
    pub fn kind(&self) -> Vectorizer {
        match self {
            VectorizerConfig::None(_) => Vectorizer::None,
            VectorizerConfig::Text2VecOpenAi(_) | VectorizerConfig::Text2VecAzureOpenAi(_) => {
                Vectorizer::Text2VecOpenAi
            }
            VectorizerConfig::Text2VecCohere(_) => Vectorizer::Text2VecCohere,
            VectorizerConfig::Text2VecContextionary(_) => Vectorizer::Text2VecContextionary,
            VectorizerConfig::Text2VecAws(_) => Vectorizer::Text2VecAws,
            VectorizerConfig::Text2VecHuggingFace(_) => Vectorizer::Text2VecHuggingFace,
            VectorizerConfig::Text2VecPalm(_) => Vectorizer::Text2VecPalm,
            VectorizerConfig::Text2VecGpt4All(_) => Vectorizer::Text2VecGpt4All,
            VectorizerConfig::Text2VecTransformers(_) => Vectorizer::Text2VecTransformers,
            VectorizerConfig::Text2VecJinaAi(_) => Vectorizer::Text2VecJinaAi,
            VectorizerConfig::Img2VecNeural(_) => Vectorizer::Img2VecNeural,
            VectorizerConfig::Multi2VecClip(_) => Vectorizer::Multi2VecClip,
            VectorizerConfig::Multi2VecBind(_) => Vectorizer::Multi2VecBind,
            VectorizerConfig::Ref2VecCentroid(_) => Vectorizer::Ref2VecCentroid,
        }
    }

    /// Validate the backend options.
    pub fn validate(&self) -> Result<()> {
        match self {
            VectorizerConfig::None(_) => Ok(()),
            VectorizerConfig::Text2VecOpenAi(c) => c.validate(),
            VectorizerConfig::Text2VecAzureOpenAi(c) => c.validate(),
            VectorizerConfig::Text2VecCohere(c) => c.validate(),
            VectorizerConfig::Text2VecContextionary(c) => c.validate(),
            VectorizerConfig::Text2VecAws(c) => c.validate(),
            VectorizerConfig::Text2VecHuggingFace(c) => c.validate(),
            VectorizerConfig::Text2VecPalm(c) => c.validate(),
            VectorizerConfig::Text2VecGpt4All(c) => c.validate(),
            VectorizerConfig::Text2VecTransformers(c) => c.validate(),
            VectorizerConfig::Text2VecJinaAi(c) => c.validate(),
            VectorizerConfig::Img2VecNeural(c) => c.validate(),
            VectorizerConfig::Multi2VecClip(c) => c.validate(),
            VectorizerConfig::Multi2VecBind(c) => c.validate(),
            VectorizerConfig::Ref2VecCentroid(c) => c.validate(),
        }
    }

    /// Parse a `{ "<backend-id>": { ... } }` mapping and validate it.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            NamedVectorError::validation("vectorizer", "expected an object keyed by vectorizer")
        })?;
        let mut entries = object.iter();
        let (key, options) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(NamedVectorError::validation(
                    "vectorizer",
                    format!("expected exactly one vectorizer, got {}", object.len()),
                ));
            }
        };

        let config = match Vectorizer::parse(key)? {
            Vectorizer::None => VectorizerConfig::None(parse_options(key, options)?),
            Vectorizer::Text2VecOpenAi if is_azure(options) => {
                VectorizerConfig::Text2VecAzureOpenAi(parse_options(key, options)?)
            }
            Vectorizer::Text2VecOpenAi => {
                VectorizerConfig::Text2VecOpenAi(parse_options(key, options)?)
            }
            Vectorizer::Text2VecCohere => {
                VectorizerConfig::Text2VecCohere(parse_options(key, options)?)
            }
            Vectorizer::Text2VecContextionary => {
                VectorizerConfig::Text2VecContextionary(parse_options(key, options)?)
            }
            Vectorizer::Text2VecAws => VectorizerConfig::Text2VecAws(parse_options(key, options)?),
            Vectorizer::Text2VecHuggingFace => {
                VectorizerConfig::Text2VecHuggingFace(parse_options(key, options)?)
            }
            Vectorizer::Text2VecPalm => {
                VectorizerConfig::Text2VecPalm(parse_options(key, options)?)
            }
            Vectorizer::Text2VecGpt4All => {
                VectorizerConfig::Text2VecGpt4All(parse_options(key, options)?)
            }
            Vectorizer::Text2VecTransformers => {
                VectorizerConfig::Text2VecTransformers(parse_options(key, options)?)
            }
            Vectorizer::Text2VecJinaAi => {
                VectorizerConfig::Text2VecJinaAi(parse_options(key, options)?)
            }
            Vectorizer::Img2VecNeural => {
                VectorizerConfig::Img2VecNeural(parse_options(key, options)?)
            }
            Vectorizer::Multi2VecClip => {
                VectorizerConfig::Multi2VecClip(parse_options(key, options)?)
            }
            Vectorizer::Multi2VecBind => {
                VectorizerConfig::Multi2VecBind(parse_options(key, options)?)
            }
            Vectorizer::Ref2VecCentroid => {
                VectorizerConfig::Ref2VecCentroid(parse_options(key, options)?)
            }
        };
        config.validate()?;
        Ok(config)
    }
}

fn is_azure(options: &Value) -> bool {
    ["resourceName", "deploymentId"]
        .iter()
        .any(|key| options.get(key).is_some_and(|v| !v.is_null()))
}

fn parse_options<T: DeserializeOwned>(key: &str, options: &Value) -> Result<T> {
    T::deserialize(options).map_err(|e| NamedVectorError::validation(key, e.to_string()))
}

impl Serialize for VectorizerConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let key = self.kind().as_str();
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            VectorizerConfig::None(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecOpenAi(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecAzureOpenAi(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecCohere(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecContextionary(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecAws(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecHuggingFace(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecPalm(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecGpt4All(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecTransformers(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Text2VecJinaAi(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Img2VecNeural(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Multi2VecClip(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Multi2VecBind(c) => map.serialize_entry(key, c)?,
            VectorizerConfig::Ref2VecCentroid(c) => map.serialize_entry(key, c)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VectorizerConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        VectorizerConfig::from_value(&value).map_err(D::Error::custom)
    }
}

macro_rules! impl_from_config {
    ($($config:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$config> for VectorizerConfig {
                fn from(config: $config) -> Self {
                    VectorizerConfig::$variant(config)
                }
            }
        )+
    };
}

impl_from_config! {
    NoneConfig => None,
    Text2VecOpenAiConfig => Text2VecOpenAi,
    Text2VecAzureOpenAiConfig => Text2VecAzureOpenAi,
    Text2VecCohereConfig => Text2VecCohere,
    Text2VecContextionaryConfig => Text2VecContextionary,
    Text2VecAwsConfig => Text2VecAws,
    Text2VecHuggingFaceConfig => Text2VecHuggingFace,
    Text2VecPalmConfig => Text2VecPalm,
    Text2VecGpt4AllConfig => Text2VecGpt4All,
    Text2VecTransformersConfig => Text2VecTransformers,
    Text2VecJinaAiConfig => Text2VecJinaAi,
    Img2VecNeuralConfig => Img2VecNeural,
    Multi2VecClipConfig => Multi2VecClip,
    Multi2VecBindConfig => Multi2VecBind,
    Ref2VecCentroidConfig => Ref2VecCentroid,
}
