//! Vectorizer backend configuration.
//!
//! # Module Structure
//!
//! - `kind`: backend identifiers and their wire names
//! - `model`: open enumerations for models and other enumerated options
//! - `field`: multi-modal field descriptors
//! - `text`: `text2vec-*` backends
//! - `multi`: image, multi-modal, reference and "none" backends
//! - `config`: the [`VectorizerConfig`] union over all backends

pub mod config;
pub mod field;
pub mod kind;
pub mod model;
pub mod multi;
pub mod text;

// Re-exports
pub use config::VectorizerConfig;
pub use field::{Multi2VecField, map_multi2vec_fields};
pub use kind::Vectorizer;
pub use model::{
    AwsModel, CentroidMethod, CohereModel, CohereTruncation, JinaModel, OpenAiModel, OpenAiType,
    PoolingStrategy,
};
pub use multi::{
    Img2VecNeuralConfig, Multi2VecBindConfig, Multi2VecClipConfig, NoneConfig,
    Ref2VecCentroidConfig,
};
pub use text::{
    HuggingFaceOptions, Text2VecAwsConfig, Text2VecAzureOpenAiConfig, Text2VecCohereConfig,
    Text2VecContextionaryConfig, Text2VecGpt4AllConfig, Text2VecHuggingFaceConfig,
    Text2VecJinaAiConfig, Text2VecOpenAiConfig, Text2VecPalmConfig, Text2VecTransformersConfig,
};

/// Serde default for `vectorizeClassName`.
pub(crate) fn default_true() -> bool {
    true
}
