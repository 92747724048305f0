//! # Named Vectors
//!
//! Typed builders for the named vector configuration of vector database
//! collections.
//!
//! ## Features
//!
//! - One validated option record per vectorizer backend
//! - Open model enumerations that accept values unknown to this crate
//! - HNSW and Flat index configuration with PQ/BQ compression
//! - Deterministic serialization to the server's JSON shape, and back
//!
//! Nothing here performs I/O: the produced JSON is a fragment of a
//! collection-creation request sent by some other component.

pub mod error;
pub mod index;
pub mod named;
pub mod schema;
mod util;
pub mod vectorizer;

// Re-exports for the public API
pub use error::{NamedVectorError, Result};
pub use index::{
    BqConfig, FlatIndexConfig, HnswIndexConfig, PqConfig, VectorDistance, VectorIndexConfig,
    VectorIndexType,
};
pub use named::{NamedVectorConfig, NamedVectors};
pub use schema::{VectorConfigs, VectorConfigsBuilder};
pub use url::Url;
pub use vectorizer::{
    AwsModel, CentroidMethod, CohereModel, CohereTruncation, HuggingFaceOptions,
    Img2VecNeuralConfig, JinaModel, Multi2VecBindConfig, Multi2VecClipConfig, Multi2VecField,
    NoneConfig, OpenAiModel, OpenAiType, PoolingStrategy, Ref2VecCentroidConfig,
    Text2VecAwsConfig, Text2VecAzureOpenAiConfig, Text2VecCohereConfig,
    Text2VecContextionaryConfig, Text2VecGpt4AllConfig, Text2VecHuggingFaceConfig,
    Text2VecJinaAiConfig, Text2VecOpenAiConfig, Text2VecPalmConfig, Text2VecTransformersConfig,
    Vectorizer, VectorizerConfig, map_multi2vec_fields,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
