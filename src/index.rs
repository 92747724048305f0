//! Vector index configuration for named vectors.
//!
//! # Module Structure
//!
//! - `config`: index types, distance metrics and per-type option sets
//! - `quantization`: PQ/BQ compression settings

pub mod config;
pub mod quantization;

// Re-exports
pub use config::{
    FlatIndexConfig, HnswIndexConfig, VectorDistance, VectorIndexConfig, VectorIndexType,
};
pub use quantization::{BqConfig, PqConfig, PqEncoder, PqEncoderDistribution, PqEncoderType};
