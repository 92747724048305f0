//! Vector index configuration.
//!
//! This module defines the tuning options for the nearest-neighbor structure
//! the server builds over a named vector's embeddings (HNSW or Flat). Every
//! option is optional: an unset option is left out of the serialized mapping
//! so the server default applies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NamedVectorError, Result};
use crate::index::quantization::{BqConfig, PqConfig};
use crate::util::validate;

/// The type of vector index to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VectorIndexType {
    /// HNSW (Hierarchical Navigable Small World) - approximate but fast.
    #[default]
    Hnsw,
    /// Flat (brute-force) index - exact but slower for large datasets.
    Flat,
}

impl VectorIndexType {
    /// The identifier the server expects in `vectorIndexType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorIndexType::Hnsw => "hnsw",
            VectorIndexType::Flat => "flat",
        }
    }

    /// Parse a server identifier.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "hnsw" => Ok(VectorIndexType::Hnsw),
            "flat" => Ok(VectorIndexType::Flat),
            other => Err(NamedVectorError::validation(
                "vector_index_type",
                format!("unknown vector index type '{other}'"),
            )),
        }
    }
}

impl fmt::Display for VectorIndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance metric used to compare vectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VectorDistance {
    #[serde(rename = "cosine")]
    Cosine,
    #[serde(rename = "dot")]
    Dot,
    #[serde(rename = "l2-squared")]
    L2Squared,
    #[serde(rename = "hamming")]
    Hamming,
    #[serde(rename = "manhattan")]
    Manhattan,
}

/// Options for an HNSW vector index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HnswIndexConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_interval_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<VectorDistance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_factor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_max: Option<u32>,
    /// Size of the dynamic candidate list at query time; `-1` lets the
    /// server pick it from the `dynamic_ef_*` bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef_construction: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_search_cutoff: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_cache_max_objects: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pq: Option<PqConfig>,
}

// Builder pattern for HnswIndexConfig
impl HnswIndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cleanup_interval_seconds(mut self, seconds: u64) -> Self {
        self.cleanup_interval_seconds = Some(seconds);
        self
    }

    pub fn distance(mut self, distance: VectorDistance) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn dynamic_ef_factor(mut self, factor: u32) -> Self {
        self.dynamic_ef_factor = Some(factor);
        self
    }

    pub fn dynamic_ef_min(mut self, min: u32) -> Self {
        self.dynamic_ef_min = Some(min);
        self
    }

    pub fn dynamic_ef_max(mut self, max: u32) -> Self {
        self.dynamic_ef_max = Some(max);
        self
    }

    pub fn ef(mut self, ef: i64) -> Self {
        self.ef = Some(ef);
        self
    }

    pub fn ef_construction(mut self, ef: u32) -> Self {
        self.ef_construction = Some(ef);
        self
    }

    pub fn flat_search_cutoff(mut self, cutoff: u64) -> Self {
        self.flat_search_cutoff = Some(cutoff);
        self
    }

    pub fn max_connections(mut self, m: u32) -> Self {
        self.max_connections = Some(m);
        self
    }

    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn vector_cache_max_objects(mut self, n: u64) -> Self {
        self.vector_cache_max_objects = Some(n);
        self
    }

    pub fn pq(mut self, pq: PqConfig) -> Self {
        self.pq = Some(pq);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive_or_unlimited("ef", self.ef)?;
        validate::positive("ef_construction", self.ef_construction)?;
        validate::positive("max_connections", self.max_connections)?;
        if let (Some(min), Some(max)) = (self.dynamic_ef_min, self.dynamic_ef_max) {
            if min > max {
                return Err(NamedVectorError::validation(
                    "dynamic_ef_min",
                    format!("must not exceed dynamic_ef_max ({min} > {max})"),
                ));
            }
        }
        if let Some(pq) = &self.pq {
            pq.validate()?;
        }
        Ok(())
    }
}

/// Options for a Flat vector index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FlatIndexConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<VectorDistance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_cache_max_objects: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bq: Option<BqConfig>,
}

// Builder pattern for FlatIndexConfig
impl FlatIndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(mut self, distance: VectorDistance) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn vector_cache_max_objects(mut self, n: u64) -> Self {
        self.vector_cache_max_objects = Some(n);
        self
    }

    pub fn bq(mut self, bq: BqConfig) -> Self {
        self.bq = Some(bq);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(bq) = &self.bq {
            bq.validate()?;
        }
        Ok(())
    }
}

/// Explicit index configuration for a named vector.
///
/// Serializes to the inner option set only; the index type travels separately
/// as `vectorIndexType` (see [`VectorIndexConfig::vector_index_type`]).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VectorIndexConfig {
    /// HNSW index options.
    Hnsw(HnswIndexConfig),
    /// Flat index options.
    Flat(FlatIndexConfig),
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        VectorIndexConfig::Hnsw(HnswIndexConfig::default())
    }
}

impl VectorIndexConfig {
    /// Get the index type.
    pub fn vector_index_type(&self) -> VectorIndexType {
        match self {
            VectorIndexConfig::Hnsw(_) => VectorIndexType::Hnsw,
            VectorIndexConfig::Flat(_) => VectorIndexType::Flat,
        }
    }

    /// Get the distance metric, if one was set.
    pub fn distance(&self) -> Option<VectorDistance> {
        match self {
            VectorIndexConfig::Hnsw(cfg) => cfg.distance,
            VectorIndexConfig::Flat(cfg) => cfg.distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            VectorIndexConfig::Hnsw(cfg) => cfg.validate(),
            VectorIndexConfig::Flat(cfg) => cfg.validate(),
        }
    }

    /// Parse the wire mapping of an index of the given type.
    ///
    /// HNSW graph options under a flat index are rejected. Other keys the
    /// selected index type does not model are dropped with a warning.
    pub fn from_value(index_type: VectorIndexType, value: serde_json::Value) -> Result<Self> {
        if let Some(object) = value.as_object() {
            for key in object.keys().filter(|k| !is_index_key(index_type, k.as_str())) {
                if HNSW_GRAPH_KEYS.contains(&key.as_str()) {
                    return Err(NamedVectorError::validation(
                        "vector_index_config",
                        format!("`{key}` is an hnsw option and cannot configure a flat index"),
                    ));
                }
                log::warn!("ignoring unsupported {index_type} index option `{key}`");
            }
        }

        let config = match index_type {
            VectorIndexType::Hnsw => VectorIndexConfig::Hnsw(
                serde_json::from_value(value)
                    .map_err(|e| NamedVectorError::validation("vector_index_config", e.to_string()))?,
            ),
            VectorIndexType::Flat => VectorIndexConfig::Flat(
                serde_json::from_value(value)
                    .map_err(|e| NamedVectorError::validation("vector_index_config", e.to_string()))?,
            ),
        };
        config.validate()?;
        Ok(config)
    }
}

// Options of the HNSW graph itself, meaningless for a flat index.
const HNSW_GRAPH_KEYS: &[&str] = &[
    "cleanupIntervalSeconds",
    "dynamicEfFactor",
    "dynamicEfMin",
    "dynamicEfMax",
    "ef",
    "efConstruction",
    "flatSearchCutoff",
    "maxConnections",
    "skip",
];

fn is_index_key(index_type: VectorIndexType, key: &str) -> bool {
    match key {
        "distance" | "vectorCacheMaxObjects" => true,
        "pq" => index_type == VectorIndexType::Hnsw,
        "bq" => index_type == VectorIndexType::Flat,
        _ => index_type == VectorIndexType::Hnsw && HNSW_GRAPH_KEYS.contains(&key),
    }
}

impl From<HnswIndexConfig> for VectorIndexConfig {
    fn from(cfg: HnswIndexConfig) -> Self {
        VectorIndexConfig::Hnsw(cfg)
    }
}

impl From<FlatIndexConfig> for VectorIndexConfig {
    fn from(cfg: FlatIndexConfig) -> Self {
        VectorIndexConfig::Flat(cfg)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::index::quantization::PqEncoderType;

    #[test]
    fn test_default_is_empty_hnsw() {
        let cfg = VectorIndexConfig::default();
        assert_eq!(cfg.vector_index_type(), VectorIndexType::Hnsw);
        assert_eq!(serde_json::to_value(&cfg).unwrap(), json!({}));
    }

    #[test]
    fn test_hnsw_wire_names() {
        let cfg: VectorIndexConfig = HnswIndexConfig::new()
            .distance(VectorDistance::L2Squared)
            .ef_construction(256)
            .max_connections(32)
            .dynamic_ef_min(50)
            .dynamic_ef_max(400)
            .skip(false)
            .pq(PqConfig::new().enabled(true).encoder(PqEncoderType::Kmeans, None))
            .into();

        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({
                "distance": "l2-squared",
                "efConstruction": 256,
                "maxConnections": 32,
                "dynamicEfMin": 50,
                "dynamicEfMax": 400,
                "skip": false,
                "pq": {"enabled": true, "encoder": {"type": "kmeans"}}
            })
        );
    }

    #[test]
    fn test_flat_type_and_fields() {
        let cfg: VectorIndexConfig = FlatIndexConfig::new()
            .distance(VectorDistance::Dot)
            .bq(BqConfig::new().enabled(true))
            .into();
        assert_eq!(cfg.vector_index_type(), VectorIndexType::Flat);
        assert_eq!(cfg.distance(), Some(VectorDistance::Dot));
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"distance": "dot", "bq": {"enabled": true}})
        );
    }

    #[test]
    fn test_hnsw_validation() {
        assert!(HnswIndexConfig::new().ef(-1).validate().is_ok());
        assert_eq!(
            HnswIndexConfig::new().ef(0).validate().unwrap_err().field(),
            Some("ef")
        );
        assert_eq!(
            HnswIndexConfig::new()
                .dynamic_ef_min(500)
                .dynamic_ef_max(100)
                .validate()
                .unwrap_err()
                .field(),
            Some("dynamic_ef_min")
        );
        assert!(HnswIndexConfig::new().max_connections(0).validate().is_err());
    }

    #[test]
    fn test_from_value() {
        let cfg = VectorIndexConfig::from_value(
            VectorIndexType::Flat,
            json!({"distance": "hamming", "vectorCacheMaxObjects": 1000}),
        )
        .unwrap();
        assert_eq!(
            cfg,
            VectorIndexConfig::Flat(
                FlatIndexConfig::new()
                    .distance(VectorDistance::Hamming)
                    .vector_cache_max_objects(1000)
            )
        );

        let err = VectorIndexConfig::from_value(VectorIndexType::Hnsw, json!({"ef": "fast"}))
            .unwrap_err();
        assert_eq!(err.field(), Some("vector_index_config"));
    }

    #[test]
    fn test_from_value_server_defaults() {
        let hnsw = VectorIndexConfig::from_value(
            VectorIndexType::Hnsw,
            json!({
                "ef": -1,
                "pq": {"enabled": false, "segments": 0, "centroids": 256, "trainingLimit": 100000}
            }),
        )
        .unwrap();
        let VectorIndexConfig::Hnsw(hnsw) = hnsw else {
            panic!("expected an hnsw config");
        };
        assert_eq!(hnsw.pq.and_then(|pq| pq.segments), Some(0));

        let flat = VectorIndexConfig::from_value(
            VectorIndexType::Flat,
            json!({"bq": {"enabled": false, "rescoreLimit": -1, "cache": false}}),
        )
        .unwrap();
        assert_eq!(
            flat,
            VectorIndexConfig::Flat(
                FlatIndexConfig::new().bq(BqConfig::new().enabled(false).rescore_limit(-1).cache(false))
            )
        );
    }

    #[test]
    fn test_from_value_rejects_hnsw_options_on_flat() {
        let err = VectorIndexConfig::from_value(
            VectorIndexType::Flat,
            json!({"distance": "cosine", "efConstruction": 128, "maxConnections": 64}),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("vector_index_config"));
        assert!(err.to_string().contains("hnsw option"));
    }

    #[test]
    fn test_from_value_drops_unmodelled_keys() {
        let cfg = VectorIndexConfig::from_value(
            VectorIndexType::Flat,
            json!({"distance": "dot", "pq": {"enabled": false}}),
        )
        .unwrap();
        assert_eq!(
            cfg,
            VectorIndexConfig::Flat(FlatIndexConfig::new().distance(VectorDistance::Dot))
        );
    }

    #[test]
    fn test_index_type_parse() {
        assert_eq!(VectorIndexType::parse("flat").unwrap(), VectorIndexType::Flat);
        assert_eq!(VectorIndexType::Hnsw.to_string(), "hnsw");
        assert!(VectorIndexType::parse("ivf").is_err());
    }
}
