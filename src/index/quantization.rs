//! Vector compression settings attached to index configurations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::validate;

/// Encoder used to build product-quantization codebooks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PqEncoderType {
    Kmeans,
    Tile,
}

/// Distribution assumed by the tile encoder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PqEncoderDistribution {
    #[serde(rename = "log-normal")]
    LogNormal,
    #[serde(rename = "normal")]
    Normal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PqEncoder {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub encoder_type: Option<PqEncoderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<PqEncoderDistribution>,
}

/// Product quantization for HNSW indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PqConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_compression: Option<bool>,
    /// `0` lets the server derive the segment count from the dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroids: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder: Option<PqEncoder>,
}

impl PqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn bit_compression(mut self, bit_compression: bool) -> Self {
        self.bit_compression = Some(bit_compression);
        self
    }

    pub fn segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    pub fn centroids(mut self, centroids: u32) -> Self {
        self.centroids = Some(centroids);
        self
    }

    pub fn training_limit(mut self, limit: u64) -> Self {
        self.training_limit = Some(limit);
        self
    }

    pub fn encoder(
        mut self,
        encoder_type: PqEncoderType,
        distribution: Option<PqEncoderDistribution>,
    ) -> Self {
        self.encoder = Some(PqEncoder {
            encoder_type: Some(encoder_type),
            distribution,
        });
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive("pq.centroids", self.centroids)?;
        validate::positive("pq.training_limit", self.training_limit)?;
        Ok(())
    }
}

/// Binary quantization for flat indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BqConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    /// `-1` disables the rescore limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescore_limit: Option<i64>,
}

impl BqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn rescore_limit(mut self, limit: i64) -> Self {
        self.rescore_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive_or_unlimited("bq.rescore_limit", self.rescore_limit)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_pq_serializes_only_set_fields() {
        let pq = PqConfig::new()
            .enabled(true)
            .segments(96)
            .encoder(PqEncoderType::Tile, Some(PqEncoderDistribution::LogNormal));

        assert_eq!(
            serde_json::to_value(&pq).unwrap(),
            json!({
                "enabled": true,
                "segments": 96,
                "encoder": {"type": "tile", "distribution": "log-normal"}
            })
        );
    }

    #[test]
    fn test_pq_zero_segments_is_automatic() {
        assert!(PqConfig::new().segments(0).validate().is_ok());
        let err = PqConfig::new().centroids(0).validate().unwrap_err();
        assert_eq!(err.field(), Some("pq.centroids"));
    }

    #[test]
    fn test_bq_rescore_limit() {
        assert!(BqConfig::new().rescore_limit(-1).validate().is_ok());
        assert!(BqConfig::new().rescore_limit(200).validate().is_ok());
        let err = BqConfig::new().rescore_limit(0).validate().unwrap_err();
        assert_eq!(err.field(), Some("bq.rescore_limit"));
        assert!(BqConfig::new().rescore_limit(-5).validate().is_err());
    }

    #[test]
    fn test_bq_camel_case() {
        let bq = BqConfig::new().cache(false).rescore_limit(200);
        assert_eq!(
            serde_json::to_value(&bq).unwrap(),
            json!({"cache": false, "rescoreLimit": 200})
        );
    }
}
