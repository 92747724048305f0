//! Image, multi-modal and reference vectorizer backends.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::validate;
use crate::vectorizer::default_true;
use crate::vectorizer::field::{Multi2VecField, map_multi2vec_fields, validate_fields};
use crate::vectorizer::model::CentroidMethod;

/// Options for `img2vec-neural`. `image_fields` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Img2VecNeuralConfig {
    /// Blob properties holding the images to vectorize.
    #[serde(rename = "imageFields", default, skip_serializing_if = "Option::is_none")]
    pub image_fields: Option<Vec<String>>,
}

impl Img2VecNeuralConfig {
    pub fn new<I, S>(image_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            image_fields: Some(image_fields.into_iter().map(Into::into).collect()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::required_list("image_fields", &self.image_fields)
    }
}

/// Options for `multi2vec-clip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multi2VecClipConfig {
    #[serde(rename = "imageFields", default, skip_serializing_if = "Option::is_none")]
    pub image_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "textFields", default, skip_serializing_if = "Option::is_none")]
    pub text_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Multi2VecClipConfig {
    fn default() -> Self {
        Self {
            image_fields: None,
            text_fields: None,
            vectorize_collection_name: true,
        }
    }
}

impl Multi2VecClipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.image_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn text_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.text_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields("image_fields", &self.image_fields)?;
        validate_fields("text_fields", &self.text_fields)
    }
}

/// Options for `multi2vec-bind`, one field list per modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multi2VecBindConfig {
    #[serde(rename = "audioFields", default, skip_serializing_if = "Option::is_none")]
    pub audio_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "depthFields", default, skip_serializing_if = "Option::is_none")]
    pub depth_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "imageFields", default, skip_serializing_if = "Option::is_none")]
    pub image_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "IMUFields", default, skip_serializing_if = "Option::is_none")]
    pub imu_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "textFields", default, skip_serializing_if = "Option::is_none")]
    pub text_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "thermalFields", default, skip_serializing_if = "Option::is_none")]
    pub thermal_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "videoFields", default, skip_serializing_if = "Option::is_none")]
    pub video_fields: Option<Vec<Multi2VecField>>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Multi2VecBindConfig {
    fn default() -> Self {
        Self {
            audio_fields: None,
            depth_fields: None,
            image_fields: None,
            imu_fields: None,
            text_fields: None,
            thermal_fields: None,
            video_fields: None,
            vectorize_collection_name: true,
        }
    }
}

impl Multi2VecBindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn audio_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.audio_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn depth_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.depth_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn image_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.image_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn imu_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.imu_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn text_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.text_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn thermal_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.thermal_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn video_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Multi2VecField>,
    {
        self.video_fields = Some(map_multi2vec_fields(fields));
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields("audio_fields", &self.audio_fields)?;
        validate_fields("depth_fields", &self.depth_fields)?;
        validate_fields("image_fields", &self.image_fields)?;
        validate_fields("imu_fields", &self.imu_fields)?;
        validate_fields("text_fields", &self.text_fields)?;
        validate_fields("thermal_fields", &self.thermal_fields)?;
        validate_fields("video_fields", &self.video_fields)
    }
}

/// Options for `ref2vec-centroid`. `reference_properties` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref2VecCentroidConfig {
    /// Reference properties whose targets' vectors are aggregated.
    #[serde(
        rename = "referenceProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_properties: Option<Vec<String>>,
    #[serde(default)]
    pub method: CentroidMethod,
}

impl Ref2VecCentroidConfig {
    pub fn new<I, S>(reference_properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference_properties: Some(reference_properties.into_iter().map(Into::into).collect()),
            method: CentroidMethod::default(),
        }
    }

    pub fn method(mut self, method: impl Into<CentroidMethod>) -> Self {
        self.method = method.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::required_list("reference_properties", &self.reference_properties)
    }
}

/// No vectorizer: vectors are supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoneConfig {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_img2vec_requires_image_fields() {
        let err = Img2VecNeuralConfig::default().validate().unwrap_err();
        assert_eq!(err.field(), Some("image_fields"));

        let err = Img2VecNeuralConfig::new(Vec::<String>::new()).validate().unwrap_err();
        assert_eq!(err.field(), Some("image_fields"));

        let cfg = Img2VecNeuralConfig::new(["poster"]);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"imageFields": ["poster"]})
        );
    }

    #[test]
    fn test_clip_plain_and_weighted_shapes() {
        let plain = Multi2VecClipConfig::new()
            .image_fields(["poster"])
            .text_fields(["title", "plot"]);
        let weighted = Multi2VecClipConfig::new()
            .image_fields([("poster", 0.6)])
            .text_fields([("title", 0.3), ("plot", 0.1)]);

        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({
                "imageFields": [{"name": "poster"}],
                "textFields": [{"name": "title"}, {"name": "plot"}],
                "vectorizeClassName": true
            })
        );
        assert_eq!(
            serde_json::to_value(&weighted).unwrap(),
            json!({
                "imageFields": [{"name": "poster", "weight": 0.6}],
                "textFields": [
                    {"name": "title", "weight": 0.3},
                    {"name": "plot", "weight": 0.1}
                ],
                "vectorizeClassName": true
            })
        );
    }

    #[test]
    fn test_bind_imu_wire_name() {
        let cfg = Multi2VecBindConfig::new().imu_fields(["accelerometer"]);
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"IMUFields": [{"name": "accelerometer"}], "vectorizeClassName": true})
        );
    }

    #[test]
    fn test_bind_empty_modality_rejected() {
        let cfg = Multi2VecBindConfig::new()
            .audio_fields(["clip"])
            .video_fields(Vec::<&str>::new());
        assert_eq!(cfg.validate().unwrap_err().field(), Some("video_fields"));
    }

    #[test]
    fn test_ref2vec_defaults_to_mean() {
        let cfg = Ref2VecCentroidConfig::new(["hasAuthor"]);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"referenceProperties": ["hasAuthor"], "method": "mean"})
        );
        assert!(Ref2VecCentroidConfig::default().validate().is_err());
    }

    #[test]
    fn test_none_is_empty_object() {
        assert_eq!(serde_json::to_value(NoneConfig::default()).unwrap(), json!({}));
    }
}
