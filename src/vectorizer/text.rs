//! Text vectorizer backends (`text2vec-*`).
//!
//! Each record holds the backend-specific options of one module. Optional
//! options left as `None` are omitted from the wire mapping so the server
//! default applies. `source_properties` restricts which collection
//! properties are vectorized; unset means all text properties.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NamedVectorError, Result};
use crate::util::validate;
use crate::vectorizer::default_true;
use crate::vectorizer::model::{
    AwsModel, CohereModel, CohereTruncation, JinaModel, OpenAiModel, OpenAiType, PoolingStrategy,
};

fn into_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Options for `text2vec-openai`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecOpenAiConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<OpenAiModel>,
    #[serde(rename = "modelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<OpenAiType>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecOpenAiConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            base_url: None,
            model: None,
            model_version: None,
            model_type: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecOpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn model(mut self, model: impl Into<OpenAiModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = Some(version.into());
        self
    }

    pub fn model_type(mut self, model_type: impl Into<OpenAiType>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)?;
        validate::http_url("base_url", &self.base_url)
    }
}

/// Options for `text2vec-cohere`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecCohereConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CohereModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<CohereTruncation>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecCohereConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            base_url: None,
            model: None,
            truncate: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecCohereConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn model(mut self, model: impl Into<CohereModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn truncate(mut self, truncate: impl Into<CohereTruncation>) -> Self {
        self.truncate = Some(truncate.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)?;
        validate::http_url("base_url", &self.base_url)
    }
}

/// Options for `text2vec-contextionary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecContextionaryConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecContextionaryConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecContextionaryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)
    }
}

/// Options for `text2vec-aws`. `model` and `region` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecAwsConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<AwsModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecAwsConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            model: None,
            region: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecAwsConfig {
    pub fn new(model: impl Into<AwsModel>, region: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn model(mut self, model: impl Into<AwsModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::required("model", &self.model)?;
        validate::required("region", &self.region)?;
        validate::non_empty_list("source_properties", &self.source_properties)
    }
}

/// Options for Azure-hosted OpenAI models.
///
/// Served by the `text2vec-openai` module; `resource_name` and
/// `deployment_id` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecAzureOpenAiConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
    #[serde(rename = "resourceName", default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(rename = "deploymentId", default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecAzureOpenAiConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            base_url: None,
            resource_name: None,
            deployment_id: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecAzureOpenAiConfig {
    pub fn new(resource_name: impl Into<String>, deployment_id: impl Into<String>) -> Self {
        Self {
            resource_name: Some(resource_name.into()),
            deployment_id: Some(deployment_id.into()),
            ..Default::default()
        }
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    pub fn deployment_id(mut self, id: impl Into<String>) -> Self {
        self.deployment_id = Some(id.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::required("resource_name", &self.resource_name)?;
        validate::required("deployment_id", &self.deployment_id)?;
        validate::non_empty_list("source_properties", &self.source_properties)?;
        validate::http_url("base_url", &self.base_url)
    }
}

/// Options for `text2vec-gpt4all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecGpt4AllConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecGpt4AllConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecGpt4AllConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)
    }
}

/// Runtime switches of the Hugging Face inference API, sent as `options`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuggingFaceOptions {
    #[serde(rename = "waitForModel", default, skip_serializing_if = "Option::is_none")]
    pub wait_for_model: Option<bool>,
    #[serde(rename = "useGPU", default, skip_serializing_if = "Option::is_none")]
    pub use_gpu: Option<bool>,
    #[serde(rename = "useCache", default, skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,
}

impl HuggingFaceOptions {
    pub fn is_empty(&self) -> bool {
        self.wait_for_model.is_none() && self.use_gpu.is_none() && self.use_cache.is_none()
    }
}

/// Options for `text2vec-huggingface`.
///
/// The model is chosen in exactly one of three ways: a single `model`, a
/// `passage_model`/`query_model` pair, or a dedicated `endpoint_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecHuggingFaceConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "passageModel", default, skip_serializing_if = "Option::is_none")]
    pub passage_model: Option<String>,
    #[serde(rename = "queryModel", default, skip_serializing_if = "Option::is_none")]
    pub query_model: Option<String>,
    #[serde(rename = "endpointURL", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<Url>,
    #[serde(default, skip_serializing_if = "HuggingFaceOptions::is_empty")]
    pub options: HuggingFaceOptions,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecHuggingFaceConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            model: None,
            passage_model: None,
            query_model: None,
            endpoint_url: None,
            options: HuggingFaceOptions::default(),
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecHuggingFaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn passage_model(mut self, model: impl Into<String>) -> Self {
        self.passage_model = Some(model.into());
        self
    }

    pub fn query_model(mut self, model: impl Into<String>) -> Self {
        self.query_model = Some(model.into());
        self
    }

    pub fn endpoint_url(mut self, url: Url) -> Self {
        self.endpoint_url = Some(url);
        self
    }

    pub fn wait_for_model(mut self, wait: bool) -> Self {
        self.options.wait_for_model = Some(wait);
        self
    }

    pub fn use_gpu(mut self, use_gpu: bool) -> Self {
        self.options.use_gpu = Some(use_gpu);
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.options.use_cache = Some(use_cache);
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)?;
        validate::http_url("endpoint_url", &self.endpoint_url)?;

        let pair = self.passage_model.is_some() || self.query_model.is_some();
        match (&self.passage_model, &self.query_model) {
            (Some(_), None) => return Err(NamedVectorError::missing_field("query_model")),
            (None, Some(_)) => return Err(NamedVectorError::missing_field("passage_model")),
            _ => {}
        }
        if self.model.is_some() && pair {
            return Err(NamedVectorError::validation(
                "model",
                "cannot be combined with passage_model and query_model",
            ));
        }
        if self.endpoint_url.is_some() && (self.model.is_some() || pair) {
            return Err(NamedVectorError::validation(
                "endpoint_url",
                "cannot be combined with model, passage_model or query_model",
            ));
        }
        Ok(())
    }
}

/// Options for `text2vec-palm`. `project_id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecPalmConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "projectId", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(rename = "apiEndpoint", default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<Url>,
    #[serde(rename = "modelId", default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecPalmConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            project_id: None,
            api_endpoint: None,
            model_id: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecPalmConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn api_endpoint(mut self, url: Url) -> Self {
        self.api_endpoint = Some(url);
        self
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::required("project_id", &self.project_id)?;
        validate::non_empty_list("source_properties", &self.source_properties)?;
        validate::http_url("api_endpoint", &self.api_endpoint)
    }
}

/// Options for `text2vec-transformers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecTransformersConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(rename = "poolingStrategy", default)]
    pub pooling_strategy: PoolingStrategy,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecTransformersConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            pooling_strategy: PoolingStrategy::default(),
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecTransformersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn pooling_strategy(mut self, strategy: impl Into<PoolingStrategy>) -> Self {
        self.pooling_strategy = strategy.into();
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)
    }
}

/// Options for `text2vec-jinaai`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text2VecJinaAiConfig {
    #[serde(rename = "properties", default, skip_serializing_if = "Option::is_none")]
    pub source_properties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<JinaModel>,
    #[serde(rename = "vectorizeClassName", default = "default_true")]
    pub vectorize_collection_name: bool,
}

impl Default for Text2VecJinaAiConfig {
    fn default() -> Self {
        Self {
            source_properties: None,
            model: None,
            vectorize_collection_name: true,
        }
    }
}

impl Text2VecJinaAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_properties = Some(into_strings(properties));
        self
    }

    pub fn model(mut self, model: impl Into<JinaModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn vectorize_collection_name(mut self, vectorize: bool) -> Self {
        self.vectorize_collection_name = vectorize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate::non_empty_list("source_properties", &self.source_properties)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_openai_omits_unset_fields() {
        let cfg = Text2VecOpenAiConfig::new().model(OpenAiModel::Ada);
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"model": "ada", "vectorizeClassName": true})
        );
    }

    #[test]
    fn test_openai_type_and_base_url() {
        let cfg = Text2VecOpenAiConfig::new()
            .model_type(OpenAiType::Code)
            .model_version("002")
            .base_url(Url::parse("https://proxy.example.com").unwrap());
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({
                "baseURL": "https://proxy.example.com/",
                "modelVersion": "002",
                "type": "code",
                "vectorizeClassName": true
            })
        );
    }

    #[test]
    fn test_false_is_emitted_not_dropped() {
        let cfg = Text2VecContextionaryConfig::new().vectorize_collection_name(false);
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({"vectorizeClassName": false})
        );
    }

    #[test]
    fn test_aws_required_fields() {
        let err = Text2VecAwsConfig::default()
            .model(AwsModel::TitanEmbedTextV1)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("region"));

        let err = Text2VecAwsConfig::default().region("us-east-1").validate().unwrap_err();
        assert_eq!(err.field(), Some("model"));

        assert!(
            Text2VecAwsConfig::new(AwsModel::TitanEmbedTextV1, "us-east-1")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_required_strings_only_need_presence() {
        assert!(Text2VecAwsConfig::new("", "").validate().is_ok());
        assert!(Text2VecAzureOpenAiConfig::new("", "").validate().is_ok());
        assert!(Text2VecPalmConfig::new("").validate().is_ok());
    }

    #[test]
    fn test_azure_required_fields() {
        let err = Text2VecAzureOpenAiConfig::default()
            .resource_name("res")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("deployment_id"));
        assert!(Text2VecAzureOpenAiConfig::new("res", "dep").validate().is_ok());
    }

    #[test]
    fn test_palm_requires_project_id() {
        let err = Text2VecPalmConfig::default().validate().unwrap_err();
        assert_eq!(err.field(), Some("project_id"));
        let cfg = Text2VecPalmConfig::new("my-project").model_id("textembedding-gecko");
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({
                "projectId": "my-project",
                "modelId": "textembedding-gecko",
                "vectorizeClassName": true
            })
        );
    }

    #[test]
    fn test_empty_source_properties_rejected() {
        let cfg = Text2VecGpt4AllConfig::new().source_properties(Vec::<String>::new());
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.field(), Some("source_properties"));
    }

    #[test]
    fn test_source_properties_keep_order() {
        let cfg = Text2VecJinaAiConfig::new().source_properties(["title", "body", "abstract"]);
        assert_eq!(
            serde_json::to_value(&cfg).unwrap()["properties"],
            json!(["title", "body", "abstract"])
        );
    }

    #[test]
    fn test_huggingface_options_nested() {
        let cfg = Text2VecHuggingFaceConfig::new()
            .model("sentence-transformers/all-MiniLM-L6-v2")
            .wait_for_model(true)
            .use_gpu(false);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&cfg).unwrap(),
            json!({
                "model": "sentence-transformers/all-MiniLM-L6-v2",
                "options": {"waitForModel": true, "useGPU": false},
                "vectorizeClassName": true
            })
        );
    }

    #[test]
    fn test_huggingface_mutual_exclusion() {
        let err = Text2VecHuggingFaceConfig::new()
            .passage_model("p")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("query_model"));

        let err = Text2VecHuggingFaceConfig::new()
            .model("m")
            .passage_model("p")
            .query_model("q")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("model"));

        let err = Text2VecHuggingFaceConfig::new()
            .model("m")
            .endpoint_url(Url::parse("https://hf.example.com").unwrap())
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("endpoint_url"));

        assert!(
            Text2VecHuggingFaceConfig::new()
                .passage_model("p")
                .query_model("q")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_transformers_default_pooling() {
        assert_eq!(
            serde_json::to_value(Text2VecTransformersConfig::new()).unwrap(),
            json!({"poolingStrategy": "masked_mean", "vectorizeClassName": true})
        );
    }

    #[test]
    fn test_deserialize_defaults_vectorize_collection_name() {
        let cfg: Text2VecCohereConfig =
            serde_json::from_value(json!({"model": "embed-english-v3.0"})).unwrap();
        assert!(cfg.vectorize_collection_name);
        assert_eq!(cfg.model, Some(CohereModel::EmbedEnglishV3));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let cfg = Text2VecCohereConfig::new().base_url(Url::parse("ftp://cohere.example").unwrap());
        assert_eq!(cfg.validate().unwrap_err().field(), Some("base_url"));
    }
}
