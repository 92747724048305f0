//! Vectorizer backend identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NamedVectorError, Result};

/// The vectorizer module the server runs for a named vector.
///
/// Each variant maps to the exact key the server API expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Vectorizer {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "text2vec-openai")]
    Text2VecOpenAi,
    #[serde(rename = "text2vec-cohere")]
    Text2VecCohere,
    #[serde(rename = "text2vec-contextionary")]
    Text2VecContextionary,
    #[serde(rename = "text2vec-aws")]
    Text2VecAws,
    #[serde(rename = "text2vec-huggingface")]
    Text2VecHuggingFace,
    #[serde(rename = "text2vec-palm")]
    Text2VecPalm,
    #[serde(rename = "text2vec-gpt4all")]
    Text2VecGpt4All,
    #[serde(rename = "text2vec-transformers")]
    Text2VecTransformers,
    #[serde(rename = "text2vec-jinaai")]
    Text2VecJinaAi,
    #[serde(rename = "img2vec-neural")]
    Img2VecNeural,
    #[serde(rename = "multi2vec-clip")]
    Multi2VecClip,
    #[serde(rename = "multi2vec-bind")]
    Multi2VecBind,
    #[serde(rename = "ref2vec-centroid")]
    Ref2VecCentroid,
}

impl Vectorizer {
    pub const ALL: [Vectorizer; 14] = [
        Vectorizer::None,
        Vectorizer::Text2VecOpenAi,
        Vectorizer::Text2VecCohere,
        Vectorizer::Text2VecContextionary,
        Vectorizer::Text2VecAws,
        Vectorizer::Text2VecHuggingFace,
        Vectorizer::Text2VecPalm,
        Vectorizer::Text2VecGpt4All,
        Vectorizer::Text2VecTransformers,
        Vectorizer::Text2VecJinaAi,
        Vectorizer::Img2VecNeural,
        Vectorizer::Multi2VecClip,
        Vectorizer::Multi2VecBind,
        Vectorizer::Ref2VecCentroid,
    ];

    /// The wire-format identifier of this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vectorizer::None => "none",
            Vectorizer::Text2VecOpenAi => "text2vec-openai",
            Vectorizer::Text2VecCohere => "text2vec-cohere",
            Vectorizer::Text2VecContextionary => "text2vec-contextionary",
            Vectorizer::Text2VecAws => "text2vec-aws",
            Vectorizer::Text2VecHuggingFace => "text2vec-huggingface",
            Vectorizer::Text2VecPalm => "text2vec-palm",
            Vectorizer::Text2VecGpt4All => "text2vec-gpt4all",
            Vectorizer::Text2VecTransformers => "text2vec-transformers",
            Vectorizer::Text2VecJinaAi => "text2vec-jinaai",
            Vectorizer::Img2VecNeural => "img2vec-neural",
            Vectorizer::Multi2VecClip => "multi2vec-clip",
            Vectorizer::Multi2VecBind => "multi2vec-bind",
            Vectorizer::Ref2VecCentroid => "ref2vec-centroid",
        }
    }

    /// Look up a backend by its wire-format identifier.
    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| {
                NamedVectorError::validation("vectorizer", format!("unknown vectorizer '{value}'"))
            })
    }
}

impl fmt::Display for Vectorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
