//! Enumerated vectorizer options.
//!
//! Servers add models faster than clients ship, so every enumeration here is
//! open: besides the known members it has a `Custom` variant carrying any
//! other string verbatim. Parsing a known string always yields the matching
//! member, never `Custom`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value unknown to this crate, passed to the server as is.
            Custom(String),
        }

        impl $name {
            /// The string sent to the server.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Custom(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Custom(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                String::deserialize(deserializer).map($name::from)
            }
        }
    };
}

open_enum! {
    /// OpenAI embedding models.
    pub enum OpenAiModel {
        Ada => "ada",
        Babbage => "babbage",
        Curie => "curie",
        Davinci => "davinci",
        TextEmbedding3Small => "text-embedding-3-small",
        TextEmbedding3Large => "text-embedding-3-large",
    }
}

open_enum! {
    /// Kind of input an OpenAI model is tuned for.
    pub enum OpenAiType {
        Text => "text",
        Code => "code",
    }
}

open_enum! {
    /// Cohere embedding models.
    pub enum CohereModel {
        EmbedEnglishV2 => "embed-english-v2.0",
        EmbedEnglishLightV2 => "embed-english-light-v2.0",
        EmbedMultilingualV2 => "embed-multilingual-v2.0",
        EmbedEnglishV3 => "embed-english-v3.0",
        EmbedEnglishLightV3 => "embed-english-light-v3.0",
        EmbedMultilingualV3 => "embed-multilingual-v3.0",
        EmbedMultilingualLightV3 => "embed-multilingual-light-v3.0",
    }
}

open_enum! {
    /// How Cohere shortens inputs longer than the model's context.
    pub enum CohereTruncation {
        /// Reject over-long inputs.
        NoTruncation => "NONE",
        Start => "START",
        End => "END",
        Left => "LEFT",
        Right => "RIGHT",
    }
}

open_enum! {
    /// Embedding models served through AWS Bedrock.
    pub enum AwsModel {
        TitanEmbedTextV1 => "amazon.titan-embed-text-v1",
        CohereEmbedEnglishV3 => "cohere.embed-english-v3",
        CohereEmbedMultilingualV3 => "cohere.embed-multilingual-v3",
    }
}

open_enum! {
    /// Jina AI embedding models.
    pub enum JinaModel {
        JinaEmbeddingsV2BaseEn => "jina-embeddings-v2-base-en",
        JinaEmbeddingsV2SmallEn => "jina-embeddings-v2-small-en",
    }
}

open_enum! {
    /// Token pooling for the transformers module.
    pub enum PoolingStrategy {
        MaskedMean => "masked_mean",
        Cls => "cls",
    }
}

open_enum! {
    /// Aggregation ref2vec-centroid applies to referenced vectors.
    pub enum CentroidMethod {
        Mean => "mean",
    }
}

impl Default for PoolingStrategy {
    fn default() -> Self {
        PoolingStrategy::MaskedMean
    }
}

impl Default for CentroidMethod {
    fn default() -> Self {
        CentroidMethod::Mean
    }
}
