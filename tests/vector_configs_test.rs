use anyhow::Result;
use named_vectors::{
    FlatIndexConfig, HnswIndexConfig, Multi2VecClipConfig, NamedVectors, OpenAiModel, OpenAiType,
    Text2VecOpenAiConfig, VectorConfigs, VectorDistance, VectorIndexConfig, VectorIndexType,
};
use serde_json::json;

#[test]
fn test_collection_with_multiple_named_vectors() -> Result<()> {
    let configs = VectorConfigs::builder()
        .add(NamedVectors::text2vec_openai(
            "title",
            Text2VecOpenAiConfig::new()
                .source_properties(["title"])
                .model(OpenAiModel::TextEmbedding3Large)
                .model_type(OpenAiType::Text),
            None,
        )?)
        .add(NamedVectors::multi2vec_clip(
            "poster",
            Multi2VecClipConfig::new()
                .image_fields([("poster", 0.9)])
                .text_fields([("title", 0.1)])
                .vectorize_collection_name(false),
            Some(
                HnswIndexConfig::new()
                    .distance(VectorDistance::Cosine)
                    .max_connections(32)
                    .into(),
            ),
        )?)
        .add(NamedVectors::none(
            "custom",
            Some(FlatIndexConfig::new().into()),
        )?)
        .build()?;

    assert_eq!(configs.len(), 3);
    assert_eq!(configs.names(), vec!["title", "poster", "custom"]);

    assert_eq!(
        configs.to_value()?,
        json!({
            "title": {
                "vectorizer": {
                    "text2vec-openai": {
                        "properties": ["title"],
                        "model": "text-embedding-3-large",
                        "type": "text",
                        "vectorizeClassName": true
                    }
                },
                "vectorIndexType": "hnsw"
            },
            "poster": {
                "vectorizer": {
                    "multi2vec-clip": {
                        "imageFields": [{"name": "poster", "weight": 0.9}],
                        "textFields": [{"name": "title", "weight": 0.1}],
                        "vectorizeClassName": false
                    }
                },
                "vectorIndexType": "hnsw",
                "vectorIndexConfig": {"distance": "cosine", "maxConnections": 32}
            },
            "custom": {
                "vectorizer": {"none": {}},
                "vectorIndexType": "flat",
                "vectorIndexConfig": {}
            }
        })
    );
    Ok(())
}

#[test]
fn test_duplicate_names_fail_build() -> Result<()> {
    let result = VectorConfigs::builder()
        .add(NamedVectors::none("dup", None)?)
        .add(NamedVectors::none("dup", Some(VectorIndexConfig::default()))?)
        .build();

    let err = result.unwrap_err();
    assert_eq!(err.field(), Some("name"));
    assert!(err.to_string().contains("'dup'"));
    Ok(())
}

#[test]
fn test_parse_server_vector_config() -> Result<()> {
    let server = json!({
        "title": {
            "vectorizer": {
                "text2vec-openai": {
                    "model": "ada",
                    "modelVersion": "002",
                    "type": "text",
                    "vectorizeClassName": true
                }
            },
            "vectorIndexType": "hnsw",
            "vectorIndexConfig": {
                "distance": "cosine",
                "ef": -1,
                "efConstruction": 128,
                "maxConnections": 64,
                "dynamicEfMin": 100,
                "dynamicEfMax": 500,
                "dynamicEfFactor": 8,
                "skip": false
            }
        },
        "image": {
            "vectorizer": {"img2vec-neural": {"imageFields": ["image"]}},
            "vectorIndexType": "flat",
            "vectorIndexConfig": {"distance": "l2-squared", "bq": {"enabled": true}}
        }
    });

    let configs = VectorConfigs::from_value(&server)?;
    assert_eq!(configs.len(), 2);

    let title = configs.get("title").unwrap();
    assert_eq!(title.vectorizer().kind().as_str(), "text2vec-openai");
    assert_eq!(title.vector_index_type(), VectorIndexType::Hnsw);
    assert_eq!(
        title.vector_index_config().and_then(|c| c.distance()),
        Some(VectorDistance::Cosine)
    );

    let image = configs.get("image").unwrap();
    assert_eq!(image.vector_index_type(), VectorIndexType::Flat);

    // Re-serializing reproduces the server mapping.
    assert_eq!(configs.to_value()?, server);
    Ok(())
}

#[test]
fn test_parse_rejects_invalid_entry() {
    let err = VectorConfigs::from_value(&json!({
        "image": {"vectorizer": {"img2vec-neural": {"imageFields": []}}}
    }))
    .unwrap_err();
    assert_eq!(err.field(), Some("image_fields"));
}
