//! Field descriptors for multi-modal vectorizers.
//!
//! Multi-modal modules take, per modality, an ordered list of fields. Each
//! field may carry a weight used when the per-field vectors are combined.
//! Callers can pass plain names, `(name, weight)` pairs, or ready-made
//! [`Multi2VecField`] values; [`map_multi2vec_fields`] normalizes any of them.

use serde::{Deserialize, Serialize};

use crate::error::{NamedVectorError, Result};

/// A single field of a multi-modal vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multi2VecField {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Multi2VecField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: None,
        }
    }

    pub fn weighted(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight: Some(weight),
        }
    }
}

impl From<&str> for Multi2VecField {
    fn from(name: &str) -> Self {
        Multi2VecField::new(name)
    }
}

impl From<String> for Multi2VecField {
    fn from(name: String) -> Self {
        Multi2VecField::new(name)
    }
}

impl From<(&str, f64)> for Multi2VecField {
    fn from((name, weight): (&str, f64)) -> Self {
        Multi2VecField::weighted(name, weight)
    }
}

impl From<(String, f64)> for Multi2VecField {
    fn from((name, weight): (String, f64)) -> Self {
        Multi2VecField::weighted(name, weight)
    }
}

/// Normalize heterogeneous field inputs into descriptors, keeping their order.
pub fn map_multi2vec_fields<I, F>(fields: I) -> Vec<Multi2VecField>
where
    I: IntoIterator<Item = F>,
    F: Into<Multi2VecField>,
{
    fields.into_iter().map(Into::into).collect()
}

/// Check an optional modality list: non-empty when set, named fields, finite weights.
pub(crate) fn validate_fields(field: &str, fields: &Option<Vec<Multi2VecField>>) -> Result<()> {
    let Some(fields) = fields else {
        return Ok(());
    };
    if fields.is_empty() {
        return Err(NamedVectorError::empty_list(field));
    }
    for f in fields {
        if f.name.is_empty() {
            return Err(NamedVectorError::validation(field, "field name must not be empty"));
        }
        if let Some(weight) = f.weight {
            if !weight.is_finite() {
                return Err(NamedVectorError::validation(
                    field,
                    format!("weight of '{}' must be a finite number", f.name),
                ));
            }
        }
    }
    Ok(())
}
