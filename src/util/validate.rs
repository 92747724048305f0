//! Field-level validation checks.
//!
//! Every check returns a [`NamedVectorError::Validation`] naming the field it
//! was given, so callers only pass the user-facing field name along.

use url::Url;

use crate::error::{NamedVectorError, Result};

/// Require an optional value to be present.
pub fn required<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| NamedVectorError::missing_field(field))
}

/// An unset list is fine; a set list must hold at least one element.
pub fn non_empty_list<T>(field: &str, value: &Option<Vec<T>>) -> Result<()> {
    match value {
        Some(items) if items.is_empty() => Err(NamedVectorError::empty_list(field)),
        _ => Ok(()),
    }
}

/// Require a list to be present and hold at least one element.
pub fn required_list<T>(field: &str, value: &Option<Vec<T>>) -> Result<()> {
    required(field, value)?;
    non_empty_list(field, value)
}

/// URLs handed to the server must be absolute `http` or `https` URLs.
pub fn http_url(field: &str, value: &Option<Url>) -> Result<()> {
    let Some(url) = value else {
        return Ok(());
    };
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(()),
        "http" | "https" => Err(NamedVectorError::validation(field, "URL has no host")),
        scheme => Err(NamedVectorError::validation(
            field,
            format!("URL scheme should be 'http' or 'https', got '{scheme}'"),
        )),
    }
}

/// Require a numeric option to be strictly positive when set.
pub fn positive<T>(field: &str, value: Option<T>) -> Result<()>
where
    T: PartialOrd + Default + std::fmt::Display,
{
    match value {
        Some(v) if v <= T::default() => Err(NamedVectorError::validation(
            field,
            format!("must be greater than 0, got {v}"),
        )),
        _ => Ok(()),
    }
}

/// Like [`positive`], but `-1` is accepted as the server's "unlimited" or
/// "dynamic" marker.
pub fn positive_or_unlimited(field: &str, value: Option<i64>) -> Result<()> {
    match value {
        Some(v) if v != -1 && v <= 0 => Err(NamedVectorError::validation(
            field,
            format!("must be -1 or greater than 0, got {v}"),
        )),
        _ => Ok(()),
    }
}
