//! Allow-lists and validation for the filter parameters the API accepts.
//!
//! The token sets mirror the lists the service documentation published when the
//! client was first written, typos included: `healt` and the merged
//! `sportstechnology` in categories and `ud` in languages. They are kept as-is so
//! validation stays stable; see `DESIGN.md` before "fixing" them.

use crate::core::NewsError;

/// Sentinel meaning "do not filter on this parameter".
///
/// A parameter set to `ALL` passes validation and is left out of the query string.
pub const ALL: &str = "ALL";

/// Two-letter country codes accepted by `top-headlines` and `sources`.
pub const ALLOWED_COUNTRY: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg", "fr",
    "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "it", "jp", "kr", "lt", "lv", "ma", "mx", "my",
    "ng", "nl", "no", "nz", "ph", "pl", "pt", "ro", "rs", "ru", "sa", "se", "sg", "si", "sk", "th",
    "tr", "tw", "ua", "us", "ve", "za",
];

/// Categories accepted by `top-headlines` and `sources`.
pub const ALLOWED_CATEGORY: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "healt",
    "science",
    "sportstechnology",
];

/// Language codes accepted by `sources`.
pub const ALLOWED_LANGUAGE: &[&str] = &[
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "se", "ud", "zh",
];

fn check(param: &'static str, value: &str, allowed: &'static [&'static str]) -> Result<(), NewsError> {
    if value == ALL || allowed.binary_search(&value).is_ok() {
        return Ok(());
    }
    Err(NewsError::Validation {
        param,
        value: value.to_string(),
        allowed,
    })
}

/// Checks `value` against [`ALLOWED_COUNTRY`].
///
/// # Errors
///
/// Returns [`NewsError::Validation`] when the value is neither listed nor [`ALL`].
pub fn validate_country(value: &str) -> Result<(), NewsError> {
    check("country", value, ALLOWED_COUNTRY)
}

/// Checks `value` against [`ALLOWED_CATEGORY`].
///
/// # Errors
///
/// Returns [`NewsError::Validation`] when the value is neither listed nor [`ALL`].
pub fn validate_category(value: &str) -> Result<(), NewsError> {
    check("category", value, ALLOWED_CATEGORY)
}

/// Checks `value` against [`ALLOWED_LANGUAGE`].
///
/// # Errors
///
/// Returns [`NewsError::Validation`] when the value is neither listed nor [`ALL`].
pub fn validate_language(value: &str) -> Result<(), NewsError> {
    check("language", value, ALLOWED_LANGUAGE)
}

/// Returns `true` when a parameter value should be left out of the query string.
pub(crate) fn is_unfiltered(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some(ALL))
}
