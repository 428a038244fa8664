//! Core components of the `newsapi-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - Allow-lists and validation for filter parameters.
//! - URL assembly and query serialization.

/// The main client (`NewsClient`), builder, and the generic request executor.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// URL joining and query-string helpers.
pub mod net;
/// Allow-lists, the `ALL` sentinel and parameter validation.
pub mod params;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;
pub use params::{ALL, ALLOWED_CATEGORY, ALLOWED_COUNTRY, ALLOWED_LANGUAGE};
