//! Client for the public Marvel character catalog.
//!
//! Provides request signing, single-page fetches over HTTP, and a lazy
//! page sequence that walks the catalog one page at a time.

pub mod client;
pub mod models;
pub mod pages;
pub mod signing;

pub use client::{CatalogClient, CatalogCredentials, CatalogError, CatalogSource};
pub use models::{CatalogCharacter, CatalogPage, Thumbnail};
pub use pages::Pages;

/// Number of records requested per page. The catalog caps `limit` at 100.
pub const PAGE_SIZE: i64 = 100;

/// Production catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com";
