//! Response payloads from the catalog's `/v1/public/characters` endpoint.
//!
//! Only the fields the mirror stores are modelled; everything else in the
//! payload is ignored.

use blip_core::thumbnail;
use serde::{Deserialize, Serialize};

/// Top-level response wrapper: `{ "code": 200, "data": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub code: Option<i64>,
    pub data: CatalogPage,
}

/// One page of characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    /// Total records available across all pages.
    pub total: i64,
    /// Records in this page.
    #[serde(default)]
    pub count: i64,
    pub results: Vec<CatalogCharacter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCharacter {
    pub id: i64,
    pub name: String,
    pub thumbnail: Thumbnail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    pub fn url(&self) -> String {
        thumbnail::compose(&self.path, &self.extension)
    }
}
