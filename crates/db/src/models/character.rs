//! Character entity model and DTOs.

use blip_core::types::{DbId, Flag, MarvelId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub marvel_id: MarvelId,
    pub name: String,
    pub thumbnail: String,
    /// `NULL` when the classifier had no opinion.
    pub blip: Flag,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a character during a sync.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCharacter {
    pub marvel_id: MarvelId,
    pub name: String,
    pub thumbnail: String,
    pub blip: Flag,
}
