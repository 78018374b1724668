//! Repository for the `characters` table.

use blip_core::types::{Flag, MarvelId};

use crate::models::character::{Character, CreateCharacter};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, marvel_id, name, thumbnail, blip, created_at, updated_at";

/// Read and write access to mirrored characters.
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone)]
pub struct CharacterRepo {
    pool: DbPool,
}

impl CharacterRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// List every character, ordered by name ascending.
    pub async fn list_all(&self) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Character>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// List characters whose flag equals `flag`.
    ///
    /// `None` selects unclassified rows (`blip IS NULL`).
    pub async fn list_by_flag(&self, flag: Flag) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE blip IS NOT DISTINCT FROM $1
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(flag)
            .fetch_all(&self.pool)
            .await
    }

    /// Replace the whole table with `records`.
    ///
    /// Truncates and bulk-inserts inside one transaction, so readers see
    /// either the previous set or the new one. Returns the number of rows
    /// inserted.
    pub async fn replace_all(&self, records: &[CreateCharacter]) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("TRUNCATE characters RESTART IDENTITY")
            .execute(&mut *tx)
            .await?;

        let inserted = if records.is_empty() {
            0
        } else {
            let marvel_ids: Vec<MarvelId> = records.iter().map(|r| r.marvel_id).collect();
            let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
            let thumbnails: Vec<String> = records.iter().map(|r| r.thumbnail.clone()).collect();
            let blips: Vec<Flag> = records.iter().map(|r| r.blip).collect();

            sqlx::query(
                "INSERT INTO characters (marvel_id, name, thumbnail, blip) \
                 SELECT * FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::boolean[])",
            )
            .bind(&marvel_ids)
            .bind(&names)
            .bind(&thumbnails)
            .bind(&blips)
            .execute(&mut *tx)
            .await?
            .rows_affected()
        };

        tx.commit().await?;
        tracing::debug!(inserted, "Replaced characters table");
        Ok(inserted)
    }

    /// Set the flag on every row with the given catalog id.
    ///
    /// Returns the number of rows updated; zero is not an error.
    pub async fn set_flag(&self, marvel_id: MarvelId, blip: bool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE characters SET blip = $2, updated_at = NOW() WHERE marvel_id = $1",
        )
        .bind(marvel_id)
        .bind(blip)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Total number of stored characters.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM characters")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
