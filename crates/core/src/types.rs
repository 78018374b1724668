/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Identifier assigned by the remote character catalog.
pub type MarvelId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Tri-state classification of a character.
///
/// `Some(true)` = blipped, `Some(false)` = safe, `None` = not yet known.
/// Stored as a nullable `BOOLEAN` column.
pub type Flag = Option<bool>;

/// Human-readable label for a [`Flag`] value.
pub fn flag_label(flag: Flag) -> &'static str {
    match flag {
        Some(true) => "Blipped",
        Some(false) => "Safe",
        None => "Unknown",
    }
}
