//! Thumbnail URL composition.

/// Join the catalog's split thumbnail fields into a single URL.
///
/// The catalog returns `{ "path": "http://i.annihil.us/u/prod/marvel/i/mg/3/40/4bb4680432f73",
/// "extension": "jpg" }`; the stored value is `path.extension`.
pub fn compose(path: &str, extension: &str) -> String {
    format!("{path}.{extension}")
}
