//! Catalog sync pipeline: fetch every page, classify, replace the table.
//!
//! All pages are fetched before the table is touched, so a failed fetch
//! leaves the previous sync's rows in place. The replace itself runs in a
//! single transaction.

use blip_catalog::{CatalogCharacter, CatalogSource, Pages};
use blip_core::classifier::Classifier;
use blip_db::models::character::CreateCharacter;
use blip_db::repositories::CharacterRepo;
use serde::Serialize;

use crate::error::AppResult;

/// Outcome of a completed sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Total reported by the catalog.
    pub total: i64,
    /// Pages fetched.
    pub pages: usize,
    /// Rows written to the table.
    pub inserted: u64,
    pub blipped: usize,
    pub safe: usize,
    pub unknown: usize,
}

/// Build the row stored for one catalog entry.
pub fn to_record(character: &CatalogCharacter, classifier: &Classifier) -> CreateCharacter {
    CreateCharacter {
        marvel_id: character.id,
        name: character.name.clone(),
        thumbnail: character.thumbnail.url(),
        blip: classifier.classify(&character.name),
    }
}

/// Run a full sync against `source`, replacing everything in `repo`.
pub async fn run_sync(
    source: &dyn CatalogSource,
    classifier: &Classifier,
    repo: &CharacterRepo,
) -> AppResult<SyncReport> {
    let mut report = SyncReport::default();
    let mut records = Vec::new();

    let mut pages = Pages::new(source);
    while let Some(page) = pages.next_page().await {
        let page = page?;
        tracing::debug!(
            offset = page.offset,
            count = page.results.len(),
            total = page.total,
            "Fetched catalog page"
        );
        report.pages += 1;
        records.extend(page.results.iter().map(|c| to_record(c, classifier)));
    }
    report.total = pages.total().unwrap_or(0);

    for record in &records {
        match record.blip {
            Some(true) => report.blipped += 1,
            Some(false) => report.safe += 1,
            None => report.unknown += 1,
        }
    }

    report.inserted = repo.replace_all(&records).await?;

    tracing::info!(
        total = report.total,
        pages = report.pages,
        inserted = report.inserted,
        blipped = report.blipped,
        safe = report.safe,
        unknown = report.unknown,
        "Catalog sync complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use blip_catalog::Thumbnail;

    use super::*;

    fn entry(id: i64, name: &str) -> CatalogCharacter {
        CatalogCharacter {
            id,
            name: name.to_string(),
            thumbnail: Thumbnail {
                path: format!("http://i.annihil.us/u/prod/marvel/i/mg/{id}"),
                extension: "jpg".into(),
            },
        }
    }

    #[test]
    fn record_carries_id_name_and_thumbnail() {
        let record = to_record(&entry(1009610, "Spider-Man (Peter Parker)"), &Classifier::builtin());
        assert_eq!(record.marvel_id, 1009610);
        assert_eq!(record.name, "Spider-Man (Peter Parker)");
        assert_eq!(
            record.thumbnail,
            "http://i.annihil.us/u/prod/marvel/i/mg/1009610.jpg"
        );
        assert_eq!(record.blip, Some(true));
    }

    #[test]
    fn record_flag_follows_classifier() {
        let classifier = Classifier::builtin();
        assert_eq!(to_record(&entry(1, "Tony Stark"), &classifier).blip, Some(false));
        assert_eq!(to_record(&entry(2, "3-D Man"), &classifier).blip, None);
    }
}
