use crate::catalog::{ListingRecord, RecommendationItem};

const UNTITLED: &str = "Untitled";

/// Uniform rendering unit for a movie. Recomputed on every render pass,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub tmdb_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
}

/// Adapts flat search/home listing records.
///
/// Records without a `tmdb_id` are skipped entirely; that is a filter for
/// incomplete data, not an error. Output order preserves input order.
pub fn listings_to_cards(records: Vec<ListingRecord>) -> Vec<Card> {
    records
        .into_iter()
        .filter_map(|record| {
            Some(Card {
                tmdb_id: record.tmdb_id?,
                title: title_or_untitled(record.title),
                poster_url: record.poster_url,
            })
        })
        .collect()
}

/// Adapts nested TF-IDF recommendation items. Items whose `tmdb` object is
/// absent or lacks an id are skipped; same policy as listings.
pub fn recommendations_to_cards(items: Vec<RecommendationItem>) -> Vec<Card> {
    items
        .into_iter()
        .filter_map(|item| {
            let tmdb = item.tmdb?;
            Some(Card {
                tmdb_id: tmdb.tmdb_id?,
                title: title_or_untitled(tmdb.title),
                poster_url: tmdb.poster_url,
            })
        })
        .collect()
}

fn title_or_untitled(title: Option<String>) -> String {
    match title {
        Some(title) if !title.is_empty() => title,
        _ => UNTITLED.to_string(),
    }
}
