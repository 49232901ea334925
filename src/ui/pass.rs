//! The render pass: one synchronous data-fetch sequence for the current
//! navigation state, producing a [`PassOutcome`] snapshot the frame
//! renderer draws from. Re-run whenever the store signals a transition;
//! there is no hidden rerun control flow.

use crate::api::{ApiClient, ApiError};
use crate::catalog::{listings_to_cards, recommendations_to_cards, Card, MovieDetail};
use crate::ui::controls::ControlsState;
use crate::ui::nav::NavState;

/// Which request populated the home grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSource {
    Search,
    Listing,
}

/// Everything one render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// No pass has run yet.
    Idle,
    Home {
        source: HomeSource,
        cards: Result<Vec<Card>, ApiError>,
    },
    Details {
        detail: MovieDetail,
        recommendations: Vec<Card>,
        /// The secondary recommendation fetch failed. Metadata still
        /// renders; the miss is recorded instead of discarded so the
        /// best-effort policy stays observable.
        recommendations_failed: bool,
    },
    /// The detail lookup itself failed: terminal state for this pass, no
    /// further requests are made.
    DetailsFailed { message: String },
}

pub fn run_pass(
    api: &mut ApiClient,
    nav: &NavState,
    controls: &ControlsState,
    listing_limit: u32,
) -> PassOutcome {
    match nav {
        NavState::Home => run_home_pass(api, controls, listing_limit),
        NavState::Details { movie_id } => run_details_pass(api, *movie_id),
    }
}

fn run_home_pass(api: &mut ApiClient, controls: &ControlsState, limit: u32) -> PassOutcome {
    let query = controls.search_query();

    // An active search short-circuits the category listing entirely.
    if !query.is_empty() {
        let cards = api.search_listings(query).map(listings_to_cards);
        return PassOutcome::Home {
            source: HomeSource::Search,
            cards,
        };
    }

    let cards = api
        .home_listings(controls.category, limit)
        .map(listings_to_cards);
    PassOutcome::Home {
        source: HomeSource::Listing,
        cards,
    }
}

fn run_details_pass(api: &mut ApiClient, movie_id: u64) -> PassOutcome {
    let detail = match api.movie_detail(movie_id) {
        Ok(detail) => detail,
        Err(err) => {
            return PassOutcome::DetailsFailed {
                message: err.to_string(),
            }
        }
    };

    match api.recommendation_bundle(&detail.title) {
        Ok(bundle) => PassOutcome::Details {
            detail,
            recommendations: recommendations_to_cards(bundle.tfidf_recommendations),
            recommendations_failed: false,
        },
        Err(err) => {
            tracing::debug!(movie_id, %err, "recommendation fetch failed, rendering without");
            PassOutcome::Details {
                detail,
                recommendations: Vec::new(),
                recommendations_failed: true,
            }
        }
    }
}
