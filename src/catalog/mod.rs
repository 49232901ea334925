//! Backend payload shapes and their adaptation into the uniform [`Card`]
//! the renderer draws.

mod cards;
mod types;

pub use cards::{listings_to_cards, recommendations_to_cards, Card};
pub use types::{
    Category, ListingRecord, MovieDetail, RecommendationBundle, RecommendationItem, TmdbRef,
};
