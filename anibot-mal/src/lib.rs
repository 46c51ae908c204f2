//! MyAnimeList v2 API client used as the result source for anime commands.

/// HTTP client and request shaping.
pub mod client;
/// Error taxonomy for catalog lookups.
pub mod error;
/// Response records and query enums.
pub mod model;

pub use client::{DEFAULT_BASE_URL, MalClient};
pub use error::MalError;
pub use model::{Anime, Picture, RankingType, Season};

/// Public page for an anime on myanimelist.net.
pub fn anime_url(id: u64) -> String {
    format!("https://myanimelist.net/anime/{id}")
}
