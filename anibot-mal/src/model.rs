use serde::Deserialize;

/// Anime node as returned by the list and search endpoints.
///
/// Only `id` and `title` are guaranteed; every other field depends on the
/// `fields` parameter of the request and on what MAL knows about the entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Anime {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub main_picture: Option<Picture>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub num_episodes: Option<u32>,
}

impl Anime {
    /// Mean score rendered for display, `N/A` when unscored.
    pub fn score_label(&self) -> String {
        self.mean
            .map_or_else(|| "N/A".to_owned(), |mean| mean.to_string())
    }

    /// Episode count rendered for display, `N/A` when unknown or zero.
    pub fn episodes_label(&self) -> String {
        match self.num_episodes {
            Some(count) if count > 0 => count.to_string(),
            _ => "N/A".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Picture {
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// `{ "data": [ { "node": { .. } } ] }` envelope shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub data: Vec<ListEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEntry {
    pub node: Anime,
}

impl ListResponse {
    pub(crate) fn into_nodes(self) -> Vec<Anime> {
        self.data.into_iter().map(|entry| entry.node).collect()
    }
}

/// Ranking categories accepted by `/anime/ranking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingType {
    All,
    Airing,
    Upcoming,
    Tv,
    Ova,
    Movie,
    Special,
    ByPopularity,
    Favorite,
}

impl RankingType {
    pub const ALL: [Self; 9] = [
        Self::All,
        Self::Airing,
        Self::Upcoming,
        Self::Tv,
        Self::Ova,
        Self::Movie,
        Self::Special,
        Self::ByPopularity,
        Self::Favorite,
    ];

    /// Wire value used for the `ranking_type` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Airing => "airing",
            Self::Upcoming => "upcoming",
            Self::Tv => "tv",
            Self::Ova => "ova",
            Self::Movie => "movie",
            Self::Special => "special",
            Self::ByPopularity => "bypopularity",
            Self::Favorite => "favorite",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Fall];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(raw))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ranking_type_round_trips_every_choice() {
        for kind in RankingType::ALL {
            assert_eq!(RankingType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(RankingType::parse(" ByPopularity "), Some(RankingType::ByPopularity));
        assert_eq!(RankingType::parse("manga"), None);
    }

    #[test]
    fn season_parse_rejects_unknown_values() {
        assert_eq!(Season::parse("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), None);
    }

    #[test]
    fn list_response_tolerates_sparse_nodes() {
        let body = r#"{
            "data": [
                { "node": { "id": 5114, "title": "Fullmetal Alchemist: Brotherhood", "mean": 9.1 } },
                { "node": { "id": 1, "title": "Cowboy Bebop" } }
            ],
            "paging": { "next": "https://api.myanimelist.net/v2/anime/ranking?offset=2" }
        }"#;

        let nodes = serde_json::from_str::<ListResponse>(body)
            .expect("valid body")
            .into_nodes();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].score_label(), "9.1");
        assert_eq!(nodes[1].score_label(), "N/A");
        assert_eq!(nodes[1].episodes_label(), "N/A");
        assert_eq!(nodes[1].main_picture, None);
    }
}
