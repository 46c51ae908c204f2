use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::MalError;
use crate::model::{Anime, ListResponse, RankingType, Season};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.myanimelist.net/v2";

const CLIENT_ID_HEADER: &str = "X-MAL-CLIENT-ID";
const DETAIL_FIELDS: &str = "id,title,main_picture,synopsis,mean,status,num_episodes";
const LIST_FIELDS: &str = "id,title,mean";

/// Thin client over the MAL v2 REST API.
///
/// The client id is injected at construction; nothing here reads process
/// configuration.
#[derive(Debug, Clone)]
pub struct MalClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl MalClient {
    pub fn new(client_id: impl Into<String>, base_url: impl Into<String>) -> Result<Self, MalError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client_id: client_id.into(),
        })
    }

    /// Best match for a free-text title.
    pub async fn search_anime(&self, title: &str) -> Result<Anime, MalError> {
        let query = title.trim();
        if query.is_empty() {
            return Err(MalError::InvalidQuery("title must not be empty".to_owned()));
        }

        let nodes = self
            .get_list("/anime", &[("q", query), ("limit", "1"), ("fields", DETAIL_FIELDS)])
            .await?;

        nodes.into_iter().next().ok_or(MalError::NotFound)
    }

    /// Ranked anime for a category, best first, at most `limit` entries.
    pub async fn ranking(&self, kind: RankingType, limit: usize) -> Result<Vec<Anime>, MalError> {
        let limit = limit.to_string();
        self.get_list(
            "/anime/ranking",
            &[
                ("ranking_type", kind.as_str()),
                ("limit", limit.as_str()),
                ("fields", LIST_FIELDS),
            ],
        )
        .await
    }

    /// Anime airing in a given season, at most `limit` entries.
    pub async fn seasonal(
        &self,
        season: Season,
        year: u16,
        limit: usize,
    ) -> Result<Vec<Anime>, MalError> {
        let path = format!("/anime/season/{year}/{}", season.as_str());
        let limit = limit.to_string();
        self.get_list(&path, &[("limit", limit.as_str()), ("fields", LIST_FIELDS)])
            .await
    }

    async fn get_list(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<Anime>, MalError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, ?params, "querying MyAnimeList");

        let response = self
            .http
            .get(&url)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "MyAnimeList request failed");
            return Err(classify_failure(status, &body));
        }

        let list = response.json::<ListResponse>().await?;
        Ok(list.into_nodes())
    }
}

/// Map a non-success response onto the error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> MalError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::NOT_FOUND => MalError::NotFound,
        StatusCode::BAD_REQUEST => MalError::InvalidQuery(detail),
        _ => MalError::UpstreamUnavailable(detail),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn ranking_body(count: u64) -> serde_json::Value {
        let data = (1..=count)
            .map(|id| json!({ "node": { "id": id, "title": format!("Anime {id}"), "mean": 8.5 } }))
            .collect::<Vec<_>>();
        json!({ "data": data, "paging": {} })
    }

    async fn client_for(server: &MockServer) -> MalClient {
        MalClient::new("test-client", server.uri()).expect("client builds")
    }

    #[tokio::test]
    async fn ranking_sends_category_limit_and_client_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/anime/ranking"))
            .and(query_param("ranking_type", "bypopularity"))
            .and(query_param("limit", "100"))
            .and(query_param("fields", LIST_FIELDS))
            .and(header(CLIENT_ID_HEADER, "test-client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body(3)))
            .expect(1)
            .mount(&server)
            .await;

        let nodes = client_for(&server)
            .await
            .ranking(RankingType::ByPopularity, 100)
            .await
            .expect("ranking succeeds");

        let titles = nodes.iter().map(|anime| anime.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Anime 1", "Anime 2", "Anime 3"]);
    }

    #[tokio::test]
    async fn seasonal_uses_year_and_season_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/anime/season/2024/fall"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body(7)))
            .mount(&server)
            .await;

        let nodes = client_for(&server)
            .await
            .seasonal(Season::Fall, 2024, 100)
            .await
            .expect("seasonal succeeds");

        assert_eq!(nodes.len(), 7);
    }

    #[tokio::test]
    async fn search_with_no_match_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/anime"))
            .and(query_param("q", "zzzz"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .search_anime("zzzz")
            .await
            .expect_err("empty search fails");

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn search_returns_detail_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/anime"))
            .and(query_param("fields", DETAIL_FIELDS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "node": {
                    "id": 21,
                    "title": "One Piece",
                    "main_picture": { "medium": "https://cdn.example/op.jpg", "large": null },
                    "synopsis": "Pirates.",
                    "mean": 8.7,
                    "status": "currently_airing",
                    "num_episodes": 0
                } }]
            })))
            .mount(&server)
            .await;

        let anime = client_for(&server)
            .await
            .search_anime("one piece")
            .await
            .expect("search succeeds");

        assert_eq!(anime.id, 21);
        assert_eq!(anime.status.as_deref(), Some("currently_airing"));
        assert_eq!(anime.episodes_label(), "N/A");
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        let err = client_for(&server)
            .await
            .search_anime("   ")
            .await
            .expect_err("blank title fails");

        assert!(matches!(err, MalError::InvalidQuery(_)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn bad_request_maps_to_invalid_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "error": "invalid_parameter", "message": "bad limit" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .ranking(RankingType::All, 100)
            .await
            .expect_err("400 fails");

        match err {
            MalError::InvalidQuery(detail) => assert_eq!(detail, "bad limit"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_errors_are_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .seasonal(Season::Winter, 2023, 100)
            .await
            .expect_err("503 fails");

        assert!(matches!(err, MalError::UpstreamUnavailable(_)));
    }

    #[test]
    fn missing_status_maps_to_not_found() {
        assert!(classify_failure(StatusCode::NOT_FOUND, "").is_not_found());
    }
}
