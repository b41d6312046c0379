//! HTTP transport for the forum service.
//!
//! A thin, cache-free wrapper over `reqwest`: one network call per
//! invocation, typed errors, no retries. Session credentials ride along via
//! the client's cookie store, so the service can attribute reactions to the
//! caller's identity.

use crate::feed::types::{FeedSnapshot, Reaction, ReactionKind, TargetKind};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Per-request timeout. Counted as [`ApiError::Timeout`], not `Network`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from talking to the forum service.
///
/// A failed call guarantees nothing was applied client-side: the caller must
/// leave any previously held snapshot or displayed counts untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(reqwest::Error),
    /// Request exceeded the 30-second timeout
    #[error("Request timed out")]
    Timeout,
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// A 2xx body that could not be decoded into the expected shape
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
    /// The configured server URL could not be parsed
    #[error("Invalid server URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err)
        }
    }
}

/// Body of a reaction toggle request.
#[derive(Debug, Serialize)]
struct ReactRequest {
    target_id: i64,
    target_type: TargetKind,
    reaction_type: ReactionKind,
}

/// Client for the two endpoints the feed UI consumes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against `base_url` (e.g. `http://localhost:8080`).
    ///
    /// The underlying client keeps a cookie store so the session cookie set
    /// by the login flow (outside this client's scope) is sent with every
    /// request.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch the full feed snapshot: `GET /forum/api/guest`.
    pub async fn fetch_feed(&self) -> Result<FeedSnapshot, ApiError> {
        let url = self.endpoint("/forum/api/guest")?;
        let response = self.http.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Undecodable feed payload");
            ApiError::MalformedResponse(e.to_string())
        })
    }

    /// Submit one reaction toggle: `POST /api/react`.
    ///
    /// Returns the server's authoritative post-toggle reaction set for the
    /// target. Exactly one network call; on error the caller must not assume
    /// any reaction was recorded.
    pub async fn submit_reaction(
        &self,
        target_id: i64,
        kind: TargetKind,
        reaction: ReactionKind,
    ) -> Result<Vec<Reaction>, ApiError> {
        let url = self.endpoint("/api/react")?;
        let response = self
            .http
            .post(url.clone())
            .json(&ReactRequest {
                target_id,
                target_type: kind,
                reaction_type: reaction,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Undecodable reaction payload");
            ApiError::MalformedResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED_BODY: &str = r#"{"categories":[
        {"id":1,"name":"General","posts":[
            {"id":10,"username":"ada","content":"first","created_at":"2024-01-01T00:00:00Z",
             "category_id":1,"category_name":"General","reactions":[],"comments":[]}
        ]}
    ]}"#;

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri()).unwrap()
    }

    #[tokio::test]
    async fn fetch_feed_decodes_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forum/api/guest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&server)
            .await;

        let snapshot = client_for(&server).await.fetch_feed().await.unwrap();
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.categories[0].posts[0].id, 10);
    }

    #[tokio::test]
    async fn fetch_feed_reports_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forum/api/guest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        match client_for(&server).await.fetch_feed().await {
            Err(ApiError::HttpStatus(500)) => {}
            other => panic!("Expected HttpStatus(500), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_feed_reports_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forum/api/guest"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        match client_for(&server).await.fetch_feed().await {
            Err(ApiError::MalformedResponse(_)) => {}
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn submit_reaction_sends_exact_body_and_decodes_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/react"))
            .and(body_json(serde_json::json!({
                "target_id": 10,
                "target_type": "post",
                "reaction_type": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"target_id":10,"target_type":"post","reaction_type":1}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let reactions = client_for(&server)
            .await
            .submit_reaction(10, TargetKind::Post, ReactionKind::Like)
            .await
            .unwrap();
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].reaction_type, ReactionKind::Like);
    }

    #[tokio::test]
    async fn submit_reaction_failure_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/react"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        match client_for(&server)
            .await
            .submit_reaction(10, TargetKind::Comment, ReactionKind::Dislike)
            .await
        {
            Err(ApiError::HttpStatus(401)) => {}
            other => panic!("Expected HttpStatus(401), got {:?}", other),
        }
    }
}
