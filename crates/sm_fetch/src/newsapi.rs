use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sm_core::config::NewsSettings;
use sm_core::{Article, Error, NewsSource, Result};
use tracing::{debug, info, warn};
use url::Url;

use crate::normalize::{normalize_article, RawArticle};

const SERVICE: &str = "NewsAPI";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    articles: Vec<RawArticle>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the NewsAPI `everything` search
pub struct NewsApiSource {
    client: Client,
    api_key: String,
    endpoint: Url,
    language: String,
    page_size: u32,
}

impl NewsApiSource {
    pub fn new(settings: &NewsSettings) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();
        let endpoint = Url::parse(&settings.base_url)
            .and_then(|base| base.join("/v2/everything"))
            .map_err(|e| Error::Config(format!("Invalid news API URL '{}': {}", settings.base_url, e)))?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            language: settings.language.clone(),
            page_size: settings.page_size,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("language", &self.language)
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        SERVICE
    }

    async fn fetch_articles(&self, company: &str) -> Result<Vec<Article>> {
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", company),
                ("apiKey", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::upstream(SERVICE, e))?;

        let status = response.status();
        info!("🔍 Fetching news for '{}' | Status Code: {}", company, status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(SERVICE, format!("status {}: {}", status.as_u16(), body.trim())));
        }

        let payload: EverythingResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream(SERVICE, format!("undecodable response: {}", e)))?;

        if payload.status != "ok" {
            let message = payload.message.unwrap_or_else(|| payload.status.clone());
            return Err(Error::upstream(SERVICE, message));
        }

        let received = payload.articles.len();
        let articles: Vec<Article> = payload.articles.into_iter().filter_map(normalize_article).collect();
        debug!(
            "Dropped {} of {} records (total results: {:?})",
            received - articles.len(),
            received,
            payload.total_results
        );

        if articles.is_empty() {
            warn!("⚠️ No news articles found for '{}'.", company);
        } else {
            info!("✅ Retrieved {} articles.", articles.len());
        }

        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn settings(base_url: String) -> NewsSettings {
        NewsSettings {
            api_key: Some("test-key".to_string()),
            base_url,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let settings = NewsSettings::default();
        assert!(matches!(NewsApiSource::new(&settings), Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoint_and_debug() {
        let source = NewsApiSource::new(&settings("https://newsapi.org".to_string())).unwrap();
        assert_eq!(source.endpoint().as_str(), "https://newsapi.org/v2/everything");
        assert!(!format!("{:?}", source).contains("test-key"));
    }

    #[tokio::test]
    async fn test_fetch_articles() {
        let router = Router::new().route(
            "/v2/everything",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("q").map(String::as_str), Some("Acme"));
                assert_eq!(params.get("apiKey").map(String::as_str), Some("test-key"));
                assert_eq!(params.get("language").map(String::as_str), Some("en"));
                assert_eq!(params.get("pageSize").map(String::as_str), Some("10"));
                Json(json!({
                    "status": "ok",
                    "totalResults": 3,
                    "articles": [
                        {
                            "source": {"id": null, "name": "Reuters"},
                            "title": "Acme beats estimates",
                            "description": "Acme profits rose sharply",
                            "url": "https://example.com/1",
                            "publishedAt": "2024-03-01T10:00:00Z"
                        },
                        {
                            "source": {"id": null, "name": "Wire"},
                            "title": "Acme files report",
                            "description": null,
                            "url": "https://example.com/2",
                            "publishedAt": null
                        },
                        {
                            "source": {"id": null, "name": "Wire"},
                            "title": "No link",
                            "description": "Dropped",
                            "url": null
                        }
                    ]
                }))
            }),
        );
        let base = spawn_server(router).await;
        let source = NewsApiSource::new(&settings(base)).unwrap();

        let articles = source.fetch_articles("Acme").await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].summary, "Acme profits rose sharply");
        assert_eq!(articles[1].summary, "Acme files report");
        assert_eq!(articles[1].published_date, "Unknown");
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_unavailable() {
        let router = Router::new().route(
            "/v2/everything",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"status": "error", "code": "apiKeyInvalid", "message": "bad key"})),
                )
            }),
        );
        let base = spawn_server(router).await;
        let source = NewsApiSource::new(&settings(base)).unwrap();

        let err = source.fetch_articles("Acme").await.unwrap_err();
        match err {
            Error::UpstreamUnavailable { service, reason } => {
                assert_eq!(service, "NewsAPI");
                assert!(reason.contains("401"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_result_is_ok() {
        let router = Router::new().route(
            "/v2/everything",
            get(|| async { Json::<Value>(json!({"status": "ok", "totalResults": 0, "articles": []})) }),
        );
        let base = spawn_server(router).await;
        let source = NewsApiSource::new(&settings(base)).unwrap();

        let articles = source.fetch_articles("Nobody").await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_upstream_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = NewsApiSource::new(&settings(format!("http://{}", addr))).unwrap();
        let err = source.fetch_articles("Acme").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamUnavailable { .. }));
    }
}
