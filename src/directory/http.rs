use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::debug;

use super::traits::Directory;
use super::types::{RecordId, Route, Stop};
use crate::app::DirectoryConfig;
use crate::constants::{PING_PATH, PING_TIMEOUT_MS, ROUTES_PATH, STOPS_PATH};
use crate::utils::DirectoryError;

/// Directory client speaking the `/api/rutas` + `/api/paradas` HTTP contract
pub struct HttpDirectory {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDirectory {
    /// Create a client. `timeout` bounds each request end to end.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        Url::parse(base_url)
            .map_err(|e| DirectoryError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a client from the `[directory]` config section
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(&config.base_url, config.resolve_token(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer credential will be attached to requests
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Check that the directory answers `GET /api/ping`, returning its message
    pub async fn ping(&self) -> Result<String, DirectoryError> {
        #[derive(Deserialize)]
        struct Pong {
            message: String,
        }

        let request = self
            .get(PING_PATH)
            .timeout(Duration::from_millis(PING_TIMEOUT_MS));
        let body = self.send(request).await?;
        let pong: Pong = serde_json::from_str(&body)?;
        Ok(pong.message)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));

        // Add authentication header if a credential was supplied
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, DirectoryError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, DirectoryError> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn list_routes_by_region(
        &self,
        region: Option<String>,
    ) -> Result<Vec<Route>, DirectoryError> {
        let started = Instant::now();
        let mut request = self.get(ROUTES_PATH);
        // An absent region is omitted from the query string entirely
        if let Some(region) = &region {
            request = request.query(&[("region", region)]);
        }

        let routes: Vec<Route> = self.fetch_list(request).await?;
        debug!(
            region = region.as_deref().unwrap_or("-"),
            count = routes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched routes"
        );
        Ok(routes)
    }

    async fn list_stops_by_route(&self, route_id: RecordId) -> Result<Vec<Stop>, DirectoryError> {
        let started = Instant::now();
        let request = self
            .get(STOPS_PATH)
            .query(&[("ruta", route_id.to_string())]);

        let stops: Vec<Stop> = self.fetch_list(request).await?;
        debug!(
            route = %route_id,
            count = stops.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched stops"
        );
        Ok(stops)
    }
}
