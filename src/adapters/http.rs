use crate::config::ClientConfig;
use crate::domain::model::{Endpoint, Options, PathLayout, QueryId};
use crate::domain::ports::RestClient;
use crate::utils::error::{CellBaseError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// [`RestClient`] over HTTP GET with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpRestClient {
    client: Client,
    base_url: Url,
    path_layout: PathLayout,
}

impl HttpRestClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url()?,
            path_layout: config.path_layout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of an endpoint without its query string.
    ///
    /// A query id of `.` or `..` is refused: the URL parser would drop it
    /// and the request would reach a different endpoint.
    pub fn endpoint_url(&self, endpoint: &Endpoint, query_id: Option<&QueryId>) -> Result<Url> {
        if let Some(id) = query_id {
            let segment = id.as_segment();
            if segment == "." || segment == ".." {
                return Err(CellBaseError::InvalidConfigValueError {
                    field: "query_id".to_string(),
                    value: segment,
                    reason: "Query id cannot be a dot segment".to_string(),
                });
            }
        }

        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| CellBaseError::ConfigError {
                message: format!("Base URL cannot carry a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(endpoint.path_segments(query_id, self.path_layout));

        Ok(url)
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn get(
        &self,
        endpoint: &Endpoint,
        query_id: Option<&QueryId>,
        options: &Options,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint_url(endpoint, query_id)?;

        let mut request = self.client.get(url.clone());
        for (key, value) in options.iter() {
            request = request.query(&[(key, value)]);
        }

        tracing::debug!("📡 {}: Making API request to: {}", endpoint, url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {}: API response status: {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("📡 {}: request failed with status {}", endpoint, status);
            return Err(CellBaseError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
