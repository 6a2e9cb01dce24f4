use crate::config::ApiConfig;
use crate::models::{NewTag, Tag};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote tag resource.
pub trait TagApi: Send + Sync {
    /// `POST /tags`. Settles once the request has been sent and answered;
    /// the response status and body are ignored.
    fn create_tag(&self, tag: &NewTag) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /tags`.
    fn list_tags(&self) -> impl Future<Output = Result<Vec<Tag>, ApiError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpTagApi {
    client: Client,
    base_url: String,
}

impl HttpTagApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url).map_err(|source| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl TagApi for HttpTagApi {
    async fn create_tag(&self, tag: &NewTag) -> Result<(), ApiError> {
        let url = self.endpoint("tags");
        tracing::debug!("POST {} title={:?} slug={:?}", url, tag.title(), tag.slug());

        let response = self.client.post(&url).json(tag).send().await?;
        tracing::debug!("POST {} -> {}", url, response.status());
        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let url = self.endpoint("tags");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} -> {}", url, status);
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let tags: Vec<Tag> = serde_json::from_slice(&body)?;
        tracing::debug!("GET {} -> {} tag(s)", url, tags.len());
        Ok(tags)
    }
}
