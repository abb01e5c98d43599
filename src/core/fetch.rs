use crate::config::toml_config::RequestConfig;
use crate::domain::model::{FetchOutcome, ResponseMeta};
use crate::domain::ports::Fetcher;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// 以 `reqwest` 實作的 [`Fetcher`]
///
/// 除非設定 `timeout_seconds`，否則不設逾時
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn from_config(config: &RequestConfig) -> Result<Self> {
        let mut builder = Client::builder().default_headers(build_headers(config)?);

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn build_headers(config: &RequestConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            DemoError::InvalidConfigValueError {
                field: "request.headers".to_string(),
                value: name.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| DemoError::InvalidConfigValueError {
                field: format!("request.headers.{}", name),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> FetchOutcome {
        tracing::debug!("Making GET request to: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Transport error for {}: {}", url, e);
                return FetchOutcome::failed(e.into());
            }
        };

        let meta = ResponseMeta {
            status: response.status().as_u16(),
            content_type: response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        };
        tracing::debug!("Response status: {}", meta.status);

        match response.text().await {
            Ok(body) => FetchOutcome {
                error: None,
                response: Some(meta),
                body: Some(body),
            },
            Err(e) => {
                tracing::warn!("Failed to read response body: {}", e);
                FetchOutcome {
                    error: Some(e.into()),
                    response: Some(meta),
                    body: None,
                }
            }
        }
    }
}

/// 發出單一請求，結束後呼叫 `on_complete` 恰好一次
pub async fn request<F, C>(fetcher: &F, url: &str, on_complete: C)
where
    F: Fetcher + ?Sized,
    C: FnOnce(FetchOutcome),
{
    let outcome = fetcher.get(url).await;
    on_complete(outcome);
}
