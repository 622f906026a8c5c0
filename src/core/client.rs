use crate::core::{AnalysisService, AnalyzeRequest, AnalyzeResponse, Language};
use crate::domain::model::HealthStatus;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const LANGUAGE_HEADER: &str = "X-Language";

/// HTTP client for the analysis backend.
///
/// Endpoints are resolved against the page URL the same way a relative
/// `fetch('/analyze')` would be, so any page path shares one origin.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    page_url: Url,
    client: Client,
}

impl HttpAnalysisClient {
    pub fn new(page_url: Url) -> Result<Self> {
        Self::with_timeout(page_url, None)
    }

    pub fn with_timeout(page_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            page_url,
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.page_url
            .join(path)
            .map_err(|e| AppError::InvalidConfigValueError {
                field: "page_url".to_string(),
                value: self.page_url.to_string(),
                reason: format!("Cannot resolve {}: {}", path, e),
            })
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/health")?;
        tracing::debug!("Making health request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("Health response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AppError::ResponseError {
                endpoint: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(
        &self,
        request: &AnalyzeRequest,
        language: Language,
    ) -> Result<AnalyzeResponse> {
        let url = self.endpoint("/analyze")?;
        tracing::debug!("📡 POST {} ({})", url, language.code());

        let response = self
            .client
            .post(url)
            .header(LANGUAGE_HEADER, language.code())
            .json(request)
            .send()
            .await?;

        // 後端在 400/500 時也回傳 JSON，狀態碼不影響解析
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        Ok(AnalyzeResponse::from_json(value)?)
    }
}
