//! HTTP client for the catalog service.

use std::time::Duration;

use reqwest::StatusCode;

use crate::{config::ClientConfig, error::ClientError, models::Produto};

// A hung service must not pin the UI in its loading state.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_produtos(&self) -> Result<Vec<Produto>, ClientError> {
        let url = format!("{}/produtos", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn get_produto(&self, id: i32) -> Result<Produto, ClientError> {
        let url = format!("{}/produtos/{}", self.base_url, id);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }
}
