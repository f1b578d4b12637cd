use crate::domain::model::RegistryStatus;
use crate::domain::ports::{ConfigProvider, RegistryLookup};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Client for the Receita Federal CPF lookup endpoint. One GET per
/// verification, no retries.
pub struct RegistryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RegistryClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            base_url: config.registry_url().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs()),
        }
    }
}

#[async_trait]
impl RegistryLookup for RegistryClient {
    async fn verify(&self, digits: &str) -> Result<RegistryStatus> {
        let url = format!("{}/{}", self.base_url, digits);

        tracing::debug!("Consulting registry: {}", url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        tracing::debug!("Registry response status: {}", response.status());

        if response.status() == StatusCode::OK {
            Ok(RegistryStatus::Found)
        } else {
            Ok(RegistryStatus::NotFound(response.status().as_u16()))
        }
    }
}
