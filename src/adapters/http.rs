use crate::adapters::decode_inventory;
use crate::core::{ConfigProvider, InventorySource, Lot};
use crate::utils::error::{LotError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// Fetches the inventory as a JSON array from the configured endpoint.
pub struct HttpInventory<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpInventory<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| LotError::InvalidConfigValueError {
                    field: "source.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| LotError::InvalidConfigValueError {
                    field: format!("source.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: ConfigProvider> InventorySource for HttpInventory<C> {
    async fn load(&self) -> Result<Vec<Lot>> {
        tracing::debug!("Making API request to: {}", self.config.endpoint());
        let response = self.client.get(self.config.endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(LotError::SourceError {
                message: format!(
                    "{} answered with status {}",
                    self.config.endpoint(),
                    response.status()
                ),
            });
        }

        let json_data: serde_json::Value = response.json().await?;
        decode_inventory(json_data)
    }
}
