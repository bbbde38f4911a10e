// src/storefront.rs
use crate::error::{SimError, SimResult};
use crate::types::CartItem;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Issues the profile's HTTP effects against a harness-supplied target.
///
/// Every call is a single stateless request-response attempt. Failures are
/// returned to the caller for reporting; there are no retries, no backoff,
/// and no circuit-breaking here.
#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Build a client for `base_url` with a 30 second request timeout.
    pub fn new(base_url: impl Into<String>) -> SimResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> SimResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SimError::InvalidConfiguration(format!("Failed to build client: {}", e)))?;

        Self::with_client(client, base_url)
    }

    /// Wrap a caller-supplied client; the harness may pool its own.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> SimResult<Self> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| SimError::InvalidTarget(format!("{}: {}", base_url, e)))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        debug!("Storefront client targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read a product page: `GET /product/{id}`, no request body.
    pub async fn browse_product(&self, product_id: u64) -> SimResult<StatusCode> {
        let url = format!("{}/product/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;
        Self::check(response.status())
    }

    /// Put an item in the cart: `POST /cart` with a JSON body.
    pub async fn add_to_cart(&self, item: &CartItem) -> SimResult<StatusCode> {
        let url = format!("{}/cart", self.base_url);
        let response = self.client.post(&url).json(item).send().await?;
        Self::check(response.status())
    }

    fn check(status: StatusCode) -> SimResult<StatusCode> {
        if status.is_success() {
            Ok(status)
        } else {
            Err(SimError::Status(status.as_u16()))
        }
    }
}
