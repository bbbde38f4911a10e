
use crate::error::SimResult;
use crate::metrics::MetricsSink;
use crate::profile::BehaviorProfile;
use crate::storefront::StorefrontClient;
use crate::types::{ActionKind, ActionRecord, CartItem, ShopperConfig};
use chrono::Utc;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::sleep;
use uuid::Uuid;

/// One simulated shopper: repeatedly selects a weighted action, executes it
/// against the storefront, reports the outcome, and sleeps a sampled
/// think-time. The harness owns spawning and termination; aborting the task
/// between or mid-action is fine, there is nothing to clean up.
pub struct Shopper {
    id: Uuid,
    profile: BehaviorProfile,
    storefront: StorefrontClient,
    sink: Arc<dyn MetricsSink>,
    product_id: u64,
    quantity: u32,
    rng: StdRng,
}

impl Shopper {
    pub fn new(
        profile: BehaviorProfile,
        storefront: StorefrontClient,
        sink: Arc<dyn MetricsSink>,
    ) -> Self {
        Self::with_rng(profile, storefront, sink, StdRng::from_entropy())
    }

    /// Seeded variant, for deterministic runs.
    pub fn with_rng(
        profile: BehaviorProfile,
        storefront: StorefrontClient,
        sink: Arc<dyn MetricsSink>,
        rng: StdRng,
    ) -> Self {
        let config = ShopperConfig::default();
        Self {
            id: Uuid::new_v4(),
            profile,
            storefront,
            sink,
            product_id: config.product_id,
            quantity: config.quantity,
            rng,
        }
    }

    /// Build a shopper entirely from configuration plus the harness-supplied
    /// target URL and sink.
    pub fn from_config(
        config: &ShopperConfig,
        base_url: impl Into<String>,
        sink: Arc<dyn MetricsSink>,
    ) -> SimResult<Self> {
        let profile = BehaviorProfile::from_config(config)?;
        let storefront = StorefrontClient::with_timeout(base_url, config.request_timeout)?;

        Ok(Self {
            id: Uuid::new_v4(),
            profile,
            storefront,
            sink,
            product_id: config.product_id,
            quantity: config.quantity,
            rng: StdRng::from_entropy(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &BehaviorProfile {
        &self.profile
    }

    /// Select and execute one action, reporting the outcome to the sink.
    ///
    /// A failed action is reported, never retried; the returned record lets
    /// callers observe the outcome without going through the sink.
    pub async fn step(&mut self) -> ActionRecord {
        let action = self.profile.select_action(&mut self.rng);
        let started = Instant::now();
        let result = self.execute(action).await;
        let latency = started.elapsed();

        let record = match result {
            Ok(status) => {
                info!(
                    "Shopper {} {}: status={} ({}ms)",
                    self.id,
                    action,
                    status.as_u16(),
                    latency.as_millis()
                );
                ActionRecord {
                    actor_id: self.id,
                    action,
                    success: true,
                    status: Some(status.as_u16()),
                    error: None,
                    error_category: None,
                    latency,
                    timestamp: Utc::now(),
                }
            }
            Err(e) => {
                warn!("Shopper {} {} failed: {}", self.id, action, e);
                ActionRecord {
                    actor_id: self.id,
                    action,
                    success: false,
                    status: e.status(),
                    error: Some(e.to_string()),
                    error_category: Some(e.category()),
                    latency,
                    timestamp: Utc::now(),
                }
            }
        };

        self.sink.record(record.clone()).await;
        record
    }

    async fn execute(&self, action: ActionKind) -> SimResult<StatusCode> {
        match action {
            ActionKind::Browse => self.storefront.browse_product(self.product_id).await,
            ActionKind::AddToCart => {
                let item = CartItem { product_id: self.product_id, quantity: self.quantity };
                self.storefront.add_to_cart(&item).await
            }
        }
    }

    /// Run a fixed number of cycles, sleeping the sampled wait after each
    /// action. Failures do not shorten or lengthen the wait.
    pub async fn run_cycles(&mut self, cycles: usize) {
        for _ in 0..cycles {
            self.step().await;
            self.think().await;
        }
    }

    /// Loop until the owning task is aborted by the harness.
    pub async fn run(&mut self) {
        loop {
            self.step().await;
            self.think().await;
        }
    }

    async fn think(&mut self) {
        let wait = self.profile.sample_wait_time(&mut self.rng);
        debug!("Shopper {} thinking for {:?}", self.id, wait);
        sleep(wait).await;
    }
}
