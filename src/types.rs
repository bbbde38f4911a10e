// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// The actions a shopper may perform each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Browse,
    AddToCart,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Browse => "browse",
            ActionKind::AddToCart => "add_to_cart",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An action plus its relative selection weight. Weights must be positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightedAction {
    pub kind: ActionKind,
    pub weight: u32,
}

/// Bounds for the uniformly sampled think-time between consecutive actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaitTimeRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl WaitTimeRange {
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }
}

impl Default for WaitTimeRange {
    fn default() -> Self {
        Self { min_secs: 1.0, max_secs: 3.0 }
    }
}

/// JSON payload for the add-to-cart request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: u64,
    pub quantity: u32,
}

/// Shopper configuration
#[derive(Debug, Clone)]
pub struct ShopperConfig {
    pub wait_time: WaitTimeRange,
    pub browse_weight: u32,
    pub cart_weight: u32,
    pub product_id: u64,
    pub quantity: u32,
    pub request_timeout: Duration,
}

impl Default for ShopperConfig {
    fn default() -> Self {
        Self {
            wait_time: WaitTimeRange::default(),
            browse_weight: 3,
            cart_weight: 1,
            product_id: 1,
            quantity: 1,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Outcome of one executed action, as reported to the metrics sink.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub actor_id: Uuid,
    pub action: ActionKind,
    pub success: bool,
    pub status: Option<u16>,
    pub error: Option<String>,
    pub error_category: Option<&'static str>,
    pub latency: Duration,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Aggregate counters over recorded actions.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    pub total_actions: u64,
    pub total_failures: u64,
    pub actions_by_kind: HashMap<String, u64>,
    pub failures_by_category: HashMap<String, u64>,
    pub success_rate: f64,
    pub average_latency_ms: f64,
}
