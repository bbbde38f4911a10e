// src/lib.rs
pub mod actor;
pub mod error;
pub mod metrics;
pub mod profile;
pub mod storefront;
pub mod types;

pub use actor::Shopper;
pub use error::{SimError, SimResult};
pub use metrics::{MetricsSink, StatsCollector};
pub use profile::BehaviorProfile;
pub use storefront::StorefrontClient;
pub use types::{
    ActionKind, ActionRecord, CartItem, ShopperConfig, SimStats, WaitTimeRange, WeightedAction,
};
