// src/profile/mod.rs
mod weights;

use crate::error::{SimError, SimResult};
use crate::types::{ActionKind, ShopperConfig, WaitTimeRange, WeightedAction};
use rand::Rng;
use std::time::Duration;
use weights::CumulativeTable;

/// A named behavior profile: think-time bounds plus a weighted action table.
///
/// The external harness reads the bounds and table through the accessors and
/// drives selection with whatever RNG it owns; selection is memoryless, with
/// no fairness or round-robin guarantee across cycles.
pub struct BehaviorProfile {
    name: String,
    wait_time: WaitTimeRange,
    actions: Vec<WeightedAction>,
    table: CumulativeTable,
}

impl BehaviorProfile {
    /// Create a profile. Rejects empty action tables, zero weights, and
    /// unordered or negative wait bounds.
    pub fn new(
        name: impl Into<String>,
        wait_time: WaitTimeRange,
        actions: Vec<WeightedAction>,
    ) -> SimResult<Self> {
        if wait_time.min_secs < 0.0
            || !wait_time.min_secs.is_finite()
            || !wait_time.max_secs.is_finite()
            || wait_time.min_secs > wait_time.max_secs
        {
            return Err(SimError::InvalidConfiguration(format!(
                "wait time range [{}, {}] is not ordered",
                wait_time.min_secs, wait_time.max_secs
            )));
        }

        let table = CumulativeTable::new(&actions)?;

        Ok(Self {
            name: name.into(),
            wait_time,
            actions,
            table,
        })
    }

    /// Build a profile from a shopper configuration.
    pub fn from_config(config: &ShopperConfig) -> SimResult<Self> {
        Self::new(
            "shopper",
            config.wait_time,
            vec![
                WeightedAction { kind: ActionKind::Browse, weight: config.browse_weight },
                WeightedAction { kind: ActionKind::AddToCart, weight: config.cart_weight },
            ],
        )
    }

    /// The storefront shopper profile: browse three times as often as buying,
    /// with one to three seconds of think-time between actions.
    pub fn boutique() -> SimResult<Self> {
        Self::new(
            "boutique",
            WaitTimeRange::default(),
            vec![
                WeightedAction { kind: ActionKind::Browse, weight: 3 },
                WeightedAction { kind: ActionKind::AddToCart, weight: 1 },
            ],
        )
    }

    /// Draw a think-time uniformly from the configured bounds. Re-sampled
    /// independently before every wait.
    pub fn sample_wait_time(&self, rng: &mut impl Rng) -> Duration {
        let secs = rng.gen_range(self.wait_time.min_secs..=self.wait_time.max_secs);
        Duration::from_secs_f64(secs)
    }

    /// Choose one action with probability proportional to its weight.
    pub fn select_action(&self, rng: &mut impl Rng) -> ActionKind {
        self.actions[self.table.pick(rng)].kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wait_time(&self) -> WaitTimeRange {
        self.wait_time
    }

    pub fn actions(&self) -> &[WeightedAction] {
        &self.actions
    }

    pub fn total_weight(&self) -> u32 {
        self.table.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_boutique_contract() {
        let profile = BehaviorProfile::boutique().unwrap();
        assert_eq!(profile.name(), "boutique");
        assert_eq!(profile.wait_time().min_secs, 1.0);
        assert_eq!(profile.wait_time().max_secs, 3.0);

        let actions = profile.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].kind, ActionKind::Browse);
        assert_eq!(actions[0].weight, 3);
        assert_eq!(actions[1].kind, ActionKind::AddToCart);
        assert_eq!(actions[1].weight, 1);
        assert_eq!(profile.total_weight(), 4);
    }

    #[test]
    fn test_wait_time_bounds_and_mean() {
        let profile = BehaviorProfile::boutique().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut sum = 0.0;
        for _ in 0..1000 {
            let wait = profile.sample_wait_time(&mut rng).as_secs_f64();
            assert!(wait >= 1.0, "sampled wait {} below minimum", wait);
            assert!(wait <= 3.0, "sampled wait {} above maximum", wait);
            sum += wait;
        }

        let mean = sum / 1000.0;
        assert!((mean - 2.0).abs() < 0.1, "mean wait {} too far from 2", mean);
    }

    #[test]
    fn test_selection_frequencies() {
        let profile = BehaviorProfile::boutique().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut browse = 0u32;
        let mut cart = 0u32;
        for _ in 0..1000 {
            match profile.select_action(&mut rng) {
                ActionKind::Browse => browse += 1,
                ActionKind::AddToCart => cart += 1,
            }
        }

        assert_eq!(browse + cart, 1000);
        assert!((700..=800).contains(&browse), "browse count {} outside [700, 800]", browse);
        assert!((200..=300).contains(&cart), "cart count {} outside [200, 300]", cart);
    }

    #[test]
    fn test_degenerate_wait_range() {
        let profile = BehaviorProfile::new(
            "fixed",
            WaitTimeRange::new(2.0, 2.0),
            vec![WeightedAction { kind: ActionKind::Browse, weight: 1 }],
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let wait = profile.sample_wait_time(&mut rng);
        assert_eq!(wait, Duration::from_secs(2));
    }

    #[test]
    fn test_inverted_wait_range_rejected() {
        let result = BehaviorProfile::new(
            "broken",
            WaitTimeRange::new(3.0, 1.0),
            vec![WeightedAction { kind: ActionKind::Browse, weight: 1 }],
        );
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_negative_wait_rejected() {
        let result = BehaviorProfile::new(
            "broken",
            WaitTimeRange::new(-1.0, 3.0),
            vec![WeightedAction { kind: ActionKind::Browse, weight: 1 }],
        );
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_weight_config_rejected() {
        let config = ShopperConfig { cart_weight: 0, ..ShopperConfig::default() };
        let result = BehaviorProfile::from_config(&config);
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }
}
