// src/profile/weights.rs
use crate::error::SimError;
use crate::types::WeightedAction;
use rand::Rng;

/// Cumulative-weight table for weighted selection via binary search.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeTable {
    bounds: Vec<u32>, // bounds[i] = sum of weights 0..=i
    total: u32,
}

impl CumulativeTable {
    pub(crate) fn new(actions: &[WeightedAction]) -> Result<Self, SimError> {
        if actions.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "action table is empty".to_string(),
            ));
        }

        let mut bounds = Vec::with_capacity(actions.len());
        let mut total: u32 = 0;
        for action in actions {
            if action.weight == 0 {
                return Err(SimError::InvalidConfiguration(format!(
                    "action {} has zero weight",
                    action.kind
                )));
            }
            total = total.checked_add(action.weight).ok_or_else(|| {
                SimError::InvalidConfiguration("total weight overflows u32".to_string())
            })?;
            bounds.push(total);
        }

        Ok(Self { bounds, total })
    }

    pub(crate) fn total(&self) -> u32 {
        self.total
    }

    /// Index of the action owning `roll`, for `0 <= roll < total`.
    fn index_for(&self, roll: u32) -> usize {
        self.bounds.partition_point(|&b| b <= roll)
    }

    /// Pick an index with probability proportional to its weight.
    pub(crate) fn pick(&self, rng: &mut impl Rng) -> usize {
        self.index_for(rng.gen_range(0..self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionKind;

    fn browse_and_cart() -> Vec<WeightedAction> {
        vec![
            WeightedAction { kind: ActionKind::Browse, weight: 3 },
            WeightedAction { kind: ActionKind::AddToCart, weight: 1 },
        ]
    }

    #[test]
    fn test_roll_boundaries() {
        let table = CumulativeTable::new(&browse_and_cart()).unwrap();
        assert_eq!(table.total(), 4);
        // Rolls 0..3 land on the weight-3 action, roll 3 on the weight-1 one.
        assert_eq!(table.index_for(0), 0);
        assert_eq!(table.index_for(1), 0);
        assert_eq!(table.index_for(2), 0);
        assert_eq!(table.index_for(3), 1);
    }

    #[test]
    fn test_single_action() {
        let actions = vec![WeightedAction { kind: ActionKind::Browse, weight: 7 }];
        let table = CumulativeTable::new(&actions).unwrap();
        assert_eq!(table.index_for(0), 0);
        assert_eq!(table.index_for(6), 0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = CumulativeTable::new(&[]);
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let actions = vec![
            WeightedAction { kind: ActionKind::Browse, weight: 3 },
            WeightedAction { kind: ActionKind::AddToCart, weight: 0 },
        ];
        let result = CumulativeTable::new(&actions);
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }
}
