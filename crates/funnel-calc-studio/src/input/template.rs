//! Starter funnels seeded with the calculator's default numbers.

use crate::engine::{FunnelConfig, Stage};
use crate::utils::config::{
    DEFAULT_AVERAGE_ORDER_VALUE, DEFAULT_FIRST_STAGE_USERS, DEFAULT_LATER_STAGE_RATIO,
    DEFAULT_SECOND_STAGE_RATIO, DEFAULT_STAGE_NAMES,
};

/// Build `count` default stages
///
/// The first stage gets [`DEFAULT_FIRST_STAGE_USERS`], the second 70% of it
/// and each later stage half of the one before, truncated to whole users.
/// Stages past the named defaults are called `Stage N`.
pub fn default_stages(count: usize) -> Vec<Stage> {
    let mut stages: Vec<Stage> = Vec::with_capacity(count);

    for i in 0..count {
        let name = DEFAULT_STAGE_NAMES
            .get(i)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Stage {}", i + 1));

        let users = match stages.last() {
            None => DEFAULT_FIRST_STAGE_USERS,
            Some(prev) => {
                let ratio = if i == 1 {
                    DEFAULT_SECOND_STAGE_RATIO
                } else {
                    DEFAULT_LATER_STAGE_RATIO
                };
                ((prev.users as f64 * ratio) as u64).min(prev.users)
            }
        };

        stages.push(Stage::new(name, users));
    }

    stages
}

/// A complete starter funnel with the default order value
pub fn default_funnel(count: usize) -> FunnelConfig {
    FunnelConfig {
        average_order_value: DEFAULT_AVERAGE_ORDER_VALUE,
        stages: default_stages(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stages_five() {
        let stages = default_stages(5);
        let users: Vec<u64> = stages.iter().map(|s| s.users).collect();

        assert_eq!(users, vec![100_000, 70_000, 35_000, 17_500, 8_750]);
        assert_eq!(stages[0].name, "Homepage/Landing");
        assert_eq!(stages[4].name, "Purchase");
    }

    #[test]
    fn test_default_stages_extra_names() {
        let stages = default_stages(7);
        assert_eq!(stages[5].name, "Stage 6");
        assert_eq!(stages[6].name, "Stage 7");
        assert_eq!(stages[6].users, 2_187);
    }

    #[test]
    fn test_default_stages_never_increase() {
        let stages = default_stages(10);
        assert!(stages.windows(2).all(|w| w[1].users <= w[0].users));
    }
}
