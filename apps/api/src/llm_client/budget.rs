//! Process-wide token budget guard.
//!
//! Advisory only: the counter lives in memory and resets on restart. It bounds
//! operating cost, it is not a billing ledger.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::llm_client::LlmError;

pub const DEFAULT_TOKEN_BUDGET: u64 = 20_000;

/// Approximate blended price per token, used only for the cost hint in responses.
const COST_PER_TOKEN_USD: f64 = 0.000_15;

#[derive(Debug)]
pub struct TokenBudget {
    used: AtomicU64,
    ceiling: u64,
}

impl TokenBudget {
    pub fn new(ceiling: u64) -> Self {
        Self {
            used: AtomicU64::new(0),
            ceiling,
        }
    }

    pub fn used(&self) -> u64 {
        self.used.load(Ordering::Relaxed)
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Adds `tokens` and returns the new cumulative total.
    pub fn record(&self, tokens: u64) -> u64 {
        self.used.fetch_add(tokens, Ordering::Relaxed) + tokens
    }

    /// True once usage is strictly above 90% of the ceiling.
    pub fn is_nearly_exhausted(&self) -> bool {
        u128::from(self.used()) * 10 > u128::from(self.ceiling) * 9
    }

    pub fn ensure_headroom(&self) -> Result<(), LlmError> {
        if self.is_nearly_exhausted() {
            return Err(LlmError::BudgetExceeded {
                used: self.used(),
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }

    /// Cost hint formatted as `$0.0000`.
    pub fn estimated_cost(&self) -> String {
        format!("${:.4}", self.used() as f64 * COST_PER_TOKEN_USD)
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_trips_strictly_above_ninety_percent() {
        let budget = TokenBudget::default();
        budget.record(18_000);
        assert!(!budget.is_nearly_exhausted());
        assert!(budget.ensure_headroom().is_ok());

        budget.record(1);
        assert!(budget.is_nearly_exhausted());
        assert!(matches!(
            budget.ensure_headroom(),
            Err(LlmError::BudgetExceeded {
                used: 18_001,
                ceiling: 20_000
            })
        ));
    }

    #[test]
    fn test_record_returns_cumulative_total() {
        let budget = TokenBudget::new(1_000);
        assert_eq!(budget.record(120), 120);
        assert_eq!(budget.record(30), 150);
        assert_eq!(budget.used(), 150);
    }

    #[test]
    fn test_estimated_cost_format() {
        let budget = TokenBudget::default();
        budget.record(1_000);
        assert_eq!(budget.estimated_cost(), "$0.1500");
    }

    #[test]
    fn test_zero_ceiling_trips_after_any_usage() {
        let budget = TokenBudget::new(0);
        assert!(!budget.is_nearly_exhausted());
        budget.record(1);
        assert!(budget.is_nearly_exhausted());
    }
}
