//! Indexed-step selector shared by both stepper surfaces.
//!
//! The onboarding wizard and the how-it-works panel are the same shape of
//! state (one active step out of an ordered list) with different movement
//! rules, so the rules are a policy on one selector instead of two copies
//! of the bookkeeping.

use serde::Serialize;

/// How a selector may move between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Movement only by one step at a time; callers layer validation on top.
    ValidatedLinear,
    /// Any in-range step may be selected directly.
    RandomAccess,
}

/// Tracks the active step id over `1..=count`. Exactly one step is active;
/// the first is active initially.
#[derive(Debug, Clone)]
pub struct StepSelector {
    count: u32,
    current: u32,
    policy: SelectionPolicy,
}

impl StepSelector {
    /// Create a selector over a non-empty step list.
    pub fn new(count: u32, policy: SelectionPolicy) -> Self {
        assert!(count > 0, "selector needs at least one step");
        Self {
            count,
            current: 1,
            policy,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.count
    }

    /// Select a step directly. Only valid under `RandomAccess`.
    pub fn select(&mut self, id: u32) -> Result<u32, String> {
        if self.policy != SelectionPolicy::RandomAccess {
            return Err("Linear selector cannot jump to arbitrary steps".to_string());
        }
        if id < 1 || id > self.count {
            return Err(format!("Step {id} is out of range (1..={})", self.count));
        }
        self.current = id;
        Ok(self.current)
    }

    /// Move forward by one step. Returns `None` at the last step.
    pub fn advance(&mut self) -> Option<u32> {
        if self.is_last() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Move back by one step. Returns `None` at the first step.
    pub fn retreat(&mut self) -> Option<u32> {
        if self.is_first() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_step() {
        let selector = StepSelector::new(4, SelectionPolicy::ValidatedLinear);
        assert_eq!(selector.current(), 1);
        assert!(selector.is_first());
        assert!(!selector.is_last());
    }

    #[test]
    fn linear_walks_both_directions() {
        let mut selector = StepSelector::new(3, SelectionPolicy::ValidatedLinear);
        assert_eq!(selector.advance(), Some(2));
        assert_eq!(selector.advance(), Some(3));
        assert!(selector.is_last());
        assert_eq!(selector.advance(), None);
        assert_eq!(selector.retreat(), Some(2));
        assert_eq!(selector.retreat(), Some(1));
        assert_eq!(selector.retreat(), None);
    }

    #[test]
    fn linear_rejects_direct_selection() {
        let mut selector = StepSelector::new(4, SelectionPolicy::ValidatedLinear);
        assert!(selector.select(3).is_err());
        assert_eq!(selector.current(), 1);
    }

    #[test]
    fn random_access_selects_any_in_range_step() {
        let mut selector = StepSelector::new(4, SelectionPolicy::RandomAccess);
        assert_eq!(selector.select(3), Ok(3));
        assert_eq!(selector.select(1), Ok(1));
        assert_eq!(selector.select(4), Ok(4));
    }

    #[test]
    fn random_access_rejects_out_of_range() {
        let mut selector = StepSelector::new(4, SelectionPolicy::RandomAccess);
        assert!(selector.select(0).is_err());
        assert!(selector.select(5).is_err());
        assert_eq!(selector.current(), 1);
    }
}
