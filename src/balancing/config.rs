//! Balancer configuration.

/// How to choose between eligible agents that have the same score.
///
/// The lowest-score eligible agent always wins first; this only decides
/// between agents whose scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// First agent in roster order (after duplicates are collapsed).
    #[default]
    RosterOrder,

    /// Agent with the fewest customers so far, then roster order.
    FewestAssigned,

    /// Agent with the lowest id.
    LowestId,
}

/// Configuration for a balancing run.
///
/// # Examples
///
/// ```
/// use cs_balancer::balancing::{BalancerConfig, TieBreaker};
///
/// let config = BalancerConfig::default()
///     .with_tie_breaker(TieBreaker::LowestId)
///     .with_strict(true);
/// assert_eq!(config.tie_breaker, TieBreaker::LowestId);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalancerConfig {
    /// Tie-break between equal-score candidates.
    pub tie_breaker: TieBreaker,

    /// Reject id `0` and duplicate ids instead of applying last-write-wins.
    ///
    /// Checks cover the whole roster, away agents included, and every
    /// customer.
    pub strict: bool,
}

impl BalancerConfig {
    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Enables or disables strict input validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
