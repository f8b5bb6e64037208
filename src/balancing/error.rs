use thiserror::Error;

use super::types::{AgentId, CustomerId};

/// Errors reported by the balancer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// No agent is left once the away agents are removed. `away` counts the
    /// roster entries that were filtered out, not the raw away list.
    #[error("no available agents: roster has {roster} agent(s), {away} marked away")]
    EmptyWorkingSet { roster: usize, away: usize },

    /// An agent uses the id reserved for "no winner" (strict mode only).
    #[error("agent id 0 is reserved")]
    ReservedAgentId,

    /// A customer uses id `0` (strict mode only).
    #[error("customer id 0 is reserved")]
    ReservedCustomerId,

    /// The roster lists the same agent twice (strict mode only).
    #[error("duplicate agent id {id} in roster")]
    DuplicateAgentId { id: AgentId },

    /// The customer list contains the same customer twice (strict mode only).
    #[error("duplicate customer id {id}")]
    DuplicateCustomerId { id: CustomerId },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BalanceError>;
