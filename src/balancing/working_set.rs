//! Per-run working set of available agents.
//!
//! Built once per run from the roster minus the away agents, mutated while
//! customers are assigned, and consumed into the run's outcome.

use std::cmp::Ordering;
use std::collections::HashSet;

use indexmap::IndexMap;

use super::config::TieBreaker;
use super::runner::AgentLoad;
use super::types::{Agent, AgentId, Customer, CustomerId, Score};

/// An available agent and the customers assigned to it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorkingAgent {
    score: Score,
    assigned: Vec<CustomerId>,
}

impl WorkingAgent {
    fn new(score: Score) -> Self {
        Self {
            score,
            assigned: Vec::new(),
        }
    }

    fn load(&self) -> usize {
        self.assigned.len()
    }
}

/// Available agents keyed by id, in roster order.
#[derive(Debug, Clone, Default)]
pub(crate) struct WorkingSet {
    agents: IndexMap<AgentId, WorkingAgent>,
}

/// Agents whose id is not in `away`, in roster order.
pub(crate) fn filter_available<'a>(roster: &'a [Agent], away: &[AgentId]) -> Vec<&'a Agent> {
    let away: HashSet<AgentId> = away.iter().copied().collect();
    roster.iter().filter(|a| !away.contains(&a.id)).collect()
}

impl WorkingSet {
    /// Builds the working set from already-filtered agents.
    ///
    /// A repeated id keeps its first position and takes the later score.
    pub(crate) fn from_available(available: &[&Agent]) -> Self {
        let mut agents = IndexMap::with_capacity(available.len());
        for agent in available {
            agents.insert(agent.id, WorkingAgent::new(agent.score));
        }
        Self { agents }
    }

    pub(crate) fn len(&self) -> usize {
        self.agents.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Index of the lowest-score agent able to serve `customer`.
    ///
    /// Equal scores are resolved by `tie_breaker`; [`Iterator::min_by`]
    /// keeps the first of equal elements, which gives roster order.
    pub(crate) fn best_candidate(
        &self,
        customer: &Customer,
        tie_breaker: TieBreaker,
    ) -> Option<usize> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, (_, agent))| agent.score >= customer.score)
            .min_by(|(_, (id_a, a)), (_, (id_b, b))| {
                a.score.cmp(&b.score).then_with(|| match tie_breaker {
                    TieBreaker::RosterOrder => Ordering::Equal,
                    TieBreaker::FewestAssigned => a.load().cmp(&b.load()),
                    TieBreaker::LowestId => id_a.cmp(id_b),
                })
            })
            .map(|(index, _)| index)
    }

    /// Appends `customer` to the agent at `index`. Returns that agent's id.
    pub(crate) fn assign(&mut self, index: usize, customer: CustomerId) -> Option<AgentId> {
        let (&id, agent) = self.agents.get_index_mut(index)?;
        agent.assigned.push(customer);
        Some(id)
    }

    /// Highest load in the set, `None` when the set is empty.
    pub(crate) fn max_load(&self) -> Option<usize> {
        self.agents.values().map(WorkingAgent::load).max()
    }

    /// Ids of every agent carrying `load` customers, in roster order.
    pub(crate) fn agents_with_load(&self, load: usize) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|(_, agent)| agent.load() == load)
            .map(|(&id, _)| id)
            .collect()
    }

    pub(crate) fn into_loads(self) -> Vec<AgentLoad> {
        self.agents
            .into_iter()
            .map(|(id, agent)| AgentLoad {
                id,
                score: agent.score,
                customers: agent.assigned,
            })
            .collect()
    }
}
