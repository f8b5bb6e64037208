//! Balancing execution engine.
//!
//! # Algorithm
//!
//! 1. Drop the away agents from the roster
//! 2. Build the working set (one entry per available agent, in roster order)
//! 3. For each customer, in input order:
//!    a. Collect the agents whose score is at least the customer's score
//!    b. If there are none, leave the customer unassigned
//!    c. Otherwise assign it to the lowest-score candidate
//!       (equal scores resolved by [`TieBreaker`](super::TieBreaker))
//! 4. The agent with the most customers wins; a shared maximum is a tie
//!
//! Each customer scans every available agent, so a run costs
//! `O(customers * agents)`.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::config::BalancerConfig;
use super::error::{BalanceError, Result};
use super::types::{Agent, AgentId, BalanceProblem, Customer, CustomerId, Score, NO_WINNER};
use super::working_set::{filter_available, WorkingSet};

/// Who ends up serving the most customers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    /// A single agent holds the maximum.
    Agent(AgentId),
    /// Several agents share the maximum, listed in roster order.
    Tie(Vec<AgentId>),
}

impl Winner {
    /// The winning id, or [`NO_WINNER`] for a tie.
    pub fn id(&self) -> AgentId {
        match self {
            Winner::Agent(id) => *id,
            Winner::Tie(_) => NO_WINNER,
        }
    }

    /// Whether several agents share the maximum.
    pub fn is_tie(&self) -> bool {
        matches!(self, Winner::Tie(_))
    }
}

/// Customers assigned to one available agent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentLoad {
    /// Agent id.
    pub id: AgentId,
    /// Agent score used for the run.
    pub score: Score,
    /// Assigned customer ids, in assignment order.
    pub customers: Vec<CustomerId>,
}

/// Full result of a balancing run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceOutcome {
    /// The winner, or the agents sharing the maximum.
    pub winner: Winner,
    /// Number of customers held by the winner(s).
    pub max_load: usize,
    /// One entry per available agent, in roster order.
    pub loads: Vec<AgentLoad>,
    /// Customers no available agent could serve, in input order.
    pub unassigned: Vec<CustomerId>,
}

impl BalanceOutcome {
    /// Total number of customers that found an agent.
    pub fn assigned_count(&self) -> usize {
        self.loads.iter().map(|l| l.customers.len()).sum()
    }

    /// Load entry for `id`, if that agent took part in the run.
    pub fn load_of(&self, id: AgentId) -> Option<&AgentLoad> {
        self.loads.iter().find(|l| l.id == id)
    }
}

/// Customer-success balancer.
pub struct Balancer;

impl Balancer {
    /// Returns the id of the agent serving the most customers, or
    /// [`NO_WINNER`] when the maximum is shared.
    ///
    /// # Errors
    ///
    /// [`BalanceError::EmptyWorkingSet`] when every agent is away or the
    /// roster is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_balancer::balancing::{Agent, Balancer, Customer};
    ///
    /// let agents = [Agent::new(1, 60), Agent::new(2, 20), Agent::new(3, 95)];
    /// let customers = [Customer::new(1, 90), Customer::new(2, 20), Customer::new(3, 10)];
    ///
    /// assert_eq!(Balancer::execute(&agents, &customers, &[2]).unwrap(), 1);
    /// ```
    pub fn execute(agents: &[Agent], customers: &[Customer], away: &[AgentId]) -> Result<AgentId> {
        balance(agents, customers, away, &BalancerConfig::default()).map(|o| o.winner.id())
    }

    /// Runs one problem and returns the full outcome.
    pub fn run(problem: &BalanceProblem, config: &BalancerConfig) -> Result<BalanceOutcome> {
        balance(&problem.agents, &problem.customers, &problem.away, config)
    }

    /// Runs independent problems, returning one winner (or error) per problem
    /// in input order.
    ///
    /// With the `parallel` feature the problems are spread over the rayon
    /// thread pool.
    pub fn execute_batch(
        problems: &[BalanceProblem],
        config: &BalancerConfig,
    ) -> Vec<Result<AgentId>> {
        let run_one = |problem: &BalanceProblem| Self::run(problem, config).map(|o| o.winner.id());

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            problems.par_iter().map(run_one).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            problems.iter().map(run_one).collect()
        }
    }
}

fn balance(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
    config: &BalancerConfig,
) -> Result<BalanceOutcome> {
    if config.strict {
        check_inputs(agents, customers)?;
    }

    let available = filter_available(agents, away);
    let mut working = WorkingSet::from_available(&available);
    if working.is_empty() {
        return Err(BalanceError::EmptyWorkingSet {
            roster: agents.len(),
            away: agents.len() - available.len(),
        });
    }

    let mut unassigned = Vec::new();
    for customer in customers {
        let assigned = working
            .best_candidate(customer, config.tie_breaker)
            .and_then(|index| working.assign(index, customer.id));
        if assigned.is_none() {
            trace!(customer = customer.id, score = customer.score, "no eligible agent");
            unassigned.push(customer.id);
        }
    }

    let max_load = working.max_load().unwrap_or_default();
    let mut leaders = working.agents_with_load(max_load);
    let winner = if leaders.len() == 1 {
        Winner::Agent(leaders.remove(0))
    } else {
        Winner::Tie(leaders)
    };

    debug!(
        roster = agents.len(),
        available = working.len(),
        customers = customers.len(),
        unassigned = unassigned.len(),
        max_load,
        winner = winner.id(),
        "balancing finished"
    );

    Ok(BalanceOutcome {
        winner,
        max_load,
        loads: working.into_loads(),
        unassigned,
    })
}

fn check_inputs(agents: &[Agent], customers: &[Customer]) -> Result<()> {
    let mut seen = HashSet::with_capacity(agents.len());
    for agent in agents {
        if agent.id == NO_WINNER {
            return Err(BalanceError::ReservedAgentId);
        }
        if !seen.insert(agent.id) {
            return Err(BalanceError::DuplicateAgentId { id: agent.id });
        }
    }

    let mut seen = HashSet::with_capacity(customers.len());
    for customer in customers {
        if customer.id == 0 {
            return Err(BalanceError::ReservedCustomerId);
        }
        if !seen.insert(customer.id) {
            return Err(BalanceError::DuplicateCustomerId { id: customer.id });
        }
    }

    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::balancing::TieBreaker;

    #[test]
    fn test_problem_round_trip() {
        let problem = BalanceProblem::from_scores(&[60, -20, 95], &[90, 20], &[2]);

        let json = serde_json::to_string(&problem).unwrap();
        let back: BalanceProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, problem);
    }

    #[test]
    fn test_problem_from_js_shape() {
        let json = r#"{
            "agents": [{ "id": 1, "score": 60 }, { "id": 2, "score": 95 }],
            "customers": [{ "id": 1, "score": 90 }],
            "away": []
        }"#;

        let problem: BalanceProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.agents[1], Agent::new(2, 95));
        assert_eq!(Balancer::run(&problem, &BalancerConfig::default()).unwrap().winner.id(), 2);
    }

    #[test]
    fn test_config_round_trip() {
        let config = BalancerConfig::default()
            .with_tie_breaker(TieBreaker::FewestAssigned)
            .with_strict(true);

        let json = serde_json::to_string(&config).unwrap();
        let back: BalancerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BalancerConfig = serde_json::from_str(r#"{"tie_breaker":"LowestId"}"#).unwrap();
        assert_eq!(config.tie_breaker, TieBreaker::LowestId);
        assert!(!config.strict);

        let config: BalancerConfig = serde_json::from_str(r#"{"strict":true}"#).unwrap();
        assert_eq!(config.tie_breaker, TieBreaker::RosterOrder);
        assert!(config.strict);

        let config: BalancerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BalancerConfig::default());
    }

    #[test]
    fn test_outcome_round_trip_with_tie() {
        let problem = BalanceProblem::from_scores(
            &[11, 21, 31, 3, 4, 5],
            &[10, 10, 10, 20, 20, 30, 30, 30, 20, 60],
            &[],
        );
        let outcome = Balancer::run(&problem, &BalancerConfig::default()).unwrap();
        assert_eq!(outcome.winner, Winner::Tie(vec![1, 2, 3]));

        let json = serde_json::to_string(&outcome).unwrap();
        let back: BalanceOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_outcome_round_trip_with_single_winner() {
        let problem =
            BalanceProblem::from_scores(&[60, 20, 95, 75], &[90, 20, 70, 40, 60, 10], &[2, 4]);
        let outcome = Balancer::run(&problem, &BalancerConfig::default()).unwrap();

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["winner"], serde_json::json!({ "Agent": 1 }));
        let back: BalanceOutcome = serde_json::from_value(value).unwrap();
        assert_eq!(back, outcome);
    }
}
