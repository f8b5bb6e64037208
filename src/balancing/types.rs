//! Data model: agents, customers and the problem that binds them.

/// Identifier of a customer-success agent. `0` is reserved (see [`NO_WINNER`]).
pub type AgentId = u32;

/// Identifier of a customer.
pub type CustomerId = u32;

/// Capacity score. Negative values are valid.
pub type Score = i64;

/// Returned by [`Balancer::execute`](super::Balancer::execute) when two or
/// more agents share the maximum number of customers.
pub const NO_WINNER: AgentId = 0;

/// A customer-success agent. It can serve any customer whose score does not
/// exceed its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Unique identifier, `>= 1`.
    pub id: AgentId,
    /// Capacity threshold.
    pub score: Score,
}

impl Agent {
    /// Creates an agent.
    pub fn new(id: AgentId, score: Score) -> Self {
        Self { id, score }
    }
}

/// A customer waiting for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Unique identifier, `>= 1`.
    pub id: CustomerId,
    /// Required capacity.
    pub score: Score,
}

impl Customer {
    /// Creates a customer.
    pub fn new(id: CustomerId, score: Score) -> Self {
        Self { id, score }
    }
}

/// One balancing run's inputs.
///
/// # Examples
///
/// ```
/// use cs_balancer::balancing::BalanceProblem;
///
/// let problem = BalanceProblem::from_scores(&[60, 20, 95, 75], &[90, 20, 70], &[2, 4]);
/// assert_eq!(problem.agents[2].id, 3);
/// assert_eq!(problem.customers.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceProblem {
    /// Full roster, including agents that are away.
    pub agents: Vec<Agent>,
    /// Customers, in assignment order.
    pub customers: Vec<Customer>,
    /// Ids of agents that are unavailable for this run.
    pub away: Vec<AgentId>,
}

impl BalanceProblem {
    /// Creates a problem from explicit agents and customers.
    pub fn new(agents: Vec<Agent>, customers: Vec<Customer>, away: Vec<AgentId>) -> Self {
        Self {
            agents,
            customers,
            away,
        }
    }

    /// Creates a problem from plain score lists. Ids are 1-based positions.
    pub fn from_scores(
        agent_scores: &[Score],
        customer_scores: &[Score],
        away: &[AgentId],
    ) -> Self {
        let agents = agent_scores
            .iter()
            .zip(1..)
            .map(|(&score, id)| Agent::new(id, score))
            .collect();
        let customers = customer_scores
            .iter()
            .zip(1..)
            .map(|(&score, id)| Customer::new(id, score))
            .collect();

        Self::new(agents, customers, away.to_vec())
    }
}
