//! Customer-success balancing.
//!
//! Assigns each customer to an available agent able to serve it, then
//! reports which agent ends up with the most customers.
//!
//! - **Eligibility**: an agent can serve a customer when the agent's score
//!   is greater than or equal to the customer's score.
//! - **Best fit**: among eligible agents the one with the lowest score takes
//!   the customer, keeping stronger agents free for harder customers.
//! - **Winner**: the agent with the most customers. A shared maximum is a
//!   tie, reported as [`NO_WINNER`] (`0`) by [`Balancer::execute`].
//!
//! # Design
//!
//! A run is a pure function of its inputs. The working set lives for one
//! call and every tie, both between candidates and between winners, is
//! resolved by an explicit rule rather than by hash-map iteration order.

mod config;
mod error;
mod runner;
mod types;
mod working_set;

pub use config::{BalancerConfig, TieBreaker};
pub use error::{BalanceError, Result};
pub use runner::{AgentLoad, BalanceOutcome, Balancer, Winner};
pub use types::{Agent, AgentId, BalanceProblem, Customer, CustomerId, Score, NO_WINNER};
