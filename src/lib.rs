//! Customer-success balancing.
//!
//! Distributes a batch of customers over the available customer-success
//! agents and reports which agent serves the most of them:
//!
//! - **Filtering**: agents marked away take no part in the run.
//! - **Best-fit assignment**: each customer, in input order, goes to the
//!   lowest-score agent whose score covers the customer's score.
//! - **Winner resolution**: the agent with the most customers wins; a
//!   shared maximum is a tie and yields `0`.
//!
//! # Example
//!
//! ```
//! use cs_balancer::balancing::{BalanceProblem, Balancer, BalancerConfig, Winner};
//!
//! let problem =
//!     BalanceProblem::from_scores(&[60, 20, 95, 75], &[90, 20, 70, 40, 60, 10], &[2, 4]);
//! let outcome = Balancer::run(&problem, &BalancerConfig::default()).unwrap();
//!
//! assert_eq!(outcome.winner, Winner::Agent(1));
//! assert_eq!(outcome.max_load, 4);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model and outcomes.
//! - `parallel`: [`Balancer::execute_batch`](balancing::Balancer::execute_batch)
//!   runs independent problems on the rayon thread pool.
//! - `wasm`: JavaScript bindings.

pub mod balancing;

#[cfg(feature = "wasm")]
pub mod wasm;
