//! JavaScript bindings.

use wasm_bindgen::prelude::*;

use crate::balancing::{Agent, BalanceProblem, Balancer, BalancerConfig, Customer};

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Returns the winning agent id, or `0` on a tie.
///
/// `agents` and `customers` are arrays of `{ id, score }`; `away` is an
/// array of agent ids.
#[wasm_bindgen(js_name = executeBalancing)]
pub fn execute_balancing(
    agents: JsValue,
    customers: JsValue,
    away: JsValue,
) -> Result<u32, JsError> {
    let agents: Vec<Agent> = from_js(agents)?;
    let customers: Vec<Customer> = from_js(customers)?;
    let away: Vec<u32> = from_js(away)?;

    Balancer::execute(&agents, &customers, &away).map_err(|e| JsError::new(&e.to_string()))
}

/// Runs a `{ agents, customers, away }` problem with an optional
/// `{ tie_breaker, strict }` config and returns the full outcome.
#[wasm_bindgen(js_name = runBalancing)]
pub fn run_balancing(problem: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let problem: BalanceProblem = from_js(problem)?;
    let config: BalancerConfig = if config.is_undefined() || config.is_null() {
        BalancerConfig::default()
    } else {
        from_js(config)?
    };

    let outcome = Balancer::run(&problem, &config).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsError::new(&e.to_string()))
}
