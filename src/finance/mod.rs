/// Capital cost formulas.
pub mod capex;
/// Recommendation rule.
pub mod decision;
pub mod engine;
/// Annual revenue and savings formulas.
pub mod flows;
pub mod horizon;
pub mod inputs;
pub mod types;
