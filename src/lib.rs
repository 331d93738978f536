//! Power-plant versus smart-grid investment calculator.

#[cfg(feature = "api")]
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
/// Projection engine: inputs, capex, annual flows, NPV/ROI and decision.
pub mod finance;
pub mod io;
pub mod report;
pub mod reporting;
