//! NPV, undiscounted total and ROI over a number of years.

/// Figures for one option accumulated over a fixed number of years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonOutcome {
    /// Net present value: `-capex + Σ flow / (1 + rate)^t`.
    pub npv: f64,
    /// Undiscounted sum of the annual flow.
    pub total_flow: f64,
    /// Profit relative to capex (%).
    pub roi: f64,
}

/// Profit-based ROI in percent.
///
/// A capex of exactly zero is replaced by 1 so the result stays finite;
/// the figure is then only a magnitude, not a meaningful ratio.
pub fn roi_pct(total_flow: f64, capex: f64) -> f64 {
    let base = if capex == 0.0 { 1.0 } else { capex };
    (total_flow - capex) / base * 100.0
}

/// Accumulates one option over `years`, always starting from year 1.
///
/// # Arguments
///
/// * `capex` - Upfront cost at `t = 0`
/// * `annual_flow` - Constant yearly revenue or savings
/// * `rate` - Discount rate as a fraction (0.08 for 8 %)
/// * `years` - Number of yearly flows
///
/// Nothing is rounded here, so calls with equal arguments give identical
/// bits.
pub fn accumulate(capex: f64, annual_flow: f64, rate: f64, years: u32) -> HorizonOutcome {
    let mut npv = 0.0 - capex;
    for t in 1..=years {
        npv += annual_flow / (1.0 + rate).powi(t as i32);
    }
    let total_flow = annual_flow * f64::from(years);

    HorizonOutcome {
        npv,
        total_flow,
        roi: roi_pct(total_flow, capex),
    }
}
