//! Result types produced by the projection engine.

use std::fmt;

use serde::Serialize;

use super::decision::Decision;
use crate::reporting::{format_currency, format_money, format_percent};

/// ROI and NPV of both options at one projection horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonProjection {
    /// Horizon length (years).
    pub years: u32,
    /// Plant ROI over `years` (%).
    pub roi_plant: f64,
    /// Smart-grid ROI over `years` (%).
    pub roi_smart: f64,
    /// Plant NPV over `years`.
    pub npv_plant: f64,
    /// Smart-grid NPV over `years`.
    pub npv_smart: f64,
}

/// Complete outcome of one calculation.
///
/// Annual flows and lifespan totals are kept in separate fields; totals are
/// undiscounted sums over `lifespan_years`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// Years the lifespan figures accumulate over, after normalization.
    pub lifespan_years: u32,
    /// New plant capital cost.
    pub plant_capex: f64,
    /// Smart-grid capital cost.
    pub smart_grid_capex: f64,
    /// New plant revenue per year.
    pub annual_plant_revenue: f64,
    /// Smart-grid savings per year.
    pub annual_smart_savings: f64,
    /// Plant revenue over the lifespan.
    pub total_plant_revenue: f64,
    /// Smart-grid savings over the lifespan.
    pub total_smart_revenue: f64,
    /// Plant ROI over the lifespan (%).
    pub roi_plant: f64,
    /// Smart-grid ROI over the lifespan (%).
    pub roi_smart: f64,
    /// Plant NPV over the lifespan.
    pub npv_plant: f64,
    /// Smart-grid NPV over the lifespan.
    pub npv_smart: f64,
    /// Recommendation from the lifespan figures.
    pub decision: Decision,
    /// Horizons not exceeding the lifespan, in configured order.
    pub projections: Vec<HorizonProjection>,
}

impl fmt::Display for ProjectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Investment Comparison ---")?;
        writeln!(f, "New plant CapEx:        {}", format_currency(self.plant_capex))?;
        writeln!(f, "Smart grid CapEx:       {}", format_currency(self.smart_grid_capex))?;
        writeln!(
            f,
            "Annual plant revenue:   {}",
            format_currency(self.annual_plant_revenue)
        )?;
        writeln!(
            f,
            "Annual smart savings:   {}",
            format_currency(self.annual_smart_savings)
        )?;
        writeln!(
            f,
            "ROI:                    Plant: {} | Smart Grid: {}",
            format_percent(self.roi_plant),
            format_percent(self.roi_smart)
        )?;
        writeln!(
            f,
            "NPV:                    Plant: {} | Smart Grid: {}",
            format_money(self.npv_plant),
            format_money(self.npv_smart)
        )?;

        if !self.projections.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{:>5}  {:>14}  {:>14}  {:>20}  {:>20}",
                "Years", "ROI plant", "ROI smart", "NPV plant", "NPV smart"
            )?;
            for p in &self.projections {
                writeln!(
                    f,
                    "{:>5}  {:>14}  {:>14}  {:>20}  {:>20}",
                    p.years,
                    format_percent(p.roi_plant),
                    format_percent(p.roi_smart),
                    format_money(p.npv_plant),
                    format_money(p.npv_smart)
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "Decision: {}", self.decision)
    }
}
