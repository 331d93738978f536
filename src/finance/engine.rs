//! Projection engine tying capex, annual flows and horizon accumulation together.

use super::capex::{plant_capex, smart_grid_capex};
use super::decision::Decision;
use super::flows::{annual_plant_revenue, annual_smart_savings};
use super::horizon::accumulate;
use super::inputs::InvestmentInputs;
use super::types::{HorizonProjection, ProjectionResult};

/// Projection horizons reported when none are configured.
pub const DEFAULT_HORIZONS: [u32; 3] = [5, 10, 20];

/// Stateless calculator holding only the static horizon list.
///
/// # Examples
///
/// ```
/// use grid_invest::finance::engine::ProjectionEngine;
/// use grid_invest::finance::inputs::InvestmentInputs;
///
/// let engine = ProjectionEngine::default();
/// let result = engine.calculate(&InvestmentInputs::default());
/// assert_eq!(result.npv_plant, 0.0);
/// assert!(result.projections.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionEngine {
    horizons: Vec<u32>,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZONS.to_vec())
    }
}

/// Capex and annual flow of both options, shared by every horizon.
#[derive(Debug, Clone, Copy)]
struct Basis {
    plant_capex: f64,
    smart_capex: f64,
    plant_flow: f64,
    smart_flow: f64,
    rate: f64,
}

impl Basis {
    fn from_inputs(inputs: &InvestmentInputs) -> Self {
        Self {
            plant_capex: plant_capex(inputs),
            smart_capex: smart_grid_capex(inputs),
            plant_flow: annual_plant_revenue(inputs),
            smart_flow: annual_smart_savings(inputs),
            rate: inputs.discount_fraction(),
        }
    }

    fn project(&self, years: u32) -> HorizonProjection {
        let plant = accumulate(self.plant_capex, self.plant_flow, self.rate, years);
        let smart = accumulate(self.smart_capex, self.smart_flow, self.rate, years);
        HorizonProjection {
            years,
            roi_plant: plant.roi,
            roi_smart: smart.roi,
            npv_plant: plant.npv,
            npv_smart: smart.npv,
        }
    }
}

impl ProjectionEngine {
    /// Creates an engine reporting the given horizons, in the given order.
    pub fn new(horizons: Vec<u32>) -> Self {
        Self { horizons }
    }

    /// Configured projection horizons.
    pub fn horizons(&self) -> &[u32] {
        &self.horizons
    }

    /// Runs the full calculation: lifespan figures, decision, and one
    /// independent projection per horizon that fits in the lifespan.
    pub fn calculate(&self, inputs: &InvestmentInputs) -> ProjectionResult {
        let basis = Basis::from_inputs(inputs);
        let years = inputs.lifespan_years;

        let plant = accumulate(basis.plant_capex, basis.plant_flow, basis.rate, years);
        let smart = accumulate(basis.smart_capex, basis.smart_flow, basis.rate, years);
        let decision = Decision::select(plant.npv, plant.roi, smart.npv, smart.roi);

        let projections = self
            .horizons
            .iter()
            .copied()
            .filter(|&h| h <= years)
            .map(|h| basis.project(h))
            .collect();

        ProjectionResult {
            lifespan_years: years,
            plant_capex: basis.plant_capex,
            smart_grid_capex: basis.smart_capex,
            annual_plant_revenue: basis.plant_flow,
            annual_smart_savings: basis.smart_flow,
            total_plant_revenue: plant.total_flow,
            total_smart_revenue: smart.total_flow,
            roi_plant: plant.roi,
            roi_smart: smart.roi,
            npv_plant: plant.npv,
            npv_smart: smart.npv,
            decision,
            projections,
        }
    }

    /// Projects both options over an arbitrary number of years,
    /// regardless of the lifespan in `inputs`.
    pub fn project(&self, inputs: &InvestmentInputs, years: u32) -> HorizonProjection {
        Basis::from_inputs(inputs).project(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> InvestmentInputs {
        InvestmentInputs {
            additional_capacity_mw: 100.0,
            current_prod_mw: 800.0,
            plant_type_cost_per_mw: 1_000_000.0,
            region_multiplier: 1.0,
            infrastructure_cost: 25_000_000.0,
            meter_count: 200_000.0,
            meter_unit_cost: 150.0,
            users_per_meter: 1.0,
            hours_per_day: 12.0,
            tariff: 0.12,
            savings_percent: 5.0,
            discount_rate: 8.0,
            lifespan_years: 25,
            ..InvestmentInputs::default()
        }
    }

    #[test]
    fn zero_inputs_are_all_zero() {
        let engine = ProjectionEngine::default();
        let inputs = InvestmentInputs {
            users_per_meter: 1.0,
            ..InvestmentInputs::default()
        };
        let r = engine.calculate(&inputs);
        assert_eq!(r.plant_capex, 0.0);
        assert_eq!(r.smart_grid_capex, 0.0);
        assert_eq!(r.npv_plant, 0.0);
        assert_eq!(r.npv_smart, 0.0);
        assert_eq!(r.roi_plant, 0.0);
        assert_eq!(r.roi_smart, 0.0);
        assert!(r.projections.is_empty());
        assert_eq!(r.decision, Decision::NewPlantPreferred);
    }

    #[test]
    fn lifespan_seven_keeps_only_five() {
        let engine = ProjectionEngine::default();
        let inputs = InvestmentInputs {
            lifespan_years: 7,
            ..sample_inputs()
        };
        let r = engine.calculate(&inputs);
        let years: Vec<u32> = r.projections.iter().map(|p| p.years).collect();
        assert_eq!(years, vec![5]);
    }

    #[test]
    fn horizon_equal_to_lifespan_is_kept() {
        let engine = ProjectionEngine::default();
        let inputs = InvestmentInputs {
            lifespan_years: 20,
            ..sample_inputs()
        };
        let r = engine.calculate(&inputs);
        assert_eq!(r.projections.len(), 3);
        let last = &r.projections[2];
        assert_eq!(last.npv_plant.to_bits(), r.npv_plant.to_bits());
        assert_eq!(last.roi_smart.to_bits(), r.roi_smart.to_bits());
    }

    #[test]
    fn horizons_are_independent_recomputations() {
        let engine = ProjectionEngine::default();
        let inputs = sample_inputs();
        let r = engine.calculate(&inputs);
        for p in &r.projections {
            assert_eq!(&engine.project(&inputs, p.years), p);
        }
    }

    #[test]
    fn totals_are_annual_times_lifespan() {
        let r = ProjectionEngine::default().calculate(&sample_inputs());
        assert_eq!(r.total_plant_revenue, r.annual_plant_revenue * 25.0);
        assert_eq!(r.total_smart_revenue, r.annual_smart_savings * 25.0);
    }

    #[test]
    fn custom_horizon_order_is_preserved() {
        let engine = ProjectionEngine::new(vec![3, 1, 30]);
        let r = engine.calculate(&sample_inputs());
        let years: Vec<u32> = r.projections.iter().map(|p| p.years).collect();
        assert_eq!(years, vec![3, 1]);
    }
}
