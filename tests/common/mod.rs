//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use grid_invest::finance::inputs::InvestmentInputs;

/// Relative float comparison tolerance.
pub const EPS: f64 = 1e-9;

/// 100 MW gas plant at 1 M/MW against a 55 M smart-grid roll-out on 800 MW,
/// 12 h/day at 0.12 per kWh, 5 % savings, 8 % discount rate, 25 years.
pub fn baseline_inputs() -> InvestmentInputs {
    InvestmentInputs {
        additional_capacity_mw: 100.0,
        current_prod_mw: 800.0,
        use_custom_cost: false,
        custom_cost_per_mw: 0.0,
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
    }
}

/// Inputs where the smart grid is cheaper and earns more than the plant.
pub fn smart_grid_wins_inputs() -> InvestmentInputs {
    InvestmentInputs {
        additional_capacity_mw: 10.0,
        infrastructure_cost: 1_000_000.0,
        meter_count: 0.0,
        lifespan_years: 10,
        ..baseline_inputs()
    }
}

/// Inputs where the smart grid has the larger NPV but a much smaller ROI
/// than a very cheap plant.
pub fn smart_grid_wins_npv_only_inputs() -> InvestmentInputs {
    InvestmentInputs {
        additional_capacity_mw: 1.0,
        use_custom_cost: true,
        custom_cost_per_mw: 1_000.0,
        lifespan_years: 10,
        ..baseline_inputs()
    }
}

/// Asserts two floats agree to a relative tolerance of `EPS`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}
