//! Annual revenue and savings streams.

use super::inputs::InvestmentInputs;

/// Kilowatts per megawatt.
pub const KW_PER_MW: f64 = 1_000.0;
/// Days per year used to annualize daily energy.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Annual energy value of `power_mw` running `hours_per_day` at `tariff`.
fn annual_energy_value(power_mw: f64, hours_per_day: f64, tariff: f64) -> f64 {
    power_mw * KW_PER_MW * hours_per_day * tariff * DAYS_PER_YEAR
}

/// Yearly revenue of the new plant, based on the added capacity.
pub fn annual_plant_revenue(inputs: &InvestmentInputs) -> f64 {
    annual_energy_value(inputs.additional_capacity_mw, inputs.hours_per_day, inputs.tariff)
}

/// Yearly smart-grid savings: a share of the value of *existing* production.
pub fn annual_smart_savings(inputs: &InvestmentInputs) -> f64 {
    annual_energy_value(inputs.current_prod_mw, inputs.hours_per_day, inputs.tariff)
        * (inputs.savings_percent / 100.0)
}
