//! Capital expenditure for both investment options.

use super::inputs::InvestmentInputs;

/// Capital cost of the new plant: capacity × unit cost × region multiplier.
///
/// With `use_custom_cost` the custom unit cost is used and the region
/// multiplier is 1. A zero catalog cost yields zero capex; the ROI guard in
/// [`super::horizon::roi_pct`] takes care of the division.
pub fn plant_capex(inputs: &InvestmentInputs) -> f64 {
    let (unit_cost, region_multiplier) = inputs.unit_cost();
    inputs.additional_capacity_mw * unit_cost * region_multiplier
}

/// Capital cost of the smart-grid upgrade: infrastructure plus shared meters.
///
/// A non-positive `users_per_meter` divides by 1, same as the normalizer.
pub fn smart_grid_capex(inputs: &InvestmentInputs) -> f64 {
    let users = if inputs.users_per_meter > 0.0 {
        inputs.users_per_meter
    } else {
        1.0
    };
    inputs.infrastructure_cost + (inputs.meter_count * inputs.meter_unit_cost) / users
}
