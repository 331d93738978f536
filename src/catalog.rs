//! Plant-type unit costs and regional cost multipliers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lookup tables used to resolve catalog keys in raw inputs.
///
/// Plant-type values are capital cost per MW of nameplate capacity; region
/// values are dimensionless multipliers applied on top of that cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    /// Plant type key → cost per MW.
    pub plant_types: BTreeMap<String, f64>,
    /// Region key → cost multiplier.
    pub regions: BTreeMap<String, f64>,
}

impl Default for Catalog {
    fn default() -> Self {
        let plant_types = [
            ("coal", 3_600_000.0),
            ("natural_gas", 1_000_000.0),
            ("nuclear", 6_500_000.0),
            ("hydro", 2_800_000.0),
            ("wind", 1_500_000.0),
            ("solar_pv", 1_200_000.0),
        ];
        let regions = [
            ("north_america", 1.0),
            ("europe", 1.15),
            ("asia_pacific", 0.85),
            ("latin_america", 0.95),
            ("africa", 1.1),
            ("middle_east", 0.9),
        ];
        Self {
            plant_types: plant_types
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            regions: regions.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

impl Catalog {
    /// Cost per MW for a plant type key.
    pub fn plant_cost(&self, key: &str) -> Option<f64> {
        self.plant_types.get(key).copied()
    }

    /// Cost multiplier for a region key.
    pub fn region_multiplier(&self, key: &str) -> Option<f64> {
        self.regions.get(key).copied()
    }
}
