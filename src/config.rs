//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::finance::engine::{DEFAULT_HORIZONS, ProjectionEngine};
use crate::finance::inputs::{InvestmentInputs, RawField, RawInputs};

/// Top-level scenario configuration parsed from TOML.
///
/// All sections have defaults. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or start from a preset with
/// [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Raw calculator inputs, as typed into the form.
    #[serde(default)]
    pub inputs: RawInputs,
    /// Plant-type and region catalogs.
    #[serde(default)]
    pub catalog: Catalog,
    /// Projection table settings.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Projection table settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Horizons in years, strictly increasing.
    pub horizons: Vec<u32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizons: DEFAULT_HORIZONS.to_vec(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"projection.horizons"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

fn num(v: f64) -> Option<RawField> {
    Some(RawField::Number(v))
}

fn key(k: &str) -> Option<RawField> {
    Some(RawField::from(k))
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a 100 MW gas plant against a meter
    /// roll-out on 800 MW of existing production.
    pub fn baseline() -> Self {
        Self {
            inputs: RawInputs {
                additional_capacity_mw: num(100.0),
                current_prod_mw: num(800.0),
                use_custom_cost: false,
                custom_cost_per_mw: None,
                plant_type: key("natural_gas"),
                region: key("north_america"),
                infrastructure_cost: num(25_000_000.0),
                meter_count: num(200_000.0),
                meter_unit_cost: num(150.0),
                users_per_meter: num(1.0),
                hours_per_day: num(12.0),
                tariff: num(0.12),
                savings_percent: num(5.0),
                discount_rate: num(8.0),
                lifespan_years: num(25.0),
            },
            ..Self::default()
        }
    }

    /// Returns the custom-cost preset: user-quoted solar farm cost, short lifespan.
    pub fn custom_cost() -> Self {
        let base = Self::baseline();
        Self {
            inputs: RawInputs {
                additional_capacity_mw: num(40.0),
                use_custom_cost: true,
                custom_cost_per_mw: num(950_000.0),
                hours_per_day: num(6.0),
                lifespan_years: num(15.0),
                ..base.inputs
            },
            ..base
        }
    }

    /// Returns the dense-metro preset: many shared meters, high savings.
    pub fn dense_metro() -> Self {
        let base = Self::baseline();
        Self {
            inputs: RawInputs {
                additional_capacity_mw: num(250.0),
                current_prod_mw: num(3_000.0),
                plant_type: key("coal"),
                region: key("europe"),
                infrastructure_cost: num(60_000_000.0),
                meter_count: num(1_500_000.0),
                meter_unit_cost: num(120.0),
                users_per_meter: num(3.0),
                hours_per_day: num(16.0),
                tariff: num(0.18),
                savings_percent: num(8.0),
                discount_rate: num(6.5),
                lifespan_years: num(30.0),
                ..base.inputs
            },
            ..base
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "custom_cost", "dense_metro"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "custom_cost" => Ok(Self::custom_cost()),
            "dense_metro" => Ok(Self::dense_metro()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded scenario file");
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Applies a `key=value` override to the raw inputs.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the override is not of the form
    /// `key=value` or names an unknown input.
    pub fn apply_override(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (k, v) = assignment.split_once('=').ok_or_else(|| ConfigError {
            field: "input".to_string(),
            message: format!("expected key=value, got \"{assignment}\""),
        })?;
        let k = k.trim();
        self.inputs.set(k, v).map_err(|message| ConfigError {
            field: format!("inputs.{k}"),
            message,
        })
    }

    /// Validates catalogs and horizons and returns a list of errors.
    ///
    /// Inputs are never rejected here: they are coerced during
    /// normalization. Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let horizons = &self.projection.horizons;
        if horizons.is_empty() {
            errors.push(ConfigError {
                field: "projection.horizons".into(),
                message: "must not be empty".into(),
            });
        }
        if horizons.contains(&0) {
            errors.push(ConfigError {
                field: "projection.horizons".into(),
                message: "every horizon must be > 0".into(),
            });
        }
        if horizons.windows(2).any(|w| w[0] >= w[1]) {
            errors.push(ConfigError {
                field: "projection.horizons".into(),
                message: "must be strictly increasing".into(),
            });
        }

        for (name, value) in &self.catalog.plant_types {
            if !value.is_finite() || *value < 0.0 {
                errors.push(ConfigError {
                    field: format!("catalog.plant_types.{name}"),
                    message: "must be a finite value >= 0".into(),
                });
            }
        }
        for (name, value) in &self.catalog.regions {
            if !value.is_finite() || *value < 0.0 {
                errors.push(ConfigError {
                    field: format!("catalog.regions.{name}"),
                    message: "must be a finite value >= 0".into(),
                });
            }
        }

        errors
    }

    /// Catalog keys referenced by the inputs but missing from the catalog.
    ///
    /// These resolve to zero; callers may want to warn about them.
    pub fn unresolved_keys(&self) -> Vec<String> {
        let mut missing = Vec::new();
        let checks = [
            ("plant_type", &self.inputs.plant_type, &self.catalog.plant_types),
            ("region", &self.inputs.region, &self.catalog.regions),
        ];
        for (field, raw, table) in checks {
            if let Some(RawField::Text(k)) = raw {
                let k = k.trim();
                if k.parse::<f64>().is_err() && !table.contains_key(k) {
                    missing.push(format!("{field}={k}"));
                }
            }
        }
        missing
    }

    /// Normalizes the raw inputs against this scenario's catalog.
    pub fn investment_inputs(&self) -> InvestmentInputs {
        self.inputs.normalize(&self.catalog)
    }

    /// Builds an engine reporting this scenario's horizons.
    pub fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.projection.horizons.clone())
    }
}
