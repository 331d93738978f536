//! Raw form values and their lenient normalization into [`InvestmentInputs`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;

/// Upper bound applied to the lifespan so a single request cannot stall
/// the year-by-year accumulator.
pub const MAX_LIFESPAN_YEARS: u32 = 1_000;

/// One raw field value as it arrives from a form, a JSON body or a TOML file.
///
/// Any value is accepted: `12`, `12.5`, `"12.5"` and `true` map to their
/// variants, everything else (objects, arrays, numbers outside the `f64`
/// range) lands in [`RawField::Other`]. Only [`RawField::coerce`] decides
/// what the value means.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawField {
    /// Numeric value.
    Number(f64),
    /// Textual value, possibly a catalog key.
    Text(String),
    /// Boolean value (always coerces to zero).
    Flag(bool),
    /// Anything else, kept for round trips only (coerces to zero).
    Other(Value),
}

impl<'de> Deserialize<'de> for RawField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Value> for RawField {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            Value::Bool(b) => Self::Flag(b),
            other => Self::Other(other),
        }
    }
}

impl RawField {
    /// Returns the finite number this field holds, if any.
    ///
    /// Text is trimmed before parsing. Non-finite numbers (`NaN`, `inf`)
    /// are rejected.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Flag(_) | Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Reads the field as a checkbox state.
    ///
    /// Booleans are taken as is, numbers are set when non-zero and text
    /// follows the `use_custom_cost` rules of [`RawInputs::set`]. Anything
    /// unreadable is unset.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => parse_flag(s).unwrap_or(false),
            Self::Number(_) | Self::Other(_) => self.as_number().is_some_and(|v| v != 0.0),
        }
    }

    /// Coerces the field to a finite number, falling back to `0.0`.
    pub fn coerce(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }
}

impl From<f64> for RawField {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Unvalidated calculator inputs, one optional field per form control.
///
/// Missing fields and fields that do not hold a finite number are
/// indistinguishable once normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawInputs {
    /// New plant nameplate capacity (MW).
    pub additional_capacity_mw: Option<RawField>,
    /// Existing production capacity (MW).
    pub current_prod_mw: Option<RawField>,
    /// Use `custom_cost_per_mw` instead of the catalogs.
    #[serde(deserialize_with = "lenient_flag")]
    pub use_custom_cost: bool,
    /// User-supplied cost per MW.
    pub custom_cost_per_mw: Option<RawField>,
    /// Plant type: a catalog key or the cost per MW itself.
    pub plant_type: Option<RawField>,
    /// Region: a catalog key or the multiplier itself.
    pub region: Option<RawField>,
    /// Smart-grid infrastructure cost.
    pub infrastructure_cost: Option<RawField>,
    /// Number of smart meters.
    pub meter_count: Option<RawField>,
    /// Cost per smart meter.
    pub meter_unit_cost: Option<RawField>,
    /// Users sharing one meter.
    pub users_per_meter: Option<RawField>,
    /// Operating hours per day.
    pub hours_per_day: Option<RawField>,
    /// Tariff per kWh.
    pub tariff: Option<RawField>,
    /// Smart-grid savings (%).
    pub savings_percent: Option<RawField>,
    /// Annual discount rate (%).
    pub discount_rate: Option<RawField>,
    /// Evaluation lifespan (years).
    pub lifespan_years: Option<RawField>,
}

impl RawInputs {
    /// Field names accepted by [`RawInputs::set`].
    pub const FIELDS: &[&str] = &[
        "additional_capacity_mw",
        "current_prod_mw",
        "use_custom_cost",
        "custom_cost_per_mw",
        "plant_type",
        "region",
        "infrastructure_cost",
        "meter_count",
        "meter_unit_cost",
        "users_per_meter",
        "hours_per_day",
        "tariff",
        "savings_percent",
        "discount_rate",
        "lifespan_years",
    ];

    /// Sets a field from its textual form value.
    ///
    /// `use_custom_cost` accepts `true`/`false`, `on`/`off`, `yes`/`no`
    /// and `1`/`0`. Every other field stores the text as is and coerces
    /// it later.
    ///
    /// # Errors
    ///
    /// Returns the list of known fields if `key` is not one of them, or a
    /// message if the `use_custom_cost` flag cannot be read.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let raw = Some(RawField::from(value));
        match key {
            "additional_capacity_mw" => self.additional_capacity_mw = raw,
            "current_prod_mw" => self.current_prod_mw = raw,
            "use_custom_cost" => self.use_custom_cost = parse_flag(value)?,
            "custom_cost_per_mw" => self.custom_cost_per_mw = raw,
            "plant_type" => self.plant_type = raw,
            "region" => self.region = raw,
            "infrastructure_cost" => self.infrastructure_cost = raw,
            "meter_count" => self.meter_count = raw,
            "meter_unit_cost" => self.meter_unit_cost = raw,
            "users_per_meter" => self.users_per_meter = raw,
            "hours_per_day" => self.hours_per_day = raw,
            "tariff" => self.tariff = raw,
            "savings_percent" => self.savings_percent = raw,
            "discount_rate" => self.discount_rate = raw,
            "lifespan_years" => self.lifespan_years = raw,
            other => {
                return Err(format!(
                    "unknown input \"{other}\", available: {}",
                    Self::FIELDS.join(", ")
                ));
            }
        }
        Ok(())
    }

    /// Normalizes every field into an [`InvestmentInputs`] record.
    ///
    /// Never fails: invalid or missing values become `0.0`, except
    /// `users_per_meter` which becomes `1.0`. `plant_type` and `region` are
    /// resolved through `catalog` when they hold a key rather than a number;
    /// unknown keys resolve to `0.0`.
    pub fn normalize(&self, catalog: &Catalog) -> InvestmentInputs {
        InvestmentInputs {
            additional_capacity_mw: number(&self.additional_capacity_mw),
            current_prod_mw: number(&self.current_prod_mw),
            use_custom_cost: self.use_custom_cost,
            custom_cost_per_mw: number(&self.custom_cost_per_mw),
            plant_type_cost_per_mw: catalog_value(&self.plant_type, |k| catalog.plant_cost(k)),
            region_multiplier: catalog_value(&self.region, |k| catalog.region_multiplier(k)),
            infrastructure_cost: number(&self.infrastructure_cost),
            meter_count: number(&self.meter_count),
            meter_unit_cost: number(&self.meter_unit_cost),
            users_per_meter: divisor(&self.users_per_meter),
            hours_per_day: number(&self.hours_per_day),
            tariff: number(&self.tariff),
            savings_percent: number(&self.savings_percent),
            discount_rate: number(&self.discount_rate),
            lifespan_years: years(&self.lifespan_years),
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" | "" => Ok(false),
        other => Err(format!("use_custom_cost: cannot read \"{other}\" as a flag")),
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let field = Option::<RawField>::deserialize(deserializer)?;
    Ok(field.is_some_and(|f| f.as_flag()))
}

fn number(field: &Option<RawField>) -> f64 {
    field.as_ref().map_or(0.0, RawField::coerce)
}

fn divisor(field: &Option<RawField>) -> f64 {
    match field.as_ref().and_then(RawField::as_number) {
        Some(v) if v > 0.0 => v,
        _ => 1.0,
    }
}

fn years(field: &Option<RawField>) -> u32 {
    let v = number(field);
    if v <= 0.0 {
        return 0;
    }
    if v >= f64::from(MAX_LIFESPAN_YEARS) + 1.0 {
        tracing::warn!(
            requested = v,
            cap = MAX_LIFESPAN_YEARS,
            "lifespan capped, totals cover the capped years only"
        );
    }
    (v.trunc() as u32).min(MAX_LIFESPAN_YEARS)
}

fn catalog_value(field: &Option<RawField>, lookup: impl Fn(&str) -> Option<f64>) -> f64 {
    let Some(field) = field else {
        return 0.0;
    };
    if let Some(v) = field.as_number() {
        return v;
    }
    match field {
        RawField::Text(key) => lookup(key.trim()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Normalized calculator inputs. Every numeric field is finite.
///
/// Built once per calculation with [`RawInputs::normalize`] (or directly in
/// tests) and passed by reference into the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    /// New plant nameplate capacity (MW).
    pub additional_capacity_mw: f64,
    /// Existing production capacity subject to smart-grid savings (MW).
    pub current_prod_mw: f64,
    /// Selects `custom_cost_per_mw` with a region multiplier of 1.
    pub use_custom_cost: bool,
    /// User-supplied cost per MW.
    pub custom_cost_per_mw: f64,
    /// Catalog cost per MW for the chosen plant type.
    pub plant_type_cost_per_mw: f64,
    /// Catalog multiplier for the chosen region.
    pub region_multiplier: f64,
    /// Fixed smart-grid infrastructure cost.
    pub infrastructure_cost: f64,
    /// Number of smart meters.
    pub meter_count: f64,
    /// Cost per smart meter.
    pub meter_unit_cost: f64,
    /// Divisor of total meter cost, always > 0.
    pub users_per_meter: f64,
    /// Operating hours per day.
    pub hours_per_day: f64,
    /// Revenue per kWh.
    pub tariff: f64,
    /// Savings relative to baseline production value (%).
    pub savings_percent: f64,
    /// Annual discount rate (%).
    pub discount_rate: f64,
    /// Accumulation period (years).
    pub lifespan_years: u32,
}

impl InvestmentInputs {
    /// Returns `(unit_cost, region_multiplier)` according to `use_custom_cost`.
    pub fn unit_cost(&self) -> (f64, f64) {
        if self.use_custom_cost {
            (self.custom_cost_per_mw, 1.0)
        } else {
            (self.plant_type_cost_per_mw, self.region_multiplier)
        }
    }

    /// Discount rate as a fraction (`8.0` % becomes `0.08`).
    pub fn discount_fraction(&self) -> f64 {
        self.discount_rate / 100.0
    }
}
