//! Temperature conversion between Celsius, Fahrenheit, and Kelvin.

use crate::types::{round2, TemperatureConversion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse a unit name, case-insensitively. Accepts full names and single-letter abbreviations.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "celsius" | "c" => Some(Self::Celsius),
            "fahrenheit" | "f" => Some(Self::Fahrenheit),
            "kelvin" | "k" => Some(Self::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit`.
///
/// Unrecognised unit names leave the value unchanged; the converted value is
/// rounded to two decimal places.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> TemperatureConversion {
    let converted = match (TemperatureUnit::parse(from_unit), TemperatureUnit::parse(to_unit)) {
        (Some(from), Some(to)) => to.from_celsius(from.to_celsius(value)),
        _ => {
            tracing::debug!("Unrecognised temperature units {from_unit} -> {to_unit}");
            value
        }
    };

    TemperatureConversion {
        original_value: value,
        original_unit: from_unit.to_string(),
        converted_value: round2(converted),
        converted_unit: to_unit.to_string(),
    }
}
