//! Tunable assumptions and input defaults, loaded from TOML.

use crate::error::{Result, TcoError};
use crate::maintenance::DEFAULT_SUPPLIED_COST_GROWTH;
use crate::observability::LogFormat;
use crate::validation::require_years;
use crate::vehicle::FuelType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Electric-only miles assume this many full charges per day
pub const DEFAULT_CHARGES_PER_DAY: f64 = 1.5;

/// Numbers the calculators depend on beyond the vehicle record itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub plugin_hybrid_charges_per_day: f64,
    pub supplied_maintenance_growth: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            plugin_hybrid_charges_per_day: DEFAULT_CHARGES_PER_DAY,
            supplied_maintenance_growth: DEFAULT_SUPPLIED_COST_GROWTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPriceDefaults {
    pub per_gallon: f64,
    pub per_kwh: f64,
}

impl FuelPriceDefaults {
    /// Price to assume when the user leaves it blank. Plug-in hybrids and fuel
    /// cell vehicles have no sensible default and must be priced explicitly.
    pub fn price_for(&self, fuel_type: FuelType) -> Option<f64> {
        match fuel_type {
            FuelType::Electric => Some(self.per_kwh),
            FuelType::Gasoline | FuelType::Diesel | FuelType::Hybrid => Some(self.per_gallon),
            FuelType::PluginHybrid | FuelType::FuelCell => None,
        }
    }
}

impl Default for FuelPriceDefaults {
    fn default() -> Self {
        Self {
            per_gallon: 3.50,
            per_kwh: 0.14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginHybridConfig {
    pub charges_per_day: f64,
}

impl Default for PluginHybridConfig {
    fn default() -> Self {
        Self {
            charges_per_day: DEFAULT_CHARGES_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    pub supplied_cost_growth: f64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            supplied_cost_growth: DEFAULT_SUPPLIED_COST_GROWTH,
        }
    }
}

/// Values a blank input form starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub annual_mileage: f64,
    pub years_of_ownership: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            annual_mileage: 12_000.0,
            years_of_ownership: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcoConfig {
    pub fuel_prices: FuelPriceDefaults,
    pub plugin_hybrid: PluginHybridConfig,
    pub maintenance: MaintenanceConfig,
    pub form: FormDefaults,
    pub logging: LoggingConfig,
}

impl TcoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TcoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TcoError::InvalidConfig(format!("cannot serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("fuel_prices.per_gallon", self.fuel_prices.per_gallon),
            ("fuel_prices.per_kwh", self.fuel_prices.per_kwh),
            ("plugin_hybrid.charges_per_day", self.plugin_hybrid.charges_per_day),
            ("form.annual_mileage", self.form.annual_mileage),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TcoError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    key, value
                )));
            }
        }

        let growth = self.maintenance.supplied_cost_growth;
        if !growth.is_finite() || growth < 0.0 {
            return Err(TcoError::InvalidConfig(format!(
                "maintenance.supplied_cost_growth must not be negative, got {}",
                growth
            )));
        }

        require_years("form.years_of_ownership", self.form.years_of_ownership)
            .map_err(|e| TcoError::InvalidConfig(e.to_string()))?;

        Ok(())
    }

    pub fn assumptions(&self) -> Assumptions {
        Assumptions {
            plugin_hybrid_charges_per_day: self.plugin_hybrid.charges_per_day,
            supplied_maintenance_growth: self.maintenance.supplied_cost_growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TcoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fuel_prices.price_for(FuelType::Gasoline), Some(3.50));
        assert_eq!(config.fuel_prices.price_for(FuelType::Electric), Some(0.14));
        assert_eq!(config.fuel_prices.price_for(FuelType::FuelCell), None);
        assert_eq!(config.assumptions(), Assumptions::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TcoConfig::from_toml_str(
            r#"
            [fuel_prices]
            per_kwh = 0.21

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.fuel_prices.per_kwh, 0.21);
        assert_eq!(config.fuel_prices.per_gallon, 3.50);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.form.years_of_ownership, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = TcoConfig::from_toml_str("[fuel_prices]\nper_gallon = 0.0\n").unwrap_err();
        assert!(matches!(err, TcoError::InvalidConfig(_)));

        let err = TcoConfig::from_toml_str("[maintenance]\nsupplied_cost_growth = -0.1\n").unwrap_err();
        assert!(matches!(err, TcoError::InvalidConfig(_)));

        let err = TcoConfig::from_toml_str("[form]\nyears_of_ownership = 0\n").unwrap_err();
        assert!(matches!(err, TcoError::InvalidConfig(_)));

        let err = TcoConfig::from_toml_str("[form]\nyears_of_ownership = 500\n").unwrap_err();
        assert!(err.to_string().contains("at most 100"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TcoConfig::from_toml_str("[fuel_prices\n").unwrap_err();
        assert!(matches!(err, TcoError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[plugin_hybrid]\ncharges_per_day = 1.0").unwrap();
        let config = TcoConfig::load(file.path()).unwrap();
        assert_eq!(config.assumptions().plugin_hybrid_charges_per_day, 1.0);

        let missing = TcoConfig::load(Path::new("/nonexistent/tco.toml")).unwrap_err();
        assert!(matches!(missing, TcoError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = TcoConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(TcoConfig::from_toml_str(&text).unwrap(), config);
    }
}
