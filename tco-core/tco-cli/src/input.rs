//! Vehicle files as users write them. Blank fuel price, mileage and horizon
//! are filled from the configuration before records reach the core.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tco_core::config::TcoConfig;
use tco_core::{FuelType, PowertrainType, SizeClass, VehicleRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleEntry {
    pub name: String,
    pub purchase_price: f64,
    pub fuel_type: FuelType,
    #[serde(default)]
    pub powertrain_type: Option<PowertrainType>,
    pub fuel_efficiency: f64,
    #[serde(default)]
    pub fuel_price: Option<f64>,
    #[serde(default)]
    pub annual_mileage: Option<f64>,
    #[serde(default)]
    pub insurance_cost: Option<f64>,
    #[serde(default)]
    pub maintenance_cost: Option<f64>,
    #[serde(default)]
    pub years_of_ownership: Option<u32>,
    #[serde(default)]
    pub size_class: Option<SizeClass>,
    #[serde(default)]
    pub electric_range: Option<f64>,
}

impl VehicleEntry {
    pub fn into_record(self, config: &TcoConfig) -> Result<VehicleRecord> {
        let fuel_price = match self.fuel_price {
            Some(price) => price,
            None => match config.fuel_prices.price_for(self.fuel_type) {
                Some(price) => price,
                None => bail!(
                    "vehicle '{}': fuel_price is required for {} vehicles",
                    self.name,
                    self.fuel_type
                ),
            },
        };

        Ok(VehicleRecord {
            name: self.name,
            purchase_price: self.purchase_price,
            fuel_type: self.fuel_type,
            powertrain_type: self.powertrain_type,
            fuel_efficiency: self.fuel_efficiency,
            fuel_price,
            annual_mileage: self.annual_mileage.unwrap_or(config.form.annual_mileage),
            insurance_cost: self.insurance_cost,
            maintenance_cost: self.maintenance_cost,
            years_of_ownership: self
                .years_of_ownership
                .unwrap_or(config.form.years_of_ownership),
            size_class: self.size_class,
            electric_range: self.electric_range,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VehicleFile {
    #[serde(default)]
    vehicles: Vec<VehicleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonInput {
    List(Vec<VehicleEntry>),
    File(VehicleFile),
}

pub fn parse_entries(content: &str, is_json: bool) -> Result<Vec<VehicleEntry>> {
    if is_json {
        let input: JsonInput = serde_json::from_str(content).context("invalid vehicle JSON")?;
        Ok(match input {
            JsonInput::List(entries) => entries,
            JsonInput::File(file) => file.vehicles,
        })
    } else {
        let file: VehicleFile = toml::from_str(content).context("invalid vehicle TOML")?;
        Ok(file.vehicles)
    }
}

pub fn load_vehicles(path: &Path, config: &TcoConfig) -> Result<Vec<VehicleRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let entries = parse_entries(&content, is_json)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if entries.is_empty() {
        bail!("{} contains no vehicles", path.display());
    }
    tracing::debug!(path = %path.display(), vehicles = entries.len(), "loaded vehicle file");

    entries
        .into_iter()
        .map(|entry| entry.into_record(config))
        .collect()
}
