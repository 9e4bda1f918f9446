use crate::error::Result;
use crate::validation::{
    require_non_negative, require_positive, require_years, validate_name, ValidationError,
};
use crate::vehicle::{FuelType, PowertrainType, SizeClass};
use serde::{Deserialize, Serialize};

/// One vehicle as described by the user. Numeric fields are already parsed;
/// nothing here has been checked until `validate` runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub name: String,
    pub purchase_price: f64,
    pub fuel_type: FuelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powertrain_type: Option<PowertrainType>,
    /// Miles per gallon, or miles per kWh for electric
    pub fuel_efficiency: f64,
    /// Price per gallon, or per kWh for electric
    pub fuel_price: f64,
    pub annual_mileage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_cost: Option<f64>,
    pub years_of_ownership: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_class: Option<SizeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electric_range: Option<f64>,
}

impl VehicleRecord {
    pub fn new(
        name: impl Into<String>,
        purchase_price: f64,
        fuel_type: FuelType,
        fuel_efficiency: f64,
        fuel_price: f64,
        annual_mileage: f64,
        years_of_ownership: u32,
    ) -> Self {
        Self {
            name: name.into(),
            purchase_price,
            fuel_type,
            powertrain_type: None,
            fuel_efficiency,
            fuel_price,
            annual_mileage,
            insurance_cost: None,
            maintenance_cost: None,
            years_of_ownership,
            size_class: None,
            electric_range: None,
        }
    }

    pub fn with_insurance(mut self, annual_cost: f64) -> Self {
        self.insurance_cost = Some(annual_cost);
        self
    }

    pub fn with_maintenance(mut self, annual_cost: f64) -> Self {
        self.maintenance_cost = Some(annual_cost);
        self
    }

    pub fn with_powertrain(mut self, powertrain: PowertrainType) -> Self {
        self.powertrain_type = Some(powertrain);
        self
    }

    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.size_class = Some(size_class);
        self
    }

    pub fn with_electric_range(mut self, miles: f64) -> Self {
        self.electric_range = Some(miles);
        self
    }

    /// Explicit powertrain if given, otherwise the one implied by the fuel type
    pub fn effective_powertrain(&self) -> PowertrainType {
        self.powertrain_type
            .unwrap_or_else(|| self.fuel_type.default_powertrain())
    }

    pub fn effective_size_class(&self) -> SizeClass {
        self.size_class.unwrap_or(SizeClass::MidsizeSedan)
    }

    /// User-supplied maintenance figure, if any. Zero counts as "not supplied".
    pub fn supplied_maintenance(&self) -> Option<f64> {
        self.maintenance_cost.filter(|cost| *cost > 0.0)
    }

    /// Checks every field the cost model depends on
    pub fn validate(&self) -> Result<()> {
        validate_name("name", &self.name)?;
        self.validate_for_estimate()?;
        require_positive("fuel_efficiency", self.fuel_efficiency)?;
        require_positive("fuel_price", self.fuel_price)?;

        if let Some(insurance) = self.insurance_cost {
            require_non_negative("insurance_cost", insurance)?;
        }
        if let Some(maintenance) = self.maintenance_cost {
            require_non_negative("maintenance_cost", maintenance)?;
        }

        match (self.fuel_type, self.electric_range) {
            (FuelType::PluginHybrid, None) => {
                return Err(ValidationError::Missing {
                    field: "electric_range",
                    reason: "for plugin_hybrid vehicles",
                }
                .into());
            }
            (_, Some(range)) => {
                require_non_negative("electric_range", range)?;
            }
            (_, None) => {}
        }

        Ok(())
    }

    /// Subset needed by the maintenance estimator
    pub fn validate_for_estimate(&self) -> Result<()> {
        require_positive("purchase_price", self.purchase_price)?;
        require_positive("annual_mileage", self.annual_mileage)?;
        require_years("years_of_ownership", self.years_of_ownership)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sedan() -> VehicleRecord {
        VehicleRecord::new("Sedan", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5)
            .with_insurance(1_200.0)
            .with_maintenance(800.0)
    }

    #[test]
    fn test_valid_record() {
        assert!(sedan().validate().is_ok());
    }

    #[test]
    fn test_denominators_must_be_positive() {
        let mut record = sedan();
        record.fuel_efficiency = 0.0;
        assert!(record.validate().unwrap_err().is_invalid_input());

        let mut record = sedan();
        record.annual_mileage = -1.0;
        assert!(record.validate().unwrap_err().is_invalid_input());

        let mut record = sedan();
        record.years_of_ownership = 0;
        assert!(record.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_negative_costs_rejected() {
        let record = sedan().with_insurance(-5.0);
        assert!(record.validate().is_err());
        let record = sedan().with_maintenance(-5.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut record = sedan();
        record.name = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_plugin_hybrid_requires_range() {
        let record = VehicleRecord::new("Prime", 35_000.0, FuelType::PluginHybrid, 50.0, 3.5, 12_000.0, 5);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("electric_range"));
        assert!(record.with_electric_range(40.0).validate().is_ok());
    }

    #[test]
    fn test_effective_powertrain() {
        let record = VehicleRecord::new("EV", 40_000.0, FuelType::Electric, 3.5, 0.11, 12_000.0, 5);
        assert_eq!(record.effective_powertrain(), PowertrainType::Bev);
        let record = record.with_powertrain(PowertrainType::Fcev);
        assert_eq!(record.effective_powertrain(), PowertrainType::Fcev);
    }

    #[test]
    fn test_zero_maintenance_is_not_supplied() {
        assert_eq!(sedan().supplied_maintenance(), Some(800.0));
        assert_eq!(sedan().with_maintenance(0.0).supplied_maintenance(), None);
    }

    #[test]
    fn test_deserialize_with_optional_fields() {
        let json = r#"{
            "name": "Truck",
            "purchase_price": 55000,
            "fuel_type": "diesel",
            "fuel_efficiency": 18,
            "fuel_price": 4.1,
            "annual_mileage": 20000,
            "years_of_ownership": 7,
            "size_class": "pickup"
        }"#;
        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fuel_type, FuelType::Diesel);
        assert_eq!(record.size_class, Some(SizeClass::Pickup));
        assert_eq!(record.insurance_cost, None);
        assert!(record.validate().is_ok());
    }
}
