//! Optional-value resolution ahead of the cost model.
//!
//! Every default (estimated maintenance, zero insurance, powertrain implied by fuel
//! type) is decided here once, so the formulas downstream only see plain numbers.

use crate::error::Result;
use crate::maintenance::MaintenanceEstimator;
use crate::vehicle::{FuelType, PowertrainType, SizeClass, VehicleId, VehicleRecord};
use serde::{Deserialize, Serialize};

/// Where the annual maintenance figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceSource {
    Supplied,
    Estimated,
}

/// A validated record with every optional figure decided. Only `resolve` builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ResolvedVehicle {
    pub id: VehicleId,
    pub name: String,
    pub purchase_price: f64,
    pub fuel_type: FuelType,
    pub powertrain: PowertrainType,
    pub size_class: SizeClass,
    pub fuel_efficiency: f64,
    pub fuel_price: f64,
    pub annual_mileage: f64,
    pub years_of_ownership: u32,
    pub insurance_per_year: f64,
    pub maintenance_per_year: f64,
    pub maintenance_source: MaintenanceSource,
    pub electric_range: Option<f64>,
}

impl ResolvedVehicle {
    /// Validate `record` and fill in every optional figure
    pub fn resolve(
        id: VehicleId,
        record: &VehicleRecord,
        estimator: &MaintenanceEstimator,
    ) -> Result<Self> {
        record.validate()?;

        let (maintenance_per_year, maintenance_source) = match record.supplied_maintenance() {
            Some(cost) => (cost, MaintenanceSource::Supplied),
            None => (estimator.annual_cost(record)?, MaintenanceSource::Estimated),
        };

        crate::log_vehicle!(
            debug,
            record.name.as_str(),
            maintenance = maintenance_per_year,
            source = ?maintenance_source,
            "resolved vehicle record"
        );

        Ok(Self {
            id,
            name: record.name.clone(),
            purchase_price: record.purchase_price,
            fuel_type: record.fuel_type,
            powertrain: record.effective_powertrain(),
            size_class: record.effective_size_class(),
            fuel_efficiency: record.fuel_efficiency,
            fuel_price: record.fuel_price,
            annual_mileage: record.annual_mileage,
            years_of_ownership: record.years_of_ownership,
            insurance_per_year: record.insurance_cost.unwrap_or(0.0),
            maintenance_per_year,
            maintenance_source,
            electric_range: record.electric_range,
        })
    }

    pub fn years(&self) -> f64 {
        self.years_of_ownership as f64
    }

    pub fn total_miles(&self) -> f64 {
        self.annual_mileage * self.years()
    }
}

/// Resolve a batch, assigning identities by input position
pub fn resolve_all(
    records: &[VehicleRecord],
    estimator: &MaintenanceEstimator,
) -> Result<Vec<ResolvedVehicle>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| ResolvedVehicle::resolve(VehicleId(index), record, estimator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_maintenance_kept() {
        let record = VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5)
            .with_maintenance(800.0);
        let resolved =
            ResolvedVehicle::resolve(VehicleId(0), &record, &MaintenanceEstimator::default()).unwrap();
        assert_eq!(resolved.maintenance_per_year, 800.0);
        assert_eq!(resolved.maintenance_source, MaintenanceSource::Supplied);
        assert_eq!(resolved.insurance_per_year, 0.0);
        assert_eq!(resolved.powertrain, PowertrainType::IceSi);
        assert_eq!(resolved.size_class, SizeClass::MidsizeSedan);
    }

    #[test]
    fn test_missing_maintenance_estimated() {
        let record = VehicleRecord::new("B", 40_000.0, FuelType::Electric, 3.5, 0.11, 12_000.0, 5)
            .with_maintenance(0.0);
        let estimator = MaintenanceEstimator::default();
        let resolved = ResolvedVehicle::resolve(VehicleId(1), &record, &estimator).unwrap();
        assert_eq!(resolved.maintenance_source, MaintenanceSource::Estimated);
        assert_eq!(resolved.maintenance_per_year, estimator.annual_cost(&record).unwrap());
        assert!(resolved.maintenance_per_year > 0.0);
    }

    #[test]
    fn test_resolve_all_assigns_positions() {
        let records = vec![
            VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5),
            VehicleRecord::new("B", 40_000.0, FuelType::Electric, 3.5, 0.11, 12_000.0, 5),
        ];
        let resolved = resolve_all(&records, &MaintenanceEstimator::default()).unwrap();
        assert_eq!(resolved[0].id, VehicleId(0));
        assert_eq!(resolved[1].id, VehicleId(1));
    }

    #[test]
    fn test_resolve_all_stops_on_invalid_record() {
        let records = vec![
            VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5),
            VehicleRecord::new("B", 40_000.0, FuelType::Electric, 0.0, 0.11, 12_000.0, 5),
        ];
        let err = resolve_all(&records, &MaintenanceEstimator::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
