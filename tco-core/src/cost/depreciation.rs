//! Ownership cost net of resale value.
//!
//! Unlike `CostSummary`, which charges the full purchase price, this view charges
//! only the value lost to depreciation over the horizon.

use super::calculator::CostCalculator;
use crate::error::Result;
use crate::vehicle::{FuelType, ResolvedVehicle, VehicleId, VehicleRecord};
use serde::{Deserialize, Serialize};

const DEFAULT_DEPRECIATION_RATE: f64 = 0.15;

/// Declining-balance rate per year; fuel types not listed use the default
pub const DEPRECIATION_RATES: &[(FuelType, f64)] = &[
    (FuelType::Electric, 0.18),
    (FuelType::Hybrid, 0.16),
    (FuelType::PluginHybrid, 0.16),
];

pub fn depreciation_rate(fuel_type: FuelType) -> f64 {
    DEPRECIATION_RATES
        .iter()
        .find(|(key, _)| *key == fuel_type)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_DEPRECIATION_RATE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciatedCost {
    pub depreciation_rate: f64,
    pub total_depreciation: f64,
    pub residual_value: f64,
    pub annual_depreciation: f64,
    pub annual_fuel_cost: f64,
    pub annual_maintenance_cost: f64,
    pub annual_insurance_cost: f64,
    /// Depreciation plus recurring costs for one year
    pub annual_cost: f64,
    pub cost_per_mile: f64,
    /// Purchase price plus recurring costs, less resale value
    pub net_lifetime_cost: f64,
}

impl CostCalculator {
    pub fn depreciated(&self, vehicle: &ResolvedVehicle) -> DepreciatedCost {
        let summary = self.summarize(vehicle);
        let years = vehicle.years();
        let price = vehicle.purchase_price;

        let rate = depreciation_rate(vehicle.fuel_type);
        let total_depreciation = price * (1.0 - (1.0 - rate).powf(years));
        let residual_value = price - total_depreciation;
        let annual_depreciation = total_depreciation / years;

        let recurring = summary.recurring_cost_per_year();
        let annual_cost = annual_depreciation + recurring;

        DepreciatedCost {
            depreciation_rate: rate,
            total_depreciation,
            residual_value,
            annual_depreciation,
            annual_fuel_cost: summary.fuel_cost_per_year,
            annual_maintenance_cost: summary.maintenance_cost_per_year,
            annual_insurance_cost: summary.insurance_cost_per_year,
            annual_cost,
            cost_per_mile: annual_cost / vehicle.annual_mileage,
            net_lifetime_cost: price + recurring * years - residual_value,
        }
    }
}

/// Depreciation-based ownership cost with default assumptions
pub fn compute_depreciated_cost(record: &VehicleRecord) -> Result<DepreciatedCost> {
    let calculator = CostCalculator::default();
    let vehicle = calculator.resolve(VehicleId(0), record)?;
    Ok(calculator.depreciated(&vehicle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_rates_by_fuel_type() {
        assert_eq!(depreciation_rate(FuelType::Electric), 0.18);
        assert_eq!(depreciation_rate(FuelType::PluginHybrid), 0.16);
        assert_eq!(depreciation_rate(FuelType::Gasoline), 0.15);
        assert_eq!(depreciation_rate(FuelType::FuelCell), 0.15);
    }

    #[test]
    fn test_gasoline_depreciation() {
        let record = VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5)
            .with_insurance(1_200.0)
            .with_maintenance(800.0);
        let cost = compute_depreciated_cost(&record).unwrap();
        // 30000 * (1 - 0.85^5)
        assert!(close(cost.total_depreciation, 16_688.840_625));
        assert!(close(cost.residual_value, 13_311.159_375));
        assert!(close(cost.annual_depreciation, 3_337.768_125));
        assert!(close(cost.annual_cost, 7_017.768_125));
        assert!(close(cost.cost_per_mile, 7_017.768_125 / 12_000.0));
        assert!(close(cost.net_lifetime_cost, 35_088.840_625));
    }

    #[test]
    fn test_net_cost_never_exceeds_full_cost() {
        let record = VehicleRecord::new("B", 40_000.0, FuelType::Electric, 3.5, 0.11, 12_000.0, 8)
            .with_insurance(1_000.0);
        let full = crate::cost::compute_cost_summary(&record).unwrap();
        let net = compute_depreciated_cost(&record).unwrap();
        assert!(net.residual_value > 0.0);
        assert!(net.net_lifetime_cost < full.total_cost);
        assert!(close(full.total_cost - net.net_lifetime_cost, net.residual_value));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let mut record = VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5)
            .with_maintenance(800.0);
        record.years_of_ownership = 3_000_000_000;
        assert!(compute_depreciated_cost(&record).unwrap_err().is_invalid_input());

        record.years_of_ownership = crate::validation::MAX_OWNERSHIP_YEARS;
        let cost = compute_depreciated_cost(&record).unwrap();
        assert!(cost.total_depreciation > 0.0 && cost.total_depreciation <= 30_000.0);
        assert!(cost.residual_value >= 0.0);
    }
}
