use crate::config::Assumptions;
use crate::vehicle::{EnergyUnit, FuelType, ResolvedVehicle};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.0;

/// Annual miles and energy spend, split by electric and combustion operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelUse {
    pub unit: EnergyUnit,
    /// Gallons or kWh bought per year
    pub units_per_year: f64,
    pub electric_miles: f64,
    pub combustion_miles: f64,
    pub electric_cost: f64,
    pub combustion_cost: f64,
}

impl FuelUse {
    pub fn total_cost(&self) -> f64 {
        self.electric_cost + self.combustion_cost
    }
}

/// Energy cost per year. Efficiency is always "miles per unit bought", so one
/// formula covers gallons and kWh alike.
pub fn annual_fuel_cost(annual_mileage: f64, fuel_efficiency: f64, fuel_price: f64) -> f64 {
    (annual_mileage / fuel_efficiency) * fuel_price
}

pub fn annual_fuel_use(vehicle: &ResolvedVehicle, assumptions: &Assumptions) -> FuelUse {
    let miles = vehicle.annual_mileage;
    let electric_miles = match vehicle.fuel_type {
        FuelType::Electric => miles,
        FuelType::PluginHybrid => {
            let range = vehicle.electric_range.unwrap_or(0.0);
            (range * assumptions.plugin_hybrid_charges_per_day * DAYS_PER_YEAR).min(miles)
        }
        FuelType::Gasoline | FuelType::Diesel | FuelType::Hybrid | FuelType::FuelCell => 0.0,
    };
    let combustion_miles = miles - electric_miles;

    let cost_of = |m: f64| annual_fuel_cost(m, vehicle.fuel_efficiency, vehicle.fuel_price);

    FuelUse {
        unit: vehicle.fuel_type.energy_unit(),
        units_per_year: miles / vehicle.fuel_efficiency,
        electric_miles,
        combustion_miles,
        electric_cost: cost_of(electric_miles),
        combustion_cost: cost_of(combustion_miles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::MaintenanceEstimator;
    use crate::vehicle::{VehicleId, VehicleRecord};

    fn resolve(record: VehicleRecord) -> ResolvedVehicle {
        ResolvedVehicle::resolve(VehicleId(0), &record.with_maintenance(500.0), &MaintenanceEstimator::default())
            .unwrap()
    }

    #[test]
    fn test_gasoline_fuel_cost() {
        assert_eq!(annual_fuel_cost(12_000.0, 25.0, 3.5), 1_680.0);
        let vehicle = resolve(VehicleRecord::new("A", 30_000.0, FuelType::Gasoline, 25.0, 3.5, 12_000.0, 5));
        let fuel = annual_fuel_use(&vehicle, &Assumptions::default());
        assert_eq!(fuel.unit, EnergyUnit::Gallon);
        assert_eq!(fuel.units_per_year, 480.0);
        assert_eq!(fuel.electric_miles, 0.0);
        assert_eq!(fuel.combustion_miles, 12_000.0);
        assert_eq!(fuel.total_cost(), 1_680.0);
    }

    #[test]
    fn test_electric_fuel_cost() {
        let vehicle = resolve(VehicleRecord::new("B", 40_000.0, FuelType::Electric, 3.5, 0.11, 12_000.0, 5));
        let fuel = annual_fuel_use(&vehicle, &Assumptions::default());
        assert_eq!(fuel.unit, EnergyUnit::KilowattHour);
        assert_eq!(fuel.electric_miles, 12_000.0);
        assert!((fuel.total_cost() - 377.142857).abs() < 1e-4);
    }

    #[test]
    fn test_plugin_hybrid_split() {
        // 10 miles * 1.5 charges * 365 days = 5475 electric miles
        let vehicle = resolve(
            VehicleRecord::new("P", 35_000.0, FuelType::PluginHybrid, 50.0, 3.5, 12_000.0, 5)
                .with_electric_range(10.0),
        );
        let fuel = annual_fuel_use(&vehicle, &Assumptions::default());
        assert!((fuel.electric_miles - 5_475.0).abs() < 1e-9);
        assert!((fuel.combustion_miles - 6_525.0).abs() < 1e-9);
        assert!((fuel.total_cost() - annual_fuel_cost(12_000.0, 50.0, 3.5)).abs() < 1e-9);
    }

    #[test]
    fn test_plugin_hybrid_range_caps_at_mileage() {
        let vehicle = resolve(
            VehicleRecord::new("P", 35_000.0, FuelType::PluginHybrid, 50.0, 3.5, 8_000.0, 5)
                .with_electric_range(40.0),
        );
        let fuel = annual_fuel_use(&vehicle, &Assumptions::default());
        assert_eq!(fuel.electric_miles, 8_000.0);
        assert_eq!(fuel.combustion_miles, 0.0);
    }
}
