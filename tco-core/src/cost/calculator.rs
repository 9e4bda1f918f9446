use super::energy::{annual_fuel_cost, annual_fuel_use, FuelUse};
use crate::config::Assumptions;
use crate::error::Result;
use crate::maintenance::MaintenanceEstimator;
use crate::vehicle::{MaintenanceSource, ResolvedVehicle, VehicleId, VehicleRecord};
use serde::{Deserialize, Serialize};

/// Lifetime and normalized cost figures for one vehicle.
/// `total_cost` is always `purchase_cost + fuel_cost + insurance_cost + maintenance_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub purchase_cost: f64,
    pub fuel_cost: f64,
    pub insurance_cost: f64,
    pub maintenance_cost: f64,
    pub total_cost: f64,
    pub cost_per_year: f64,
    pub cost_per_mile: f64,
    pub fuel_cost_per_year: f64,
    pub insurance_cost_per_year: f64,
    pub maintenance_cost_per_year: f64,
    pub maintenance_source: MaintenanceSource,
    pub fuel_use: FuelUse,
}

impl CostSummary {
    /// Fuel, insurance and maintenance per year
    pub fn recurring_cost_per_year(&self) -> f64 {
        self.fuel_cost_per_year + self.insurance_cost_per_year + self.maintenance_cost_per_year
    }
}

#[derive(Debug, Clone)]
pub struct CostCalculator {
    assumptions: Assumptions,
    estimator: MaintenanceEstimator,
}

impl CostCalculator {
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default())
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            estimator: MaintenanceEstimator::new(assumptions.supplied_maintenance_growth),
        }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn estimator(&self) -> &MaintenanceEstimator {
        &self.estimator
    }

    pub fn resolve(&self, id: VehicleId, record: &VehicleRecord) -> Result<ResolvedVehicle> {
        ResolvedVehicle::resolve(id, record, &self.estimator)
    }

    /// Pure function of an already resolved vehicle
    pub fn summarize(&self, vehicle: &ResolvedVehicle) -> CostSummary {
        let years = vehicle.years();

        let fuel_cost_per_year =
            annual_fuel_cost(vehicle.annual_mileage, vehicle.fuel_efficiency, vehicle.fuel_price);
        let fuel_cost = fuel_cost_per_year * years;
        let insurance_cost = vehicle.insurance_per_year * years;
        let maintenance_cost = vehicle.maintenance_per_year * years;
        let total_cost = vehicle.purchase_price + fuel_cost + insurance_cost + maintenance_cost;

        CostSummary {
            purchase_cost: vehicle.purchase_price,
            fuel_cost,
            insurance_cost,
            maintenance_cost,
            total_cost,
            cost_per_year: total_cost / years,
            cost_per_mile: total_cost / vehicle.total_miles(),
            fuel_cost_per_year,
            insurance_cost_per_year: vehicle.insurance_per_year,
            maintenance_cost_per_year: vehicle.maintenance_per_year,
            maintenance_source: vehicle.maintenance_source,
            fuel_use: annual_fuel_use(vehicle, &self.assumptions),
        }
    }

    pub fn calculate(&self, record: &VehicleRecord) -> Result<CostSummary> {
        let vehicle = self.resolve(VehicleId(0), record)?;
        Ok(self.summarize(&vehicle))
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cost summary with default assumptions
pub fn compute_cost_summary(record: &VehicleRecord) -> Result<CostSummary> {
    CostCalculator::default().calculate(record)
}
