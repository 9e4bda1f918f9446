use super::CostedVehicle;
use crate::vehicle::VehicleId;
use serde::{Deserialize, Serialize};

/// Cost per mile over the vehicle's own horizon, split by component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerMileBreakdown {
    pub vehicle: VehicleId,
    pub name: String,
    pub purchase: f64,
    pub fuel: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub total: f64,
}

impl PerMileBreakdown {
    pub fn component_sum(&self) -> f64 {
        self.purchase + self.fuel + self.insurance + self.maintenance
    }
}

pub(crate) fn breakdown(costed: &CostedVehicle) -> PerMileBreakdown {
    let miles = costed.vehicle.total_miles();
    let summary = &costed.summary;
    PerMileBreakdown {
        vehicle: costed.vehicle.id,
        name: costed.vehicle.name.clone(),
        purchase: summary.purchase_cost / miles,
        fuel: summary.fuel_cost / miles,
        insurance: summary.insurance_cost / miles,
        maintenance: summary.maintenance_cost / miles,
        total: summary.cost_per_mile,
    }
}
