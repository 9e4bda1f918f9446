use super::CostedVehicle;
use crate::vehicle::VehicleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    pub vehicle: VehicleId,
    pub name: String,
    pub cumulative_cost: f64,
}

/// Cost-to-date of every vehicle at the end of `year` (0 = purchase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: u32,
    pub vehicles: Vec<TrajectoryEntry>,
}

impl TrajectoryPoint {
    pub fn cost_of(&self, vehicle: VehicleId) -> Option<f64> {
        self.vehicles
            .iter()
            .find(|entry| entry.vehicle == vehicle)
            .map(|entry| entry.cumulative_cost)
    }
}

/// Flat accumulation of the per-year figures. Years past a vehicle's own horizon
/// keep accruing at the same rate.
pub fn cumulative_cost(costed: &CostedVehicle, year: u32) -> f64 {
    let y = year as f64;
    let summary = &costed.summary;
    costed.vehicle.purchase_price
        + summary.fuel_cost_per_year * y
        + summary.insurance_cost_per_year * y
        + summary.maintenance_cost_per_year * y
}

pub fn horizon(costed: &[CostedVehicle]) -> u32 {
    costed
        .iter()
        .map(|c| c.vehicle.years_of_ownership)
        .max()
        .unwrap_or(0)
}

pub(crate) fn build(costed: &[CostedVehicle]) -> Vec<TrajectoryPoint> {
    (0..=horizon(costed))
        .map(|year| TrajectoryPoint {
            year,
            vehicles: costed
                .iter()
                .map(|c| TrajectoryEntry {
                    vehicle: c.vehicle.id,
                    name: c.vehicle.name.clone(),
                    cumulative_cost: cumulative_cost(c, year),
                })
                .collect(),
        })
        .collect()
}
