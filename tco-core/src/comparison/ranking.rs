use super::trajectory::{cumulative_cost, horizon};
use super::CostedVehicle;
use crate::vehicle::VehicleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVehicle {
    pub vehicle: VehicleId,
    pub name: String,
    pub cumulative_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    pub vehicle: VehicleId,
    pub name: String,
    pub cumulative_cost: f64,
    /// Extra spend relative to the lowest-cost vehicle
    pub savings: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub horizon_years: u32,
    /// `None` unless at least two vehicles were compared
    pub lowest: Option<RankedVehicle>,
    /// Every vehicle except the lowest, in input order
    pub savings: Vec<SavingsEntry>,
}

impl ComparisonResult {
    pub fn is_empty(&self) -> bool {
        self.lowest.is_none()
    }
}

pub(crate) fn rank(costed: &[CostedVehicle]) -> ComparisonResult {
    let horizon_years = horizon(costed);
    if costed.len() < 2 {
        return ComparisonResult {
            horizon_years,
            lowest: None,
            savings: Vec::new(),
        };
    }

    let finals: Vec<f64> = costed.iter().map(|c| cumulative_cost(c, horizon_years)).collect();

    // Strict comparison keeps the earliest vehicle on ties
    let mut lowest_index = 0;
    for (index, cost) in finals.iter().enumerate().skip(1) {
        if *cost < finals[lowest_index] {
            lowest_index = index;
        }
    }
    let lowest_cost = finals[lowest_index];

    let savings = costed
        .iter()
        .zip(&finals)
        .enumerate()
        .filter(|(index, _)| *index != lowest_index)
        .map(|(_, (c, cost))| {
            let savings = cost - lowest_cost;
            SavingsEntry {
                vehicle: c.vehicle.id,
                name: c.vehicle.name.clone(),
                cumulative_cost: *cost,
                savings,
                percentage: savings / lowest_cost * 100.0,
            }
        })
        .collect();

    let lowest_vehicle = &costed[lowest_index].vehicle;
    ComparisonResult {
        horizon_years,
        lowest: Some(RankedVehicle {
            vehicle: lowest_vehicle.id,
            name: lowest_vehicle.name.clone(),
            cumulative_cost: lowest_cost,
        }),
        savings,
    }
}
