//! Multi-vehicle comparison: cumulative cost trajectory, savings ranking at the
//! end of the longest horizon, and per-mile breakdowns.

pub mod per_mile;
pub mod ranking;
pub mod trajectory;

pub use per_mile::PerMileBreakdown;
pub use ranking::{ComparisonResult, RankedVehicle, SavingsEntry};
pub use trajectory::{TrajectoryEntry, TrajectoryPoint};

use crate::cost::{CostCalculator, CostSummary};
use crate::error::{Result, TcoError};
use crate::vehicle::{resolve_all, ResolvedVehicle, VehicleRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A resolved vehicle together with its cost summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedVehicle {
    pub vehicle: ResolvedVehicle,
    pub summary: CostSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub trajectory: Vec<TrajectoryPoint>,
    pub ranking: ComparisonResult,
}

#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    calculator: CostCalculator,
}

impl ComparisonEngine {
    pub fn new(calculator: CostCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    /// Resolve and summarize every record; the first invalid record fails the batch
    pub fn cost_all(&self, records: &[VehicleRecord]) -> Result<Vec<CostedVehicle>> {
        let resolved = resolve_all(records, self.calculator.estimator())?;
        Ok(resolved
            .into_iter()
            .map(|vehicle| {
                let summary = self.calculator.summarize(&vehicle);
                CostedVehicle { vehicle, summary }
            })
            .collect())
    }

    pub fn build_trajectory(&self, records: &[VehicleRecord]) -> Result<Vec<TrajectoryPoint>> {
        if records.is_empty() {
            return Err(TcoError::invalid_input("trajectory needs at least one vehicle"));
        }
        let costed = self.cost_all(records)?;
        let points = trajectory::build(&costed);
        debug!(vehicles = costed.len(), years = points.len(), "built cost trajectory");
        Ok(points)
    }

    pub fn rank_by_savings(&self, records: &[VehicleRecord]) -> Result<ComparisonResult> {
        let costed = self.cost_all(records)?;
        let result = ranking::rank(&costed);
        debug!(
            vehicles = costed.len(),
            horizon = result.horizon_years,
            lowest = result.lowest.as_ref().map(|v| v.name.as_str()),
            "ranked vehicles by savings"
        );
        Ok(result)
    }

    pub fn per_mile_breakdown(&self, records: &[VehicleRecord]) -> Result<Vec<PerMileBreakdown>> {
        let costed = self.cost_all(records)?;
        Ok(costed.iter().map(per_mile::breakdown).collect())
    }

    /// Trajectory and ranking from a single resolution pass
    pub fn compare(&self, records: &[VehicleRecord]) -> Result<ComparisonReport> {
        if records.is_empty() {
            return Err(TcoError::invalid_input("comparison needs at least one vehicle"));
        }
        let costed = self.cost_all(records)?;
        Ok(ComparisonReport {
            trajectory: trajectory::build(&costed),
            ranking: ranking::rank(&costed),
        })
    }
}

pub fn build_trajectory(records: &[VehicleRecord]) -> Result<Vec<TrajectoryPoint>> {
    ComparisonEngine::default().build_trajectory(records)
}

pub fn rank_by_savings(records: &[VehicleRecord]) -> Result<ComparisonResult> {
    ComparisonEngine::default().rank_by_savings(records)
}

pub fn per_mile_breakdown(records: &[VehicleRecord]) -> Result<Vec<PerMileBreakdown>> {
    ComparisonEngine::default().per_mile_breakdown(records)
}
