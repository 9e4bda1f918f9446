pub mod comparison;
pub mod config;
pub mod cost;
pub mod error;
pub mod maintenance;
pub mod observability;
pub mod validation;
pub mod vehicle;

pub use comparison::{
    build_trajectory, per_mile_breakdown, rank_by_savings, ComparisonEngine, ComparisonReport,
    ComparisonResult, PerMileBreakdown, TrajectoryPoint,
};
pub use config::{Assumptions, TcoConfig};
pub use cost::{compute_cost_summary, compute_depreciated_cost, CostCalculator, CostSummary};
pub use error::{Result, TcoError};
pub use maintenance::{
    estimate_annual_maintenance, estimate_yearly_schedule, MaintenanceEstimator, YearlyEstimate,
};
pub use vehicle::{FuelType, PowertrainType, SizeClass, VehicleId, VehicleRecord};
