pub mod estimator;
pub mod rates;

pub use estimator::{
    estimate_annual_maintenance, estimate_yearly_schedule, EstimateBreakdown, MaintenanceEstimator,
    MaintenanceProjection, YearlyEstimate, DEFAULT_SUPPLIED_COST_GROWTH,
};
pub use rates::{PowertrainRates, ValueAdjustment};
