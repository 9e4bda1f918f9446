pub mod calculator;
pub mod depreciation;
pub mod energy;

pub use calculator::{compute_cost_summary, CostCalculator, CostSummary};
pub use depreciation::{compute_depreciated_cost, depreciation_rate, DepreciatedCost};
pub use energy::{annual_fuel_cost, FuelUse};
