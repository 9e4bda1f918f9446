pub mod record;
pub mod resolve;
pub mod types;

pub use record::VehicleRecord;
pub use resolve::{resolve_all, MaintenanceSource, ResolvedVehicle};
pub use types::{EnergyUnit, FuelType, PowertrainType, SizeClass};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a vehicle within one calculation: its zero-based input position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub usize);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle{}", self.0)
    }
}
