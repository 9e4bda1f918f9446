//! Maintenance cost lookup tables.
//!
//! Each table is a constant list keyed by enum with one documented fallback row.
//! Adding a category means adding a row; the formulas in `estimator` do not change.

use crate::vehicle::{FuelType, PowertrainType, SizeClass};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowertrainRates {
    /// Annual maintenance dollars per $1000 of vehicle value
    pub base_rate_per_1000: f64,
    /// Linear year-over-year growth of the first-year cost
    pub escalation_rate: f64,
}

const ICE_SI_RATES: PowertrainRates = PowertrainRates {
    base_rate_per_1000: 16.0,
    escalation_rate: 0.12,
};

/// Ordered by mechanical complexity, cheapest first
pub const POWERTRAIN_RATES: &[(PowertrainType, PowertrainRates)] = &[
    (
        PowertrainType::Bev,
        PowertrainRates {
            base_rate_per_1000: 8.0,
            escalation_rate: 0.05,
        },
    ),
    (
        PowertrainType::Hev,
        PowertrainRates {
            base_rate_per_1000: 12.0,
            escalation_rate: 0.08,
        },
    ),
    (
        PowertrainType::Phev,
        PowertrainRates {
            base_rate_per_1000: 14.0,
            escalation_rate: 0.09,
        },
    ),
    (PowertrainType::IceSi, ICE_SI_RATES),
    (
        PowertrainType::IceCi,
        PowertrainRates {
            base_rate_per_1000: 18.0,
            escalation_rate: 0.14,
        },
    ),
    (
        PowertrainType::Fcev,
        PowertrainRates {
            base_rate_per_1000: 20.0,
            escalation_rate: 0.10,
        },
    ),
];

const MIDSIZE_SEDAN_FACTOR: f64 = 1.0;

pub const SIZE_CLASS_FACTORS: &[(SizeClass, f64)] = &[
    // Light-duty
    (SizeClass::CompactSedan, 0.85),
    (SizeClass::MidsizeSedan, MIDSIZE_SEDAN_FACTOR),
    (SizeClass::SmallSuv, 1.05),
    (SizeClass::MediumSuv, 1.15),
    (SizeClass::Pickup, 1.25),
    // Commercial
    (SizeClass::Class4Delivery, 2.0),
    (SizeClass::Class6Delivery, 2.5),
    (SizeClass::Class8Vocational, 3.0),
    (SizeClass::Class8DayCab, 3.5),
    (SizeClass::Class8Sleeper, 3.8),
    (SizeClass::TransitBus, 4.0),
    (SizeClass::Class8Refuse, 4.2),
];

/// Upper mileage bound (inclusive) and multiplier, ascending
pub const MILEAGE_BANDS: &[(f64, f64)] = &[
    (7_500.0, 0.8),
    (12_500.0, 1.0),
    (15_000.0, 1.1),
    (20_000.0, 1.25),
    (30_000.0, 1.5),
];

/// Applied above the last band
pub const VERY_HIGH_MILEAGE_FACTOR: f64 = 1.8;

pub fn powertrain_rates(powertrain: PowertrainType) -> PowertrainRates {
    POWERTRAIN_RATES
        .iter()
        .find(|(key, _)| *key == powertrain)
        .map(|(_, rates)| *rates)
        .unwrap_or(ICE_SI_RATES)
}

pub fn size_class_factor(size_class: SizeClass) -> f64 {
    SIZE_CLASS_FACTORS
        .iter()
        .find(|(key, _)| *key == size_class)
        .map(|(_, factor)| *factor)
        .unwrap_or(MIDSIZE_SEDAN_FACTOR)
}

pub fn mileage_factor(annual_mileage: f64) -> f64 {
    MILEAGE_BANDS
        .iter()
        .find(|(upper, _)| annual_mileage <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(VERY_HIGH_MILEAGE_FACTOR)
}

const LUXURY_EV_PRICE: f64 = 80_000.0;
const BUDGET_PRICE: f64 = 20_000.0;
const PREMIUM_PRICE: f64 = 60_000.0;

/// Value-based correction applied to the averaged estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueAdjustment {
    /// Expensive EVs carry better warranty coverage
    ElectricWarranty,
    /// Cheap vehicles spend more on repairs relative to their value
    LowValueRepair,
    LuxuryService,
    None,
}

impl ValueAdjustment {
    /// First matching rule wins
    pub fn classify(fuel_type: FuelType, purchase_price: f64) -> Self {
        let electric = fuel_type.is_electric();
        if electric && purchase_price > LUXURY_EV_PRICE {
            ValueAdjustment::ElectricWarranty
        } else if !electric && purchase_price < BUDGET_PRICE {
            ValueAdjustment::LowValueRepair
        } else if !electric && purchase_price > PREMIUM_PRICE {
            ValueAdjustment::LuxuryService
        } else {
            ValueAdjustment::None
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ValueAdjustment::ElectricWarranty => 0.9,
            ValueAdjustment::LowValueRepair => 1.2,
            ValueAdjustment::LuxuryService => 1.15,
            ValueAdjustment::None => 1.0,
        }
    }
}
