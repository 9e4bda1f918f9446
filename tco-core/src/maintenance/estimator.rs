use crate::error::Result;
use crate::maintenance::rates::{mileage_factor, powertrain_rates, size_class_factor, ValueAdjustment};
use crate::vehicle::{MaintenanceSource, PowertrainType, VehicleRecord};
use serde::{Deserialize, Serialize};

/// Growth applied year over year to a user-supplied maintenance figure
pub const DEFAULT_SUPPLIED_COST_GROWTH: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyEstimate {
    pub year: u32,
    pub cost: f64,
}

/// Every factor that went into an estimate, for display and auditing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub powertrain: PowertrainType,
    pub base_rate_per_1000: f64,
    pub size_class_factor: f64,
    pub mileage_factor: f64,
    pub escalation_rate: f64,
    pub first_year_cost: f64,
    pub unadjusted_average: f64,
    pub adjustment: ValueAdjustment,
    /// Rounded to whole currency units
    pub average_annual_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceProjection {
    pub source: MaintenanceSource,
    pub average_annual_cost: f64,
    pub yearly: Vec<YearlyEstimate>,
    pub total_cost: f64,
    /// Total maintenance as a percentage of purchase price
    pub share_of_purchase_price: f64,
}

impl MaintenanceProjection {
    /// Running total after each ownership year
    pub fn cumulative_costs(&self) -> Vec<f64> {
        self.yearly
            .iter()
            .scan(0.0, |total, estimate| {
                *total += estimate.cost;
                Some(*total)
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct MaintenanceEstimator {
    supplied_cost_growth: f64,
}

impl MaintenanceEstimator {
    pub fn new(supplied_cost_growth: f64) -> Self {
        Self {
            supplied_cost_growth,
        }
    }

    pub fn breakdown(&self, record: &VehicleRecord) -> Result<EstimateBreakdown> {
        record.validate_for_estimate()?;

        let powertrain = record.effective_powertrain();
        let rates = powertrain_rates(powertrain);
        let size_factor = size_class_factor(record.effective_size_class());
        let miles_factor = mileage_factor(record.annual_mileage);

        let first_year_cost =
            (record.purchase_price / 1000.0) * rates.base_rate_per_1000 * size_factor * miles_factor;

        let years = record.years_of_ownership;
        let total: f64 = (1..=years)
            .map(|year| escalated_cost(first_year_cost, rates.escalation_rate, year))
            .sum();
        let unadjusted_average = total / years as f64;

        let adjustment = ValueAdjustment::classify(record.fuel_type, record.purchase_price);
        let average_annual_cost = (unadjusted_average * adjustment.factor()).round();

        crate::log_vehicle!(
            debug,
            record.name.as_str(),
            powertrain = %powertrain,
            first_year_cost,
            adjustment = ?adjustment,
            average_annual_cost,
            "estimated maintenance"
        );

        Ok(EstimateBreakdown {
            powertrain,
            base_rate_per_1000: rates.base_rate_per_1000,
            size_class_factor: size_factor,
            mileage_factor: miles_factor,
            escalation_rate: rates.escalation_rate,
            first_year_cost,
            unadjusted_average,
            adjustment,
            average_annual_cost,
        })
    }

    /// Average annual maintenance over the ownership horizon
    pub fn annual_cost(&self, record: &VehicleRecord) -> Result<f64> {
        Ok(self.breakdown(record)?.average_annual_cost)
    }

    /// Escalating per-year schedule that sums to `years * annual_cost`
    pub fn yearly_schedule(&self, record: &VehicleRecord) -> Result<Vec<YearlyEstimate>> {
        let breakdown = self.breakdown(record)?;
        Ok(schedule_from_average(
            breakdown.average_annual_cost,
            record.years_of_ownership,
            breakdown.escalation_rate,
        ))
    }

    /// Year-by-year view for either a supplied or an estimated figure
    pub fn projection(&self, record: &VehicleRecord) -> Result<MaintenanceProjection> {
        record.validate_for_estimate()?;

        let (source, average_annual_cost, yearly) = match record.supplied_maintenance() {
            Some(cost) => (
                MaintenanceSource::Supplied,
                cost,
                compounding_schedule(cost, record.years_of_ownership, self.supplied_cost_growth),
            ),
            None => {
                let breakdown = self.breakdown(record)?;
                let yearly = schedule_from_average(
                    breakdown.average_annual_cost,
                    record.years_of_ownership,
                    breakdown.escalation_rate,
                );
                (MaintenanceSource::Estimated, breakdown.average_annual_cost, yearly)
            }
        };

        let total_cost: f64 = yearly.iter().map(|estimate| estimate.cost).sum();

        Ok(MaintenanceProjection {
            source,
            average_annual_cost,
            yearly,
            total_cost,
            share_of_purchase_price: total_cost / record.purchase_price * 100.0,
        })
    }
}

impl Default for MaintenanceEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPLIED_COST_GROWTH)
    }
}

fn escalated_cost(first_year_cost: f64, escalation_rate: f64, year: u32) -> f64 {
    first_year_cost * (1.0 + (year - 1) as f64 * escalation_rate)
}

/// Back out the first-year cost from a horizon average, then escalate linearly.
/// The mean of the linear factors is `1 + (years - 1) * rate / 2`.
fn schedule_from_average(average: f64, years: u32, escalation_rate: f64) -> Vec<YearlyEstimate> {
    let first_year_cost = average / (1.0 + (years - 1) as f64 * escalation_rate / 2.0);
    (1..=years)
        .map(|year| YearlyEstimate {
            year,
            cost: escalated_cost(first_year_cost, escalation_rate, year).round(),
        })
        .collect()
}

fn compounding_schedule(annual_cost: f64, years: u32, growth: f64) -> Vec<YearlyEstimate> {
    (1..=years)
        .map(|year| YearlyEstimate {
            year,
            cost: (annual_cost * (1.0 + growth).powf((year - 1) as f64)).round(),
        })
        .collect()
}

/// Average annual maintenance with default assumptions
pub fn estimate_annual_maintenance(record: &VehicleRecord) -> Result<f64> {
    MaintenanceEstimator::default().annual_cost(record)
}

/// Escalating yearly schedule with default assumptions
pub fn estimate_yearly_schedule(record: &VehicleRecord) -> Result<Vec<YearlyEstimate>> {
    MaintenanceEstimator::default().yearly_schedule(record)
}
