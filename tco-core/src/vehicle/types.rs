//! Categorical vehicle attributes

use crate::error::TcoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing fuel label. Closed set: unknown text is rejected at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    PluginHybrid,
    FuelCell,
}

/// Physical unit that `fuel_efficiency` and `fuel_price` are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyUnit {
    Gallon,
    KilowattHour,
}

impl FuelType {
    pub const ALL: [FuelType; 6] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::PluginHybrid,
        FuelType::FuelCell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::PluginHybrid => "plugin_hybrid",
            FuelType::FuelCell => "fuel_cell",
        }
    }

    /// Powertrain assumed when the record does not name one
    pub fn default_powertrain(&self) -> PowertrainType {
        match self {
            FuelType::Gasoline => PowertrainType::IceSi,
            FuelType::Diesel => PowertrainType::IceCi,
            FuelType::Electric => PowertrainType::Bev,
            FuelType::Hybrid => PowertrainType::Hev,
            FuelType::PluginHybrid => PowertrainType::Phev,
            FuelType::FuelCell => PowertrainType::Fcev,
        }
    }

    pub fn is_electric(&self) -> bool {
        matches!(self, FuelType::Electric)
    }

    pub fn energy_unit(&self) -> EnergyUnit {
        match self {
            FuelType::Electric => EnergyUnit::KilowattHour,
            FuelType::Gasoline
            | FuelType::Diesel
            | FuelType::Hybrid
            | FuelType::PluginHybrid
            | FuelType::FuelCell => EnergyUnit::Gallon,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = TcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == normalized)
            .ok_or_else(|| TcoError::invalid_input(format!("unknown fuel type '{}'", s)))
    }
}

impl TryFrom<String> for FuelType {
    type Error = TcoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Propulsion technology class. Unknown text maps to `Unrecognized`, which the
/// maintenance tables treat like spark-ignition combustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum PowertrainType {
    IceSi,
    IceCi,
    Bev,
    Hev,
    Phev,
    Fcev,
    Unrecognized,
}

impl PowertrainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowertrainType::IceSi => "ice_si",
            PowertrainType::IceCi => "ice_ci",
            PowertrainType::Bev => "bev",
            PowertrainType::Hev => "hev",
            PowertrainType::Phev => "phev",
            PowertrainType::Fcev => "fcev",
            PowertrainType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for PowertrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PowertrainType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ice_si" => PowertrainType::IceSi,
            "ice_ci" => PowertrainType::IceCi,
            "bev" => PowertrainType::Bev,
            "hev" => PowertrainType::Hev,
            "phev" => PowertrainType::Phev,
            "fcev" => PowertrainType::Fcev,
            other => {
                tracing::warn!(powertrain = other, "unrecognized powertrain type, using defaults");
                PowertrainType::Unrecognized
            }
        }
    }
}

impl From<String> for PowertrainType {
    fn from(value: String) -> Self {
        PowertrainType::from(value.as_str())
    }
}

/// Vehicle size classification, light-duty through heavy commercial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SizeClass {
    CompactSedan,
    MidsizeSedan,
    SmallSuv,
    MediumSuv,
    Pickup,
    Class4Delivery,
    Class6Delivery,
    Class8Vocational,
    Class8DayCab,
    Class8Sleeper,
    TransitBus,
    Class8Refuse,
    Unrecognized,
}

impl SizeClass {
    pub const KNOWN: [SizeClass; 12] = [
        SizeClass::CompactSedan,
        SizeClass::MidsizeSedan,
        SizeClass::SmallSuv,
        SizeClass::MediumSuv,
        SizeClass::Pickup,
        SizeClass::Class4Delivery,
        SizeClass::Class6Delivery,
        SizeClass::Class8Vocational,
        SizeClass::Class8DayCab,
        SizeClass::Class8Sleeper,
        SizeClass::TransitBus,
        SizeClass::Class8Refuse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::CompactSedan => "compact_sedan",
            SizeClass::MidsizeSedan => "midsize_sedan",
            SizeClass::SmallSuv => "small_suv",
            SizeClass::MediumSuv => "medium_suv",
            SizeClass::Pickup => "pickup",
            SizeClass::Class4Delivery => "class4_delivery",
            SizeClass::Class6Delivery => "class6_delivery",
            SizeClass::Class8Vocational => "class8_vocational",
            SizeClass::Class8DayCab => "class8_day_cab",
            SizeClass::Class8Sleeper => "class8_sleeper",
            SizeClass::TransitBus => "transit_bus",
            SizeClass::Class8Refuse => "class8_refuse",
            SizeClass::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SizeClass {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        SizeClass::KNOWN
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .unwrap_or_else(|| {
                tracing::warn!(size_class = value, "unrecognized size class, using midsize sedan factor");
                SizeClass::Unrecognized
            })
    }
}

impl From<String> for SizeClass {
    fn from(value: String) -> Self {
        SizeClass::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_type_parse() {
        assert_eq!("electric".parse::<FuelType>().unwrap(), FuelType::Electric);
        assert_eq!(" Plugin_Hybrid ".parse::<FuelType>().unwrap(), FuelType::PluginHybrid);
        let err = "steam".parse::<FuelType>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("steam"));
    }

    #[test]
    fn test_fuel_type_serde_rejects_unknown() {
        let fuel: FuelType = serde_json::from_str("\"fuel_cell\"").unwrap();
        assert_eq!(fuel, FuelType::FuelCell);
        assert!(serde_json::from_str::<FuelType>("\"coal\"").is_err());
        assert_eq!(serde_json::to_string(&FuelType::PluginHybrid).unwrap(), "\"plugin_hybrid\"");
    }

    #[test]
    fn test_default_powertrain_per_fuel() {
        assert_eq!(FuelType::Gasoline.default_powertrain(), PowertrainType::IceSi);
        assert_eq!(FuelType::Diesel.default_powertrain(), PowertrainType::IceCi);
        assert_eq!(FuelType::Electric.default_powertrain(), PowertrainType::Bev);
        assert_eq!(FuelType::Hybrid.default_powertrain(), PowertrainType::Hev);
        assert_eq!(FuelType::PluginHybrid.default_powertrain(), PowertrainType::Phev);
        assert_eq!(FuelType::FuelCell.default_powertrain(), PowertrainType::Fcev);
    }

    #[test]
    fn test_unknown_categories_degrade() {
        let powertrain: PowertrainType = serde_json::from_str("\"warp_drive\"").unwrap();
        assert_eq!(powertrain, PowertrainType::Unrecognized);

        let class: SizeClass = serde_json::from_str("\"monster_truck\"").unwrap();
        assert_eq!(class, SizeClass::Unrecognized);

        let class: SizeClass = serde_json::from_str("\"class8_day_cab\"").unwrap();
        assert_eq!(class, SizeClass::Class8DayCab);
    }

    #[test]
    fn test_size_class_names_round_trip() {
        for class in SizeClass::KNOWN {
            assert_eq!(SizeClass::from(class.as_str()), class);
            assert_eq!(
                serde_json::to_string(&class).unwrap(),
                format!("\"{}\"", class.as_str())
            );
        }
    }
}
