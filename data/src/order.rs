use crate::error::DataError;
use derive_more::{Display, From, FromStr};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderId = u64;
pub type Price = Decimal;

/// Marketplace algorithm code, e.g. `20` for DaggerHashimoto.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Display, From, FromStr,
)]
#[serde(transparent)]
pub struct Algorithm(pub u32);

/// Marketplace region. Sent as its numeric code, shown as its region name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display)]
pub enum Location {
    #[display("EU")]
    Europe,
    #[display("US")]
    UnitedStates,
}

impl Location {
    pub fn code(&self) -> u8 {
        match self {
            Location::Europe => 0,
            Location::UnitedStates => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Location::Europe),
            1 => Some(Location::UnitedStates),
            _ => None,
        }
    }
}

impl std::str::FromStr for Location {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Location::from_code(code).ok_or_else(|| DataError::UnknownLocation(s.to_string()));
        }
        match s.to_ascii_uppercase().as_str() {
            "EU" => Ok(Location::Europe),
            "US" => Ok(Location::UnitedStates),
            _ => Err(DataError::UnknownLocation(s.to_string())),
        }
    }
}
