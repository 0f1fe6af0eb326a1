pub mod assessor;
pub mod calculator;
pub mod rounding;

pub use crate::domain::factors::EmissionFactorTable;
pub use crate::domain::model::{
    CarbonCreditEstimate, ComparisonEntry, CreditPrice, EmissionResult, SavingsResult,
    TransportMode, TripReport, TripRequest,
};
pub use crate::domain::ports::{CalculatorSettings, DistanceProvider};
pub use crate::utils::error::Result;
