pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{
    build_distance_provider, city_catalog, fallback::FallbackDistanceProvider,
    remote::RemoteDistanceProvider, static_routes::StaticRouteTable,
};
pub use config::CalculatorConfig;
pub use crate::core::{assessor::TripAssessor, calculator::EmissionCalculator};
pub use domain::model::{TransportMode, TripReport, TripRequest};
pub use domain::ports::DistanceProvider;
pub use utils::error::{CalcError, Result};
