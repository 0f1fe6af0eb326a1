pub mod toml_config;

pub use toml_config::{CalculatorConfig, DistanceConfig, ProviderKind};

#[cfg(feature = "cli")]
use crate::domain::model::{TransportMode, TripRequest};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_distance, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "route-carbon")]
#[command(about = "Estimate CO2 emissions and carbon-credit offsets for a trip")]
pub struct CliConfig {
    #[arg(long, help = "Origin city, e.g. \"São Paulo, SP\"")]
    pub origin: Option<String>,

    #[arg(long, help = "Destination city")]
    pub destination: Option<String>,

    #[arg(long, default_value = "car", help = "bicycle, car, bus or truck")]
    pub mode: TransportMode,

    #[arg(long, help = "Distance in km (skips the distance lookup)")]
    pub distance: Option<f64>,

    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "List the cities known to the route table and exit")]
    pub list_cities: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn trip_request(&self) -> TripRequest {
        TripRequest {
            origin: self.origin.clone().unwrap_or_default(),
            destination: self.destination.clone().unwrap_or_default(),
            mode: self.mode,
            distance_km: self.distance,
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.list_cities {
            return Ok(());
        }

        validate_non_empty_string("origin", self.origin.as_deref().unwrap_or_default())?;
        validate_non_empty_string("destination", self.destination.as_deref().unwrap_or_default())?;
        if let Some(distance) = self.distance {
            validate_distance(distance)?;
        }
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
