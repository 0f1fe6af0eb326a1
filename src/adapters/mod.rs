// Adapters layer: concrete distance providers (static table, CSV file, remote HTTP).

mod builtin_routes;
pub mod fallback;
pub mod remote;
pub mod static_routes;

use crate::config::toml_config::{DistanceConfig, ProviderKind};
use crate::domain::ports::DistanceProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use fallback::FallbackDistanceProvider;
use remote::{RemoteDistanceProvider, RemoteOptions};
use static_routes::StaticRouteTable;
use std::time::Duration;

/// 依設定建立距離提供者
pub fn build_distance_provider(config: &DistanceConfig) -> Result<Box<dyn DistanceProvider>> {
    let provider: Box<dyn DistanceProvider> = match config.provider {
        ProviderKind::Static | ProviderKind::Csv => Box::new(city_catalog(config)?),
        ProviderKind::Remote => {
            let endpoint = validate_required_field("distance.endpoint", &config.endpoint)?;
            let options = RemoteOptions {
                endpoint: endpoint.clone(),
                api_key: config.api_key.clone(),
                distance_pointer: config.distance_pointer.clone(),
                unit: config.unit,
                timeout: Duration::from_secs(config.timeout_seconds()),
            };
            let remote = RemoteDistanceProvider::new(options)?;

            if config.fallback_to_static {
                Box::new(FallbackDistanceProvider::new(remote, StaticRouteTable::builtin()))
            } else {
                Box::new(remote)
            }
        }
    };

    tracing::debug!("Using distance provider: {}", provider.name());
    Ok(provider)
}

/// 可供選擇的城市清單來源：CSV 設定時讀檔，否則使用內建路線表
pub fn city_catalog(config: &DistanceConfig) -> Result<StaticRouteTable> {
    match config.provider {
        ProviderKind::Csv => {
            let path = validate_required_field("distance.routes_file", &config.routes_file)?;
            StaticRouteTable::from_csv_path(path)
        }
        _ => Ok(StaticRouteTable::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_static_provider_by_default() {
        let provider = build_distance_provider(&DistanceConfig::default()).unwrap();
        assert_eq!(provider.name(), "static");
    }

    #[test]
    fn test_build_remote_with_fallback() {
        let config = DistanceConfig {
            provider: ProviderKind::Remote,
            endpoint: Some("http://localhost:9/distance".to_string()),
            fallback_to_static: true,
            ..DistanceConfig::default()
        };
        let provider = build_distance_provider(&config).unwrap();
        assert_eq!(provider.name(), "fallback");
    }

    #[test]
    fn test_remote_requires_endpoint() {
        let config = DistanceConfig {
            provider: ProviderKind::Remote,
            ..DistanceConfig::default()
        };
        assert!(build_distance_provider(&config).is_err());
    }

    #[test]
    fn test_csv_catalog_missing_file() {
        let config = DistanceConfig {
            provider: ProviderKind::Csv,
            routes_file: Some("/nonexistent/routes.csv".to_string()),
            ..DistanceConfig::default()
        };
        assert!(city_catalog(&config).is_err());
    }
}
