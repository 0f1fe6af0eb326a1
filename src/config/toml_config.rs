use crate::adapters::remote::DistanceUnit;
use crate::domain::factors::EmissionFactorTable;
use crate::domain::model::{CarbonCreditConfig, ModeMetadata, TransportMode, UnknownModePolicy};
use crate::domain::ports::CalculatorSettings;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_negative, validate_path, validate_positive,
    validate_positive_number, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub unknown_mode: UnknownModePolicy,
    #[serde(default)]
    pub emission_factors: EmissionFactorTable,
    #[serde(default)]
    pub carbon_credit: CarbonCreditConfig,
    /// 顯示用資訊，鍵為交通方式名稱
    #[serde(default)]
    pub modes: BTreeMap<String, ModeMetadata>,
    #[serde(default)]
    pub distance: DistanceConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Static,
    Csv,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    pub routes_file: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "DistanceConfig::default_pointer")]
    pub distance_pointer: String,
    #[serde(default)]
    pub unit: DistanceUnit,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub fallback_to_static: bool,
}

impl DistanceConfig {
    fn default_pointer() -> String {
        "/distance_km".to_string()
    }

    /// 取得逾時秒數
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(10)
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Static,
            routes_file: None,
            endpoint: None,
            api_key: None,
            distance_pointer: Self::default_pointer(),
            unit: DistanceUnit::Kilometers,
            timeout_seconds: None,
            fallback_to_static: false,
        }
    }
}

impl CalculatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAPS_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 排放係數在反序列化時已檢查；這裡只要求至少一項
        if self.emission_factors.is_empty() {
            return Err(CalcError::ConfigValidationError {
                field: "emission_factors".to_string(),
                message: "At least one transport mode must be configured".to_string(),
            });
        }

        validate_positive("carbon_credit.kg_per_credit", self.carbon_credit.kg_per_credit)?;
        validate_non_negative("carbon_credit.price_min_usd", self.carbon_credit.price_min_usd)?;
        validate_non_negative("carbon_credit.price_max_usd", self.carbon_credit.price_max_usd)?;
        if self.carbon_credit.price_min_usd > self.carbon_credit.price_max_usd {
            return Err(CalcError::InvalidConfigValueError {
                field: "carbon_credit.price_min_usd".to_string(),
                value: self.carbon_credit.price_min_usd.to_string(),
                reason: "Minimum price cannot exceed maximum price".to_string(),
            });
        }

        for key in self.modes.keys() {
            key.parse::<TransportMode>()?;
        }

        self.validate_distance_config()
    }

    fn validate_distance_config(&self) -> Result<()> {
        let distance = &self.distance;
        match distance.provider {
            ProviderKind::Static => {}
            ProviderKind::Csv => {
                let routes_file =
                    validate_required_field("distance.routes_file", &distance.routes_file)?;
                validate_path("distance.routes_file", routes_file)?;
                validate_file_extensions(
                    "distance.routes_file",
                    std::slice::from_ref(routes_file),
                    &["csv"],
                )?;
            }
            ProviderKind::Remote => {
                let endpoint = validate_required_field("distance.endpoint", &distance.endpoint)?;
                validate_url("distance.endpoint", endpoint)?;
                if !distance.distance_pointer.is_empty() && !distance.distance_pointer.starts_with('/')
                {
                    return Err(CalcError::InvalidConfigValueError {
                        field: "distance.distance_pointer".to_string(),
                        value: distance.distance_pointer.clone(),
                        reason: "JSON pointer must be empty or start with '/'".to_string(),
                    });
                }
            }
        }

        if let Some(timeout) = distance.timeout_seconds {
            validate_positive_number("distance.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }

    /// 取得顯示資訊，未設定時使用預設值
    pub fn mode_metadata(&self, mode: TransportMode) -> ModeMetadata {
        self.modes
            .get(mode.as_str())
            .cloned()
            .unwrap_or_else(|| ModeMetadata::default_for(mode))
    }
}

impl CalculatorSettings for CalculatorConfig {
    fn emission_factors(&self) -> &EmissionFactorTable {
        &self.emission_factors
    }

    fn carbon_credit(&self) -> &CarbonCreditConfig {
        &self.carbon_credit
    }

    fn unknown_mode_policy(&self) -> UnknownModePolicy {
        self.unknown_mode
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
unknown_mode = "strict"

[emission_factors]
bicycle = 0
car = 0.15
bus = 0.1

[carbon_credit]
kg_per_credit = 500.0
price_min_usd = 20.0
price_max_usd = 40.0

[modes.car]
label = "Carro"
icon = "🚗"
color = "#ef4444"

[distance]
provider = "remote"
endpoint = "https://maps.example.com/distance"
unit = "meters"
distance_pointer = "/rows/0/elements/0/distance/value"
timeout_seconds = 5
fallback_to_static = true
"##;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.unknown_mode, UnknownModePolicy::Strict);
        assert_eq!(config.emission_factors.factor(TransportMode::Car), Some(0.15));
        assert!(!config.emission_factors.contains(TransportMode::Truck));
        assert_eq!(config.carbon_credit.kg_per_credit, 500.0);
        assert_eq!(config.mode_metadata(TransportMode::Car).label, "Carro");
        assert_eq!(config.mode_metadata(TransportMode::Car).color, "#ef4444");
        assert_eq!(config.mode_metadata(TransportMode::Bus).label, "Bus");
        assert_eq!(config.distance.provider, ProviderKind::Remote);
        assert_eq!(config.distance.unit, DistanceUnit::Meters);
        assert_eq!(config.distance.timeout_seconds(), 5);
        assert!(config.distance.fallback_to_static);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_factor_order_follows_document() {
        let toml_content = r#"
[emission_factors]
truck = 0.5
bus = 0.12
car = 0.12
"#;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();
        let modes: Vec<_> = config.emission_factors.modes().collect();
        assert_eq!(
            modes,
            vec![TransportMode::Truck, TransportMode::Bus, TransportMode::Car]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();

        assert_eq!(config.unknown_mode, UnknownModePolicy::Lenient);
        assert_eq!(config.emission_factors, EmissionFactorTable::default());
        assert_eq!(config.carbon_credit, CarbonCreditConfig::default());
        assert_eq!(config.distance.provider, ProviderKind::Static);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ROUTE_CARBON_KEY", "secret-123");

        let toml_content = r#"
[distance]
provider = "remote"
endpoint = "https://maps.example.com/distance"
api_key = "${TEST_ROUTE_CARBON_KEY}"
"#;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.distance.api_key.as_deref(), Some("secret-123"));

        std::env::remove_var("TEST_ROUTE_CARBON_KEY");
    }

    #[test]
    fn test_negative_factor_is_rejected_at_parse() {
        let toml_content = r#"
[emission_factors]
car = -0.12
"#;
        assert!(CalculatorConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let invalid_credit = r#"
[carbon_credit]
kg_per_credit = 0
"#;
        let config = CalculatorConfig::from_toml_str(invalid_credit).unwrap();
        assert!(config.validate().is_err());

        let inverted_prices = r#"
[carbon_credit]
price_min_usd = 200
price_max_usd = 100
"#;
        let config = CalculatorConfig::from_toml_str(inverted_prices).unwrap();
        assert!(config.validate().is_err());

        let remote_without_endpoint = r#"
[distance]
provider = "remote"
"#;
        let config = CalculatorConfig::from_toml_str(remote_without_endpoint).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CalcError::MissingConfigError { .. }));

        let csv_wrong_extension = r#"
[distance]
provider = "csv"
routes_file = "routes.txt"
"#;
        let config = CalculatorConfig::from_toml_str(csv_wrong_extension).unwrap();
        assert!(config.validate().is_err());

        let unknown_metadata = r#"
[modes.plane]
label = "Plane"
"#;
        let config = CalculatorConfig::from_toml_str(unknown_metadata).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_is_valid() {
        let config =
            CalculatorConfig::from_toml_str(include_str!("../../calculator.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.emission_factors, EmissionFactorTable::default());
        assert_eq!(config.mode_metadata(TransportMode::Bus).label, "Ônibus");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[emission_factors]
car = 0.2
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CalculatorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.emission_factors.len(), 1);
        assert_eq!(config.emission_factors.factor(TransportMode::Car), Some(0.2));
    }
}
