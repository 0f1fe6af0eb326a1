use crate::utils::error::CalcError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 交通方式（封閉集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bicycle,
    Car,
    Bus,
    Truck,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bicycle,
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Truck,
    ];

    /// 比較基準
    pub const BASELINE: TransportMode = TransportMode::Car;

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "bicycle",
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Truck => "truck",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| CalcError::UnknownModeError {
                mode: s.to_string(),
            })
    }
}

/// 未設定排放係數的交通方式如何處理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownModePolicy {
    /// 視為零排放
    #[default]
    Lenient,
    /// 回傳 UnknownModeError
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonCreditConfig {
    #[serde(default = "CarbonCreditConfig::default_kg_per_credit")]
    pub kg_per_credit: f64,
    #[serde(default = "CarbonCreditConfig::default_price_min")]
    pub price_min_usd: f64,
    #[serde(default = "CarbonCreditConfig::default_price_max")]
    pub price_max_usd: f64,
}

impl CarbonCreditConfig {
    pub const DEFAULT_KG_PER_CREDIT: f64 = 1000.0;

    fn default_kg_per_credit() -> f64 {
        Self::DEFAULT_KG_PER_CREDIT
    }

    fn default_price_min() -> f64 {
        50.0
    }

    fn default_price_max() -> f64 {
        150.0
    }
}

impl Default for CarbonCreditConfig {
    fn default() -> Self {
        Self {
            kg_per_credit: Self::default_kg_per_credit(),
            price_min_usd: Self::default_price_min(),
            price_max_usd: Self::default_price_max(),
        }
    }
}

/// 僅供呈現層使用的顯示資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeMetadata {
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl ModeMetadata {
    pub fn default_for(mode: TransportMode) -> Self {
        let (label, icon, color) = match mode {
            TransportMode::Bicycle => ("Bicycle", "🚲", "#3b82f6"),
            TransportMode::Car => ("Car", "🚗", "#ef4444"),
            TransportMode::Bus => ("Bus", "🚌", "#f59e0b"),
            TransportMode::Truck => ("Truck", "🚚", "#8b5cf6"),
        };
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionResult {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub emission_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub mode: TransportMode,
    pub emission_kg: f64,
    /// 基準排放為 0 時無法比較
    pub percentage_vs_baseline: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsResult {
    /// 可能為負數（候選方式排放高於基準）
    pub saved_kg: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditPrice {
    pub price_min: f64,
    pub price_max: f64,
    pub price_average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonCreditEstimate {
    pub credits_required: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub price_average: f64,
}

impl CarbonCreditEstimate {
    pub fn new(credits_required: f64, price: CreditPrice) -> Self {
        Self {
            credits_required,
            price_min: price.price_min,
            price_max: price.price_max,
            price_average: price.price_average,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    /// 手動輸入的距離，優先於距離提供者
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// 單次計算的完整結果，交給呈現層渲染
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub emission: EmissionResult,
    pub comparison: Vec<ComparisonEntry>,
    pub savings_vs_baseline: SavingsResult,
    pub carbon_credits: CarbonCreditEstimate,
    pub generated_at: DateTime<Utc>,
}
