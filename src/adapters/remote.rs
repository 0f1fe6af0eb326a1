use crate::core::rounding::round2;
use crate::domain::ports::DistanceProvider;
use crate::utils::error::{CalcError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
}

impl DistanceUnit {
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Meters => value / 1000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoteOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// JSON pointer (RFC 6901) 指向回應中的距離欄位
    pub distance_pointer: String,
    pub unit: DistanceUnit,
    pub timeout: Duration,
}

impl RemoteOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            distance_pointer: "/distance_km".to_string(),
            unit: DistanceUnit::Kilometers,
            timeout: Duration::from_secs(10),
        }
    }
}

/// 透過 HTTP 查詢距離（地圖服務）
pub struct RemoteDistanceProvider {
    client: Client,
    options: RemoteOptions,
}

impl RemoteDistanceProvider {
    pub fn new(options: RemoteOptions) -> Result<Self> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self { client, options })
    }

    fn extract_distance(&self, body: &serde_json::Value) -> Option<f64> {
        let raw = body.pointer(&self.options.distance_pointer)?;
        let value = raw
            .as_f64()
            .or_else(|| raw.as_str().and_then(|s| s.trim().parse::<f64>().ok()))?;

        if value.is_finite() && value > 0.0 {
            Some(round2(self.options.unit.to_km(value)))
        } else {
            None
        }
    }
}

#[async_trait]
impl DistanceProvider for RemoteDistanceProvider {
    async fn find_distance(&self, origin: &str, destination: &str) -> Result<Option<f64>> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Ok(None);
        }

        let mut query = vec![("origin", origin), ("destination", destination)];
        if let Some(key) = self.options.api_key.as_deref() {
            query.push(("key", key));
        }

        tracing::debug!("Requesting distance from: {}", self.options.endpoint);
        let response = self
            .client
            .get(&self.options.endpoint)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Distance API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CalcError::ProviderError {
                provider: self.name().to_string(),
                message: format!("unexpected status {}", status),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let distance = self.extract_distance(&body);
        if distance.is_none() {
            tracing::debug!(
                "No usable distance at '{}' in response",
                self.options.distance_pointer
            );
        }
        Ok(distance)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(pointer: &str, unit: DistanceUnit) -> RemoteDistanceProvider {
        let mut options = RemoteOptions::new("http://localhost/distance");
        options.distance_pointer = pointer.to_string();
        options.unit = unit;
        RemoteDistanceProvider::new(options).unwrap()
    }

    #[test]
    fn test_extract_distance_in_km() {
        let p = provider("/distance_km", DistanceUnit::Kilometers);
        let body = serde_json::json!({"distance_km": 99});
        assert_eq!(p.extract_distance(&body), Some(99.0));
    }

    #[test]
    fn test_extract_nested_meters() {
        let p = provider("/rows/0/elements/0/distance/value", DistanceUnit::Meters);
        let body = serde_json::json!({
            "rows": [{"elements": [{"distance": {"text": "99.4 km", "value": 99412}}]}]
        });
        assert_eq!(p.extract_distance(&body), Some(99.41));
    }

    #[test]
    fn test_extract_numeric_string() {
        let p = provider("/distance_km", DistanceUnit::Kilometers);
        let body = serde_json::json!({"distance_km": " 72.5 "});
        assert_eq!(p.extract_distance(&body), Some(72.5));
    }

    #[test]
    fn test_extract_missing_or_invalid() {
        let p = provider("/distance_km", DistanceUnit::Kilometers);
        assert_eq!(p.extract_distance(&serde_json::json!({})), None);
        assert_eq!(p.extract_distance(&serde_json::json!({"distance_km": null})), None);
        assert_eq!(p.extract_distance(&serde_json::json!({"distance_km": 0})), None);
        assert_eq!(p.extract_distance(&serde_json::json!({"distance_km": "far"})), None);
    }
}
