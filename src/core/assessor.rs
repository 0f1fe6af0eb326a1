use crate::core::calculator::EmissionCalculator;
use crate::domain::model::{TransportMode, TripReport, TripRequest};
use crate::domain::ports::DistanceProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_distance, validate_non_empty_string};

/// 單次行程評估：解析距離後交給計算器，組出完整報表
pub struct TripAssessor<P: DistanceProvider> {
    provider: P,
    calculator: EmissionCalculator,
}

impl<P: DistanceProvider> TripAssessor<P> {
    pub fn new(provider: P, calculator: EmissionCalculator) -> Self {
        Self {
            provider,
            calculator,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 手動距離優先；否則查詢距離提供者
    pub async fn resolve_distance(&self, request: &TripRequest) -> Result<f64> {
        validate_non_empty_string("origin", &request.origin)?;
        validate_non_empty_string("destination", &request.destination)?;

        if let Some(distance_km) = request.distance_km {
            tracing::debug!("Using manual distance: {} km", distance_km);
            validate_distance(distance_km)?;
            return Ok(distance_km);
        }

        let origin = request.origin.trim();
        let destination = request.destination.trim();
        tracing::debug!(
            "Looking up distance via '{}': {} -> {}",
            self.provider.name(),
            origin,
            destination
        );

        match self.provider.find_distance(origin, destination).await? {
            Some(distance_km) => {
                tracing::info!("✅ Distance found: {} km", distance_km);
                validate_distance(distance_km)?;
                Ok(distance_km)
            }
            None => {
                tracing::warn!("❌ Route not found: {} -> {}", origin, destination);
                Err(CalcError::RouteNotFoundError {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                })
            }
        }
    }

    pub async fn assess(&self, request: &TripRequest) -> Result<TripReport> {
        let distance_km = self.resolve_distance(request).await?;
        self.assess_distance(
            request.origin.trim(),
            request.destination.trim(),
            distance_km,
            request.mode,
        )
    }

    /// 距離已知時的同步計算部分
    pub fn assess_distance(
        &self,
        origin: &str,
        destination: &str,
        distance_km: f64,
        mode: TransportMode,
    ) -> Result<TripReport> {
        validate_distance(distance_km)?;

        let emission = self.calculator.compute_emission(distance_km, mode)?;
        let comparison = self.calculator.compute_all_modes(distance_km);
        let baseline_kg = comparison
            .iter()
            .find(|entry| entry.mode == TransportMode::BASELINE)
            .map(|entry| entry.emission_kg)
            .unwrap_or(0.0);
        let savings_vs_baseline =
            EmissionCalculator::compute_savings(emission.emission_kg, baseline_kg);
        let carbon_credits = self.calculator.estimate_carbon_credits(emission.emission_kg);

        tracing::info!(
            "🌿 {} -> {} by {}: {} km, {} kg CO2",
            origin,
            destination,
            mode,
            distance_km,
            emission.emission_kg
        );

        Ok(TripReport {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
            distance_km,
            emission,
            comparison,
            savings_vs_baseline,
            carbon_credits,
            generated_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProvider {
        distance: Option<f64>,
        calls: AtomicUsize,
    }

    impl FixedProvider {
        fn new(distance: Option<f64>) -> Self {
            Self {
                distance,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DistanceProvider for FixedProvider {
        async fn find_distance(&self, _origin: &str, _destination: &str) -> Result<Option<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.distance)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn request(distance_km: Option<f64>) -> TripRequest {
        TripRequest {
            origin: "Recife, PE".to_string(),
            destination: "João Pessoa, PB".to_string(),
            mode: TransportMode::Bus,
            distance_km,
        }
    }

    #[tokio::test]
    async fn test_assess_uses_provider_distance() {
        let assessor =
            TripAssessor::new(FixedProvider::new(Some(120.0)), EmissionCalculator::default());

        let report = assessor.assess(&request(None)).await.unwrap();

        assert_eq!(report.distance_km, 120.0);
        assert_eq!(report.emission.emission_kg, 10.68);
        assert_eq!(report.comparison.len(), 4);
        // 基準：120 km * 0.12 = 14.4 kg
        assert_eq!(report.savings_vs_baseline.saved_kg, 3.72);
        assert_eq!(report.savings_vs_baseline.percentage, 25.83);
        assert_eq!(report.carbon_credits.credits_required, 0.0107);
        assert_eq!(assessor.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_manual_distance_skips_provider() {
        let assessor = TripAssessor::new(FixedProvider::new(None), EmissionCalculator::default());

        let report = assessor.assess(&request(Some(100.0))).await.unwrap();

        assert_eq!(report.emission.emission_kg, 8.9);
        assert_eq!(assessor.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let assessor = TripAssessor::new(FixedProvider::new(None), EmissionCalculator::default());

        let err = assessor.assess(&request(None)).await.unwrap_err();
        assert!(matches!(err, CalcError::RouteNotFoundError { .. }));
    }

    #[tokio::test]
    async fn test_rejects_invalid_manual_distance() {
        let assessor = TripAssessor::new(FixedProvider::new(None), EmissionCalculator::default());

        for distance in [0.0, -1.0, f64::NAN] {
            let err = assessor.assess(&request(Some(distance))).await.unwrap_err();
            assert!(matches!(err, CalcError::ValidationError { .. }));
        }
    }

    #[tokio::test]
    async fn test_rejects_blank_city_names() {
        let assessor =
            TripAssessor::new(FixedProvider::new(Some(120.0)), EmissionCalculator::default());
        let mut blank = request(None);
        blank.origin = "   ".to_string();

        assert!(assessor.assess(&blank).await.is_err());
        assert_eq!(assessor.provider().calls.load(Ordering::SeqCst), 0);
    }
}
