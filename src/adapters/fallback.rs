use crate::domain::ports::DistanceProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 先查主要來源，找不到或失敗時改查備援來源
pub struct FallbackDistanceProvider<P: DistanceProvider, F: DistanceProvider> {
    primary: P,
    fallback: F,
}

impl<P: DistanceProvider, F: DistanceProvider> FallbackDistanceProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: DistanceProvider, F: DistanceProvider> DistanceProvider for FallbackDistanceProvider<P, F> {
    async fn find_distance(&self, origin: &str, destination: &str) -> Result<Option<f64>> {
        match self.primary.find_distance(origin, destination).await {
            Ok(Some(distance)) => return Ok(Some(distance)),
            Ok(None) => tracing::debug!(
                "'{}' has no route, trying '{}'",
                self.primary.name(),
                self.fallback.name()
            ),
            Err(e) => tracing::warn!(
                "'{}' failed ({}), trying '{}'",
                self.primary.name(),
                e,
                self.fallback.name()
            ),
        }

        self.fallback.find_distance(origin, destination).await
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
