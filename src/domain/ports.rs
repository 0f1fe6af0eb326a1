use crate::domain::factors::EmissionFactorTable;
use crate::domain::model::{CarbonCreditConfig, UnknownModePolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 城市距離來源（靜態表、CSV 或遠端 API）
#[async_trait]
pub trait DistanceProvider: Send + Sync {
    /// 找不到路線時回傳 `Ok(None)`；只有來源本身故障才回傳錯誤
    async fn find_distance(&self, origin: &str, destination: &str) -> Result<Option<f64>>;

    fn name(&self) -> &str;
}

#[async_trait]
impl DistanceProvider for Box<dyn DistanceProvider> {
    async fn find_distance(&self, origin: &str, destination: &str) -> Result<Option<f64>> {
        (**self).find_distance(origin, destination).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub trait CalculatorSettings: Send + Sync {
    fn emission_factors(&self) -> &EmissionFactorTable;
    fn carbon_credit(&self) -> &CarbonCreditConfig;
    fn unknown_mode_policy(&self) -> UnknownModePolicy;
}
