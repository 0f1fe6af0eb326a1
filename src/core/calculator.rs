use crate::core::rounding::{
    finite_or_zero, non_negative_or_zero, percentage_of, round2, round4,
};
use crate::domain::factors::EmissionFactorTable;
use crate::domain::model::{
    CarbonCreditConfig, CarbonCreditEstimate, ComparisonEntry, CreditPrice, EmissionResult,
    SavingsResult, TransportMode, UnknownModePolicy,
};
use crate::domain::ports::CalculatorSettings;
use crate::utils::error::{CalcError, Result};

/// 排放與碳權計算器。
///
/// 不保存任何狀態；係數表與碳權設定在建立後即不可變，每次呼叫互相獨立。
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionCalculator {
    factors: EmissionFactorTable,
    credit: CarbonCreditConfig,
    unknown_mode: UnknownModePolicy,
}

impl EmissionCalculator {
    pub fn new(
        factors: EmissionFactorTable,
        credit: CarbonCreditConfig,
        unknown_mode: UnknownModePolicy,
    ) -> Self {
        Self {
            factors,
            credit,
            unknown_mode,
        }
    }

    pub fn from_settings<S: CalculatorSettings + ?Sized>(settings: &S) -> Self {
        Self::new(
            settings.emission_factors().clone(),
            *settings.carbon_credit(),
            settings.unknown_mode_policy(),
        )
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    fn factor_for(&self, mode: TransportMode) -> Result<f64> {
        match (self.factors.factor(mode), self.unknown_mode) {
            (Some(factor), _) => Ok(factor),
            (None, UnknownModePolicy::Lenient) => {
                tracing::debug!("No emission factor for '{}', treating as zero", mode);
                Ok(0.0)
            }
            (None, UnknownModePolicy::Strict) => Err(CalcError::UnknownModeError {
                mode: mode.to_string(),
            }),
        }
    }

    /// 計算單一交通方式的排放量（kg CO2，小數 2 位）。
    ///
    /// 非有限或負的距離視為 0。只有在 `Strict` 模式且係數表沒有該方式時才會失敗。
    pub fn compute_emission(&self, distance_km: f64, mode: TransportMode) -> Result<EmissionResult> {
        let factor = self.factor_for(mode)?;
        let distance_km = non_negative_or_zero(distance_km);
        let emission_kg = round2(finite_or_zero(distance_km * factor));

        Ok(EmissionResult {
            mode,
            distance_km,
            emission_kg,
        })
    }

    /// 所有已設定的交通方式，依排放量由低到高排序（穩定排序）
    pub fn compute_all_modes(&self, distance_km: f64) -> Vec<ComparisonEntry> {
        let distance_km = non_negative_or_zero(distance_km);
        // 係數表沒有基準方式時，基準排放視為 0，所有百分比皆為 None
        let baseline_kg = self
            .factors
            .factor(TransportMode::BASELINE)
            .map(|factor| round2(finite_or_zero(distance_km * factor)))
            .unwrap_or(0.0);

        let mut entries: Vec<ComparisonEntry> = self
            .factors
            .iter()
            .map(|(mode, factor)| {
                let emission_kg = round2(finite_or_zero(distance_km * factor));
                ComparisonEntry {
                    mode,
                    emission_kg,
                    percentage_vs_baseline: percentage_of(emission_kg, baseline_kg).map(round2),
                }
            })
            .collect();

        entries.sort_by(|a, b| a.emission_kg.total_cmp(&b.emission_kg));

        tracing::debug!(
            "Compared {} modes over {} km (baseline {} kg)",
            entries.len(),
            distance_km,
            baseline_kg
        );
        entries
    }

    /// 與基準相比節省的排放。基準不大於 0 時百分比為 0（不是 None）。
    pub fn compute_savings(candidate_kg: f64, baseline_kg: f64) -> SavingsResult {
        let candidate = finite_or_zero(candidate_kg);
        let baseline = finite_or_zero(baseline_kg);
        let saved = baseline - candidate;

        SavingsResult {
            saved_kg: round2(saved),
            percentage: percentage_of(saved, baseline).map(round2).unwrap_or(0.0),
        }
    }

    pub fn compute_carbon_credits(&self, emission_kg: f64) -> f64 {
        let configured = self.credit.kg_per_credit;
        let kg_per_credit = if configured.is_finite() && configured > 0.0 {
            configured
        } else {
            tracing::warn!(
                "Invalid kg_per_credit {}, falling back to {}",
                self.credit.kg_per_credit,
                CarbonCreditConfig::DEFAULT_KG_PER_CREDIT
            );
            CarbonCreditConfig::DEFAULT_KG_PER_CREDIT
        };

        round4(finite_or_zero(emission_kg) / kg_per_credit)
    }

    /// 價格線性換算。`price_min_usd <= price_max_usd` 是設定端的前提，這裡不檢查。
    pub fn estimate_credit_price(&self, credits: f64) -> CreditPrice {
        let credits = finite_or_zero(credits);
        let min = credits * self.credit.price_min_usd;
        let max = credits * self.credit.price_max_usd;
        let average = (min + max) / 2.0;

        CreditPrice {
            price_min: round2(min),
            price_max: round2(max),
            price_average: round2(average),
        }
    }

    pub fn estimate_carbon_credits(&self, emission_kg: f64) -> CarbonCreditEstimate {
        let credits = self.compute_carbon_credits(emission_kg);
        CarbonCreditEstimate::new(credits, self.estimate_credit_price(credits))
    }
}

impl Default for EmissionCalculator {
    fn default() -> Self {
        Self::new(
            EmissionFactorTable::default(),
            CarbonCreditConfig::default(),
            UnknownModePolicy::default(),
        )
    }
}
