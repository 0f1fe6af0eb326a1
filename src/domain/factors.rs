use crate::domain::model::TransportMode;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_non_negative;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 交通方式 → 每公里 kg CO2。
///
/// 建立後不可變；迭代順序即設定檔中的順序，排序時用來決定同值的先後。
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    entries: Vec<(TransportMode, f64)>,
}

impl EmissionFactorTable {
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TransportMode, f64)>,
    {
        let mut table = Vec::new();
        for (mode, factor) in entries {
            validate_non_negative(&format!("emission_factors.{}", mode), factor)?;
            if table.iter().any(|(existing, _)| *existing == mode) {
                return Err(CalcError::ConfigValidationError {
                    field: format!("emission_factors.{}", mode),
                    message: "Duplicate emission factor".to_string(),
                });
            }
            table.push((mode, factor));
        }
        Ok(Self { entries: table })
    }

    pub fn factor(&self, mode: TransportMode) -> Option<f64> {
        self.entries
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, mode: TransportMode) -> bool {
        self.factor(mode).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn modes(&self) -> impl Iterator<Item = TransportMode> + '_ {
        self.entries.iter().map(|(mode, _)| *mode)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (TransportMode::Bicycle, 0.0),
                (TransportMode::Car, 0.12),
                (TransportMode::Bus, 0.089),
                (TransportMode::Truck, 0.96),
            ],
        }
    }
}

impl Serialize for EmissionFactorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (mode, factor) in &self.entries {
            map.serialize_entry(mode.as_str(), factor)?;
        }
        map.end()
    }
}

struct FactorTableVisitor;

impl<'de> Visitor<'de> for FactorTableVisitor {
    type Value = EmissionFactorTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of transport mode to kg CO2 per km")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // 逐筆讀取以保留設定檔順序
        let mut entries = Vec::new();
        while let Some((key, factor)) = access.next_entry::<String, f64>()? {
            let mode = key.parse::<TransportMode>().map_err(de::Error::custom)?;
            entries.push((mode, factor));
        }
        EmissionFactorTable::new(entries).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for EmissionFactorTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FactorTableVisitor)
    }
}
