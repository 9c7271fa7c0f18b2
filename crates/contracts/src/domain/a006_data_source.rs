use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(DataSourceId);

/// Loại nguồn dữ liệu chỉ số dùng để xét bồi thường.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Weather,
    Satellite,
    YieldStats,
}

impl DataSourceKind {
    pub fn code(&self) -> &'static str {
        match self {
            DataSourceKind::Weather => "weather",
            DataSourceKind::Satellite => "satellite",
            DataSourceKind::YieldStats => "yield_stats",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSourceKind::Weather => "Khí tượng",
            DataSourceKind::Satellite => "Vệ tinh",
            DataSourceKind::YieldStats => "Thống kê năng suất",
        }
    }

    pub fn all() -> Vec<DataSourceKind> {
        vec![
            DataSourceKind::Weather,
            DataSourceKind::Satellite,
            DataSourceKind::YieldStats,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "weather" => Some(DataSourceKind::Weather),
            "satellite" => Some(DataSourceKind::Satellite),
            "yield_stats" => Some(DataSourceKind::YieldStats),
            _ => None,
        }
    }
}

/// One payout tier: when the measured index crosses `threshold`, the policy
/// pays `payout_ratio` of the sum insured. Tiers are ordered by `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTier {
    pub level: u8,
    pub name: String,
    pub threshold: f64,
    #[serde(rename = "payoutRatio")]
    pub payout_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: DataSourceId,
    pub code: String,
    pub name: String,
    /// Nhà cung cấp dữ liệu (ví dụ Tổng cục KTTV).
    pub provider: String,
    pub kind: DataSourceKind,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub tiers: Vec<DataTier>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl DataSource {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Mã nguồn dữ liệu không được để trống".into());
        }
        if self.name.trim().is_empty() {
            return Err("Tên nguồn dữ liệu không được để trống".into());
        }
        let mut levels: Vec<u8> = self.tiers.iter().map(|t| t.level).collect();
        levels.sort_unstable();
        levels.dedup();
        if levels.len() != self.tiers.len() {
            return Err("Các bậc chi trả không được trùng cấp".into());
        }
        for tier in &self.tiers {
            if !(0.0..=1.0).contains(&tier.payout_ratio) {
                return Err("Tỷ lệ chi trả của bậc phải nằm trong [0, 1]".into());
            }
        }
        Ok(())
    }

    /// Highest tier whose threshold the measured value reaches, if any.
    pub fn matching_tier(&self, measured: f64) -> Option<&DataTier> {
        self.tiers
            .iter()
            .filter(|t| measured >= t.threshold)
            .max_by(|a, b| a.level.cmp(&b.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> DataSource {
        DataSource {
            id: DataSourceId::new_v4(),
            code: "KTTV-MN".into(),
            name: "Lượng mưa miền Nam".into(),
            provider: "Tổng cục KTTV".into(),
            kind: DataSourceKind::Weather,
            endpoint: String::new(),
            enabled: true,
            tiers: vec![
                DataTier {
                    level: 1,
                    name: "Cảnh báo".into(),
                    threshold: 100.0,
                    payout_ratio: 0.3,
                },
                DataTier {
                    level: 2,
                    name: "Thiệt hại nặng".into(),
                    threshold: 200.0,
                    payout_ratio: 0.7,
                },
            ],
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn duplicate_tier_levels_are_rejected() {
        let mut s = source();
        s.tiers[1].level = 1;
        assert!(s.validate().is_err());
    }

    #[test]
    fn matching_tier_picks_highest_reached_level() {
        let s = source();
        assert_eq!(s.matching_tier(50.0).map(|t| t.level), None);
        assert_eq!(s.matching_tier(150.0).map(|t| t.level), Some(1));
        assert_eq!(s.matching_tier(250.0).map(|t| t.level), Some(2));
    }
}
