use crate::domain::a003_policy::CropType;
use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(BasePolicyId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePolicyStatus {
    Published,
    Draft,
    Retired,
}

impl BasePolicyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BasePolicyStatus::Published => "published",
            BasePolicyStatus::Draft => "draft",
            BasePolicyStatus::Retired => "retired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BasePolicyStatus::Published => "Đang phát hành",
            BasePolicyStatus::Draft => "Nháp",
            BasePolicyStatus::Retired => "Ngừng phát hành",
        }
    }

    pub fn all() -> Vec<BasePolicyStatus> {
        vec![
            BasePolicyStatus::Published,
            BasePolicyStatus::Draft,
            BasePolicyStatus::Retired,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "published" => Some(BasePolicyStatus::Published),
            "draft" => Some(BasePolicyStatus::Draft),
            "retired" => Some(BasePolicyStatus::Retired),
            _ => None,
        }
    }
}

/// Sản phẩm bảo hiểm gốc trong danh mục.
///
/// Individual policies (a003) are issued from one of these catalog entries;
/// coverage and premium rates are fractions of the insured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePolicy {
    pub id: BasePolicyId,
    pub code: String,
    pub name: String,
    pub crop: CropType,
    #[serde(rename = "coverageRate")]
    pub coverage_rate: f64,
    #[serde(rename = "premiumRate")]
    pub premium_rate: f64,
    /// Tier level from the data-source configuration this product pays out on.
    #[serde(rename = "tierLevel")]
    pub tier_level: Option<u8>,
    pub status: BasePolicyStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl BasePolicy {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Mã sản phẩm không được để trống".into());
        }
        if self.name.trim().is_empty() {
            return Err("Tên sản phẩm không được để trống".into());
        }
        if !(0.0..=1.0).contains(&self.coverage_rate) {
            return Err("Tỷ lệ chi trả phải nằm trong [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.premium_rate) {
            return Err("Tỷ lệ phí phải nằm trong [0, 1]".into());
        }
        Ok(())
    }

    /// Premium quote for a given insured value.
    pub fn premium_for(&self, sum_insured: f64) -> f64 {
        sum_insured * self.premium_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_policy() -> BasePolicy {
        BasePolicy {
            id: BasePolicyId::new_v4(),
            code: "BP-LUA-01".into(),
            name: "Bảo hiểm lúa theo chỉ số".into(),
            crop: CropType::Rice,
            coverage_rate: 0.8,
            premium_rate: 0.05,
            tier_level: Some(2),
            status: BasePolicyStatus::Published,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn rates_outside_unit_interval_are_rejected() {
        let mut p = base_policy();
        p.coverage_rate = 1.2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn premium_quote_is_rate_times_value() {
        let p = base_policy();
        assert_eq!(p.premium_for(100_000_000.0), 5_000_000.0);
    }
}
