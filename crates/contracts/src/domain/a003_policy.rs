use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(PolicyId);

/// Loại cây trồng được bảo hiểm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Rice,
    Coffee,
    Pepper,
    Fruit,
    Aquaculture,
}

impl CropType {
    pub fn code(&self) -> &'static str {
        match self {
            CropType::Rice => "rice",
            CropType::Coffee => "coffee",
            CropType::Pepper => "pepper",
            CropType::Fruit => "fruit",
            CropType::Aquaculture => "aquaculture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropType::Rice => "Lúa",
            CropType::Coffee => "Cà phê",
            CropType::Pepper => "Hồ tiêu",
            CropType::Fruit => "Cây ăn quả",
            CropType::Aquaculture => "Thủy sản",
        }
    }

    pub fn all() -> Vec<CropType> {
        vec![
            CropType::Rice,
            CropType::Coffee,
            CropType::Pepper,
            CropType::Fruit,
            CropType::Aquaculture,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "rice" => Some(CropType::Rice),
            "coffee" => Some(CropType::Coffee),
            "pepper" => Some(CropType::Pepper),
            "fruit" => Some(CropType::Fruit),
            "aquaculture" => Some(CropType::Aquaculture),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Draft,
    Active,
    Expired,
    Cancelled,
}

impl PolicyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PolicyStatus::Draft => "draft",
            PolicyStatus::Active => "active",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyStatus::Draft => "Nháp",
            PolicyStatus::Active => "Hiệu lực",
            PolicyStatus::Expired => "Hết hạn",
            PolicyStatus::Cancelled => "Đã hủy",
        }
    }

    pub fn all() -> Vec<PolicyStatus> {
        vec![
            PolicyStatus::Draft,
            PolicyStatus::Active,
            PolicyStatus::Expired,
            PolicyStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(PolicyStatus::Draft),
            "active" => Some(PolicyStatus::Active),
            "expired" => Some(PolicyStatus::Expired),
            "cancelled" => Some(PolicyStatus::Cancelled),
            _ => None,
        }
    }
}

/// Hợp đồng bảo hiểm nông nghiệp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub id: PolicyId,
    #[serde(rename = "policyNo")]
    pub policy_no: String,
    #[serde(rename = "holderName")]
    pub holder_name: String,
    pub crop: CropType,
    /// Tỉnh/thành nơi canh tác.
    pub province: String,
    #[serde(rename = "sumInsured")]
    pub sum_insured: f64,
    pub premium: f64,
    pub status: PolicyStatus,
    #[serde(rename = "effectiveFrom")]
    pub effective_from: chrono::NaiveDate,
    #[serde(rename = "effectiveTo")]
    pub effective_to: chrono::NaiveDate,
    #[serde(rename = "partnerId")]
    pub partner_id: Option<String>,
    #[serde(rename = "partnerName", default)]
    pub partner_name: String,
    #[serde(rename = "basePolicyId")]
    pub base_policy_id: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl InsurancePolicy {
    pub fn validate(&self) -> Result<(), String> {
        if self.policy_no.trim().is_empty() {
            return Err("Số hợp đồng không được để trống".into());
        }
        if self.holder_name.trim().is_empty() {
            return Err("Tên người tham gia không được để trống".into());
        }
        if self.effective_to < self.effective_from {
            return Err("Ngày hết hiệu lực phải sau ngày bắt đầu".into());
        }
        if self.sum_insured < 0.0 || self.premium < 0.0 {
            return Err("Số tiền bảo hiểm và phí phải không âm".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> InsurancePolicy {
        InsurancePolicy {
            id: PolicyId::new_v4(),
            policy_no: "HD-2026-0001".into(),
            holder_name: "Trần Thị B".into(),
            crop: CropType::Rice,
            province: "An Giang".into(),
            sum_insured: 50_000_000.0,
            premium: 2_500_000.0,
            status: PolicyStatus::Active,
            effective_from: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            effective_to: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            partner_id: None,
            partner_name: String::new(),
            base_policy_id: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn valid_policy_passes() {
        assert!(policy().validate().is_ok());
    }

    #[test]
    fn inverted_period_is_rejected() {
        let mut p = policy();
        p.effective_to = chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_premium_is_rejected() {
        let mut p = policy();
        p.premium = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn crop_serializes_as_snake_case() {
        let json = serde_json::to_string(&CropType::Aquaculture).unwrap();
        assert_eq!(json, "\"aquaculture\"");
    }
}
