use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(PartnerId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerKind {
    Insurer,
    Distributor,
    Bank,
}

impl PartnerKind {
    pub fn code(&self) -> &'static str {
        match self {
            PartnerKind::Insurer => "insurer",
            PartnerKind::Distributor => "distributor",
            PartnerKind::Bank => "bank",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartnerKind::Insurer => "Doanh nghiệp bảo hiểm",
            PartnerKind::Distributor => "Đại lý phân phối",
            PartnerKind::Bank => "Ngân hàng",
        }
    }

    pub fn all() -> Vec<PartnerKind> {
        vec![
            PartnerKind::Insurer,
            PartnerKind::Distributor,
            PartnerKind::Bank,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "insurer" => Some(PartnerKind::Insurer),
            "distributor" => Some(PartnerKind::Distributor),
            "bank" => Some(PartnerKind::Bank),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    Active,
    Suspended,
}

impl PartnerStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PartnerStatus::Active => "active",
            PartnerStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartnerStatus::Active => "Đang hợp tác",
            PartnerStatus::Suspended => "Tạm dừng",
        }
    }
}

/// Đối tác phân phối và đồng bảo hiểm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub code: String,
    pub name: String,
    #[serde(rename = "taxCode", default)]
    pub tax_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub province: String,
    pub kind: PartnerKind,
    pub status: PartnerStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Partner {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Mã đối tác không được để trống".into());
        }
        if self.name.trim().is_empty() {
            return Err("Tên đối tác không được để trống".into());
        }
        if !self.tax_code.is_empty() && self.tax_code.chars().any(|c| !c.is_ascii_digit() && c != '-') {
            return Err("Mã số thuế chỉ gồm chữ số và dấu gạch".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner() -> Partner {
        Partner {
            id: PartnerId::new_v4(),
            code: "DT-001".into(),
            name: "Bảo hiểm Bảo Minh".into(),
            tax_code: "0300446973".into(),
            email: String::new(),
            phone: String::new(),
            province: "TP. Hồ Chí Minh".into(),
            kind: PartnerKind::Insurer,
            status: PartnerStatus::Active,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn valid_partner_passes() {
        assert!(partner().validate().is_ok());
    }

    #[test]
    fn tax_code_with_letters_is_rejected() {
        let mut p = partner();
        p.tax_code = "03AB446973".into();
        assert!(p.validate().is_err());
    }
}
