use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(ClaimId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimEventType {
    Drought,
    Flood,
    Pest,
    Storm,
}

impl ClaimEventType {
    pub fn code(&self) -> &'static str {
        match self {
            ClaimEventType::Drought => "drought",
            ClaimEventType::Flood => "flood",
            ClaimEventType::Pest => "pest",
            ClaimEventType::Storm => "storm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimEventType::Drought => "Hạn hán",
            ClaimEventType::Flood => "Lũ lụt",
            ClaimEventType::Pest => "Sâu bệnh",
            ClaimEventType::Storm => "Bão",
        }
    }

    pub fn all() -> Vec<ClaimEventType> {
        vec![
            ClaimEventType::Drought,
            ClaimEventType::Flood,
            ClaimEventType::Pest,
            ClaimEventType::Storm,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "drought" => Some(ClaimEventType::Drought),
            "flood" => Some(ClaimEventType::Flood),
            "pest" => Some(ClaimEventType::Pest),
            "storm" => Some(ClaimEventType::Storm),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Submitted,
    InReview,
    Approved,
    Rejected,
    Paid,
}

impl ClaimStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::InReview => "in_review",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Mới tiếp nhận",
            ClaimStatus::InReview => "Đang thẩm định",
            ClaimStatus::Approved => "Đã duyệt",
            ClaimStatus::Rejected => "Từ chối",
            ClaimStatus::Paid => "Đã chi trả",
        }
    }

    pub fn all() -> Vec<ClaimStatus> {
        vec![
            ClaimStatus::Submitted,
            ClaimStatus::InReview,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Paid,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "submitted" => Some(ClaimStatus::Submitted),
            "in_review" => Some(ClaimStatus::InReview),
            "approved" => Some(ClaimStatus::Approved),
            "rejected" => Some(ClaimStatus::Rejected),
            "paid" => Some(ClaimStatus::Paid),
            _ => None,
        }
    }

    /// Review transitions allowed from this status in the console.
    pub fn next_statuses(&self) -> Vec<ClaimStatus> {
        match self {
            ClaimStatus::Submitted => vec![ClaimStatus::InReview],
            ClaimStatus::InReview => vec![ClaimStatus::Approved, ClaimStatus::Rejected],
            ClaimStatus::Approved => vec![ClaimStatus::Paid],
            ClaimStatus::Rejected | ClaimStatus::Paid => vec![],
        }
    }
}

/// Yêu cầu bồi thường.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    #[serde(rename = "claimNo")]
    pub claim_no: String,
    #[serde(rename = "policyId")]
    pub policy_id: Option<String>,
    #[serde(rename = "policyNo")]
    pub policy_no: String,
    #[serde(rename = "claimantName")]
    pub claimant_name: String,
    #[serde(rename = "eventDate")]
    pub event_date: chrono::NaiveDate,
    #[serde(rename = "eventType")]
    pub event_type: ClaimEventType,
    #[serde(rename = "amountClaimed")]
    pub amount_claimed: f64,
    #[serde(rename = "amountApproved")]
    pub amount_approved: Option<f64>,
    pub status: ClaimStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Claim {
    pub fn validate(&self) -> Result<(), String> {
        if self.claim_no.trim().is_empty() {
            return Err("Số hồ sơ bồi thường không được để trống".into());
        }
        if self.policy_no.trim().is_empty() {
            return Err("Số hợp đồng không được để trống".into());
        }
        if self.amount_claimed < 0.0 {
            return Err("Số tiền yêu cầu phải không âm".into());
        }
        if let Some(approved) = self.amount_approved {
            if approved < 0.0 || approved > self.amount_claimed {
                return Err("Số tiền duyệt phải trong [0, số tiền yêu cầu]".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim() -> Claim {
        Claim {
            id: ClaimId::new_v4(),
            claim_no: "BT-2026-0045".into(),
            policy_id: None,
            policy_no: "HD-2026-0001".into(),
            claimant_name: "Lê Văn C".into(),
            event_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            event_type: ClaimEventType::Flood,
            amount_claimed: 12_000_000.0,
            amount_approved: Some(10_000_000.0),
            status: ClaimStatus::Approved,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn approved_amount_above_claimed_is_rejected() {
        let mut c = claim();
        c.amount_approved = Some(15_000_000.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn review_flow_terminates_at_paid_and_rejected() {
        assert_eq!(
            ClaimStatus::Submitted.next_statuses(),
            vec![ClaimStatus::InReview]
        );
        assert!(ClaimStatus::Paid.next_statuses().is_empty());
        assert!(ClaimStatus::Rejected.next_statuses().is_empty());
    }
}
