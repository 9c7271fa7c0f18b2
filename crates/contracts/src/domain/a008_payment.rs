use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(PaymentId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Bank,
    EWallet,
    Cash,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "bank",
            PaymentMethod::EWallet => "e_wallet",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "Chuyển khoản",
            PaymentMethod::EWallet => "Ví điện tử",
            PaymentMethod::Cash => "Tiền mặt",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Bank, PaymentMethod::EWallet, PaymentMethod::Cash]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bank" => Some(PaymentMethod::Bank),
            "e_wallet" => Some(PaymentMethod::EWallet),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

/// Chiều dòng tiền: thu phí vào hay chi bồi thường ra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDirection {
    PremiumIn,
    ClaimOut,
}

impl PaymentDirection {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentDirection::PremiumIn => "premium_in",
            PaymentDirection::ClaimOut => "claim_out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentDirection::PremiumIn => "Thu phí",
            PaymentDirection::ClaimOut => "Chi bồi thường",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Đang xử lý",
            PaymentStatus::Completed => "Thành công",
            PaymentStatus::Failed => "Thất bại",
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    #[serde(rename = "paymentNo")]
    pub payment_no: String,
    #[serde(rename = "policyNo")]
    pub policy_no: String,
    #[serde(rename = "payerName")]
    pub payer_name: String,
    pub method: PaymentMethod,
    pub direction: PaymentDirection,
    pub amount: f64,
    #[serde(rename = "paidAt")]
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: PaymentStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Payment {
    pub fn validate(&self) -> Result<(), String> {
        if self.payment_no.trim().is_empty() {
            return Err("Số chứng từ không được để trống".into());
        }
        if self.amount <= 0.0 {
            return Err("Số tiền phải lớn hơn 0".into());
        }
        if self.status == PaymentStatus::Completed && self.paid_at.is_none() {
            return Err("Giao dịch thành công phải có thời điểm thanh toán".into());
        }
        Ok(())
    }

    /// Signed amount for revenue math: premiums count in, claim payouts out.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            PaymentDirection::PremiumIn => self.amount,
            PaymentDirection::ClaimOut => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> Payment {
        Payment {
            id: PaymentId::new_v4(),
            payment_no: "TT-2026-1200".into(),
            policy_no: "HD-2026-0001".into(),
            payer_name: "Trần Thị B".into(),
            method: PaymentMethod::Bank,
            direction: PaymentDirection::PremiumIn,
            amount: 2_500_000.0,
            paid_at: Some(chrono::Utc::now()),
            status: PaymentStatus::Completed,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn completed_payment_requires_paid_at() {
        let mut p = payment();
        p.paid_at = None;
        assert!(p.validate().is_err());
    }

    #[test]
    fn claim_payout_is_negative_in_revenue_math() {
        let mut p = payment();
        p.direction = PaymentDirection::ClaimOut;
        assert_eq!(p.signed_amount(), -2_500_000.0);
    }
}
