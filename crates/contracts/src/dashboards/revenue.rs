use serde::{Deserialize, Serialize};

/// One month of the revenue series, keyed "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    #[serde(rename = "premiumCollected")]
    pub premium_collected: f64,
    #[serde(rename = "claimsPaid")]
    pub claims_paid: f64,
}

impl MonthlyRevenue {
    pub fn net(&self) -> f64 {
        self.premium_collected - self.claims_paid
    }
}

/// Revenue dashboard projection as returned by `/api/dashboard/revenue`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueSummary {
    #[serde(rename = "totalPremium")]
    pub total_premium: f64,
    #[serde(rename = "totalClaimsPaid")]
    pub total_claims_paid: f64,
    #[serde(rename = "activePolicies")]
    pub active_policies: u64,
    #[serde(rename = "openClaims")]
    pub open_claims: u64,
    #[serde(default)]
    pub monthly: Vec<MonthlyRevenue>,
}

impl RevenueSummary {
    pub fn net_revenue(&self) -> f64 {
        self.total_premium - self.total_claims_paid
    }

    /// Claims paid as a share of premium collected. Zero premium yields 0,
    /// the dashboard renders the value without a guard.
    pub fn loss_ratio(&self) -> f64 {
        if self.total_premium == 0.0 {
            0.0
        } else {
            self.total_claims_paid / self.total_premium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_ratio_of_empty_summary_is_zero() {
        assert_eq!(RevenueSummary::default().loss_ratio(), 0.0);
    }

    #[test]
    fn loss_ratio_is_claims_over_premium() {
        let s = RevenueSummary {
            total_premium: 200.0,
            total_claims_paid: 50.0,
            ..Default::default()
        };
        assert_eq!(s.loss_ratio(), 0.25);
        assert_eq!(s.net_revenue(), 150.0);
    }

    #[test]
    fn monthly_net_subtracts_claims() {
        let m = MonthlyRevenue {
            month: "2026-07".into(),
            premium_collected: 10.0,
            claims_paid: 4.0,
        };
        assert_eq!(m.net(), 6.0);
    }
}
