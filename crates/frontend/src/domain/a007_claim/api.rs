use crate::shared::api_utils::api_url;
use contracts::domain::a007_claim::{Claim, ClaimStatus};
use gloo_net::http::Request;
use serde_json::json;

pub async fn fetch_claims(token: &str) -> Result<Vec<Claim>, String> {
    let resp = Request::get(&api_url("/api/claims"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Advance a claim along the review workflow.
pub async fn update_claim_status(
    token: &str,
    id: &str,
    status: ClaimStatus,
) -> Result<(), String> {
    let resp = Request::put(&api_url(&format!("/api/claims/{}/status", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&json!({ "status": status }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
