use crate::shared::api_utils::api_url;
use contracts::dashboards::revenue::RevenueSummary;
use gloo_net::http::Request;

pub async fn fetch_revenue_summary(token: &str) -> Result<RevenueSummary, String> {
    let resp = Request::get(&api_url("/api/dashboard/revenue"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
