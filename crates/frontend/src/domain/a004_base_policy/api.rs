use crate::shared::api_utils::api_url;
use contracts::domain::a004_base_policy::BasePolicy;
use gloo_net::http::Request;

pub async fn fetch_base_policies(token: &str) -> Result<Vec<BasePolicy>, String> {
    let resp = Request::get(&api_url("/api/base-policies"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
