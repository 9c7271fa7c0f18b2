use crate::shared::api_utils::api_url;
use contracts::domain::a002_role::Role;
use gloo_net::http::Request;

pub async fn fetch_roles(token: &str) -> Result<Vec<Role>, String> {
    let resp = Request::get(&api_url("/api/roles"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
