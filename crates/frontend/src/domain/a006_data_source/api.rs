use crate::shared::api_utils::api_url;
use contracts::domain::a006_data_source::DataSource;
use gloo_net::http::Request;

pub async fn fetch_data_sources(token: &str) -> Result<Vec<DataSource>, String> {
    let resp = Request::get(&api_url("/api/data-sources"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
