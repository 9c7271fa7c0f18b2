use crate::shared::api_utils::api_url;
use contracts::domain::a008_payment::Payment;
use gloo_net::http::Request;

pub async fn fetch_payments(token: &str) -> Result<Vec<Payment>, String> {
    let resp = Request::get(&api_url("/api/payments"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
