use crate::shared::api_utils::api_url;
use contracts::domain::a001_account::{Account, AccountDto};
use gloo_net::http::Request;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn fetch_accounts(token: &str) -> Result<Vec<Account>, String> {
    let resp = Request::get(&api_url("/api/accounts"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn create_account(token: &str, dto: &AccountDto) -> Result<Account, String> {
    let resp = Request::post(&api_url("/api/accounts"))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn update_account(token: &str, id: &str, dto: &AccountDto) -> Result<Account, String> {
    let resp = Request::put(&api_url(&format!("/api/accounts/{}", id)))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn delete_account(token: &str, id: &str) -> Result<(), String> {
    let resp = Request::delete(&api_url(&format!("/api/accounts/{}", id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
