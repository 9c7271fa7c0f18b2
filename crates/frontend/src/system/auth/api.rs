use crate::shared::api_utils::api_url;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let body = LoginRequest { username, password };
    let resp = Request::post(&api_url("/api/auth/login"))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 401 {
        return Err("Sai tên đăng nhập hoặc mật khẩu".into());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Validate a stored token by fetching the current user.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let resp = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
