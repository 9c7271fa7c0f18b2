//! Explicit session object for the whole console.
//!
//! The session lives in Leptos context, created once at the app root with a
//! defined lifecycle: [`SessionContext::restore`] on load, [`SessionContext::logout`]
//! tears it down. Components receive it via [`use_session`] instead of
//! reading storage ambiently.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Restore the session from a stored token, validating it against the
    /// backend. An invalid token is discarded silently; the login page takes
    /// over.
    pub fn restore(&self) {
        let state = self.state;
        spawn_local(async move {
            let Some(token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&token).await {
                Ok(user_info) => {
                    state.set(SessionState {
                        access_token: Some(token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    storage::clear_access_token();
                }
            }
        });
    }

    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        let response = api::login(username, password).await?;
        storage::save_access_token(&response.access_token);
        self.state.set(SessionState {
            access_token: Some(response.access_token),
            user_info: Some(response.user),
        });
        Ok(())
    }

    pub fn logout(&self) {
        storage::clear_access_token();
        self.state.set(SessionState::default());
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.access_token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user_info.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
