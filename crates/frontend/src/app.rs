use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole console.
    provide_context(AppGlobalContext::new());

    // Session is an explicit context object: restored from storage on load,
    // torn down on logout. Nothing below reads storage directly.
    let session = SessionContext::new();
    session.restore();
    provide_context(session);

    view! {
        <AppRoutes />
    }
}
