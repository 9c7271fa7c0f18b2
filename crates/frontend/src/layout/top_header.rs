//! Top navigation bar: sidebar toggle, brand, current user, logout.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.sidebar_open.update(|open| *open = !*open);
    };

    let user_label = move || {
        session
            .user()
            .map(|u| {
                if u.role_name.is_empty() {
                    u.full_name
                } else {
                    format!("{} · {}", u.full_name, u.role_name)
                }
            })
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if ctx.sidebar_open.get() { "Ẩn menu" } else { "Hiện menu" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Quản trị Bảo hiểm Nông nghiệp"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{user_label}</span>
                <button
                    class="top-header__icon-btn"
                    title="Đăng xuất"
                    on:click=move |_| session.logout()
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
