use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Nhập tên đăng nhập và mật khẩu".into()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match session.login(user, pass).await {
                Ok(()) => {}
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Quản trị Bảo hiểm Nông nghiệp"</h1>

                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <label class="form-field">
                    <span class="form-field__label">"Tên đăng nhập"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Mật khẩu"</span>
                    <input
                        type="password"
                        class="form-field__input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </label>

                <button
                    class="button button--primary button--block"
                    disabled=move || busy.get()
                    on:click=move |_| submit()
                >
                    {move || if busy.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                </button>
            </div>
        </div>
    }
}
