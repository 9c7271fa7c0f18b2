use crate::domain::a001_account::api;
use crate::shared::components::modal::Modal;
use crate::system::auth::context::use_session;
use contracts::domain::a001_account::{Account, AccountDto, AccountStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/edit form for one account, shown in a modal over the list.
#[component]
#[allow(non_snake_case)]
pub fn AccountDetails(
    /// `None` creates a new account, `Some` edits an existing one.
    account: Option<Account>,

    on_saved: Callback<()>,

    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let editing_id = account.as_ref().map(|a| a.id.as_string());
    let is_edit = editing_id.is_some();

    let username = RwSignal::new(
        account.as_ref().map(|a| a.username.clone()).unwrap_or_default(),
    );
    let full_name = RwSignal::new(
        account.as_ref().map(|a| a.full_name.clone()).unwrap_or_default(),
    );
    let email =
        RwSignal::new(account.as_ref().map(|a| a.email.clone()).unwrap_or_default());
    let phone =
        RwSignal::new(account.as_ref().map(|a| a.phone.clone()).unwrap_or_default());
    let status = RwSignal::new(
        account
            .as_ref()
            .map(|a| a.status.code().to_string())
            .unwrap_or_else(|| AccountStatus::Active.code().to_string()),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let save = move || {
        let dto = AccountDto {
            username: username.get(),
            full_name: full_name.get(),
            email: email.get(),
            phone: phone.get(),
            role_id: None,
            status: AccountStatus::from_code(&status.get()),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let id = editing_id.clone();
        set_busy.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_account(&token, &id, &dto).await,
                None => api::create_account(&token, &dto).await,
            };
            set_busy.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let title = if is_edit {
        "Sửa tài khoản"
    } else {
        "Tài khoản mới"
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_cancel.run(()))>
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
                    prop:disabled=is_edit
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Họ tên"</span>
                <input
                    type="text"
                    class="form-field__input"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Email"</span>
                <input
                    type="email"
                    class="form-field__input"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Điện thoại"</span>
                <input
                    type="tel"
                    class="form-field__input"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Trạng thái"</span>
                <select
                    class="form-field__input"
                    prop:value=move || status.get()
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    {AccountStatus::all().into_iter().map(|s| view! {
                        <option value={s.code()}>{s.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <div class="modal-card__actions">
                <button
                    class="button button--primary"
                    disabled=move || busy.get()
                    on:click=move |_| save()
                >
                    {move || if busy.get() { "Đang lưu..." } else { "Lưu" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Hủy"
                </button>
            </div>
        </Modal>
    }
}
