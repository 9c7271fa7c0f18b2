use crate::shared::icons::icon;
use leptos::prelude::*;

/// Plain overlay modal. The parent holds the open signal and the content;
/// closing goes through the callback, never through DOM event dispatch.
#[component]
pub fn Modal(
    #[prop(into)] title: String,

    on_close: Callback<()>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-card" on:click=move |e| e.stop_propagation()>
                <div class="modal-card__header">
                    <span class="modal-card__title">{title.clone()}</span>
                    <button
                        class="modal-card__close"
                        on:click=move |_| on_close.run(())
                        title="Đóng"
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-card__body">{children()}</div>
            </div>
        </div>
    }
}
