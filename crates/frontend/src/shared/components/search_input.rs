use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Debounced free-text search input with a clear button.
#[component]
pub fn SearchInput(
    /// Callback fired after the debounce window with the current query.
    on_search: Callback<String>,

    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let (value, set_value) = signal(String::new());
    // Monotonic counter; only the latest pending timeout fires the callback.
    let generation = StoredValue::new(0u64);

    let schedule = move |query: String| {
        let my_generation = generation.with_value(|g| g + 1);
        generation.set_value(my_generation);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == my_generation {
                on_search.run(query);
            }
        });
    };

    let clear = move |_| {
        set_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    set_value.set(query.clone());
                    schedule(query);
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Xóa">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
