use crate::domain::a001_account::api;
use crate::domain::a001_account::ui::details::AccountDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a001_account::{Account, AccountStatus};
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("roleName".to_string(), FilterPolicy::Substring),
        ]),
        search_fields: vec![
            "username".to_string(),
            "fullName".to_string(),
            "email".to_string(),
            "phone".to_string(),
        ],
        page_size: 20,
        aggregates: BTreeMap::from([
            ("total".to_string(), AggregateSpec::Count),
            (
                "active".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("status").as_deref() == Some("active")
                }),
            ),
            (
                "locked".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("status").as_deref() == Some("locked")
                }),
            ),
        ]),
    }
}

fn status_label(code: &str) -> &'static str {
    AccountStatus::from_code(code).map(|s| s.label()).unwrap_or("-")
}

#[component]
#[allow(non_snake_case)]
pub fn AccountList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (items, set_items) = signal::<Vec<Account>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let editing = RwSignal::new(None::<Account>);
    let filters_expanded = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let role_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_accounts(&token).await {
                Ok(list) => {
                    let records: Vec<Record> = list
                        .iter()
                        .filter_map(|a| match Record::from_entity(a) {
                            Ok(r) => Some(r),
                            Err(e) => {
                                log::error!("account record conversion failed: {}", e);
                                None
                            }
                        })
                        .collect();
                    table.set_records(records);
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let apply_filters = move |_| {
        table.submit_filters(vec![
            ("status".to_string(), status_filter.get()),
            ("roleName".to_string(), role_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        status_filter.set(String::new());
        role_filter.set(String::new());
        table.clear_filters();
    };

    let open_create = move || {
        editing.set(None);
        set_show_details.set(true);
    };

    let open_edit = move |id: String| {
        let found = items.get().into_iter().find(|a| a.id.as_string() == id);
        if found.is_some() {
            editing.set(found);
            set_show_details.set(true);
        }
    };

    let delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Xóa tài khoản này?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_account(&token, &id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    let stat = move |name: &'static str| {
        Signal::derive(move || table.output().summary_stats.get(name).copied())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Tài khoản"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        "Tài khoản mới"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Làm mới"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-cards">
                <StatCard
                    label="Tổng tài khoản".to_string()
                    icon_name="users".to_string()
                    value=stat("total")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Đang hoạt động".to_string()
                    icon_name="users".to_string()
                    value=stat("active")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Bị khóa".to_string()
                    icon_name="shield".to_string()
                    value=stat("locked")
                    format=StatFormat::Integer
                />
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=Signal::derive(move || table.active_filter_count())
                pagination=view! {
                    <PaginationControls
                        current_page=Signal::derive(move || table.output().page_info.current_page)
                        total_pages=Signal::derive(move || table.output().page_info.total_pages)
                        total_count=Signal::derive(move || table.output().page_info.total)
                        page_size=Signal::derive(move || table.output().page_info.page_size)
                        on_page_change=Callback::new(move |p| table.change_page(p, None))
                        on_page_size_change=Callback::new(move |s| table.change_page_size(s))
                    />
                }.into_any()
            >
                <div class="filter-row">
                    <SearchInput
                        on_search=Callback::new(move |q| table.search(q))
                        placeholder="Tìm theo tên, email, điện thoại..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        {AccountStatus::all().into_iter().map(|s| view! {
                            <option value={s.code()}>{s.label()}</option>
                        }).collect_view()}
                    </select>
                    <input
                        type="text"
                        class="filter-input"
                        placeholder="Vai trò"
                        prop:value=move || role_filter.get()
                        on:input=move |ev| role_filter.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=apply_filters>
                        "Áp dụng"
                    </button>
                    <button class="button button--secondary" on:click=clear_filters>
                        "Xóa lọc"
                    </button>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tên đăng nhập"</th>
                            <th class="table__header-cell">"Họ tên"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Điện thoại"</th>
                            <th class="table__header-cell">"Vai trò"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell">"Tạo lúc"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let id = rec.display("id");
                            let id_for_edit = id.clone();
                            let id_for_delete = id.clone();
                            let status_code = rec.display("status");
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_edit(id_for_edit.clone())
                                >
                                    <td class="table__cell">{rec.display("username")}</td>
                                    <td class="table__cell">{rec.display("fullName")}</td>
                                    <td class="table__cell">{rec.display("email")}</td>
                                    <td class="table__cell">{rec.display("phone")}</td>
                                    <td class="table__cell">{rec.display("roleName")}</td>
                                    <td class="table__cell">
                                        <span class=format!("tag tag--{}", status_code)>
                                            {status_label(&status_code)}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format_datetime(&rec.display("createdAt"))}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Xóa"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                delete(id_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                {move || view! {
                    <AccountDetails
                        account=editing.get()
                        on_saved=Callback::new(move |_| {
                            set_show_details.set(false);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| set_show_details.set(false))
                    />
                }}
            </Show>
        </div>
    }
}
