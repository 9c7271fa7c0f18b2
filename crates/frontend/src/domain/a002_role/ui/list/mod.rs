use crate::domain::a002_role::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::shared::table_view::{FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([(
            "code".to_string(),
            FilterPolicy::Substring,
        )]),
        search_fields: vec![
            "code".to_string(),
            "name".to_string(),
            "description".to_string(),
        ],
        page_size: 20,
        aggregates: BTreeMap::new(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RoleList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_roles(&token).await {
                Ok(list) => {
                    let records: Vec<Record> = list
                        .iter()
                        .filter_map(|role| {
                            let mut rec = Record::from_entity(role).ok()?;
                            // permissions serialize as a nested array; expose
                            // the count as a scalar column instead
                            rec.0.insert(
                                "permissionCount".to_string(),
                                serde_json::json!(role.permissions.len()),
                            );
                            Some(rec)
                        })
                        .collect();
                    table.set_records(records);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Vai trò & quyền"</h1>
                </div>
                <div class="header__actions">
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
                        placeholder="Tìm theo mã, tên vai trò..."
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| table.clear_filters()
                    >
                        "Xóa lọc"
                    </button>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Mã"</th>
                            <th class="table__header-cell">"Tên vai trò"</th>
                            <th class="table__header-cell">"Mô tả"</th>
                            <th class="table__header-cell">"Số quyền"</th>
                            <th class="table__header-cell">"Số tài khoản"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| view! {
                            <tr class="table__row">
                                <td class="table__cell">{rec.display("code")}</td>
                                <td class="table__cell">{rec.display("name")}</td>
                                <td class="table__cell">{rec.display("description")}</td>
                                <td class="table__cell">{rec.display("permissionCount")}</td>
                                <td class="table__cell">{rec.display("accountCount")}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
