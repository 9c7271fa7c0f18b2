use crate::domain::a006_data_source::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a006_data_source::DataSourceKind;
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("kind".to_string(), FilterPolicy::Exact),
            ("enabled".to_string(), FilterPolicy::Exact),
            ("provider".to_string(), FilterPolicy::Substring),
        ]),
        search_fields: vec![
            "code".to_string(),
            "name".to_string(),
            "provider".to_string(),
        ],
        page_size: 20,
        aggregates: BTreeMap::from([
            ("total".to_string(), AggregateSpec::Count),
            (
                "enabled".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("enabled").as_deref() == Some("true")
                }),
            ),
        ]),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DataSourceList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let kind_filter = RwSignal::new(String::new());
    let enabled_filter = RwSignal::new(String::new());
    let provider_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_data_sources(&token).await {
                Ok(list) => {
                    let records: Vec<Record> = list
                        .iter()
                        .filter_map(|s| {
                            // Tier list is nested; surface the count as a column.
                            let mut rec = Record::from_entity(s).ok()?;
                            rec.0.insert("tierCount".to_string(), json!(s.tiers.len()));
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

    let apply_filters = move |_| {
        table.submit_filters(vec![
            ("kind".to_string(), kind_filter.get()),
            ("enabled".to_string(), enabled_filter.get()),
            ("provider".to_string(), provider_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        kind_filter.set(String::new());
        enabled_filter.set(String::new());
        provider_filter.set(String::new());
        table.clear_filters();
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Nguồn dữ liệu chỉ số"</h1>
                    <div class="header__subtitle">
                        {move || {
                            let stats = table.output().summary_stats;
                            format!(
                                "{} nguồn, {} đang bật",
                                stats.get("total").copied().unwrap_or(0.0) as u64,
                                stats.get("enabled").copied().unwrap_or(0.0) as u64,
                            )
                        }}
                    </div>
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
                        placeholder="Tìm theo mã, tên, nhà cung cấp..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || kind_filter.get()
                        on:change=move |ev| kind_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Loại: tất cả"</option>
                        {DataSourceKind::all().into_iter().map(|k| view! {
                            <option value={k.code()}>{k.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || enabled_filter.get()
                        on:change=move |ev| enabled_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Kích hoạt: tất cả"</option>
                        <option value="true">"Đang bật"</option>
                        <option value="false">"Đang tắt"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-input"
                        placeholder="Nhà cung cấp"
                        prop:value=move || provider_filter.get()
                        on:input=move |ev| provider_filter.set(event_target_value(&ev))
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
                            <th class="table__header-cell">"Mã"</th>
                            <th class="table__header-cell">"Tên nguồn"</th>
                            <th class="table__header-cell">"Loại"</th>
                            <th class="table__header-cell">"Nhà cung cấp"</th>
                            <th class="table__header-cell">"Số bậc chi trả"</th>
                            <th class="table__header-cell">"Kích hoạt"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let kind = DataSourceKind::from_code(&rec.display("kind"))
                                .map(|k| k.label())
                                .unwrap_or("-");
                            let enabled = rec.field_str("enabled").as_deref() == Some("true");
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("code")}</td>
                                    <td class="table__cell">{rec.display("name")}</td>
                                    <td class="table__cell">{kind}</td>
                                    <td class="table__cell">{rec.display("provider")}</td>
                                    <td class="table__cell table__cell--number">{rec.display("tierCount")}</td>
                                    <td class="table__cell">
                                        <span class=if enabled { "tag tag--active" } else { "tag tag--inactive" }>
                                            {if enabled { "Đang bật" } else { "Đang tắt" }}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
