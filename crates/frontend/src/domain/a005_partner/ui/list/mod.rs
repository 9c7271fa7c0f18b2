use crate::domain::a005_partner::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a005_partner::{PartnerKind, PartnerStatus};
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("kind".to_string(), FilterPolicy::Exact),
            ("status".to_string(), FilterPolicy::Exact),
            ("province".to_string(), FilterPolicy::Substring),
        ]),
        search_fields: vec![
            "code".to_string(),
            "name".to_string(),
            "taxCode".to_string(),
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
        ]),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PartnerList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let kind_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let province_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_partners(&token).await {
                Ok(list) => {
                    let records: Vec<Record> = list
                        .iter()
                        .filter_map(|p| Record::from_entity(p).ok())
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
            ("status".to_string(), status_filter.get()),
            ("province".to_string(), province_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        kind_filter.set(String::new());
        status_filter.set(String::new());
        province_filter.set(String::new());
        table.clear_filters();
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Đối tác"</h1>
                    <div class="header__subtitle">
                        {move || {
                            let stats = table.output().summary_stats;
                            format!(
                                "{} đối tác, {} đang hợp tác",
                                stats.get("total").copied().unwrap_or(0.0) as u64,
                                stats.get("active").copied().unwrap_or(0.0) as u64,
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
                        placeholder="Tìm theo mã, tên, mã số thuế..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || kind_filter.get()
                        on:change=move |ev| kind_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Loại: tất cả"</option>
                        {PartnerKind::all().into_iter().map(|k| view! {
                            <option value={k.code()}>{k.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        <option value="active">{PartnerStatus::Active.label()}</option>
                        <option value="suspended">{PartnerStatus::Suspended.label()}</option>
                    </select>
                    <input
                        type="text"
                        class="filter-input"
                        placeholder="Tỉnh/thành"
                        prop:value=move || province_filter.get()
                        on:input=move |ev| province_filter.set(event_target_value(&ev))
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
                            <th class="table__header-cell">"Tên đối tác"</th>
                            <th class="table__header-cell">"Loại"</th>
                            <th class="table__header-cell">"Mã số thuế"</th>
                            <th class="table__header-cell">"Tỉnh/thành"</th>
                            <th class="table__header-cell">"Điện thoại"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let status_code = rec.display("status");
                            let status = match status_code.as_str() {
                                "active" => PartnerStatus::Active.label(),
                                "suspended" => PartnerStatus::Suspended.label(),
                                _ => "-",
                            };
                            let kind = PartnerKind::from_code(&rec.display("kind"))
                                .map(|k| k.label())
                                .unwrap_or("-");
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("code")}</td>
                                    <td class="table__cell">{rec.display("name")}</td>
                                    <td class="table__cell">{kind}</td>
                                    <td class="table__cell">{rec.display("taxCode")}</td>
                                    <td class="table__cell">{rec.display("province")}</td>
                                    <td class="table__cell">{rec.display("phone")}</td>
                                    <td class="table__cell">
                                        <span class=format!("tag tag--{}", status_code)>{status}</span>
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
