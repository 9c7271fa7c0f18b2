use crate::domain::a007_claim::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::format_date;
use crate::shared::format::format_vnd;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a007_claim::{Claim, ClaimEventType, ClaimStatus};
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("eventType".to_string(), FilterPolicy::Exact),
        ]),
        search_fields: vec![
            "claimNo".to_string(),
            "policyNo".to_string(),
            "claimantName".to_string(),
        ],
        page_size: 20,
        aggregates: BTreeMap::from([
            ("total".to_string(), AggregateSpec::Count),
            (
                "open".to_string(),
                AggregateSpec::CountWhere(|r| {
                    matches!(
                        r.field_str("status").as_deref(),
                        Some("submitted") | Some("in_review")
                    )
                }),
            ),
            (
                "totalClaimed".to_string(),
                AggregateSpec::Sum("amountClaimed".to_string()),
            ),
            (
                "totalApproved".to_string(),
                AggregateSpec::Sum("amountApproved".to_string()),
            ),
        ]),
    }
}

fn event_label(code: &str) -> &'static str {
    ClaimEventType::from_code(code).map(|e| e.label()).unwrap_or("-")
}

fn status_label(code: &str) -> &'static str {
    ClaimStatus::from_code(code).map(|s| s.label()).unwrap_or("-")
}

#[component]
#[allow(non_snake_case)]
pub fn ClaimList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (items, set_items) = signal::<Vec<Claim>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let event_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_claims(&token).await {
                Ok(list) => {
                    let records: Vec<Record> = list
                        .iter()
                        .filter_map(|c| match Record::from_entity(c) {
                            Ok(r) => Some(r),
                            Err(e) => {
                                log::error!("claim record conversion failed: {}", e);
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
            ("eventType".to_string(), event_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        status_filter.set(String::new());
        event_filter.set(String::new());
        table.clear_filters();
    };

    let advance = move |id: String, next: ClaimStatus| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::update_claim_status(&token, &id, next).await {
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
                    <h1 class="header__title">"Hồ sơ bồi thường"</h1>
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

            <div class="stat-cards">
                <StatCard
                    label="Tổng hồ sơ".to_string()
                    icon_name="alert-triangle".to_string()
                    value=stat("total")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Đang xử lý".to_string()
                    icon_name="alert-triangle".to_string()
                    value=stat("open")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Tổng yêu cầu".to_string()
                    icon_name="credit-card".to_string()
                    value=stat("totalClaimed")
                    format=StatFormat::Money
                />
                <StatCard
                    label="Tổng đã duyệt".to_string()
                    icon_name="credit-card".to_string()
                    value=stat("totalApproved")
                    format=StatFormat::Money
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
                        placeholder="Tìm theo số hồ sơ, số HĐ, tên..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        {ClaimStatus::all().into_iter().map(|s| view! {
                            <option value={s.code()}>{s.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || event_filter.get()
                        on:change=move |ev| event_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Sự kiện: tất cả"</option>
                        {ClaimEventType::all().into_iter().map(|e| view! {
                            <option value={e.code()}>{e.label()}</option>
                        }).collect_view()}
                    </select>
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
                            <th class="table__header-cell">"Số hồ sơ"</th>
                            <th class="table__header-cell">"Số hợp đồng"</th>
                            <th class="table__header-cell">"Người yêu cầu"</th>
                            <th class="table__header-cell">"Sự kiện"</th>
                            <th class="table__header-cell">"Ngày sự kiện"</th>
                            <th class="table__header-cell">"Yêu cầu"</th>
                            <th class="table__header-cell">"Đã duyệt"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell">"Chuyển trạng thái"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let id = rec.display("id");
                            let status_code = rec.display("status");
                            let claimed = rec.field_num("amountClaimed").map(format_vnd);
                            let approved = rec.field_num("amountApproved").map(format_vnd);
                            let transitions = items
                                .get()
                                .iter()
                                .find(|c| c.id.as_string() == id)
                                .map(|c| c.status.next_statuses())
                                .unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("claimNo")}</td>
                                    <td class="table__cell">{rec.display("policyNo")}</td>
                                    <td class="table__cell">{rec.display("claimantName")}</td>
                                    <td class="table__cell">{event_label(&rec.display("eventType"))}</td>
                                    <td class="table__cell">{format_date(&rec.display("eventDate"))}</td>
                                    <td class="table__cell table__cell--number">
                                        {claimed.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell table__cell--number">
                                        {approved.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">
                                        <span class=format!("tag tag--{}", status_code)>
                                            {status_label(&status_code)}
                                        </span>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        {transitions.into_iter().map(|next| {
                                            let id = id.clone();
                                            view! {
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| advance(id.clone(), next)
                                                >
                                                    {next.label()}
                                                </button>
                                            }
                                        }).collect_view()}
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
