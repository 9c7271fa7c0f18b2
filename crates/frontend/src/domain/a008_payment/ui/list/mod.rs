use crate::domain::a008_payment::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_vnd;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a008_payment::{PaymentDirection, PaymentMethod, PaymentStatus};
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("direction".to_string(), FilterPolicy::Exact),
            ("method".to_string(), FilterPolicy::Exact),
        ]),
        search_fields: vec![
            "paymentNo".to_string(),
            "policyNo".to_string(),
            "payerName".to_string(),
        ],
        page_size: 20,
        aggregates: BTreeMap::from([
            ("total".to_string(), AggregateSpec::Count),
            (
                "pending".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("status").as_deref() == Some("pending")
                }),
            ),
            (
                "totalAmount".to_string(),
                AggregateSpec::Sum("amount".to_string()),
            ),
            (
                "avgAmount".to_string(),
                AggregateSpec::Average("amount".to_string()),
            ),
        ]),
    }
}

fn method_label(code: &str) -> &'static str {
    PaymentMethod::from_code(code).map(|m| m.label()).unwrap_or("-")
}

fn status_label(code: &str) -> &'static str {
    PaymentStatus::from_code(code).map(|s| s.label()).unwrap_or("-")
}

fn direction_label(code: &str) -> &'static str {
    match code {
        "premium_in" => PaymentDirection::PremiumIn.label(),
        "claim_out" => PaymentDirection::ClaimOut.label(),
        _ => "-",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let direction_filter = RwSignal::new(String::new());
    let method_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_payments(&token).await {
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
            ("status".to_string(), status_filter.get()),
            ("direction".to_string(), direction_filter.get()),
            ("method".to_string(), method_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        status_filter.set(String::new());
        direction_filter.set(String::new());
        method_filter.set(String::new());
        table.clear_filters();
    };

    fetch();

    let stat = move |name: &'static str| {
        Signal::derive(move || table.output().summary_stats.get(name).copied())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Thanh toán"</h1>
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
                    label="Tổng giao dịch".to_string()
                    icon_name="credit-card".to_string()
                    value=stat("total")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Đang xử lý".to_string()
                    icon_name="credit-card".to_string()
                    value=stat("pending")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Tổng giá trị".to_string()
                    icon_name="bar-chart".to_string()
                    value=stat("totalAmount")
                    format=StatFormat::Money
                />
                <StatCard
                    label="Giá trị bình quân".to_string()
                    icon_name="bar-chart".to_string()
                    value=stat("avgAmount")
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
                        placeholder="Tìm theo số chứng từ, số HĐ, người nộp..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        {PaymentStatus::all().into_iter().map(|s| view! {
                            <option value={s.code()}>{s.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || direction_filter.get()
                        on:change=move |ev| direction_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Dòng tiền: tất cả"</option>
                        <option value="premium_in">{PaymentDirection::PremiumIn.label()}</option>
                        <option value="claim_out">{PaymentDirection::ClaimOut.label()}</option>
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || method_filter.get()
                        on:change=move |ev| method_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Hình thức: tất cả"</option>
                        {PaymentMethod::all().into_iter().map(|m| view! {
                            <option value={m.code()}>{m.label()}</option>
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
                            <th class="table__header-cell">"Số chứng từ"</th>
                            <th class="table__header-cell">"Số hợp đồng"</th>
                            <th class="table__header-cell">"Người nộp/nhận"</th>
                            <th class="table__header-cell">"Dòng tiền"</th>
                            <th class="table__header-cell">"Hình thức"</th>
                            <th class="table__header-cell">"Số tiền"</th>
                            <th class="table__header-cell">"Thanh toán lúc"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let status_code = rec.display("status");
                            let direction_code = rec.display("direction");
                            let amount = rec.field_num("amount").map(format_vnd);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("paymentNo")}</td>
                                    <td class="table__cell">{rec.display("policyNo")}</td>
                                    <td class="table__cell">{rec.display("payerName")}</td>
                                    <td class="table__cell">
                                        <span class=format!("tag tag--{}", direction_code)>
                                            {direction_label(&direction_code)}
                                        </span>
                                    </td>
                                    <td class="table__cell">{method_label(&rec.display("method"))}</td>
                                    <td class="table__cell table__cell--number">
                                        {amount.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{format_datetime(&rec.display("paidAt"))}</td>
                                    <td class="table__cell">
                                        <span class=format!("tag tag--{}", status_code)>
                                            {status_label(&status_code)}
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
