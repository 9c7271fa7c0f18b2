use crate::domain::a003_policy::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::format_date;
use crate::shared::format::format_vnd;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a003_policy::{CropType, PolicyStatus};
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("crop".to_string(), FilterPolicy::Exact),
            ("province".to_string(), FilterPolicy::Substring),
        ]),
        search_fields: vec![
            "policyNo".to_string(),
            "holderName".to_string(),
            "partnerName".to_string(),
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
                "totalPremium".to_string(),
                AggregateSpec::Sum("premium".to_string()),
            ),
            (
                "avgSumInsured".to_string(),
                AggregateSpec::Average("sumInsured".to_string()),
            ),
        ]),
    }
}

fn crop_label(code: &str) -> &'static str {
    CropType::from_code(code).map(|c| c.label()).unwrap_or("-")
}

fn status_label(code: &str) -> &'static str {
    PolicyStatus::from_code(code).map(|s| s.label()).unwrap_or("-")
}

#[component]
#[allow(non_snake_case)]
pub fn PolicyList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let crop_filter = RwSignal::new(String::new());
    let province_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_policies(&token).await {
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
            ("crop".to_string(), crop_filter.get()),
            ("province".to_string(), province_filter.get()),
        ]);
    };

    let clear_filters = move |_| {
        status_filter.set(String::new());
        crop_filter.set(String::new());
        province_filter.set(String::new());
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
                    <h1 class="header__title">"Hợp đồng bảo hiểm"</h1>
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
                    label="Tổng hợp đồng".to_string()
                    icon_name="file-text".to_string()
                    value=stat("total")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Đang hiệu lực".to_string()
                    icon_name="file-text".to_string()
                    value=stat("active")
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Tổng phí bảo hiểm".to_string()
                    icon_name="credit-card".to_string()
                    value=stat("totalPremium")
                    format=StatFormat::Money
                />
                <StatCard
                    label="Số tiền BH bình quân".to_string()
                    icon_name="bar-chart".to_string()
                    value=stat("avgSumInsured")
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
                        placeholder="Tìm theo số HĐ, người tham gia..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        {PolicyStatus::all().into_iter().map(|s| view! {
                            <option value={s.code()}>{s.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        prop:value=move || crop_filter.get()
                        on:change=move |ev| crop_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Cây trồng: tất cả"</option>
                        {CropType::all().into_iter().map(|c| view! {
                            <option value={c.code()}>{c.label()}</option>
                        }).collect_view()}
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
                            <th class="table__header-cell">"Số hợp đồng"</th>
                            <th class="table__header-cell">"Người tham gia"</th>
                            <th class="table__header-cell">"Cây trồng"</th>
                            <th class="table__header-cell">"Tỉnh/thành"</th>
                            <th class="table__header-cell">"Số tiền BH"</th>
                            <th class="table__header-cell">"Phí BH"</th>
                            <th class="table__header-cell">"Hiệu lực từ"</th>
                            <th class="table__header-cell">"Đến"</th>
                            <th class="table__header-cell">"Đối tác"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let status_code = rec.display("status");
                            let sum_insured = rec.field_num("sumInsured").map(format_vnd);
                            let premium = rec.field_num("premium").map(format_vnd);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("policyNo")}</td>
                                    <td class="table__cell">{rec.display("holderName")}</td>
                                    <td class="table__cell">{crop_label(&rec.display("crop"))}</td>
                                    <td class="table__cell">{rec.display("province")}</td>
                                    <td class="table__cell table__cell--number">
                                        {sum_insured.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell table__cell--number">
                                        {premium.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{format_date(&rec.display("effectiveFrom"))}</td>
                                    <td class="table__cell">{format_date(&rec.display("effectiveTo"))}</td>
                                    <td class="table__cell">{rec.display("partnerName")}</td>
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
