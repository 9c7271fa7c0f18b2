use crate::domain::a004_base_policy::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::format_percent;
use crate::shared::icons::icon;
use crate::shared::table_view::TableViewHandle;
use crate::system::auth::context::use_session;
use contracts::domain::a003_policy::CropType;
use contracts::domain::a004_base_policy::BasePolicyStatus;
use contracts::shared::table_view::{AggregateSpec, FilterPolicy, Record, TableViewConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

fn table_config() -> TableViewConfig {
    TableViewConfig {
        filter_policies: BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("crop".to_string(), FilterPolicy::Exact),
        ]),
        search_fields: vec!["code".to_string(), "name".to_string()],
        page_size: 20,
        aggregates: BTreeMap::from([
            ("total".to_string(), AggregateSpec::Count),
            (
                "published".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("status").as_deref() == Some("published")
                }),
            ),
        ]),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BasePolicyList() -> impl IntoView {
    let session = use_session();
    let table = TableViewHandle::new(table_config());
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let crop_filter = RwSignal::new(String::new());

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_base_policies(&token).await {
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
        ]);
    };

    let clear_filters = move |_| {
        status_filter.set(String::new());
        crop_filter.set(String::new());
        table.clear_filters();
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sản phẩm bảo hiểm gốc"</h1>
                    <div class="header__subtitle">
                        {move || {
                            let stats = table.output().summary_stats;
                            format!(
                                "{} sản phẩm, {} đang phát hành",
                                stats.get("total").copied().unwrap_or(0.0) as u64,
                                stats.get("published").copied().unwrap_or(0.0) as u64,
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
                        placeholder="Tìm theo mã, tên sản phẩm..."
                    />
                    <select
                        class="filter-select"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Trạng thái: tất cả"</option>
                        {BasePolicyStatus::all().into_iter().map(|s| view! {
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
                            <th class="table__header-cell">"Tên sản phẩm"</th>
                            <th class="table__header-cell">"Cây trồng"</th>
                            <th class="table__header-cell">"Tỷ lệ chi trả"</th>
                            <th class="table__header-cell">"Tỷ lệ phí"</th>
                            <th class="table__header-cell">"Bậc chi trả"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.output().visible_records.into_iter().map(|rec| {
                            let status_code = rec.display("status");
                            let status = BasePolicyStatus::from_code(&status_code)
                                .map(|s| s.label())
                                .unwrap_or("-");
                            let crop = CropType::from_code(&rec.display("crop"))
                                .map(|c| c.label())
                                .unwrap_or("-");
                            let coverage = rec.field_num("coverageRate").map(format_percent);
                            let premium = rec.field_num("premiumRate").map(format_percent);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{rec.display("code")}</td>
                                    <td class="table__cell">{rec.display("name")}</td>
                                    <td class="table__cell">{crop}</td>
                                    <td class="table__cell table__cell--number">
                                        {coverage.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell table__cell--number">
                                        {premium.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{rec.display("tierLevel")}</td>
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
