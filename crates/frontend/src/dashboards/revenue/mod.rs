pub mod api;

use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::format::{format_percent, format_vnd};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::dashboards::revenue::RevenueSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Tổng quan doanh thu: phí thu vào, bồi thường chi ra, tỷ lệ tổn thất.
#[component]
#[allow(non_snake_case)]
pub fn RevenueDashboard() -> impl IntoView {
    let session = use_session();
    let summary = RwSignal::new(None::<RevenueSummary>);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_revenue_summary(&token).await {
                Ok(s) => {
                    summary.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    let metric = move |f: fn(&RevenueSummary) -> f64| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Báo cáo doanh thu"</h1>
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
                    label="Tổng phí thu".to_string()
                    icon_name="credit-card".to_string()
                    value=metric(|s| s.total_premium)
                    format=StatFormat::Money
                />
                <StatCard
                    label="Tổng bồi thường đã chi".to_string()
                    icon_name="alert-triangle".to_string()
                    value=metric(|s| s.total_claims_paid)
                    format=StatFormat::Money
                />
                <StatCard
                    label="Doanh thu ròng".to_string()
                    icon_name="bar-chart".to_string()
                    value=metric(|s| s.net_revenue())
                    format=StatFormat::Money
                />
                <StatCard
                    label="Tỷ lệ tổn thất".to_string()
                    icon_name="bar-chart".to_string()
                    value=metric(|s| s.loss_ratio())
                    format=StatFormat::Percent
                />
                <StatCard
                    label="Hợp đồng hiệu lực".to_string()
                    icon_name="file-text".to_string()
                    value=metric(|s| s.active_policies as f64)
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Hồ sơ đang xử lý".to_string()
                    icon_name="alert-triangle".to_string()
                    value=metric(|s| s.open_claims as f64)
                    format=StatFormat::Integer
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tháng"</th>
                            <th class="table__header-cell">"Phí thu"</th>
                            <th class="table__header-cell">"Bồi thường chi"</th>
                            <th class="table__header-cell">"Ròng"</th>
                            <th class="table__header-cell">"Tỷ lệ tổn thất"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || summary.with(|s| {
                            s.as_ref()
                                .map(|s| s.monthly.clone())
                                .unwrap_or_default()
                                .into_iter()
                                .map(|m| {
                                    let ratio = if m.premium_collected == 0.0 {
                                        0.0
                                    } else {
                                        m.claims_paid / m.premium_collected
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{m.month.clone()}</td>
                                            <td class="table__cell table__cell--number">
                                                {format_vnd(m.premium_collected)}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_vnd(m.claims_paid)}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_vnd(m.net())}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_percent(ratio)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
