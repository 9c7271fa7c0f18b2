//! Sidebar with the console menu, grouped by functional area.

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: Vec<(Page, &'static str)>, // (target page, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Báo cáo",
            items: vec![(Page::RevenueDashboard, "bar-chart")],
        },
        MenuGroup {
            label: "Nghiệp vụ",
            items: vec![
                (Page::Policies, "file-text"),
                (Page::BasePolicies, "package"),
                (Page::Claims, "alert-triangle"),
                (Page::Payments, "credit-card"),
            ],
        },
        MenuGroup {
            label: "Danh mục",
            items: vec![
                (Page::Partners, "building"),
                (Page::DataSources, "database"),
            ],
        },
        MenuGroup {
            label: "Hệ thống",
            items: vec![(Page::Accounts, "users"), (Page::Roles, "shield")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let groups = move || {
        menu_groups()
            .into_iter()
            .map(|group| {
                let items = group
                    .items
                    .into_iter()
                    .map(|(page, icon_name)| {
                        let is_active = move || ctx.current_page.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(icon_name)}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="sidebar__group">
                        <div class="sidebar__group-label">{group.label}</div>
                        {items}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || ctx.sidebar_open.get()>
            <nav class="sidebar">{groups()}</nav>
        </Show>
    }
}
