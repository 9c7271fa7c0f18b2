use crate::dashboards::revenue::RevenueDashboard;
use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_role::ui::list::RoleList;
use crate::domain::a003_policy::ui::list::PolicyList;
use crate::domain::a004_base_policy::ui::list::BasePolicyList;
use crate::domain::a005_partner::ui::list::PartnerList;
use crate::domain::a006_data_source::ui::list::DataSourceList;
use crate::domain::a007_claim::ui::list::ClaimList;
use crate::domain::a008_payment::ui::list::PaymentList;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn CurrentPage() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.current_page.get() {
        Page::RevenueDashboard => view! { <RevenueDashboard /> }.into_any(),
        Page::Accounts => view! { <AccountList /> }.into_any(),
        Page::Roles => view! { <RoleList /> }.into_any(),
        Page::Policies => view! { <PolicyList /> }.into_any(),
        Page::BasePolicies => view! { <BasePolicyList /> }.into_any(),
        Page::Partners => view! { <PartnerList /> }.into_any(),
        Page::DataSources => view! { <DataSourceList /> }.into_any(),
        Page::Claims => view! { <ClaimList /> }.into_any(),
        Page::Payments => view! { <PaymentList /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell center=|| view! { <CurrentPage /> }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
