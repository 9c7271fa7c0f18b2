use leptos::prelude::*;

/// Every screen the console can show. The sidebar navigates by setting the
/// current page; there is no URL router in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    RevenueDashboard,
    Accounts,
    Roles,
    Policies,
    BasePolicies,
    Partners,
    DataSources,
    Claims,
    Payments,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::RevenueDashboard => "Doanh thu",
            Page::Accounts => "Tài khoản",
            Page::Roles => "Vai trò & quyền",
            Page::Policies => "Hợp đồng bảo hiểm",
            Page::BasePolicies => "Sản phẩm gốc",
            Page::Partners => "Đối tác",
            Page::DataSources => "Nguồn dữ liệu",
            Page::Claims => "Bồi thường",
            Page::Payments => "Thanh toán",
        }
    }
}

/// App-wide UI state shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::RevenueDashboard),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_title() {
        let pages = [
            Page::RevenueDashboard,
            Page::Accounts,
            Page::Roles,
            Page::Policies,
            Page::BasePolicies,
            Page::Partners,
            Page::DataSources,
            Page::Claims,
            Page::Payments,
        ];
        for page in pages {
            assert!(!page.title().is_empty());
        }
    }
}
