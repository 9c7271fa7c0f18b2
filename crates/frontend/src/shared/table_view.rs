//! Reactive wrapper around the generic table view controller.
//!
//! One handle per list page: the page feeds fetched records in, reads the
//! derived output inside reactive closures, and wires the four events
//! (filter submit, search, clear, page change) to the handle's methods.

use contracts::shared::table_view::{
    Record, TableViewConfig, TableViewController, TableViewOutput,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TableViewHandle {
    state: RwSignal<TableViewController>,
}

impl TableViewHandle {
    /// Build a handle from a per-entity config. A misconfigured view is a
    /// programmer error and fails fast here.
    pub fn new(config: TableViewConfig) -> Self {
        let controller =
            TableViewController::new(config).expect("invalid table view config");
        Self {
            state: RwSignal::new(controller),
        }
    }

    /// Hand over a freshly fetched record store.
    pub fn set_records(&self, records: Vec<Record>) {
        self.state.update(|c| c.replace_records(records));
    }

    pub fn submit_filters(&self, values: Vec<(String, String)>) {
        self.state.update(|c| {
            if let Err(e) = c.submit_filters(values) {
                log::error!("filter submission rejected: {}", e);
            }
        });
    }

    pub fn search(&self, query: String) {
        self.state.update(|c| c.search(query));
    }

    pub fn clear_filters(&self) {
        self.state.update(|c| c.clear_filters());
    }

    pub fn change_page(&self, page: usize, page_size: Option<usize>) {
        self.state.update(|c| c.change_page(page, page_size));
    }

    /// Change the page size, keeping the current page where it still exists.
    pub fn change_page_size(&self, page_size: usize) {
        self.state.update(|c| {
            let page = c.current_page();
            c.change_page(page, Some(page_size));
        });
    }

    /// Derived view state; reactive when called inside a tracking closure.
    pub fn output(&self) -> TableViewOutput {
        self.state.with(|c| c.snapshot())
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.with(|c| c.active_filter_count())
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|c| c.page_size())
    }
}
