use super::aggregate::{compute_stats, AggregateSpec, SummaryStats};
use super::filter::{matches_filters, FilterPolicy, FilterState};
use super::paginate::{paginate, total_pages, PageInfo, PageState};
use super::record::Record;
use super::search::matches_search;
use std::collections::BTreeMap;
use thiserror::Error;

/// Misconfiguration of a table view. Raised eagerly at construction or on a
/// filter submission naming an undeclared field; never raised by the pure
/// data-derivation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableViewError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("search field list contains an empty name")]
    EmptySearchField,
    #[error("aggregate `{0}` references an empty field name")]
    EmptyAggregateField(String),
    #[error("filter field `{0}` is not declared in the filter policies")]
    UndeclaredFilterField(String),
}

/// Per-entity presentation configuration (spec of the view, not of the data).
#[derive(Debug, Clone, Default)]
pub struct TableViewConfig {
    /// Matching policy per filterable field.
    pub filter_policies: BTreeMap<String, FilterPolicy>,
    /// Fields the free-text search runs over.
    pub search_fields: Vec<String>,
    /// Initial page size.
    pub page_size: usize,
    /// Named summary figures, computed over the unfiltered store.
    pub aggregates: BTreeMap<String, AggregateSpec>,
}

impl TableViewConfig {
    fn validate(&self) -> Result<(), TableViewError> {
        if self.page_size == 0 {
            return Err(TableViewError::ZeroPageSize);
        }
        if self.search_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(TableViewError::EmptySearchField);
        }
        for (name, spec) in &self.aggregates {
            if let Some(field) = spec.field() {
                if field.trim().is_empty() {
                    return Err(TableViewError::EmptyAggregateField(name.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Derived view state handed to the page for rendering.
#[derive(Debug, Clone)]
pub struct TableViewOutput {
    pub visible_records: Vec<Record>,
    pub page_info: PageInfo,
    pub summary_stats: SummaryStats,
    pub filter_state: FilterState,
    pub search_query: String,
}

/// Owns one view session: the fetched record store plus filter, search and
/// page state, with the four event operations of a list page.
///
/// All operations are synchronous in-memory state transitions; the only
/// asynchronous boundary (the fetch itself) stays outside and hands its
/// result in through [`TableViewController::replace_records`].
#[derive(Debug, Clone)]
pub struct TableViewController {
    config: TableViewConfig,
    records: Vec<Record>,
    filters: FilterState,
    search_query: String,
    page: PageState,
    stats: SummaryStats,
}

impl TableViewController {
    pub fn new(config: TableViewConfig) -> Result<Self, TableViewError> {
        config.validate()?;
        let page = PageState::first(config.page_size);
        let stats = compute_stats(&[], &config.aggregates);
        Ok(Self {
            config,
            records: Vec::new(),
            filters: FilterState::new(),
            search_query: String::new(),
            page,
            stats,
        })
    }

    /// Hand over a freshly fetched store. Resets to page 1 when the store
    /// changes size, re-clamps the current page otherwise; summary stats are
    /// recomputed from the new store either way.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        let size_changed = records.len() != self.records.len();
        self.records = records;
        self.stats = compute_stats(&self.records, &self.config.aggregates);
        if size_changed {
            self.page.current_page = 1;
        } else {
            self.clamp_page();
        }
    }

    /// Shallow-merge submitted values into the filter state and jump back to
    /// page 1. Keys absent from the submission keep their current value.
    /// Submitting a field with no declared policy is a programmer error.
    pub fn submit_filters<I>(&mut self, values: I) -> Result<(), TableViewError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let values: Vec<(String, String)> = values.into_iter().collect();
        for (field, _) in &values {
            if !self.config.filter_policies.contains_key(field) {
                return Err(TableViewError::UndeclaredFilterField(field.clone()));
            }
        }
        for (field, value) in values {
            self.filters.insert(field, value);
        }
        self.page.current_page = 1;
        Ok(())
    }

    /// Set the free-text query and jump back to page 1.
    pub fn search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page.current_page = 1;
    }

    /// Reset filters and search to their initial empty state, back to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search_query.clear();
        self.page.current_page = 1;
    }

    /// Change page and optionally page size; touches nothing but the page
    /// state. The page lands clamped into `[1, total_pages]`; a page-size
    /// change keeps the current page where it still exists.
    pub fn change_page(&mut self, page: usize, page_size: Option<usize>) {
        if let Some(size) = page_size {
            if size > 0 {
                self.page.page_size = size;
            }
        }
        self.page.current_page = page.max(1);
        self.clamp_page();
    }

    /// Derive the visible slice and metadata for rendering.
    pub fn snapshot(&self) -> TableViewOutput {
        let filtered = self.filtered();
        let (slice, page_info) = paginate(&filtered, self.page);
        TableViewOutput {
            visible_records: slice.to_vec(),
            page_info,
            summary_stats: self.stats.clone(),
            filter_state: self.filters.clone(),
            search_query: self.search_query.clone(),
        }
    }

    /// Number of non-empty filter entries, plus one for an active search.
    /// Drives the badge on the filter panel header.
    pub fn active_filter_count(&self) -> usize {
        let filters = self.filters.values().filter(|v| !v.is_empty()).count();
        filters + usize::from(!self.search_query.is_empty())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    fn filtered(&self) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| matches_filters(r, &self.filters, &self.config.filter_policies))
            .filter(|r| matches_search(r, &self.search_query, &self.config.search_fields))
            .cloned()
            .collect()
    }

    fn clamp_page(&mut self) {
        let pages = total_pages(self.filtered().len(), self.page.page_size);
        self.page.current_page = self.page.current_page.clamp(1, pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> Record {
        match v {
            serde_json::Value::Object(m) => Record(m),
            _ => unreachable!(),
        }
    }

    fn config() -> TableViewConfig {
        TableViewConfig {
            filter_policies: BTreeMap::from([
                ("status".to_string(), FilterPolicy::Exact),
                ("name".to_string(), FilterPolicy::Substring),
            ]),
            search_fields: vec!["name".to_string()],
            page_size: 10,
            aggregates: BTreeMap::from([
                ("count".to_string(), AggregateSpec::Count),
                ("total".to_string(), AggregateSpec::Sum("amount".into())),
            ]),
        }
    }

    fn store(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                record(json!({
                    "id": i,
                    "name": format!("Nguyễn Văn {}", i),
                    "status": if i % 2 == 0 { "active" } else { "draft" },
                    "amount": 10.0,
                }))
            })
            .collect()
    }

    fn controller(n: usize) -> TableViewController {
        let mut c = TableViewController::new(config()).unwrap();
        c.replace_records(store(n));
        c
    }

    #[test]
    fn zero_page_size_fails_at_construction() {
        let cfg = TableViewConfig {
            page_size: 0,
            ..config()
        };
        assert_eq!(
            TableViewController::new(cfg).unwrap_err(),
            TableViewError::ZeroPageSize
        );
    }

    #[test]
    fn empty_aggregate_field_fails_at_construction() {
        let mut cfg = config();
        cfg.aggregates
            .insert("bad".into(), AggregateSpec::Sum("".into()));
        assert_eq!(
            TableViewController::new(cfg).unwrap_err(),
            TableViewError::EmptyAggregateField("bad".into())
        );
    }

    #[test]
    fn empty_controller_reports_a_valid_empty_state() {
        let c = TableViewController::new(config()).unwrap();
        let out = c.snapshot();
        assert!(out.visible_records.is_empty());
        assert_eq!(out.page_info.total, 0);
        assert_eq!(out.page_info.total_pages, 1);
        assert_eq!(out.summary_stats["count"], 0.0);
    }

    #[test]
    fn no_active_filters_is_the_identity() {
        let c = controller(7);
        let out = c.snapshot();
        assert_eq!(out.visible_records.len(), 7);
        assert_eq!(out.visible_records, c.records().to_vec());
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut c = controller(20);
        c.submit_filters([("status".to_string(), "active".to_string())])
            .unwrap();
        let once = c.snapshot();
        c.submit_filters([("status".to_string(), "active".to_string())])
            .unwrap();
        let twice = c.snapshot();
        assert_eq!(once.visible_records, twice.visible_records);
        assert_eq!(once.page_info, twice.page_info);
    }

    #[test]
    fn undeclared_filter_field_is_rejected() {
        let mut c = controller(5);
        let err = c
            .submit_filters([("province".to_string(), "An Giang".to_string())])
            .unwrap_err();
        assert_eq!(
            err,
            TableViewError::UndeclaredFilterField("province".into())
        );
    }

    #[test]
    fn submit_is_a_shallow_merge() {
        let mut c = controller(20);
        c.submit_filters([("status".to_string(), "active".to_string())])
            .unwrap();
        c.submit_filters([("name".to_string(), "văn".to_string())])
            .unwrap();
        let out = c.snapshot();
        assert_eq!(out.filter_state["status"], "active");
        assert_eq!(out.filter_state["name"], "văn");
    }

    #[test]
    fn pagination_scenario_23_items() {
        let mut c = controller(23);
        c.change_page(3, None);
        let out = c.snapshot();
        assert_eq!(out.page_info.total_pages, 3);
        assert_eq!(out.visible_records.len(), 3);

        c.change_page(5, None);
        let clamped = c.snapshot();
        assert_eq!(clamped.page_info.current_page, 3);
        assert_eq!(clamped.visible_records, out.visible_records);
    }

    #[test]
    fn filter_and_search_reset_to_page_one() {
        let mut c = controller(50);
        c.change_page(4, None);
        c.submit_filters([("status".to_string(), "active".to_string())])
            .unwrap();
        assert_eq!(c.snapshot().page_info.current_page, 1);

        c.change_page(2, None);
        c.search("văn");
        assert_eq!(c.snapshot().page_info.current_page, 1);
    }

    #[test]
    fn page_size_change_preserves_page_where_possible() {
        let mut c = controller(50);
        c.change_page(2, None);
        c.change_page(2, Some(20));
        assert_eq!(c.snapshot().page_info.current_page, 2);

        // 50 items at 100 per page leave only one page
        c.change_page(2, Some(100));
        assert_eq!(c.snapshot().page_info.current_page, 1);
    }

    #[test]
    fn clear_resets_filters_search_and_page() {
        let mut c = controller(50);
        c.submit_filters([("status".to_string(), "draft".to_string())])
            .unwrap();
        c.search("văn 1");
        c.change_page(2, None);
        c.clear_filters();
        let out = c.snapshot();
        assert!(out.filter_state.values().all(|v| v.is_empty()) || out.filter_state.is_empty());
        assert!(out.search_query.is_empty());
        assert_eq!(out.page_info.current_page, 1);
        assert_eq!(out.visible_records.len(), 10);
        assert_eq!(c.active_filter_count(), 0);
    }

    #[test]
    fn summary_stats_ignore_filters_and_search() {
        let mut c = controller(50);
        let before = c.snapshot().summary_stats;
        c.submit_filters([("status".to_string(), "draft".to_string())])
            .unwrap();
        c.search("văn 4");
        let after = c.snapshot().summary_stats;
        assert_eq!(before["count"], 50.0);
        assert_eq!(after["count"], 50.0);
        assert_eq!(before["total"], after["total"]);
    }

    #[test]
    fn search_scenario_vietnamese_names() {
        let mut c = TableViewController::new(config()).unwrap();
        c.replace_records(vec![
            record(json!({"id": 1, "name": "Nguyen Van A"})),
            record(json!({"id": 2, "name": "Tran Thi B"})),
        ]);
        c.search("van");
        let out = c.snapshot();
        assert_eq!(out.visible_records.len(), 1);
        assert_eq!(
            out.visible_records[0].field_str("name").as_deref(),
            Some("Nguyen Van A")
        );
    }

    #[test]
    fn refetch_of_different_size_resets_page() {
        let mut c = controller(50);
        c.change_page(3, None);
        c.replace_records(store(23));
        assert_eq!(c.snapshot().page_info.current_page, 1);
    }

    #[test]
    fn refetch_of_same_size_keeps_page() {
        let mut c = controller(50);
        c.change_page(3, None);
        c.replace_records(store(50));
        assert_eq!(c.snapshot().page_info.current_page, 3);
    }

    #[test]
    fn active_filter_count_includes_search() {
        let mut c = controller(10);
        assert_eq!(c.active_filter_count(), 0);
        c.submit_filters([
            ("status".to_string(), "active".to_string()),
            ("name".to_string(), String::new()),
        ])
        .unwrap();
        assert_eq!(c.active_filter_count(), 1);
        c.search("văn");
        assert_eq!(c.active_filter_count(), 2);
    }
}
