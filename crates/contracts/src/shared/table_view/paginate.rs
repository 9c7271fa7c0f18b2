use super::record::Record;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn first(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }
}

/// Pagination metadata for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub page_size: usize,
}

/// Number of pages for a given total; never 0, so the UI can always render
/// "page 1 of 1". A zero `page_size` is treated as 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice the filtered sequence for the requested page.
///
/// A `current_page` beyond the last page clamps to the last page, and the
/// clamped value is what the returned [`PageInfo`] reports. Input order is
/// preserved.
pub fn paginate(records: &[Record], state: PageState) -> (&[Record], PageInfo) {
    let total = records.len();
    let page_size = state.page_size.max(1);
    let pages = total_pages(total, page_size);
    let page = state.current_page.clamp(1, pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let slice = if start >= total {
        &records[0..0]
    } else {
        &records[start..end]
    };

    (
        slice,
        PageInfo {
            current_page: page,
            total_pages: pages,
            total,
            page_size,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| match json!({"id": i}) {
                serde_json::Value::Object(m) => Record(m),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn empty_store_still_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        let records = store(0);
        let (slice, info) = paginate(&records, PageState::first(10));
        assert!(slice.is_empty());
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.total, 0);
    }

    #[test]
    fn twenty_three_items_make_three_pages_of_ten() {
        let records = store(23);
        let (slice, info) = paginate(
            &records,
            PageState {
                current_page: 3,
                page_size: 10,
            },
        );
        assert_eq!(info.total_pages, 3);
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn out_of_range_page_clamps_to_last_observably() {
        let records = store(23);
        let (slice, info) = paginate(
            &records,
            PageState {
                current_page: 5,
                page_size: 10,
            },
        );
        assert_eq!(info.current_page, 3);
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0].field_str("id").as_deref(), Some("20"));
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let records = store(5);
        let (slice, info) = paginate(
            &records,
            PageState {
                current_page: 0,
                page_size: 10,
            },
        );
        assert_eq!(info.current_page, 1);
        assert_eq!(slice.len(), 5);
    }

    #[test]
    fn zero_page_size_behaves_as_one_per_page() {
        assert_eq!(total_pages(5, 0), 5);
        assert_eq!(total_pages(0, 0), 1);

        let records = store(3);
        let (slice, info) = paginate(
            &records,
            PageState {
                current_page: 2,
                page_size: 0,
            },
        );
        assert_eq!(info.page_size, 1);
        assert_eq!(info.total_pages, 3);
        assert_eq!(slice.len(), 1);
        assert_eq!(slice[0].field_str("id").as_deref(), Some("1"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let records = store(12);
        let (slice, _) = paginate(
            &records,
            PageState {
                current_page: 2,
                page_size: 5,
            },
        );
        let ids: Vec<String> = slice
            .iter()
            .filter_map(|r| r.field_str("id"))
            .collect();
        assert_eq!(ids, vec!["5", "6", "7", "8", "9"]);
    }
}
