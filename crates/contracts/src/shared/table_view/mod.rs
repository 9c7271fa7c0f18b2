//! Generic tabular data view: filter + search + paginate + aggregate.
//!
//! Every list page of the console loads its collection once and derives the
//! visible slice from it in memory. The controller here owns that derivation,
//! parameterized by a per-entity [`TableViewConfig`], so pages do not each
//! re-implement the same filtering/pagination logic against their own field
//! names.
//!
//! Summary figures are intentionally computed over the *full* record store,
//! never the filtered view: the stat cards describe the data set, the table
//! describes the current selection.

mod aggregate;
mod controller;
mod filter;
mod paginate;
mod record;
mod search;

pub use aggregate::{compute_stats, AggregateSpec, SummaryStats};
pub use controller::{TableViewConfig, TableViewController, TableViewError, TableViewOutput};
pub use filter::{matches_filters, FilterPolicy, FilterState};
pub use paginate::{paginate, PageInfo, PageState};
pub use record::Record;
pub use search::matches_search;
