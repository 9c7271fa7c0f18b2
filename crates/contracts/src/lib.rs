//! Shared contracts for the agricultural-insurance admin console.
//!
//! Holds the domain entity types exchanged with the REST backend, the
//! dashboard projections, and the generic tabular data view core used by
//! every list page in the frontend.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
