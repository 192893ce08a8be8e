//! Raw request parameters and their conversion into typed queries.
//!
//! Malformed input is rejected here, before the catalog engine runs.

pub mod products;
pub mod sellers;
