//! Core library exports for the Farm-Easy marketplace catalog.
//!
//! The `data` feature exposes the typed records, the catalog query engine and
//! the in-memory repository. The `server` feature adds the forms, services and
//! JSON routes used by the web application.

#[cfg(feature = "data")]
pub mod catalog;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
