//! Typed records of the marketplace: listings, categories and sellers.

pub mod category;
pub mod product;
pub mod seller;
pub mod types;
