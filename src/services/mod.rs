pub mod categories;
pub mod errors;
pub mod products;
pub mod sellers;

pub use errors::{ServiceError, ServiceResult};
