//! Error conversion glue between the form and service layers.
//!
//! Forms and domain types must not depend on service error types, so the
//! `From` impls live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::products::BrowseProductsFormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<BrowseProductsFormError> for ServiceError {
    fn from(val: BrowseProductsFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
