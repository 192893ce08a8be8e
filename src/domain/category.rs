use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Node of the fixed category taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// Lowercase form used in URLs, e.g. `crops`.
    pub slug: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    /// Cached count; not recomputed from the live collection.
    #[serde(default)]
    pub product_count: u32,
}
