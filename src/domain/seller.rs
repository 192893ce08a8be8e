use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, SellerId, SellerRating};

/// Canonical seller record listed in the seller directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub location: SellerRegion,
    pub phone: String,
    pub rating: SellerRating,
    pub total_reviews: u32,
    pub verified: bool,
    /// Categories the seller trades in.
    #[serde(default)]
    pub specialization: Vec<CategoryName>,
    #[serde(default)]
    pub experience: String,
    pub total_products: u32,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerRegion {
    pub state: String,
    pub district: String,
}
