use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, Grade, ProductId, ProductPrice, ProductStatus, SellerId, SellerRating, Unit,
};

/// A listing offered by a seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Display name. May be empty; an empty name never matches a search term.
    pub name: String,
    pub description: String,
    pub category: CategoryName,
    pub subcategory: String,
    pub price: ProductPrice,
    pub unit: Unit,
    #[serde(default)]
    pub images: Vec<String>,
    /// Copy of the seller taken when the listing was created.
    pub seller: SellerSnapshot,
    pub availability: Availability,
    pub quality: Quality,
    pub location: ProductLocation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ProductStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub inquiries: u64,
}

impl Product {
    /// Whether the listing should be shown to buyers.
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

/// Denormalized seller fields embedded in a listing.
///
/// This is not kept in sync with [`crate::domain::seller::Seller`]; a rating
/// shown here may be older than the seller's current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerSnapshot {
    pub id: SellerId,
    pub name: String,
    pub phone: String,
    pub location: SellerLocation,
    pub rating: SellerRating,
    pub total_sales: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerLocation {
    pub state: String,
    pub district: String,
    #[serde(default)]
    pub village: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub quantity: u32,
    pub harvest_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Quality {
    pub grade: Grade,
    pub organic: bool,
    pub certified: bool,
}

/// Where the produce is. The region filter matches on `state`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLocation {
    pub state: String,
    pub district: String,
    pub pincode: String,
}
