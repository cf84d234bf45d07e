//! Offer domain type plus the filter/sort engine applied to store listings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a price reduction is computed and presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
    Bogo,
    Bundle,
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DiscountType::Percentage => "PERCENTAGE",
            DiscountType::Fixed => "FIXED",
            DiscountType::Bogo => "BOGO",
            DiscountType::Bundle => "BUNDLE",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for DiscountType {
    type Err = UnknownDiscountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENTAGE" => Ok(DiscountType::Percentage),
            "FIXED" => Ok(DiscountType::Fixed),
            "BOGO" => Ok(DiscountType::Bogo),
            "BUNDLE" => Ok(DiscountType::Bundle),
            other => Err(UnknownDiscountType(other.to_string())),
        }
    }
}

/// Error for a discount-type string that matches no known variant.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown discount type: {0}")]
pub struct UnknownDiscountType(pub String);

/// A time-bounded discount offer belonging to a store.
///
/// `valid_from <= valid_until` is enforced by the schema; rows violating it
/// cannot exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub store_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Free-text match against `Category::name`; no referential integrity.
    pub category: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub original_price: Option<Decimal>,
    pub final_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub terms: Vec<String>,
    pub requires_loyalty_card: bool,
    pub coupon_code: Option<String>,
    pub minimum_purchase: Option<Decimal>,
    pub eligible_products: Vec<String>,
    pub exclusions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Which of the four listing query shapes to run for a store.
///
/// Built from the optional `category`/`search` request parameters; both are
/// trimmed and empty-after-trim counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferFilter {
    All,
    Category(String),
    Search(String),
    CategoryAndSearch { category: String, search: String },
}

impl OfferFilter {
    #[must_use]
    pub fn from_params(category: Option<&str>, search: Option<&str>) -> Self {
        let category = category.map(str::trim).filter(|s| !s.is_empty());
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        match (category, search) {
            (Some(category), Some(search)) => OfferFilter::CategoryAndSearch {
                category: category.to_string(),
                search: search.to_string(),
            },
            (None, Some(search)) => OfferFilter::Search(search.to_string()),
            (Some(category), None) => OfferFilter::Category(category.to_string()),
            (None, None) => OfferFilter::All,
        }
    }
}

/// Recognized `sortBy` values for offer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by discount value.
    Discount,
    /// Ascending by `valid_until`.
    Expiration,
    /// Ascending lexicographic by category name.
    Category,
    /// Descending by creation timestamp.
    Newest,
}

impl SortKey {
    /// Parses a raw `sortBy` parameter, case-insensitively.
    ///
    /// Absent and unrecognized values both yield `None`: an unknown sort is
    /// never an error, the listing just comes back unsorted. The value is
    /// matched verbatim, so padded input like `" discount "` counts as
    /// unrecognized too.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw?.to_lowercase().as_str() {
            "discount" => Some(SortKey::Discount),
            "expiration" => Some(SortKey::Expiration),
            "category" => Some(SortKey::Category),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }
}

/// Applies the requested ordering to an already-filtered listing.
///
/// `Vec::sort_by` is stable, so offers comparing equal on the sort key keep
/// their prior relative order. `None` returns the input untouched.
#[must_use]
pub fn sort_offers(mut offers: Vec<Offer>, sort_by: Option<SortKey>) -> Vec<Offer> {
    match sort_by {
        Some(SortKey::Discount) => {
            offers.sort_by(|a, b| b.discount_value.cmp(&a.discount_value));
        }
        Some(SortKey::Expiration) => {
            offers.sort_by(|a, b| a.valid_until.cmp(&b.valid_until));
        }
        Some(SortKey::Category) => {
            offers.sort_by(|a, b| a.category.cmp(&b.category));
        }
        Some(SortKey::Newest) => {
            offers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        None => {}
    }
    offers
}

/// True iff `now` falls inside the offer's validity window, both bounds
/// inclusive.
///
/// Note the listing queries only bound the upper edge (`valid_until >= now`),
/// so a listing can contain offers for which this predicate is still false
/// because `valid_from` lies in the future. That asymmetry is long-standing
/// behavior and is kept as-is.
#[must_use]
pub fn is_offer_active(offer: &Offer, now: DateTime<Utc>) -> bool {
    offer.valid_from <= now && now <= offer.valid_until
}
