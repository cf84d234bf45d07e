//! Category type and the active-offer tally for a store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::offer::Offer;

/// A named grouping offers can belong to, independent of any store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Unique across categories; offers reference it as free text.
    pub name: String,
    pub icon: Option<String>,
}

/// One merged entry of the per-store category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOfferCount {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub offer_count: i64,
}

/// Tallies offers by category name.
///
/// Categories with no offers are absent from the returned map; the merge in
/// [`categories_with_offer_count`] is what fills in the zeros.
#[must_use]
pub fn count_offers_by_category(offers: &[Offer]) -> HashMap<String, i64> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for offer in offers {
        *counts.entry(offer.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Merges the full category list with a tally, defaulting missing counts to
/// zero. Exactly one entry per known category, zero-offer ones included.
#[must_use]
pub fn categories_with_offer_count(
    categories: Vec<Category>,
    counts: &HashMap<String, i64>,
) -> Vec<CategoryOfferCount> {
    categories
        .into_iter()
        .map(|category| {
            let offer_count = counts.get(&category.name).copied().unwrap_or(0);
            CategoryOfferCount {
                id: category.id,
                name: category.name,
                icon: category.icon,
                offer_count,
            }
        })
        .collect()
}
