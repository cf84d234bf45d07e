//! Queries against the `offers` table: the four active-listing shapes plus
//! lookup by id.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use offerboard_core::{DiscountType, Offer, OfferFilter};

use crate::DbError;

const OFFER_COLUMNS: &str = "id, store_id, title, description, category, discount_type, \
     discount_value, original_price, final_price, image_url, valid_from, valid_until, \
     terms, requires_loyalty_card, coupon_code, minimum_purchase, eligible_products, \
     exclusions, created_at";

/// A row from the `offers` table. `discount_type` stays a string here; it is
/// parsed into [`DiscountType`] on conversion to the domain type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OfferRow {
    pub id: Uuid,
    pub store_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub discount_type: String,
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

impl TryFrom<OfferRow> for Offer {
    type Error = DbError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        let discount_type: DiscountType = row
            .discount_type
            .parse()
            .map_err(|e: offerboard_core::offer::UnknownDiscountType| {
                DbError::Decode(e.to_string())
            })?;

        Ok(Offer {
            id: row.id,
            store_id: row.store_id,
            title: row.title,
            description: row.description,
            category: row.category,
            discount_type,
            discount_value: row.discount_value,
            original_price: row.original_price,
            final_price: row.final_price,
            image_url: row.image_url,
            valid_from: row.valid_from,
            valid_until: row.valid_until,
            terms: row.terms,
            requires_loyalty_card: row.requires_loyalty_card,
            coupon_code: row.coupon_code,
            minimum_purchase: row.minimum_purchase,
            eligible_products: row.eligible_products,
            exclusions: row.exclusions,
            created_at: row.created_at,
        })
    }
}

/// Lists active offers for a store, dispatching on the filter to one of four
/// query shapes.
///
/// All shapes bound only the upper edge of the validity window
/// (`valid_until >= now`); offers whose `valid_from` is still in the future
/// are included. Search matches are case-insensitive substrings over title
/// or description. No ordering is imposed here; sorting happens in the
/// caller via `offerboard_core::sort_offers`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::Decode`] if a
/// row carries an unknown discount type.
pub async fn list_active_offers(
    pool: &PgPool,
    store_id: Uuid,
    filter: &OfferFilter,
    now: DateTime<Utc>,
) -> Result<Vec<Offer>, DbError> {
    let rows = match filter {
        OfferFilter::All => find_active_by_store(pool, store_id, now).await?,
        OfferFilter::Category(category) => {
            find_active_by_store_and_category(pool, store_id, category, now).await?
        }
        OfferFilter::Search(search) => search_active_by_store(pool, store_id, search, now).await?,
        OfferFilter::CategoryAndSearch { category, search } => {
            search_active_by_store_and_category(pool, store_id, category, search, now).await?
        }
    };

    rows.into_iter().map(Offer::try_from).collect()
}

async fn find_active_by_store(
    pool: &PgPool,
    store_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<OfferRow>, sqlx::Error> {
    sqlx::query_as::<_, OfferRow>(&format!(
        "SELECT {OFFER_COLUMNS} FROM offers \
         WHERE store_id = $1 AND valid_until >= $2"
    ))
    .bind(store_id)
    .bind(now)
    .fetch_all(pool)
    .await
}

async fn find_active_by_store_and_category(
    pool: &PgPool,
    store_id: Uuid,
    category: &str,
    now: DateTime<Utc>,
) -> Result<Vec<OfferRow>, sqlx::Error> {
    sqlx::query_as::<_, OfferRow>(&format!(
        "SELECT {OFFER_COLUMNS} FROM offers \
         WHERE store_id = $1 AND category = $2 AND valid_until >= $3"
    ))
    .bind(store_id)
    .bind(category)
    .bind(now)
    .fetch_all(pool)
    .await
}

async fn search_active_by_store(
    pool: &PgPool,
    store_id: Uuid,
    search: &str,
    now: DateTime<Utc>,
) -> Result<Vec<OfferRow>, sqlx::Error> {
    sqlx::query_as::<_, OfferRow>(&format!(
        "SELECT {OFFER_COLUMNS} FROM offers \
         WHERE store_id = $1 \
           AND (title ILIKE '%' || $2 || '%' OR description ILIKE '%' || $2 || '%') \
           AND valid_until >= $3"
    ))
    .bind(store_id)
    .bind(search)
    .bind(now)
    .fetch_all(pool)
    .await
}

async fn search_active_by_store_and_category(
    pool: &PgPool,
    store_id: Uuid,
    category: &str,
    search: &str,
    now: DateTime<Utc>,
) -> Result<Vec<OfferRow>, sqlx::Error> {
    sqlx::query_as::<_, OfferRow>(&format!(
        "SELECT {OFFER_COLUMNS} FROM offers \
         WHERE store_id = $1 AND category = $2 \
           AND (title ILIKE '%' || $3 || '%' OR description ILIKE '%' || $3 || '%') \
           AND valid_until >= $4"
    ))
    .bind(store_id)
    .bind(category)
    .bind(search)
    .bind(now)
    .fetch_all(pool)
    .await
}

/// Looks up a single offer by primary key.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::Decode`] if
/// the row carries an unknown discount type.
pub async fn get_offer_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Offer>, DbError> {
    let row = sqlx::query_as::<_, OfferRow>(&format!(
        "SELECT {OFFER_COLUMNS} FROM offers WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Offer::try_from).transpose()
}
