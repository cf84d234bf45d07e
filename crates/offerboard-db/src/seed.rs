//! Sample-data seeding for an empty database.

use chrono::{Duration, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::DbError;

const CATEGORY_NAMES: [&str; 9] = [
    "Produce",
    "Dairy",
    "Meat",
    "Bakery",
    "Household",
    "Beverages",
    "Frozen",
    "Snacks",
    "Personal Care",
];

struct StoreSeed {
    name: &'static str,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
    latitude: f64,
    longitude: f64,
}

struct OfferSeed {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    discount_type: &'static str,
    discount_value: &'static str,
    original_price: &'static str,
    final_price: &'static str,
    valid_days: i64,
    terms: &'static [&'static str],
    requires_loyalty_card: bool,
    coupon_code: Option<&'static str>,
    minimum_purchase: Option<&'static str>,
    eligible_products: &'static [&'static str],
    exclusions: &'static [&'static str],
}

const STORES: [StoreSeed; 3] = [
    StoreSeed {
        name: "King Soopers - Downtown",
        street: "1155 E 9th Ave",
        city: "Denver",
        state: "CO",
        zip: "80218",
        latitude: 39.7294,
        longitude: -104.9738,
    },
    StoreSeed {
        name: "King Soopers - Highlands",
        street: "2660 Federal Blvd",
        city: "Denver",
        state: "CO",
        zip: "80211",
        latitude: 39.7547,
        longitude: -105.0253,
    },
    StoreSeed {
        name: "Walmart Supercenter",
        street: "3301 Tower Rd",
        city: "Aurora",
        state: "CO",
        zip: "80011",
        latitude: 39.7686,
        longitude: -104.7947,
    },
];

const STORE_1_OFFERS: &[OfferSeed] = &[
    OfferSeed {
        title: "Fresh Organic Bananas",
        description: "Sweet and ripe organic bananas",
        category: "Produce",
        discount_type: "PERCENTAGE",
        discount_value: "25.00",
        original_price: "2.99",
        final_price: "2.24",
        valid_days: 7,
        terms: &["Limit 5 per customer", "While supplies last"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Organic Bananas"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Whole Milk Gallon",
        description: "Fresh whole milk from local farms",
        category: "Dairy",
        discount_type: "FIXED",
        discount_value: "1.00",
        original_price: "4.99",
        final_price: "3.99",
        valid_days: 5,
        terms: &["Limit 2 per customer"],
        requires_loyalty_card: true,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Whole Milk 1 Gallon"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Buy One Get One Free - Ground Beef",
        description: "Premium ground beef 80/20",
        category: "Meat",
        discount_type: "BOGO",
        discount_value: "100.00",
        original_price: "6.99",
        final_price: "3.50",
        valid_days: 3,
        terms: &[
            "Buy one get one free",
            "Equal or lesser value",
            "Limit 2 offers per customer",
        ],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Ground Beef 1lb"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Artisan Bread Loaf",
        description: "Freshly baked sourdough bread",
        category: "Bakery",
        discount_type: "PERCENTAGE",
        discount_value: "30.00",
        original_price: "5.99",
        final_price: "4.19",
        valid_days: 2,
        terms: &["Baked fresh daily", "Limit 3 per customer"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Sourdough Bread", "French Bread"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Laundry Detergent Bundle",
        description: "Save on large size detergent",
        category: "Household",
        discount_type: "BUNDLE",
        discount_value: "5.00",
        original_price: "19.99",
        final_price: "14.99",
        valid_days: 14,
        terms: &["Must purchase 2 or more", "Mix and match available"],
        requires_loyalty_card: false,
        coupon_code: Some("CLEAN2024"),
        minimum_purchase: Some("20.00"),
        eligible_products: &["Tide 100oz", "Gain 100oz", "All 100oz"],
        exclusions: &["Travel sizes"],
    },
];

const STORE_2_OFFERS: &[OfferSeed] = &[
    OfferSeed {
        title: "Fresh Strawberries",
        description: "Sweet California strawberries",
        category: "Produce",
        discount_type: "PERCENTAGE",
        discount_value: "40.00",
        original_price: "4.99",
        final_price: "2.99",
        valid_days: 4,
        terms: &["Limit 4 per customer", "While supplies last"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Strawberries 1lb"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Greek Yogurt 4-Pack",
        description: "Creamy Greek yogurt variety pack",
        category: "Dairy",
        discount_type: "FIXED",
        discount_value: "2.00",
        original_price: "5.99",
        final_price: "3.99",
        valid_days: 10,
        terms: &["All flavors included"],
        requires_loyalty_card: true,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Chobani 4-pack", "Fage 4-pack"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Chicken Breast Family Pack",
        description: "Boneless skinless chicken breast",
        category: "Meat",
        discount_type: "PERCENTAGE",
        discount_value: "35.00",
        original_price: "12.99",
        final_price: "8.44",
        valid_days: 6,
        terms: &["Family pack 3lbs or more", "Fresh never frozen"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Chicken Breast Family Pack"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Soft Drinks 12-Pack",
        description: "Popular soda brands on sale",
        category: "Beverages",
        discount_type: "BUNDLE",
        discount_value: "3.00",
        original_price: "6.99",
        final_price: "3.99",
        valid_days: 7,
        terms: &["Must buy 3 or more", "Mix and match"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &[
            "Coca-Cola 12pk",
            "Pepsi 12pk",
            "Sprite 12pk",
            "Dr Pepper 12pk",
        ],
        exclusions: &[],
    },
    OfferSeed {
        title: "Ice Cream Pints",
        description: "Premium ice cream varieties",
        category: "Frozen",
        discount_type: "BOGO",
        discount_value: "100.00",
        original_price: "5.99",
        final_price: "3.00",
        valid_days: 12,
        terms: &["Buy one get one free", "Equal or lesser value"],
        requires_loyalty_card: true,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Ben & Jerry's", "Haagen-Dazs"],
        exclusions: &[],
    },
];

const STORE_3_OFFERS: &[OfferSeed] = &[
    OfferSeed {
        title: "Mixed Salad Greens",
        description: "Fresh spring mix salad",
        category: "Produce",
        discount_type: "PERCENTAGE",
        discount_value: "20.00",
        original_price: "3.99",
        final_price: "3.19",
        valid_days: 5,
        terms: &["Organic option available"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Spring Mix 5oz", "Baby Spinach 5oz"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Cheese Variety Pack",
        description: "Assorted cheese slices",
        category: "Dairy",
        discount_type: "FIXED",
        discount_value: "1.50",
        original_price: "4.99",
        final_price: "3.49",
        valid_days: 8,
        terms: &["Includes cheddar, swiss, and provolone"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Kraft Cheese Variety"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Pork Chops Value Pack",
        description: "Bone-in pork chops",
        category: "Meat",
        discount_type: "PERCENTAGE",
        discount_value: "30.00",
        original_price: "9.99",
        final_price: "6.99",
        valid_days: 4,
        terms: &["Value pack 2lbs or more"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["Pork Chops Bone-in"],
        exclusions: &[],
    },
    OfferSeed {
        title: "Potato Chips Family Size",
        description: "Crispy potato chips",
        category: "Snacks",
        discount_type: "BUNDLE",
        discount_value: "2.00",
        original_price: "4.99",
        final_price: "2.99",
        valid_days: 15,
        terms: &["Buy 2 get $2 off each", "Mix and match flavors"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &[
            "Lay's Family Size",
            "Ruffles Family Size",
            "Doritos Family Size",
        ],
        exclusions: &[],
    },
    OfferSeed {
        title: "Shampoo & Conditioner Set",
        description: "Hair care bundle deal",
        category: "Personal Care",
        discount_type: "PERCENTAGE",
        discount_value: "25.00",
        original_price: "15.99",
        final_price: "11.99",
        valid_days: 20,
        terms: &["Includes both shampoo and conditioner"],
        requires_loyalty_card: false,
        coupon_code: Some("HAIR25"),
        minimum_purchase: None,
        eligible_products: &["Pantene Set", "Herbal Essences Set"],
        exclusions: &["Travel sizes"],
    },
    OfferSeed {
        title: "Frozen Pizza",
        description: "Deluxe frozen pizza varieties",
        category: "Frozen",
        discount_type: "FIXED",
        discount_value: "3.00",
        original_price: "8.99",
        final_price: "5.99",
        valid_days: 10,
        terms: &["All varieties included"],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: &["DiGiorno Pizza", "Red Baron Pizza"],
        exclusions: &[],
    },
];

/// Seeds sample stores, categories, and offers when the database is empty.
///
/// A non-empty `stores` table short-circuits without touching anything, so
/// repeated startups are harmless. All inserts run in one transaction.
///
/// Returns the number of stores created (0 when already populated).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails; the whole batch rolls back.
pub async fn seed_if_empty(pool: &PgPool) -> Result<usize, DbError> {
    let store_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
        .fetch_one(pool)
        .await?;
    if store_count > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;

    let mut store_ids = Vec::with_capacity(STORES.len());
    for store in &STORES {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO stores (name, street, city, state, zip, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(store.name)
        .bind(store.street)
        .bind(store.city)
        .bind(store.state)
        .bind(store.zip)
        .bind(store.latitude)
        .bind(store.longitude)
        .fetch_one(&mut *tx)
        .await?;
        store_ids.push(id);
    }

    for name in CATEGORY_NAMES {
        sqlx::query("INSERT INTO categories (name, icon) VALUES ($1, $2)")
            .bind(name)
            .bind("\u{1f3f7}\u{fe0f}")
            .execute(&mut *tx)
            .await?;
    }

    for (store_id, offers) in [
        (store_ids[0], STORE_1_OFFERS),
        (store_ids[1], STORE_2_OFFERS),
        (store_ids[2], STORE_3_OFFERS),
    ] {
        for offer in offers {
            insert_offer(&mut tx, store_id, offer).await?;
        }
    }

    tx.commit().await?;
    Ok(STORES.len())
}

async fn insert_offer(
    tx: &mut Transaction<'_, Postgres>,
    store_id: Uuid,
    offer: &OfferSeed,
) -> Result<(), DbError> {
    let now = Utc::now();
    let terms: Vec<String> = offer.terms.iter().map(ToString::to_string).collect();
    let eligible: Vec<String> = offer
        .eligible_products
        .iter()
        .map(ToString::to_string)
        .collect();
    let exclusions: Vec<String> = offer.exclusions.iter().map(ToString::to_string).collect();

    sqlx::query(
        "INSERT INTO offers \
             (store_id, title, description, category, discount_type, discount_value, \
              original_price, final_price, valid_from, valid_until, terms, \
              requires_loyalty_card, coupon_code, minimum_purchase, eligible_products, \
              exclusions, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6::numeric(10,2), \
                 $7::numeric(10,2), $8::numeric(10,2), $9, $10, $11, \
                 $12, $13, $14::numeric(10,2), $15, \
                 $16, $17)",
    )
    .bind(store_id)
    .bind(offer.title)
    .bind(offer.description)
    .bind(offer.category)
    .bind(offer.discount_type)
    .bind(offer.discount_value)
    .bind(offer.original_price)
    .bind(offer.final_price)
    .bind(now)
    .bind(now + Duration::days(offer.valid_days))
    .bind(&terms)
    .bind(offer.requires_loyalty_card)
    .bind(offer.coupon_code)
    .bind(offer.minimum_purchase)
    .bind(&eligible)
    .bind(&exclusions)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
