//! Tests for offerboard-db. The top section is offline (no database); the
//! `#[sqlx::test]` section exercises the query shapes against a migrated
//! Postgres instance.

use chrono::{Duration, Utc};
use offerboard_core::{AppConfig, Environment, Offer, OfferFilter};
use offerboard_db::offers::OfferRow;
use offerboard_db::PoolConfig;
use rust_decimal::Decimal;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use uuid::Uuid;

fn offer_row(title: &str, category: &str, discount_type: &str) -> OfferRow {
    let now = Utc::now();
    OfferRow {
        id: Uuid::new_v4(),
        store_id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some("test offer".to_string()),
        category: category.to_string(),
        discount_type: discount_type.to_string(),
        discount_value: Decimal::new(2500, 2),
        original_price: None,
        final_price: None,
        image_url: None,
        valid_from: now,
        valid_until: now + Duration::days(7),
        terms: vec![],
        requires_loyalty_card: false,
        coupon_code: None,
        minimum_purchase: None,
        eligible_products: vec![],
        exclusions: vec![],
        created_at: now,
    }
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        seed_on_start: false,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn offer_row_converts_to_domain_offer() {
    let row = offer_row("Fresh Bananas", "Produce", "PERCENTAGE");
    let offer = Offer::try_from(row).expect("conversion");
    assert_eq!(offer.title, "Fresh Bananas");
    assert_eq!(offer.discount_type.to_string(), "PERCENTAGE");
}

#[test]
fn offer_row_with_unknown_discount_type_fails_to_decode() {
    let row = offer_row("Mystery Deal", "Produce", "RAFFLE");
    let result = Offer::try_from(row);
    assert!(
        matches!(result, Err(offerboard_db::DbError::Decode(ref msg)) if msg.contains("RAFFLE")),
        "expected Decode error naming the bad value"
    );
}

// ---------------------------------------------------------------------------
// Database-backed query-shape tests
// ---------------------------------------------------------------------------

async fn seed_store(pool: &sqlx::PgPool, name: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO stores (name, street, city, state, zip, latitude, longitude) \
         VALUES ($1, '1 Main St', 'Denver', 'CO', '80218', 39.7, -104.9) RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert store")
}

#[allow(clippy::too_many_arguments)]
async fn seed_offer(
    pool: &sqlx::PgPool,
    store_id: Uuid,
    title: &str,
    description: &str,
    category: &str,
    from_days: i64,
    until_days: i64,
) -> Uuid {
    let now = Utc::now();
    sqlx::query_scalar(
        "INSERT INTO offers (store_id, title, description, category, discount_type, \
             discount_value, valid_from, valid_until) \
         VALUES ($1, $2, $3, $4, 'PERCENTAGE', 10.00, $5, $6) RETURNING id",
    )
    .bind(store_id)
    .bind(title)
    .bind(description)
    .bind(category)
    .bind(now + Duration::days(from_days))
    .bind(now + Duration::days(until_days))
    .fetch_one(pool)
    .await
    .expect("insert offer")
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_all_excludes_expired_offers(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;
    seed_offer(&pool, store_id, "Live", "still on", "Produce", -2, 5).await;
    seed_offer(&pool, store_id, "Expired", "gone", "Produce", -9, -1).await;

    let offers = offerboard_db::list_active_offers(&pool, store_id, &OfferFilter::All, Utc::now())
        .await
        .expect("query");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "Live");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_all_includes_future_valid_from(pool: sqlx::PgPool) {
    // Only the upper edge of the window is checked by the listing queries;
    // offers that have not started yet still come back.
    let store_id = seed_store(&pool, "Test Store").await;
    seed_offer(&pool, store_id, "Upcoming", "starts tomorrow", "Produce", 1, 5).await;

    let offers = offerboard_db::list_active_offers(&pool, store_id, &OfferFilter::All, Utc::now())
        .await
        .expect("query");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "Upcoming");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_is_scoped_to_the_store(pool: sqlx::PgPool) {
    let store_a = seed_store(&pool, "Store A").await;
    let store_b = seed_store(&pool, "Store B").await;
    seed_offer(&pool, store_a, "A deal", "at A", "Produce", -1, 5).await;
    seed_offer(&pool, store_b, "B deal", "at B", "Produce", -1, 5).await;

    let offers = offerboard_db::list_active_offers(&pool, store_a, &OfferFilter::All, Utc::now())
        .await
        .expect("query");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "A deal");
}

#[sqlx::test(migrations = "../../migrations")]
async fn category_filter_matches_exactly(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;
    seed_offer(&pool, store_id, "Bananas", "ripe", "Produce", -1, 5).await;
    seed_offer(&pool, store_id, "Milk", "fresh", "Dairy", -1, 5).await;

    let filter = OfferFilter::Category("Produce".to_string());
    let offers = offerboard_db::list_active_offers(&pool, store_id, &filter, Utc::now())
        .await
        .expect("query");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].category, "Produce");

    // Category match is exact, not substring.
    let filter = OfferFilter::Category("Produ".to_string());
    let offers = offerboard_db::list_active_offers(&pool, store_id, &filter, Utc::now())
        .await
        .expect("query");
    assert!(offers.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn search_matches_title_or_description_case_insensitively(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;
    seed_offer(&pool, store_id, "Whole Milk Gallon", "from local farms", "Dairy", -1, 5).await;
    seed_offer(&pool, store_id, "Greek Yogurt", "creamy and MILKY smooth", "Dairy", -1, 5).await;
    seed_offer(&pool, store_id, "Ground Beef", "premium quality", "Meat", -1, 5).await;

    let filter = OfferFilter::Search("milk".to_string());
    let mut offers = offerboard_db::list_active_offers(&pool, store_id, &filter, Utc::now())
        .await
        .expect("query");
    offers.sort_by(|a, b| a.title.cmp(&b.title));

    let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, ["Greek Yogurt", "Whole Milk Gallon"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn category_and_search_filters_combine(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;
    seed_offer(&pool, store_id, "Fresh Bananas", "sweet and ripe", "Produce", -1, 5).await;
    seed_offer(&pool, store_id, "Banana Bread", "baked today", "Bakery", -1, 5).await;

    let filter = OfferFilter::CategoryAndSearch {
        category: "Produce".to_string(),
        search: "banana".to_string(),
    };
    let offers = offerboard_db::list_active_offers(&pool, store_id, &filter, Utc::now())
        .await
        .expect("query");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "Fresh Bananas");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_offer_by_id_round_trips(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;
    let offer_id = seed_offer(&pool, store_id, "Bananas", "ripe", "Produce", -1, 5).await;

    let offer = offerboard_db::get_offer_by_id(&pool, offer_id)
        .await
        .expect("query")
        .expect("offer present");
    assert_eq!(offer.id, offer_id);
    assert_eq!(offer.title, "Bananas");

    let missing = offerboard_db::get_offer_by_id(&pool, Uuid::new_v4())
        .await
        .expect("query");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn store_lookup_and_exists(pool: sqlx::PgPool) {
    let store_id = seed_store(&pool, "Test Store").await;

    let store = offerboard_db::get_store_by_id(&pool, store_id)
        .await
        .expect("query")
        .expect("store present");
    assert_eq!(store.name, "Test Store");
    assert_eq!(store.address.city, "Denver");

    assert!(offerboard_db::store_exists(&pool, store_id).await.expect("exists"));
    assert!(!offerboard_db::store_exists(&pool, Uuid::new_v4()).await.expect("exists"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn category_lookup_by_id(pool: sqlx::PgPool) {
    let category_id: Uuid =
        sqlx::query_scalar("INSERT INTO categories (name, icon) VALUES ('Produce', NULL) RETURNING id")
            .fetch_one(&pool)
            .await
            .expect("insert category");

    let category = offerboard_db::get_category_by_id(&pool, category_id)
        .await
        .expect("query")
        .expect("category present");
    assert_eq!(category.name, "Produce");
    assert!(category.icon.is_none());

    let missing = offerboard_db::get_category_by_id(&pool, Uuid::new_v4())
        .await
        .expect("query");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn seed_if_empty_populates_once(pool: sqlx::PgPool) {
    let created = offerboard_db::seed_if_empty(&pool).await.expect("seed");
    assert_eq!(created, 3, "three sample stores");

    let categories = offerboard_db::list_categories(&pool).await.expect("categories");
    assert_eq!(categories.len(), 9);

    let offer_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offers")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(offer_count, 16);

    // Second run is a no-op.
    let created = offerboard_db::seed_if_empty(&pool).await.expect("seed again");
    assert_eq!(created, 0);
}
