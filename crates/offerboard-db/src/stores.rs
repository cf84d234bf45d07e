//! Queries against the `stores` table.

use sqlx::PgPool;
use uuid::Uuid;

use offerboard_core::{Address, Coordinates, Store};

use crate::DbError;

/// A row from the `stores` table; address and coordinates are flat columns
/// here and nest on conversion to the domain type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: Uuid,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Store {
            id: row.id,
            name: row.name,
            address: Address {
                street: row.street,
                city: row.city,
                state: row.state,
                zip: row.zip,
            },
            coordinates: Coordinates {
                latitude: row.latitude,
                longitude: row.longitude,
            },
        }
    }
}

/// Lists all stores, ordered by name for stable output.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_stores(pool: &PgPool) -> Result<Vec<Store>, DbError> {
    let rows = sqlx::query_as::<_, StoreRow>(
        "SELECT id, name, street, city, state, zip, latitude, longitude \
         FROM stores ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Store::from).collect())
}

/// Looks up a single store by primary key.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_store_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Store>, DbError> {
    let row = sqlx::query_as::<_, StoreRow>(
        "SELECT id, name, street, city, state, zip, latitude, longitude \
         FROM stores WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Store::from))
}

/// True iff a store row with this id exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn store_exists(pool: &PgPool, id: Uuid) -> Result<bool, DbError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM stores WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}
