use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;

use offerboard_core::{
    categories_with_offer_count, count_offers_by_category, Category, CategoryOfferCount,
    OfferFilter,
};

use crate::middleware::RequestId;

use super::{map_db_error, parse_id, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = offerboard_db::list_categories(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::debug!(count = categories.len(), "listed categories");

    Ok(Json(ApiResponse {
        data: categories,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Categories with active-offer counts for one store. Every known category
/// appears, zero-count ones included; a store id that matches nothing just
/// yields all zeros.
pub(super) async fn list_store_category_counts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(store_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CategoryOfferCount>>>, ApiError> {
    let categories = offerboard_db::list_categories(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let offers = match parse_id(&store_id) {
        Some(store_id) => {
            offerboard_db::list_active_offers(&state.pool, store_id, &OfferFilter::All, Utc::now())
                .await
                .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        }
        None => vec![],
    };

    let counts = count_offers_by_category(&offers);
    let data = categories_with_offer_count(categories, &counts);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
