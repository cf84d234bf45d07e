use axum::{
    extract::{Path, State},
    Extension, Json,
};

use offerboard_core::Store;

use crate::middleware::RequestId;

use super::{map_db_error, parse_id, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Store>>>, ApiError> {
    let stores = offerboard_db::list_stores(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::debug!(count = stores.len(), "listed stores");

    Ok(Json(ApiResponse {
        data: stores,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_store(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(store_id): Path<String>,
) -> Result<Json<ApiResponse<Store>>, ApiError> {
    // Blank or malformed ids cannot match a row; answer without a query.
    let Some(id) = parse_id(&store_id) else {
        return Err(ApiError::new(req_id.0, "not_found", "store not found"));
    };

    let store = offerboard_db::get_store_by_id(&state.pool, id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "store not found"))?;

    Ok(Json(ApiResponse {
        data: store,
        meta: ResponseMeta::new(req_id.0),
    }))
}
