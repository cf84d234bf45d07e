use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;

use offerboard_core::{sort_offers, Offer, OfferFilter, SortKey};

use crate::middleware::RequestId;

use super::{map_db_error, parse_id, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct OffersQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

pub(super) async fn list_store_offers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(store_id): Path<String>,
    Query(query): Query<OffersQuery>,
) -> Result<Json<ApiResponse<Vec<Offer>>>, ApiError> {
    // A store id that cannot be a real key matches nothing; skip the query.
    let Some(store_id) = parse_id(&store_id) else {
        return Ok(Json(ApiResponse {
            data: vec![],
            meta: ResponseMeta::new(req_id.0),
        }));
    };

    let filter = OfferFilter::from_params(query.category.as_deref(), query.search.as_deref());
    let sort_by = SortKey::parse(query.sort_by.as_deref());
    if let (None, Some(raw)) = (sort_by, query.sort_by.as_deref()) {
        tracing::debug!(sort_by = raw, "unrecognized sort criteria, returning unsorted");
    }

    let offers = offerboard_db::list_active_offers(&state.pool, store_id, &filter, Utc::now())
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let offers = sort_offers(offers, sort_by);
    tracing::debug!(store_id = %store_id, count = offers.len(), "listed active offers");

    Ok(Json(ApiResponse {
        data: offers,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_offer(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(offer_id): Path<String>,
) -> Result<Response, ApiError> {
    // A missing offer is an empty 404, not an error envelope.
    let Some(id) = parse_id(&offer_id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let offer = offerboard_db::get_offer_by_id(&state.pool, id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    match offer {
        Some(offer) => Ok(Json(ApiResponse {
            data: offer,
            meta: ResponseMeta::new(req_id.0),
        })
        .into_response()),
        None => {
            tracing::debug!(offer_id = %id, "offer not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}
