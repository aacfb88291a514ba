use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{post, put},
};

use crate::{
    dto::layout::{BulkShelvesResult, ZoneMove, ZoneUpdate},
    dto::warehouses::ShelfCreate,
    error::AppResult,
    response::ApiResponse,
    services::zone_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{zone_id}", put(update_zone).delete(delete_zone))
        .route("/{zone_id}/move", post(move_zone))
        .route("/{zone_id}/shelves/bulk", post(bulk_replace_shelves))
}

#[utoipa::path(put, path = "/api/zones/{zone_id}", request_body = ZoneUpdate, tag = "Layout")]
pub async fn update_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i32>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = zone_service::update_zone(&state.pool, zone_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(delete, path = "/api/zones/{zone_id}", tag = "Layout")]
pub async fn delete_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = zone_service::delete_zone(&state.pool, zone_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/zones/{zone_id}/move",
    params(("zone_id" = i32, Path, description = "Zone ID")),
    request_body = ZoneMove,
    responses(
        (status = 200, description = "Zone moved, shelves translated by the same delta"),
        (status = 404, description = "Zone not found"),
    ),
    tag = "Layout"
)]
pub async fn move_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i32>,
    Json(payload): Json<ZoneMove>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = zone_service::move_zone(&state.pool, zone_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/zones/{zone_id}/shelves/bulk",
    params(("zone_id" = i32, Path, description = "Zone ID")),
    request_body = Vec<ShelfCreate>,
    responses(
        (status = 200, description = "Shelf set replaced", body = ApiResponse<BulkShelvesResult>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Layout"
)]
pub async fn bulk_replace_shelves(
    State(state): State<AppState>,
    Path(zone_id): Path<i32>,
    Json(payload): Json<Vec<ShelfCreate>>,
) -> AppResult<Json<ApiResponse<BulkShelvesResult>>> {
    let resp = zone_service::bulk_replace_shelves(&state.pool, zone_id, payload).await?;
    Ok(Json(resp))
}
