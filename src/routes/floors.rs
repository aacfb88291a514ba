use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};

use crate::{
    dto::layout::CreatedId,
    dto::warehouses::{AreaCreate, ZoneCreate},
    error::AppResult,
    response::ApiResponse,
    services::{area_service, zone_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{floor_id}/zones", post(create_zone))
        .route("/{floor_id}/areas", post(create_area))
}

#[utoipa::path(
    post,
    path = "/api/floors/{floor_id}/zones",
    params(("floor_id" = i32, Path, description = "Floor ID")),
    request_body = ZoneCreate,
    responses(
        (status = 200, description = "Zone created, optionally with nested shelves", body = ApiResponse<CreatedId>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Layout"
)]
pub async fn create_zone(
    State(state): State<AppState>,
    Path(floor_id): Path<i32>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<ApiResponse<CreatedId>>> {
    let resp = zone_service::create_zone(&state.pool, floor_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/floors/{floor_id}/areas",
    params(("floor_id" = i32, Path, description = "Floor ID")),
    request_body = AreaCreate,
    responses(
        (status = 200, description = "Area created", body = ApiResponse<CreatedId>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Layout"
)]
pub async fn create_area(
    State(state): State<AppState>,
    Path(floor_id): Path<i32>,
    Json(payload): Json<AreaCreate>,
) -> AppResult<Json<ApiResponse<CreatedId>>> {
    let resp = area_service::create_area(&state.pool, floor_id, payload).await?;
    Ok(Json(resp))
}
