use axum::{
    Json, Router,
    extract::{Path, State},
    routing::put,
};

use crate::{
    dto::layout::AreaUpdate, error::AppResult, response::ApiResponse, services::area_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{area_id}", put(update_area).delete(delete_area))
}

#[utoipa::path(put, path = "/api/areas/{area_id}", request_body = AreaUpdate, tag = "Layout")]
pub async fn update_area(
    State(state): State<AppState>,
    Path(area_id): Path<i32>,
    Json(payload): Json<AreaUpdate>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = area_service::update_area(&state.pool, area_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(delete, path = "/api/areas/{area_id}", tag = "Layout")]
pub async fn delete_area(
    State(state): State<AppState>,
    Path(area_id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = area_service::delete_area(&state.pool, area_id).await?;
    Ok(Json(resp))
}
