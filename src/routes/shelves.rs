use axum::{
    Json, Router,
    extract::{Path, State},
    routing::put,
};

use crate::{
    dto::layout::ShelfUpdate, error::AppResult, response::ApiResponse, services::shelf_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{shelf_id}", put(update_shelf).delete(delete_shelf))
}

#[utoipa::path(put, path = "/api/shelves/{shelf_id}", request_body = ShelfUpdate, tag = "Layout")]
pub async fn update_shelf(
    State(state): State<AppState>,
    Path(shelf_id): Path<i32>,
    Json(payload): Json<ShelfUpdate>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = shelf_service::update_shelf(&state.pool, shelf_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(delete, path = "/api/shelves/{shelf_id}", tag = "Layout")]
pub async fn delete_shelf(
    State(state): State<AppState>,
    Path(shelf_id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = shelf_service::delete_shelf(&state.pool, shelf_id).await?;
    Ok(Json(resp))
}
