use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    dto::warehouses::{
        CreatedWarehouse, WarehouseCreate, WarehouseOptionList, WarehouseTreeList, WarehouseUpdate,
    },
    error::AppResult,
    response::ApiResponse,
    services::warehouse_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/options", get(list_warehouse_options))
        .route("/{id}", put(update_warehouse))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WarehouseUpdateQuery {
    pub current_user_id: i32,
}

#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = WarehouseCreate,
    responses(
        (status = 200, description = "Full hierarchy created", body = ApiResponse<CreatedWarehouse>),
        (status = 400, description = "Manager already owns a warehouse"),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<WarehouseCreate>,
) -> AppResult<Json<ApiResponse<CreatedWarehouse>>> {
    let resp = warehouse_service::create_warehouse(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/warehouses",
    responses(
        (status = 200, description = "All warehouses with nested floors, areas, zones and shelves", body = ApiResponse<WarehouseTreeList>),
    ),
    tag = "Warehouses"
)]
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WarehouseTreeList>>> {
    let resp = warehouse_service::list_warehouse_tree(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/warehouses/options", tag = "Warehouses")]
pub async fn list_warehouse_options(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WarehouseOptionList>>> {
    let resp = warehouse_service::list_warehouse_options(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/warehouses/{id}",
    params(
        ("id" = i32, Path, description = "Warehouse ID"),
        ("current_user_id" = i32, Query, description = "Requesting user, must be the owner")
    ),
    request_body = WarehouseUpdate,
    responses(
        (status = 200, description = "Warehouse updated"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Warehouses"
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<WarehouseUpdateQuery>,
    Json(payload): Json<WarehouseUpdate>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp =
        warehouse_service::update_warehouse(&state.pool, id, query.current_user_id, payload)
            .await?;
    Ok(Json(resp))
}
