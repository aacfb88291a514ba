use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::purchase_orders::{PurchaseOrderCreate, PurchaseOrderDetail, PurchaseOrderList},
    error::AppResult,
    response::ApiResponse,
    services::purchase_order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchase_orders).post(create_purchase_order))
        .route("/{id}", get(get_purchase_order))
}

#[utoipa::path(
    get,
    path = "/api/purchase-orders",
    responses(
        (status = 200, description = "Orders with supplier name and aggregated totals", body = ApiResponse<PurchaseOrderList>),
    ),
    tag = "Purchase Orders"
)]
pub async fn list_purchase_orders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PurchaseOrderList>>> {
    let resp = purchase_order_service::list_purchase_orders(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/purchase-orders",
    request_body = PurchaseOrderCreate,
    responses(
        (status = 200, description = "Order created, full detail view", body = ApiResponse<PurchaseOrderDetail>),
        (status = 400, description = "Empty item list or unknown foreign key"),
    ),
    tag = "Purchase Orders"
)]
pub async fn create_purchase_order(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseOrderCreate>,
) -> AppResult<Json<ApiResponse<PurchaseOrderDetail>>> {
    let resp = purchase_order_service::create_purchase_order(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/purchase-orders/{id}",
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 200, description = "Header plus ordered line items and computed totals", body = ApiResponse<PurchaseOrderDetail>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Purchase Orders"
)]
pub async fn get_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<PurchaseOrderDetail>>> {
    let resp = purchase_order_service::get_purchase_order(&state.pool, id).await?;
    Ok(Json(resp))
}
