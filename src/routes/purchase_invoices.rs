use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use mongodb::bson::Document;

use crate::{
    error::AppResult, response::ApiResponse, services::invoice_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchase_invoices))
        .route("/{invoice_id}", get(get_purchase_invoice))
}

#[utoipa::path(get, path = "/api/purchase-invoices", tag = "Purchase Invoices")]
pub async fn list_purchase_invoices(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Document>>>> {
    let resp = invoice_service::list_invoices(&state.docs).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/purchase-invoices/{invoice_id}",
    params(("invoice_id" = String, Path, description = "Invoice document ID")),
    responses(
        (status = 200, description = "Invoice document with string id"),
        (status = 400, description = "Invalid invoice ID"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Purchase Invoices"
)]
pub async fn get_purchase_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let resp = invoice_service::get_invoice(&state.docs, &invoice_id).await?;
    Ok(Json(resp))
}
