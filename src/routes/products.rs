use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    response::ApiResponse,
    services::product_service::{self, ProductList},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

#[utoipa::path(get, path = "/api/products", tag = "Products")]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state.pool).await?;
    Ok(Json(resp))
}
