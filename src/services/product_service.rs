use crate::{
    db::DbPool,
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
};

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

/// Products offered for ordering: active or unset status only.
pub async fn list_products(pool: &DbPool) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = sqlx::query_as(
        "SELECT id, sku, name, unit_price, status FROM products \
         WHERE status IS NULL OR status = 'active' \
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Ok",
        ProductList { items },
        Some(Meta::empty()),
    ))
}
