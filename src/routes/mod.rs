use axum::Router;

use crate::state::AppState;

pub mod areas;
pub mod auth;
pub mod doc;
pub mod floors;
pub mod health;
pub mod products;
pub mod purchase_invoices;
pub mod purchase_orders;
pub mod shelves;
pub mod suppliers;
pub mod warehouses;
pub mod zones;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/warehouses", warehouses::router())
        .nest("/floors", floors::router())
        .nest("/zones", zones::router())
        .nest("/areas", areas::router())
        .nest("/shelves", shelves::router())
        .nest("/suppliers", suppliers::router())
        .nest("/products", products::router())
        .nest("/purchase-orders", purchase_orders::router())
        .nest("/purchase-invoices", purchase_invoices::router())
}
