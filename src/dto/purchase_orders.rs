use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

fn default_po_status() -> String {
    "draft".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseOrderItemCreate {
    pub product_id: i32,
    pub ordered_qty: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseOrderCreate {
    pub supplier_id: i32,
    pub warehouse_id: i32,
    #[serde(default = "default_po_status")]
    pub status: String,
    pub expected_date: Option<NaiveDate>,
    pub items: Vec<PurchaseOrderItemCreate>,
}

/// One row of the purchase-order table view: header joined with the supplier
/// name plus aggregated quantity and amount.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PurchaseOrderSummary {
    pub id: i32,
    pub po_number: String,
    pub supplier_id: i32,
    pub supplier_name: String,
    pub status: String,
    pub expected_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub items_count: i64,
    pub total_amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseOrderList {
    pub items: Vec<PurchaseOrderSummary>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PurchaseOrderLine {
    pub id: i32,
    pub product_id: i32,
    pub sku: Option<String>,
    pub product_name: String,
    pub qty: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PurchaseOrderHeader {
    pub id: i32,
    pub po_number: String,
    pub supplier_id: i32,
    pub supplier_name: String,
    pub supplier_address: Option<String>,
    pub supplier_contact_person: Option<String>,
    pub supplier_email: Option<String>,
    pub supplier_phone: Option<String>,
    pub warehouse_id: Option<i32>,
    pub warehouse_name: Option<String>,
    pub status: String,
    pub expected_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Detail view: header plus ordered line items and totals computed from the
/// items just fetched, not from a stored column.
#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseOrderDetail {
    #[serde(flatten)]
    pub header: PurchaseOrderHeader,
    pub items: Vec<PurchaseOrderLine>,
    pub items_count: i64,
    pub total_amount: f64,
}
