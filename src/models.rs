use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub status: String,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Floor {
    pub id: i32,
    pub warehouse_id: i32,
    pub floor_number: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Area {
    pub id: i32,
    pub floor_id: i32,
    pub area_name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub location_x: f64,
    pub location_y: f64,
    pub area_type: String,
    pub usage_category: String,
    pub is_passable: bool,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Zone {
    pub id: i32,
    pub floor_id: i32,
    pub zone_name: String,
    pub zone_type: String,
    pub width: f64,
    pub depth: f64,
    pub location_x: f64,
    pub location_y: f64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Shelf {
    pub id: i32,
    pub zone_id: i32,
    pub shelf_code: String,
    pub shelf_type: String,
    pub aisle_num: i32,
    pub bay_num: i32,
    pub level_num: i32,
    pub bin_num: Option<i32>,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub location_x: f64,
    pub location_y: f64,
    pub location_z: f64,
    pub orientation_angle: Option<f64>,
    pub max_weight: Option<f64>,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub sku: Option<String>,
    pub name: String,
    pub unit_price: f64,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PurchaseOrder {
    pub id: i32,
    pub po_number: String,
    pub supplier_id: i32,
    pub warehouse_id: Option<i32>,
    pub status: String,
    pub expected_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PurchaseOrderItem {
    pub id: i32,
    pub purchase_order_id: i32,
    pub product_id: i32,
    pub ordered_qty: i32,
    pub received_qty: i32,
}

// Internal row; never serialized to clients with the password column.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: Option<String>,
    pub role: String,
    pub warehouse_id: Option<i32>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserPublic {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub warehouse_id: Option<i32>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            warehouse_id: user.warehouse_id,
            status: user.status,
            created_at: user.created_at,
        }
    }
}
