use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::Supplier;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SupplierCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl SupplierUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.contact_person.is_none()
            && self.address.is_none()
            && self.status.is_none()
    }
}

/// Supplier row plus the derived table columns (products_count, last_order).
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SupplierWithStats {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub supplier: Supplier,
    pub products_count: i64,
    pub last_order: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierList {
    pub items: Vec<SupplierWithStats>,
}
