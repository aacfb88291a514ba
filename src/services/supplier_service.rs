use sqlx::{Postgres, QueryBuilder};

use crate::{
    db::DbPool,
    dto::suppliers::{SupplierCreate, SupplierList, SupplierUpdate, SupplierWithStats},
    error::{AppError, AppResult},
    models::Supplier,
    response::{ApiResponse, Meta},
};

const SUPPLIER_COLUMNS: &str = "id, name, phone, email, contact_person, address, status, created_at";

/// Supplier table view: every supplier plus products_count (distinct products
/// ever ordered from it) and last_order (latest order creation time).
pub async fn list_suppliers(pool: &DbPool) -> AppResult<ApiResponse<SupplierList>> {
    let items: Vec<SupplierWithStats> = sqlx::query_as(
        "SELECT s.*, \
             COALESCE(pp.product_count, 0)::BIGINT AS products_count, \
             po.last_order \
         FROM suppliers s \
         LEFT JOIN ( \
             SELECT po.supplier_id, COUNT(DISTINCT li.product_id) AS product_count \
             FROM purchase_orders po \
             JOIN purchase_order_items li ON li.purchase_order_id = po.id \
             GROUP BY po.supplier_id \
         ) pp ON pp.supplier_id = s.id \
         LEFT JOIN ( \
             SELECT supplier_id, MAX(created_at) AS last_order \
             FROM purchase_orders \
             GROUP BY supplier_id \
         ) po ON po.supplier_id = s.id \
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Ok",
        SupplierList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_supplier(
    pool: &DbPool,
    payload: SupplierCreate,
) -> AppResult<ApiResponse<Supplier>> {
    let supplier: Supplier = sqlx::query_as(&format!(
        "INSERT INTO suppliers (name, phone, email, contact_person, address, status) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {SUPPLIER_COLUMNS}"
    ))
    .bind(&payload.name)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.contact_person)
    .bind(&payload.address)
    .bind(payload.status.as_deref().unwrap_or("active"))
    .fetch_one(pool)
    .await?;

    Ok(ApiResponse::success(
        "Supplier created",
        supplier,
        Some(Meta::empty()),
    ))
}

/// Allow-listed partial update; each patch field maps statically to one
/// column, caller-controlled keys never reach the statement text.
pub async fn update_supplier(
    pool: &DbPool,
    supplier_id: i32,
    patch: SupplierUpdate,
) -> AppResult<ApiResponse<Supplier>> {
    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update.".into()));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE suppliers SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(name) = patch.name {
            set.push("name = ");
            set.push_bind_unseparated(name);
        }
        if let Some(phone) = patch.phone {
            set.push("phone = ");
            set.push_bind_unseparated(phone);
        }
        if let Some(email) = patch.email {
            set.push("email = ");
            set.push_bind_unseparated(email);
        }
        if let Some(contact_person) = patch.contact_person {
            set.push("contact_person = ");
            set.push_bind_unseparated(contact_person);
        }
        if let Some(address) = patch.address {
            set.push("address = ");
            set.push_bind_unseparated(address);
        }
        if let Some(status) = patch.status {
            set.push("status = ");
            set.push_bind_unseparated(status);
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(supplier_id);
    qb.push(" RETURNING ");
    qb.push(SUPPLIER_COLUMNS);

    let supplier: Option<Supplier> = qb
        .build_query_as::<Supplier>()
        .fetch_optional(pool)
        .await?;
    let supplier = match supplier {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Supplier updated",
        supplier,
        Some(Meta::empty()),
    ))
}
