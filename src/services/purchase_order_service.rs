use crate::{
    db::DbPool,
    dto::purchase_orders::{
        PurchaseOrderCreate, PurchaseOrderDetail, PurchaseOrderHeader, PurchaseOrderLine,
        PurchaseOrderList, PurchaseOrderSummary,
    },
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
};

/// `PO-` + id zero-padded to 4 digits. Ids past 9999 keep their full width;
/// the long-term numbering scheme is still an open question (DESIGN.md).
fn format_po_number(id: i32) -> String {
    if id >= 10_000 {
        tracing::warn!(po_id = id, "po number exceeds 4-digit padding");
    }
    format!("PO-{:04}", id)
}

/// Create header + items in a single transaction. Foreign keys are validated
/// up front so the caller gets a 400 naming the bad id instead of a raw
/// constraint error; any failure rolls the whole order back.
pub async fn create_purchase_order(
    pool: &DbPool,
    payload: PurchaseOrderCreate,
) -> AppResult<ApiResponse<PurchaseOrderDetail>> {
    if payload.items.is_empty() {
        return Err(AppError::Validation(
            "At least 1 line item is required.".into(),
        ));
    }

    let mut tx = pool.begin().await?;

    let supplier: Option<(i32,)> = sqlx::query_as("SELECT id FROM suppliers WHERE id = $1")
        .bind(payload.supplier_id)
        .fetch_optional(&mut *tx)
        .await?;
    if supplier.is_none() {
        return Err(AppError::Validation("Invalid supplier_id".into()));
    }

    let warehouse: Option<(i32,)> = sqlx::query_as("SELECT id FROM warehouses WHERE id = $1")
        .bind(payload.warehouse_id)
        .fetch_optional(&mut *tx)
        .await?;
    if warehouse.is_none() {
        return Err(AppError::Validation("Invalid warehouse_id".into()));
    }

    // Temporary number first; the real one needs the generated id.
    let po_id: i32 = sqlx::query_scalar(
        "INSERT INTO purchase_orders (po_number, supplier_id, warehouse_id, status, expected_date) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind("PO-TMP")
    .bind(payload.supplier_id)
    .bind(payload.warehouse_id)
    .bind(&payload.status)
    .bind(payload.expected_date)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE purchase_orders SET po_number = $1 WHERE id = $2")
        .bind(format_po_number(po_id))
        .bind(po_id)
        .execute(&mut *tx)
        .await?;

    for item in &payload.items {
        let product: Option<(i32,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?;
        if product.is_none() {
            return Err(AppError::Validation(format!(
                "Invalid product_id: {}",
                item.product_id
            )));
        }

        sqlx::query(
            "INSERT INTO purchase_order_items (purchase_order_id, product_id, ordered_qty, received_qty) \
             VALUES ($1, $2, $3, 0)",
        )
        .bind(po_id)
        .bind(item.product_id)
        .bind(item.ordered_qty)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(po_id, "purchase order created");

    // Fresh read so the response matches GET /purchase-orders/{id} exactly.
    get_purchase_order(pool, po_id).await
}

pub async fn list_purchase_orders(pool: &DbPool) -> AppResult<ApiResponse<PurchaseOrderList>> {
    let items: Vec<PurchaseOrderSummary> = sqlx::query_as(
        "SELECT \
             po.id, po.po_number, po.supplier_id, s.name AS supplier_name, po.status, \
             po.expected_date, po.created_at, \
             COALESCE(SUM(poi.ordered_qty), 0)::BIGINT AS items_count, \
             COALESCE(SUM(poi.ordered_qty * COALESCE(p.unit_price, 0)), 0)::DOUBLE PRECISION AS total_amount \
         FROM purchase_orders po \
         JOIN suppliers s ON s.id = po.supplier_id \
         LEFT JOIN purchase_order_items poi ON poi.purchase_order_id = po.id \
         LEFT JOIN products p ON p.id = poi.product_id \
         GROUP BY po.id, s.name \
         ORDER BY po.created_at DESC, po.id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Ok",
        PurchaseOrderList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_purchase_order(
    pool: &DbPool,
    po_id: i32,
) -> AppResult<ApiResponse<PurchaseOrderDetail>> {
    let header: Option<PurchaseOrderHeader> = sqlx::query_as(
        "SELECT \
             po.id, po.po_number, po.supplier_id, s.name AS supplier_name, \
             s.address AS supplier_address, s.contact_person AS supplier_contact_person, \
             s.email AS supplier_email, s.phone AS supplier_phone, \
             po.warehouse_id, w.name AS warehouse_name, po.status, po.expected_date, po.created_at \
         FROM purchase_orders po \
         JOIN suppliers s ON s.id = po.supplier_id \
         LEFT JOIN warehouses w ON w.id = po.warehouse_id \
         WHERE po.id = $1 \
         LIMIT 1",
    )
    .bind(po_id)
    .fetch_optional(pool)
    .await?;
    let header = match header {
        Some(h) => h,
        None => return Err(AppError::NotFound),
    };

    let items: Vec<PurchaseOrderLine> = sqlx::query_as(
        "SELECT \
             poi.id, poi.product_id, p.sku AS sku, p.name AS product_name, \
             poi.ordered_qty AS qty, \
             COALESCE(p.unit_price, 0)::DOUBLE PRECISION AS unit_price, \
             (poi.ordered_qty * COALESCE(p.unit_price, 0))::DOUBLE PRECISION AS line_total \
         FROM purchase_order_items poi \
         JOIN products p ON p.id = poi.product_id \
         WHERE poi.purchase_order_id = $1 \
         ORDER BY poi.id ASC",
    )
    .bind(po_id)
    .fetch_all(pool)
    .await?;

    // Totals come from the items just fetched, not from a stored column.
    let items_count: i64 = items.iter().map(|i| i.qty as i64).sum();
    let total_amount: f64 = items.iter().map(|i| i.line_total).sum();

    Ok(ApiResponse::success(
        "Ok",
        PurchaseOrderDetail {
            header,
            items,
            items_count,
            total_amount,
        },
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn po_numbers_are_zero_padded_to_four_digits() {
        assert_eq!(format_po_number(1), "PO-0001");
        assert_eq!(format_po_number(42), "PO-0042");
        assert_eq!(format_po_number(9999), "PO-9999");
    }

    #[test]
    fn po_numbers_past_padding_keep_full_width() {
        assert_eq!(format_po_number(10_000), "PO-10000");
        assert_eq!(format_po_number(123_456), "PO-123456");
    }
}
