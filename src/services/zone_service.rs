use sqlx::{Postgres, QueryBuilder, Transaction};

use crate::{
    db::DbPool,
    dto::layout::{BulkShelvesResult, CreatedId, ZoneMove, ZoneUpdate},
    dto::warehouses::{ShelfCreate, ZoneCreate},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
};

pub(crate) async fn insert_shelf(
    tx: &mut Transaction<'_, Postgres>,
    zone_id: i32,
    shelf: &ShelfCreate,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO shelves (zone_id, shelf_code, shelf_type, aisle_num, bay_num, level_num, \
         bin_num, width, depth, height, location_x, location_y, location_z, orientation_angle, \
         max_weight, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
    )
    .bind(zone_id)
    .bind(&shelf.shelf_code)
    .bind(&shelf.shelf_type)
    .bind(shelf.aisle_num)
    .bind(shelf.bay_num)
    .bind(shelf.level_num)
    .bind(shelf.bin_num)
    .bind(shelf.width)
    .bind(shelf.depth)
    .bind(shelf.height)
    .bind(shelf.location_x)
    .bind(shelf.location_y)
    .bind(shelf.location_z)
    .bind(shelf.orientation_angle)
    .bind(shelf.max_weight)
    .bind(&shelf.status)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub(crate) async fn insert_zone(
    tx: &mut Transaction<'_, Postgres>,
    floor_id: i32,
    zone: &ZoneCreate,
) -> Result<i32, sqlx::Error> {
    let zone_id: i32 = sqlx::query_scalar(
        "INSERT INTO zones (floor_id, zone_name, zone_type, width, depth, location_x, location_y) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(floor_id)
    .bind(&zone.zone_name)
    .bind(&zone.zone_type)
    .bind(zone.width)
    .bind(zone.depth)
    .bind(zone.location_x)
    .bind(zone.location_y)
    .fetch_one(&mut **tx)
    .await?;

    for shelf in &zone.shelves {
        insert_shelf(tx, zone_id, shelf).await?;
    }

    Ok(zone_id)
}

/// Add a zone (and its nested shelves, if any) to a floor.
pub async fn create_zone(
    pool: &DbPool,
    floor_id: i32,
    payload: ZoneCreate,
) -> AppResult<ApiResponse<CreatedId>> {
    let mut tx = pool.begin().await?;
    let zone_id = insert_zone(&mut tx, floor_id, &payload).await?;
    tx.commit().await?;

    Ok(ApiResponse::success(
        "Zone created successfully",
        CreatedId { id: zone_id },
        Some(Meta::empty()),
    ))
}

/// Patch only the supplied fields; an empty patch is a no-op.
pub async fn update_zone(
    pool: &DbPool,
    zone_id: i32,
    patch: ZoneUpdate,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if patch.is_empty() {
        return Ok(ApiResponse::success(
            "No changes provided",
            serde_json::json!({}),
            Some(Meta::empty()),
        ));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE zones SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(zone_name) = patch.zone_name {
            set.push("zone_name = ");
            set.push_bind_unseparated(zone_name);
        }
        if let Some(zone_type) = patch.zone_type {
            set.push("zone_type = ");
            set.push_bind_unseparated(zone_type);
        }
        if let Some(width) = patch.width {
            set.push("width = ");
            set.push_bind_unseparated(width);
        }
        if let Some(depth) = patch.depth {
            set.push("depth = ");
            set.push_bind_unseparated(depth);
        }
        if let Some(location_x) = patch.location_x {
            set.push("location_x = ");
            set.push_bind_unseparated(location_x);
        }
        if let Some(location_y) = patch.location_y {
            set.push("location_y = ");
            set.push_bind_unseparated(location_y);
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(zone_id);
    qb.build().execute(pool).await?;

    Ok(ApiResponse::success(
        "Zone updated successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Cascade: shelves first, then the zone itself.
pub async fn delete_zone(pool: &DbPool, zone_id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shelves WHERE zone_id = $1")
        .bind(zone_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM zones WHERE id = $1")
        .bind(zone_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(ApiResponse::success(
        "Zone and its shelves deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Move the zone to an absolute position and translate its shelves by the
/// same delta so they retain their offset layout within the zone.
pub async fn move_zone(
    pool: &DbPool,
    zone_id: i32,
    target: ZoneMove,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut tx = pool.begin().await?;

    let old: Option<(f64, f64)> =
        sqlx::query_as("SELECT location_x, location_y FROM zones WHERE id = $1")
            .bind(zone_id)
            .fetch_optional(&mut *tx)
            .await?;
    let (old_x, old_y) = match old {
        Some(coords) => coords,
        None => return Err(AppError::NotFound),
    };

    let dx = target.location_x - old_x;
    let dy = target.location_y - old_y;

    sqlx::query("UPDATE zones SET location_x = $1, location_y = $2 WHERE id = $3")
        .bind(target.location_x)
        .bind(target.location_y)
        .bind(zone_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "UPDATE shelves SET location_x = location_x + $1, location_y = location_y + $2 \
         WHERE zone_id = $3",
    )
    .bind(dx)
    .bind(dy)
    .bind(zone_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(ApiResponse::success(
        "Zone and shelves moved successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Layout replacement: drop every shelf of the zone, then insert the given
/// set. Full overwrite, not a diff; one transaction.
pub async fn bulk_replace_shelves(
    pool: &DbPool,
    zone_id: i32,
    shelves: Vec<ShelfCreate>,
) -> AppResult<ApiResponse<BulkShelvesResult>> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shelves WHERE zone_id = $1")
        .bind(zone_id)
        .execute(&mut *tx)
        .await?;

    for shelf in &shelves {
        insert_shelf(&mut tx, zone_id, shelf).await?;
    }

    tx.commit().await?;

    Ok(ApiResponse::success(
        format!("{} shelves created successfully", shelves.len()),
        BulkShelvesResult {
            count: shelves.len(),
        },
        Some(Meta::empty()),
    ))
}
