use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::{
    db::DbPool,
    dto::warehouses::{
        CreatedWarehouse, FloorTree, WarehouseCreate, WarehouseOption, WarehouseOptionList,
        WarehouseTree, WarehouseTreeList, WarehouseUpdate, ZoneTree,
    },
    error::{AppError, AppResult},
    models::{Area, Floor, Shelf, Warehouse, Zone},
    response::{ApiResponse, Meta},
    services::{area_service, zone_service},
};

/// Create the full warehouse → floor → {area, zone} → shelf hierarchy in one
/// transaction. Any failure rolls the whole tree back.
pub async fn create_warehouse(
    pool: &DbPool,
    payload: WarehouseCreate,
) -> AppResult<ApiResponse<CreatedWarehouse>> {
    let mut tx = pool.begin().await?;

    // One warehouse per owning manager.
    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM warehouses WHERE created_by = $1")
            .bind(payload.created_by)
            .fetch_optional(&mut *tx)
            .await?;
    if existing.is_some() {
        return Err(AppError::Validation(
            "Manager already owns a warehouse".into(),
        ));
    }

    let warehouse_id: i32 = sqlx::query_scalar(
        "INSERT INTO warehouses (name, location, width, height, depth, status, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(&payload.name)
    .bind(&payload.location)
    .bind(payload.width)
    .bind(payload.height)
    .bind(payload.depth)
    .bind(&payload.status)
    .bind(payload.created_by)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE users SET warehouse_id = $1 WHERE id = $2")
        .bind(warehouse_id)
        .bind(payload.created_by)
        .execute(&mut *tx)
        .await?;

    for floor in &payload.floors {
        let floor_id: i32 = sqlx::query_scalar(
            "INSERT INTO floors (warehouse_id, floor_number) VALUES ($1, $2) RETURNING id",
        )
        .bind(warehouse_id)
        .bind(floor.floor_number)
        .fetch_one(&mut *tx)
        .await?;

        for area in &floor.areas {
            area_service::insert_area(&mut tx, floor_id, area).await?;
        }
        for zone in &floor.zones {
            zone_service::insert_zone(&mut tx, floor_id, zone).await?;
        }
    }

    tx.commit().await?;
    tracing::info!(warehouse_id, "warehouse hierarchy created");

    Ok(ApiResponse::success(
        "Full warehouse hierarchy created successfully",
        CreatedWarehouse { warehouse_id },
        Some(Meta::empty()),
    ))
}

#[derive(Debug, FromRow)]
struct WarehouseOwnerRow {
    #[sqlx(flatten)]
    warehouse: Warehouse,
    owner_name: Option<String>,
}

/// Every warehouse with its floors, areas, zones and shelves nested.
/// Sequential per-level queries; the hierarchy is small.
pub async fn list_warehouse_tree(pool: &DbPool) -> AppResult<ApiResponse<WarehouseTreeList>> {
    let warehouses: Vec<WarehouseOwnerRow> = sqlx::query_as(
        "SELECT w.*, u.username AS owner_name FROM warehouses w \
         LEFT JOIN users u ON u.id = w.created_by \
         ORDER BY w.created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    let mut items = Vec::with_capacity(warehouses.len());
    for row in warehouses {
        let floors: Vec<Floor> = sqlx::query_as(
            "SELECT * FROM floors WHERE warehouse_id = $1 ORDER BY floor_number",
        )
        .bind(row.warehouse.id)
        .fetch_all(pool)
        .await?;

        let mut floor_trees = Vec::with_capacity(floors.len());
        for floor in floors {
            let areas: Vec<Area> =
                sqlx::query_as("SELECT * FROM areas WHERE floor_id = $1 ORDER BY id")
                    .bind(floor.id)
                    .fetch_all(pool)
                    .await?;

            let zones: Vec<Zone> =
                sqlx::query_as("SELECT * FROM zones WHERE floor_id = $1 ORDER BY id")
                    .bind(floor.id)
                    .fetch_all(pool)
                    .await?;

            let mut zone_trees = Vec::with_capacity(zones.len());
            for zone in zones {
                let shelves: Vec<Shelf> =
                    sqlx::query_as("SELECT * FROM shelves WHERE zone_id = $1 ORDER BY id")
                        .bind(zone.id)
                        .fetch_all(pool)
                        .await?;
                zone_trees.push(ZoneTree { zone, shelves });
            }

            floor_trees.push(FloorTree {
                floor,
                areas,
                zones: zone_trees,
            });
        }

        items.push(WarehouseTree {
            warehouse: row.warehouse,
            owner_name: row.owner_name,
            floors: floor_trees,
        });
    }

    Ok(ApiResponse::success(
        "Ok",
        WarehouseTreeList { items },
        Some(Meta::empty()),
    ))
}

/// `{id, name}` pairs for the New Order dropdown.
pub async fn list_warehouse_options(pool: &DbPool) -> AppResult<ApiResponse<WarehouseOptionList>> {
    let items: Vec<WarehouseOption> =
        sqlx::query_as("SELECT id, name FROM warehouses ORDER BY id ASC")
            .fetch_all(pool)
            .await?;

    Ok(ApiResponse::success(
        "Ok",
        WarehouseOptionList { items },
        Some(Meta::empty()),
    ))
}

/// Partial update plus the floor resize path, all in one transaction.
/// Only the owning user may update a warehouse.
pub async fn update_warehouse(
    pool: &DbPool,
    warehouse_id: i32,
    current_user_id: i32,
    patch: WarehouseUpdate,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut tx = pool.begin().await?;

    let owner: Option<(i32,)> =
        sqlx::query_as("SELECT created_by FROM warehouses WHERE id = $1")
            .bind(warehouse_id)
            .fetch_optional(&mut *tx)
            .await?;
    let owner = match owner {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };
    if owner.0 != current_user_id {
        return Err(AppError::Forbidden);
    }

    if !patch.has_column_changes() && patch.num_floors.is_none() {
        return Ok(ApiResponse::success(
            "No fields to update",
            serde_json::json!({}),
            Some(Meta::empty()),
        ));
    }

    if patch.has_column_changes() {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE warehouses SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ");
                set.push_bind_unseparated(name);
            }
            if let Some(location) = patch.location {
                set.push("location = ");
                set.push_bind_unseparated(location);
            }
            if let Some(width) = patch.width {
                set.push("width = ");
                set.push_bind_unseparated(width);
            }
            if let Some(height) = patch.height {
                set.push("height = ");
                set.push_bind_unseparated(height);
            }
            if let Some(depth) = patch.depth {
                set.push("depth = ");
                set.push_bind_unseparated(depth);
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(warehouse_id);
        qb.build().execute(&mut *tx).await?;
    }

    if let Some(num_floors) = patch.num_floors {
        resize_floors(&mut tx, warehouse_id, num_floors).await?;
    }

    tx.commit().await?;

    Ok(ApiResponse::success(
        "Warehouse updated",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Grow appends floors numbered from the current count upward; shrink drops
/// floors with floor_number >= the target, cascading bottom-up so foreign
/// keys hold: shelves, then zones, then areas, then the floor rows.
async fn resize_floors(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    warehouse_id: i32,
    num_floors: i32,
) -> Result<(), sqlx::Error> {
    let current: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM floors WHERE warehouse_id = $1")
        .bind(warehouse_id)
        .fetch_one(&mut **tx)
        .await?;
    let current = current as i32;

    if num_floors > current {
        for floor_number in current..num_floors {
            sqlx::query("INSERT INTO floors (warehouse_id, floor_number) VALUES ($1, $2)")
                .bind(warehouse_id)
                .bind(floor_number)
                .execute(&mut **tx)
                .await?;
        }
    } else if num_floors < current {
        let doomed: Vec<(i32,)> = sqlx::query_as(
            "SELECT id FROM floors WHERE warehouse_id = $1 AND floor_number >= $2",
        )
        .bind(warehouse_id)
        .bind(num_floors)
        .fetch_all(&mut **tx)
        .await?;

        for (floor_id,) in doomed {
            sqlx::query(
                "DELETE FROM shelves WHERE zone_id IN (SELECT id FROM zones WHERE floor_id = $1)",
            )
            .bind(floor_id)
            .execute(&mut **tx)
            .await?;
            sqlx::query("DELETE FROM zones WHERE floor_id = $1")
                .bind(floor_id)
                .execute(&mut **tx)
                .await?;
            sqlx::query("DELETE FROM areas WHERE floor_id = $1")
                .bind(floor_id)
                .execute(&mut **tx)
                .await?;
        }

        sqlx::query("DELETE FROM floors WHERE warehouse_id = $1 AND floor_number >= $2")
            .bind(warehouse_id)
            .bind(num_floors)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}
