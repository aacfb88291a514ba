use sqlx::{Postgres, QueryBuilder, Transaction};

use crate::{
    db::DbPool,
    dto::layout::{AreaUpdate, CreatedId},
    dto::warehouses::AreaCreate,
    error::AppResult,
    response::{ApiResponse, Meta},
};

pub(crate) async fn insert_area(
    tx: &mut Transaction<'_, Postgres>,
    floor_id: i32,
    area: &AreaCreate,
) -> Result<i32, sqlx::Error> {
    let area_id: i32 = sqlx::query_scalar(
        "INSERT INTO areas (floor_id, area_name, width, height, depth, location_x, location_y, \
         area_type, usage_category, is_passable) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
    )
    .bind(floor_id)
    .bind(&area.area_name)
    .bind(area.width)
    .bind(area.height)
    .bind(area.depth)
    .bind(area.location_x)
    .bind(area.location_y)
    .bind(&area.area_type)
    .bind(&area.usage_category)
    .bind(area.is_passable)
    .fetch_one(&mut **tx)
    .await?;
    Ok(area_id)
}

pub async fn create_area(
    pool: &DbPool,
    floor_id: i32,
    payload: AreaCreate,
) -> AppResult<ApiResponse<CreatedId>> {
    let mut tx = pool.begin().await?;
    let area_id = insert_area(&mut tx, floor_id, &payload).await?;
    tx.commit().await?;

    Ok(ApiResponse::success(
        "Area created successfully",
        CreatedId { id: area_id },
        Some(Meta::empty()),
    ))
}

pub async fn update_area(
    pool: &DbPool,
    area_id: i32,
    patch: AreaUpdate,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if patch.is_empty() {
        return Ok(ApiResponse::success(
            "No changes provided",
            serde_json::json!({}),
            Some(Meta::empty()),
        ));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE areas SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(area_name) = patch.area_name {
            set.push("area_name = ");
            set.push_bind_unseparated(area_name);
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
        if let Some(location_x) = patch.location_x {
            set.push("location_x = ");
            set.push_bind_unseparated(location_x);
        }
        if let Some(location_y) = patch.location_y {
            set.push("location_y = ");
            set.push_bind_unseparated(location_y);
        }
        if let Some(area_type) = patch.area_type {
            set.push("area_type = ");
            set.push_bind_unseparated(area_type);
        }
        if let Some(usage_category) = patch.usage_category {
            set.push("usage_category = ");
            set.push_bind_unseparated(usage_category);
        }
        if let Some(is_passable) = patch.is_passable {
            set.push("is_passable = ");
            set.push_bind_unseparated(is_passable);
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(area_id);
    qb.build().execute(pool).await?;

    Ok(ApiResponse::success(
        "Area updated successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn delete_area(pool: &DbPool, area_id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    sqlx::query("DELETE FROM areas WHERE id = $1")
        .bind(area_id)
        .execute(pool)
        .await?;

    Ok(ApiResponse::success(
        "Area deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
