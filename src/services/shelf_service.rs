use sqlx::{Postgres, QueryBuilder};

use crate::{
    db::DbPool,
    dto::layout::ShelfUpdate,
    error::AppResult,
    response::{ApiResponse, Meta},
};

pub async fn update_shelf(
    pool: &DbPool,
    shelf_id: i32,
    patch: ShelfUpdate,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if patch.is_empty() {
        return Ok(ApiResponse::success(
            "No changes provided",
            serde_json::json!({}),
            Some(Meta::empty()),
        ));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE shelves SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(shelf_code) = patch.shelf_code {
            set.push("shelf_code = ");
            set.push_bind_unseparated(shelf_code);
        }
        if let Some(shelf_type) = patch.shelf_type {
            set.push("shelf_type = ");
            set.push_bind_unseparated(shelf_type);
        }
        if let Some(width) = patch.width {
            set.push("width = ");
            set.push_bind_unseparated(width);
        }
        if let Some(depth) = patch.depth {
            set.push("depth = ");
            set.push_bind_unseparated(depth);
        }
        if let Some(height) = patch.height {
            set.push("height = ");
            set.push_bind_unseparated(height);
        }
        if let Some(location_x) = patch.location_x {
            set.push("location_x = ");
            set.push_bind_unseparated(location_x);
        }
        if let Some(location_y) = patch.location_y {
            set.push("location_y = ");
            set.push_bind_unseparated(location_y);
        }
        if let Some(location_z) = patch.location_z {
            set.push("location_z = ");
            set.push_bind_unseparated(location_z);
        }
        if let Some(orientation_angle) = patch.orientation_angle {
            set.push("orientation_angle = ");
            set.push_bind_unseparated(orientation_angle);
        }
        if let Some(max_weight) = patch.max_weight {
            set.push("max_weight = ");
            set.push_bind_unseparated(max_weight);
        }
        if let Some(status) = patch.status {
            set.push("status = ");
            set.push_bind_unseparated(status);
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(shelf_id);
    qb.build().execute(pool).await?;

    Ok(ApiResponse::success(
        "Shelf updated successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn delete_shelf(
    pool: &DbPool,
    shelf_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    sqlx::query("DELETE FROM shelves WHERE id = $1")
        .bind(shelf_id)
        .execute(pool)
        .await?;

    Ok(ApiResponse::success(
        "Shelf deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
