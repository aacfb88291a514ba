use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{Area, Floor, Shelf, Warehouse, Zone};

fn default_area_type() -> String {
    "PATHWAY".to_string()
}

fn default_usage_category() -> String {
    "HUMAN_ONLY".to_string()
}

fn default_passable() -> bool {
    true
}

fn default_shelf_status() -> String {
    "active".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShelfCreate {
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
    #[serde(default = "default_shelf_status")]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ZoneCreate {
    pub zone_name: String,
    pub zone_type: String,
    pub width: f64,
    pub depth: f64,
    pub location_x: f64,
    pub location_y: f64,
    #[serde(default)]
    pub shelves: Vec<ShelfCreate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AreaCreate {
    pub area_name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub location_x: f64,
    pub location_y: f64,
    #[serde(default = "default_area_type")]
    pub area_type: String,
    #[serde(default = "default_usage_category")]
    pub usage_category: String,
    #[serde(default = "default_passable")]
    pub is_passable: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FloorCreate {
    pub floor_number: i32,
    #[serde(default)]
    pub areas: Vec<AreaCreate>,
    #[serde(default)]
    pub zones: Vec<ZoneCreate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WarehouseCreate {
    pub name: String,
    pub location: Option<String>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub status: String,
    pub created_by: i32,
    pub floors: Vec<FloorCreate>,
}

/// Partial update; absent fields are left untouched. `num_floors` triggers
/// the floor resize path on top of the column patch.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WarehouseUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub num_floors: Option<i32>,
}

impl WarehouseUpdate {
    pub fn has_column_changes(&self) -> bool {
        self.name.is_some()
            || self.location.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.depth.is_some()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedWarehouse {
    pub warehouse_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ZoneTree {
    #[serde(flatten)]
    pub zone: Zone,
    pub shelves: Vec<Shelf>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FloorTree {
    #[serde(flatten)]
    pub floor: Floor,
    pub areas: Vec<Area>,
    pub zones: Vec<ZoneTree>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseTree {
    #[serde(flatten)]
    pub warehouse: Warehouse,
    pub owner_name: Option<String>,
    pub floors: Vec<FloorTree>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseTreeList {
    pub items: Vec<WarehouseTree>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WarehouseOption {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseOptionList {
    pub items: Vec<WarehouseOption>,
}
