use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ZoneUpdate {
    pub zone_name: Option<String>,
    pub zone_type: Option<String>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub location_x: Option<f64>,
    pub location_y: Option<f64>,
}

impl ZoneUpdate {
    pub fn is_empty(&self) -> bool {
        self.zone_name.is_none()
            && self.zone_type.is_none()
            && self.width.is_none()
            && self.depth.is_none()
            && self.location_x.is_none()
            && self.location_y.is_none()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ZoneMove {
    pub location_x: f64,
    pub location_y: f64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AreaUpdate {
    pub area_name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub location_x: Option<f64>,
    pub location_y: Option<f64>,
    pub area_type: Option<String>,
    pub usage_category: Option<String>,
    pub is_passable: Option<bool>,
}

impl AreaUpdate {
    pub fn is_empty(&self) -> bool {
        self.area_name.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.depth.is_none()
            && self.location_x.is_none()
            && self.location_y.is_none()
            && self.area_type.is_none()
            && self.usage_category.is_none()
            && self.is_passable.is_none()
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ShelfUpdate {
    pub shelf_code: Option<String>,
    pub shelf_type: Option<String>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub location_x: Option<f64>,
    pub location_y: Option<f64>,
    pub location_z: Option<f64>,
    pub orientation_angle: Option<f64>,
    pub max_weight: Option<f64>,
    pub status: Option<String>,
}

impl ShelfUpdate {
    pub fn is_empty(&self) -> bool {
        self.shelf_code.is_none()
            && self.shelf_type.is_none()
            && self.width.is_none()
            && self.depth.is_none()
            && self.height.is_none()
            && self.location_x.is_none()
            && self.location_y.is_none()
            && self.location_z.is_none()
            && self.orientation_angle.is_none()
            && self.max_weight.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkShelvesResult {
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedId {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patches_are_detected() {
        assert!(ZoneUpdate::default().is_empty());
        assert!(AreaUpdate::default().is_empty());
        assert!(ShelfUpdate::default().is_empty());
    }

    #[test]
    fn single_field_marks_patch_non_empty() {
        let patch = ZoneUpdate {
            location_x: Some(4.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
