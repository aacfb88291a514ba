pub mod area_service;
pub mod auth_service;
pub mod invoice_service;
pub mod product_service;
pub mod purchase_order_service;
pub mod shelf_service;
pub mod supplier_service;
pub mod warehouse_service;
pub mod zone_service;
