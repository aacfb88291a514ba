use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::LoginRequest,
        layout::{AreaUpdate, BulkShelvesResult, CreatedId, ShelfUpdate, ZoneMove, ZoneUpdate},
        purchase_orders::{
            PurchaseOrderCreate, PurchaseOrderDetail, PurchaseOrderHeader, PurchaseOrderItemCreate,
            PurchaseOrderLine, PurchaseOrderList, PurchaseOrderSummary,
        },
        suppliers::{SupplierCreate, SupplierList, SupplierUpdate, SupplierWithStats},
        warehouses::{
            AreaCreate, CreatedWarehouse, FloorCreate, FloorTree, ShelfCreate, WarehouseCreate,
            WarehouseOption, WarehouseOptionList, WarehouseTree, WarehouseTreeList,
            WarehouseUpdate, ZoneCreate, ZoneTree,
        },
    },
    models::{Area, Floor, Product, PurchaseOrder, PurchaseOrderItem, Shelf, Supplier, UserPublic, Warehouse, Zone},
    response::{ApiResponse, Meta},
    routes::{
        areas, auth, floors, health, products, purchase_invoices, purchase_orders, shelves,
        suppliers, warehouses, zones,
    },
    services::product_service::ProductList,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::me,
        warehouses::create_warehouse,
        warehouses::list_warehouses,
        warehouses::list_warehouse_options,
        warehouses::update_warehouse,
        floors::create_zone,
        floors::create_area,
        zones::update_zone,
        zones::delete_zone,
        zones::move_zone,
        zones::bulk_replace_shelves,
        areas::update_area,
        areas::delete_area,
        shelves::update_shelf,
        shelves::delete_shelf,
        suppliers::list_suppliers,
        suppliers::create_supplier,
        suppliers::update_supplier,
        products::list_products,
        purchase_orders::list_purchase_orders,
        purchase_orders::create_purchase_order,
        purchase_orders::get_purchase_order,
        purchase_invoices::list_purchase_invoices,
        purchase_invoices::get_purchase_invoice
    ),
    components(
        schemas(
            Warehouse,
            Floor,
            Area,
            Zone,
            Shelf,
            Supplier,
            Product,
            PurchaseOrder,
            PurchaseOrderItem,
            UserPublic,
            LoginRequest,
            WarehouseCreate,
            FloorCreate,
            AreaCreate,
            ZoneCreate,
            ShelfCreate,
            WarehouseUpdate,
            CreatedWarehouse,
            WarehouseTree,
            FloorTree,
            ZoneTree,
            WarehouseTreeList,
            WarehouseOption,
            WarehouseOptionList,
            ZoneUpdate,
            ZoneMove,
            AreaUpdate,
            ShelfUpdate,
            BulkShelvesResult,
            CreatedId,
            SupplierCreate,
            SupplierUpdate,
            SupplierWithStats,
            SupplierList,
            ProductList,
            PurchaseOrderCreate,
            PurchaseOrderItemCreate,
            PurchaseOrderSummary,
            PurchaseOrderList,
            PurchaseOrderLine,
            PurchaseOrderHeader,
            PurchaseOrderDetail,
            Meta,
            ApiResponse<WarehouseTreeList>,
            ApiResponse<PurchaseOrderDetail>,
            ApiResponse<PurchaseOrderList>,
            ApiResponse<SupplierList>,
            ApiResponse<ProductList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Login and user lookup"),
        (name = "Warehouses", description = "Warehouse hierarchy endpoints"),
        (name = "Layout", description = "Floor, zone, area and shelf endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Purchase Orders", description = "Purchase order endpoints"),
        (name = "Purchase Invoices", description = "Purchase invoice documents"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
