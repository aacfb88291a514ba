use optiware_api::{
    db::{DbPool, create_pool},
    dto::auth::LoginRequest,
    dto::layout::{ZoneMove, ZoneUpdate},
    dto::warehouses::{FloorCreate, ShelfCreate, WarehouseCreate, WarehouseUpdate, ZoneCreate},
    error::AppError,
    security,
    services::{auth_service, warehouse_service, zone_service},
};

// Integration flow: manager creates a full hierarchy, moves a zone, replaces
// a shelf layout and resizes floors; ownership and one-warehouse-per-manager
// rules are enforced along the way.
#[tokio::test]
async fn warehouse_hierarchy_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = setup_pool(&database_url).await?;

    let manager_id = create_user(&pool, "manager1", Some(&security::hash_password("pw123")?)).await?;
    let other_id = create_user(&pool, "manager2", Some("legacy-plain")).await?;

    // Login exercises the hash path and the legacy plaintext fallback.
    let logged_in = auth_service::login(
        &pool,
        LoginRequest {
            username: "manager1".into(),
            password: "pw123".into(),
        },
    )
    .await?;
    assert_eq!(logged_in.data.unwrap().id, manager_id);

    let legacy = auth_service::login(
        &pool,
        LoginRequest {
            username: "manager2".into(),
            password: "legacy-plain".into(),
        },
    )
    .await?;
    assert_eq!(legacy.data.unwrap().id, other_id);

    let bad_login = auth_service::login(
        &pool,
        LoginRequest {
            username: "manager1".into(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::Unauthorized(_))));

    // Create the full hierarchy in one call.
    let created = warehouse_service::create_warehouse(
        &pool,
        WarehouseCreate {
            name: "W1".into(),
            location: None,
            width: 10.0,
            height: 3.0,
            depth: 10.0,
            status: "active".into(),
            created_by: manager_id,
            floors: vec![FloorCreate {
                floor_number: 0,
                areas: vec![],
                zones: vec![ZoneCreate {
                    zone_name: "Z1".into(),
                    zone_type: "storage".into(),
                    width: 5.0,
                    depth: 5.0,
                    location_x: 0.0,
                    location_y: 0.0,
                    shelves: vec![shelf("S1", 0.0, 0.0)],
                }],
            }],
        },
    )
    .await?;
    let warehouse_id = created.data.unwrap().warehouse_id;

    // The owner association is written in the same transaction.
    let (user_wh,): (Option<i32>,) =
        sqlx::query_as("SELECT warehouse_id FROM users WHERE id = $1")
            .bind(manager_id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(user_wh, Some(warehouse_id));

    // Nested read shows 1 floor, 1 zone, 1 shelf.
    let tree = warehouse_service::list_warehouse_tree(&pool).await?;
    let items = tree.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].floors.len(), 1);
    assert_eq!(items[0].floors[0].zones.len(), 1);
    assert_eq!(items[0].floors[0].zones[0].shelves.len(), 1);
    assert_eq!(items[0].owner_name.as_deref(), Some("manager1"));
    let zone_id = items[0].floors[0].zones[0].zone.id;

    // A second warehouse for the same manager is rejected.
    let duplicate = warehouse_service::create_warehouse(
        &pool,
        WarehouseCreate {
            name: "W2".into(),
            location: None,
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            status: "active".into(),
            created_by: manager_id,
            floors: vec![],
        },
    )
    .await;
    match duplicate {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Manager already owns a warehouse"),
        other => panic!("expected validation error, got {other:?}"),
    }

    // Move the zone from (0,0) to (5,5); the shelf translates by the delta.
    zone_service::move_zone(
        &pool,
        zone_id,
        ZoneMove {
            location_x: 5.0,
            location_y: 5.0,
        },
    )
    .await?;
    let (sx, sy) = shelf_coords(&pool, zone_id).await?;
    assert_eq!((sx, sy), (5.0, 5.0));

    // Moving again to the same position is a no-op delta.
    zone_service::move_zone(
        &pool,
        zone_id,
        ZoneMove {
            location_x: 5.0,
            location_y: 5.0,
        },
    )
    .await?;
    assert_eq!(shelf_coords(&pool, zone_id).await?, (5.0, 5.0));

    let missing = zone_service::move_zone(
        &pool,
        zone_id + 999,
        ZoneMove {
            location_x: 0.0,
            location_y: 0.0,
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    // Empty patch leaves the row identical and reports no changes.
    let before: (String, f64) =
        sqlx::query_as("SELECT zone_name, location_x FROM zones WHERE id = $1")
            .bind(zone_id)
            .fetch_one(&pool)
            .await?;
    let noop = zone_service::update_zone(&pool, zone_id, ZoneUpdate::default()).await?;
    assert_eq!(noop.message, "No changes provided");
    let after: (String, f64) =
        sqlx::query_as("SELECT zone_name, location_x FROM zones WHERE id = $1")
            .bind(zone_id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(before, after);

    // Bulk replace is a full overwrite: the empty set clears the zone.
    let replaced = zone_service::bulk_replace_shelves(
        &pool,
        zone_id,
        vec![shelf("S2", 1.0, 1.0), shelf("S3", 2.0, 2.0)],
    )
    .await?;
    assert_eq!(replaced.data.unwrap().count, 2);
    assert_eq!(count_shelves(&pool, zone_id).await?, 2);

    zone_service::bulk_replace_shelves(&pool, zone_id, vec![]).await?;
    assert_eq!(count_shelves(&pool, zone_id).await?, 0);

    // Only the owner may update the warehouse.
    let forbidden = warehouse_service::update_warehouse(
        &pool,
        warehouse_id,
        other_id,
        WarehouseUpdate::default(),
    )
    .await;
    assert!(matches!(forbidden, Err(AppError::Forbidden)));

    let gone = warehouse_service::update_warehouse(
        &pool,
        warehouse_id + 999,
        manager_id,
        WarehouseUpdate::default(),
    )
    .await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    // Grow to 3 floors, then shrink back to 1; the shrink cascades.
    warehouse_service::update_warehouse(
        &pool,
        warehouse_id,
        manager_id,
        WarehouseUpdate {
            num_floors: Some(3),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(count_floors(&pool, warehouse_id).await?, 3);

    warehouse_service::update_warehouse(
        &pool,
        warehouse_id,
        manager_id,
        WarehouseUpdate {
            name: Some("W1 renamed".into()),
            num_floors: Some(1),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(count_floors(&pool, warehouse_id).await?, 1);
    let (name,): (String,) = sqlx::query_as("SELECT name FROM warehouses WHERE id = $1")
        .bind(warehouse_id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(name, "W1 renamed");

    Ok(())
}

fn shelf(code: &str, x: f64, y: f64) -> ShelfCreate {
    ShelfCreate {
        shelf_code: code.into(),
        shelf_type: "pallet".into(),
        aisle_num: 1,
        bay_num: 1,
        level_num: 1,
        bin_num: None,
        width: 1.0,
        depth: 1.0,
        height: 2.0,
        location_x: x,
        location_y: y,
        location_z: 0.0,
        orientation_angle: None,
        max_weight: None,
        status: "active".into(),
    }
}

async fn setup_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query(
        "TRUNCATE TABLE purchase_order_items, purchase_orders, shelves, zones, areas, floors, \
         warehouses, suppliers, products, users RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

async fn create_user(pool: &DbPool, username: &str, password: Option<&str>) -> anyhow::Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO users (username, password, role) VALUES ($1, $2, 'manager') RETURNING id",
    )
    .bind(username)
    .bind(password)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn shelf_coords(pool: &DbPool, zone_id: i32) -> anyhow::Result<(f64, f64)> {
    let coords: (f64, f64) = sqlx::query_as(
        "SELECT location_x, location_y FROM shelves WHERE zone_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(zone_id)
    .fetch_one(pool)
    .await?;
    Ok(coords)
}

async fn count_shelves(pool: &DbPool, zone_id: i32) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shelves WHERE zone_id = $1")
        .bind(zone_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn count_floors(pool: &DbPool, warehouse_id: i32) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM floors WHERE warehouse_id = $1")
        .bind(warehouse_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
