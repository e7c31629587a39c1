use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, Gasto, GastoPatch, GastoRepository, GastoStore};
use migration::MigratorTrait;

async fn database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = database().await;
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn gasto(descripcion: &str, monto: f64) -> Gasto {
    Gasto {
        id: 0,
        descripcion: descripcion.to_string(),
        monto,
        fecha: String::from("2024-01-01"),
        categoria: String::from("Food"),
        tipo_pago: String::from("Card"),
        comercio: String::from("Cafe"),
    }
}

#[tokio::test]
async fn create_then_partial_update() {
    let (engine, _db) = engine_with_db().await;

    let created = engine.create(gasto("Coffee", 3.50)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.descripcion, "Coffee");
    assert_eq!(created.monto, 3.50);
    assert_eq!(created.fecha, "2024-01-01");
    assert_eq!(created.categoria, "Food");
    assert_eq!(created.tipo_pago, "Card");
    assert_eq!(created.comercio, "Cafe");

    let updated = engine
        .update(
            created.id,
            GastoPatch {
                monto: Some(4.00),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.monto, 4.00);
    assert_eq!(updated.descripcion, "Coffee");
    assert_eq!(updated.fecha, "2024-01-01");
    assert_eq!(updated.categoria, "Food");
    assert_eq!(updated.tipo_pago, "Card");
    assert_eq!(updated.comercio, "Cafe");

    assert_eq!(engine.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_every_field() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.create(gasto("Coffee", 3.50)).await.unwrap();

    let updated = engine
        .update(
            created.id,
            GastoPatch {
                descripcion: Some(String::from("Dinner")),
                monto: Some(-12.25),
                fecha: Some(String::from("not a date")),
                categoria: Some(String::from("Restaurants")),
                comercio: Some(String::from("Trattoria")),
                tipo_pago: Some(String::from("Cash")),
            },
        )
        .await
        .unwrap();

    assert_eq!(
        updated,
        Gasto {
            id: created.id,
            descripcion: String::from("Dinner"),
            monto: -12.25,
            fecha: String::from("not a date"),
            categoria: String::from("Restaurants"),
            tipo_pago: String::from("Cash"),
            comercio: String::from("Trattoria"),
        }
    );
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .update(
            404,
            GastoPatch {
                monto: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound(String::from("gasto 404")));
    assert_eq!(engine.count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_existing_and_missing() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.create(gasto("Coffee", 3.50)).await.unwrap();

    engine.delete(created.id).await.unwrap();

    assert!(matches!(
        engine.get(created.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
    assert!(matches!(
        engine.delete(created.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
}

#[tokio::test]
async fn count_and_list() {
    let (engine, _db) = engine_with_db().await;
    let before = engine.count().await.unwrap();

    for (i, name) in ["Coffee", "Bus", "Lunch"].iter().enumerate() {
        engine.create(gasto(name, i as f64)).await.unwrap();
    }

    assert_eq!(engine.count().await.unwrap(), before + 3);

    let all = engine.get_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|g| g.descripcion.as_str()).collect();
    assert_eq!(names, vec!["Coffee", "Bus", "Lunch"]);
}

#[tokio::test]
async fn query_pages_by_id() {
    let (engine, _db) = engine_with_db().await;
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(engine.create(gasto("item", i as f64)).await.unwrap().id);
    }

    let page = engine.query(1, 2).await.unwrap();
    let page_ids: Vec<_> = page.iter().map(|g| g.id).collect();
    assert_eq!(page_ids, ids[1..3].to_vec());

    let tail = engine.query(4, 10).await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].id, ids[4]);

    assert!(engine.query(10, 10).await.unwrap().is_empty());
    assert!(engine.query(0, 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn store_update_checks_rows_affected() {
    let store = GastoStore::new(database().await);

    let err = store
        .update(&Gasto {
            id: 77,
            ..gasto("ghost", 1.0)
        })
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound(String::from("gasto 77")));
}

#[tokio::test]
async fn store_delete_missing_is_not_found() {
    let store = GastoStore::new(database().await);

    assert_eq!(
        store.delete(3).await.unwrap_err(),
        EngineError::KeyNotFound(String::from("gasto 3"))
    );
}

#[tokio::test]
async fn rows_with_null_columns_are_readable() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO gasto (descripcion, monto) VALUES (?, ?)",
        vec!["legacy".into(), 9.99.into()],
    ))
    .await
    .unwrap();

    let all = engine.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].descripcion, "legacy");
    assert_eq!(all[0].monto, 9.99);
    assert_eq!(all[0].tipo_pago, "");
    assert_eq!(all[0].comercio, "");
}

#[tokio::test]
async fn query_accepts_out_of_range_bounds() {
    let (engine, _db) = engine_with_db().await;
    for i in 0..3 {
        engine.create(gasto("item", i as f64)).await.unwrap();
    }

    assert!(engine.query(u64::MAX, u64::MAX).await.unwrap().is_empty());
    assert_eq!(engine.query(0, u64::MAX).await.unwrap().len(), 3);
    assert_eq!(engine.query(1, u64::MAX).await.unwrap().len(), 2);
}
