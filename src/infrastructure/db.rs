use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::info!("Database ready at {}", database_url);

    Ok(db)
}

async fn execute(db: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_owned(),
    ))
    .await?;
    Ok(())
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Referential checks are off by default in SQLite
    execute(db, "PRAGMA foreign_keys = ON").await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(trim(name)) > 0)
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY (category_id) REFERENCES category(id)
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS "table" (
            id INTEGER PRIMARY KEY AUTOINCREMENT CHECK (id > 0),
            name TEXT NOT NULL
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS order_address (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_name TEXT NOT NULL,
            street TEXT NOT NULL,
            number TEXT NOT NULL,
            district TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL
        )
        "#,
    )
    .await?;

    // order_status: 1 COMPLETE, 2 DOING, 3 CANCELED
    // order_type:   1 TABLE, 2 DESK, 3 DELIVERY
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS "order" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            value REAL NOT NULL,
            delivery_value REAL NOT NULL,
            table_id INTEGER,
            order_status INTEGER NOT NULL CHECK (order_status BETWEEN 1 AND 3),
            order_type INTEGER NOT NULL CHECK (order_type BETWEEN 1 AND 3),
            order_address_id INTEGER,
            FOREIGN KEY (table_id) REFERENCES "table"(id) ON DELETE SET NULL,
            FOREIGN KEY (order_address_id) REFERENCES order_address(id) ON DELETE SET NULL,
            CHECK (order_type <> 3 OR order_address_id IS NOT NULL)
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS order_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL,
            order_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            value REAL NOT NULL,
            FOREIGN KEY (product_id) REFERENCES product(id),
            FOREIGN KEY (order_id) REFERENCES "order"(id) ON DELETE CASCADE
        )
        "#,
    )
    .await?;

    // Pending-order and report queries filter on status and date
    execute(
        db,
        r#"CREATE INDEX IF NOT EXISTS idx_order_status_date ON "order" (order_status, date)"#,
    )
    .await?;

    Ok(())
}
