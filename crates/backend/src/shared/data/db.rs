use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS a001_category (
        id TEXT PRIMARY KEY NOT NULL,
        slug TEXT NOT NULL,
        name TEXT NOT NULL,
        comment TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS ux_a001_slug
        ON a001_category(slug) WHERE is_deleted = 0;
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a002_vip_number (
        id TEXT PRIMARY KEY NOT NULL,
        number TEXT NOT NULL,
        price INTEGER NOT NULL,
        status TEXT NOT NULL,
        category_slug TEXT,
        highlight TEXT,
        comment TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS ux_a002_number
        ON a002_vip_number(number) WHERE is_deleted = 0;
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_a002_feed
        ON a002_vip_number(created_at DESC, id DESC);
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_number_pack (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        numbers TEXT NOT NULL,
        price INTEGER NOT NULL,
        status TEXT NOT NULL,
        category_slug TEXT,
        comment TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_a003_feed
        ON a003_number_pack(created_at DESC, id DESC);
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a004_payment (
        id TEXT PRIMARY KEY NOT NULL,
        payment_ref TEXT NOT NULL,
        order_ref TEXT NOT NULL,
        email TEXT NOT NULL,
        amount INTEGER NOT NULL,
        method TEXT NOT NULL,
        status TEXT NOT NULL,
        item_label TEXT NOT NULL DEFAULT '',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_a004_feed
        ON a004_payment(created_at DESC, id DESC);
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a005_refund (
        id TEXT PRIMARY KEY NOT NULL,
        refund_ref TEXT NOT NULL,
        payment_ref TEXT NOT NULL,
        order_ref TEXT NOT NULL,
        email TEXT NOT NULL,
        amount INTEGER NOT NULL,
        status TEXT NOT NULL,
        reason TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_a005_feed
        ON a005_refund(created_at DESC, id DESC);
    "#,
];

pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    for statement in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            statement.to_string(),
        ))
        .await?;
    }
    tracing::info!("Database schema ensured at {}", db_path);

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
