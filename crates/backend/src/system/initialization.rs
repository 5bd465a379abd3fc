use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::config::Config;

/// Auth system tables, applied idempotently at startup
const AUTH_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sys_users (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        full_name TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        is_admin INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        last_login_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sys_settings (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        description TEXT,
        created_at TEXT,
        updated_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        token_hash TEXT NOT NULL,
        expires_at TEXT NOT NULL,
        created_at TEXT NOT NULL,
        revoked_at TEXT
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_sys_refresh_tokens_hash
        ON sys_refresh_tokens(token_hash);
    "#,
];

/// Apply authentication system migration
pub async fn apply_auth_migration() -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    for statement in AUTH_SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            statement.to_string(),
        ))
        .await
        .with_context(|| {
            format!(
                "Failed to apply auth schema statement: {}",
                statement.lines().take(2).collect::<Vec<_>>().join(" ")
            )
        })?;
    }

    tracing::info!("Auth system schema ensured");

    Ok(())
}

/// Ensure the configured admin account exists (created on first run)
pub async fn ensure_admin_user_exists(config: &Config) -> Result<()> {
    use crate::system::users::{repository, service};

    let admin_email = config.admin.email.trim().to_lowercase();

    if repository::get_by_email(&admin_email).await?.is_some() {
        return Ok(());
    }

    tracing::info!("Admin account not found. Creating it...");

    let admin_id = service::create(
        &admin_email,
        &config.admin.bootstrap_password,
        Some("Administrator".to_string()),
    )
    .await?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Admin account created!");
    tracing::warn!("  E-mail: {}", admin_email);
    tracing::warn!("  Password: (from [admin].bootstrap_password)");
    tracing::warn!("  User ID: {}", admin_id);
    tracing::warn!("  Change the password after first login!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}
