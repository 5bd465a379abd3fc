pub mod api;
pub mod domain;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the binary's working dir
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, silence per-statement SQL noise
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Configuration is a startup gate: a missing admin e-mail or database
    // path aborts here with a descriptive error
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::config::init(config.clone())?;

    shared::data::db::initialize_database(&db_path.to_string_lossy())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::initialization::apply_auth_migration().await?;
    system::initialization::ensure_admin_user_exists(&config).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // ========================================
    // BUSINESS ROUTES (JWT required)
    // ========================================
    let business = Router::new()
        // Categories
        .route(
            "/api/category",
            get(api::handlers::a001_category::list_all).post(api::handlers::a001_category::upsert),
        )
        .route(
            "/api/category/:id",
            get(api::handlers::a001_category::get_by_id)
                .delete(api::handlers::a001_category::delete),
        )
        // VIP numbers
        .route(
            "/api/vip_number/list",
            get(api::handlers::a002_vip_number::list),
        )
        .route(
            "/api/vip_number/lookup",
            get(api::handlers::a002_vip_number::lookup),
        )
        .route(
            "/api/vip_number",
            post(api::handlers::a002_vip_number::upsert),
        )
        .route(
            "/api/vip_number/testdata",
            post(api::handlers::a002_vip_number::insert_test_data),
        )
        .route(
            "/api/vip_number/:id",
            get(api::handlers::a002_vip_number::get_by_id)
                .delete(api::handlers::a002_vip_number::delete),
        )
        // Number packs
        .route(
            "/api/number_pack/list",
            get(api::handlers::a003_number_pack::list),
        )
        .route(
            "/api/number_pack",
            post(api::handlers::a003_number_pack::upsert),
        )
        .route(
            "/api/number_pack/:id",
            get(api::handlers::a003_number_pack::get_by_id)
                .delete(api::handlers::a003_number_pack::delete),
        )
        // Payments (transactions)
        .route("/api/payment/list", get(api::handlers::a004_payment::list))
        .route(
            "/api/payment/testdata",
            post(api::handlers::a004_payment::insert_test_data),
        )
        .route(
            "/api/payment/:id",
            get(api::handlers::a004_payment::get_by_id)
                .delete(api::handlers::a004_payment::delete),
        )
        // Refunds
        .route("/api/refund/list", get(api::handlers::a005_refund::list))
        .route("/api/refund", post(api::handlers::a005_refund::upsert))
        .route(
            "/api/refund/:id",
            get(api::handlers::a005_refund::get_by_id).delete(api::handlers::a005_refund::delete),
        )
        .layer(middleware::from_fn(system::auth::middleware::require_auth));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .merge(business)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
