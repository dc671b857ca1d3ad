use quorum_api::{app::create_app, config::db, config::logger::initialize_logger};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize logging
    initialize_logger();

    info!("🚀 Server starting initialization...");

    // Initialize Database
    let pool = db::init_database()
        .await
        .expect("Failed to initialize database");

    let app = create_app(pool);

    let port = env::var("PORT").unwrap_or_else(|_| "9000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("🚀 Server started successfully at port {}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap()
}
