use axum::{Extension, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::cors::init_cors;
use crate::routes::{auth_route::auth_router, poll_route::poll_router, user_route::user_router};

pub fn create_app(pool: SqlitePool) -> Router {
    Router::new()
        .nest("/api/auth", auth_router())
        .nest("/api/polls", poll_router())
        .nest("/api/users", user_router())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(pool))
        .layer(init_cors())
}
