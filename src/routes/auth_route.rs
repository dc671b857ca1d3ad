use axum::{routing::post, Router};

use crate::controllers::auth_controller::identify;

pub fn auth_router() -> Router {
    Router::new().route("/", post(identify))
}
