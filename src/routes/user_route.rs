use axum::{routing::get, Router};

use crate::controllers::user_controller::{list_users, moderate_user, update_user_role};

pub fn user_router() -> Router {
    Router::new().route("/", get(list_users).patch(update_user_role).post(moderate_user))
}
