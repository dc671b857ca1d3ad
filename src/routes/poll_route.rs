use axum::{routing::get, Router};

use crate::controllers::poll_controller::{cast_vote, create_new_poll, get_all_polls};

pub fn poll_router() -> Router {
    Router::new().route("/", get(get_all_polls).post(create_new_poll).put(cast_vote))
}
