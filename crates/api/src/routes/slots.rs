use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/slots",
            get(handlers::slots::list_slots).post(handlers::slots::create_slot),
        )
        .route("/slots/batch", post(handlers::slots::create_slot_batch))
        .route(
            "/slots/:id",
            patch(handlers::slots::update_slot).delete(handlers::slots::delete_slot),
        )
}
