use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/experts",
            get(handlers::experts::list_experts).post(handlers::experts::create_expert),
        )
        .route(
            "/experts/:id",
            patch(handlers::experts::update_expert).delete(handlers::experts::delete_expert),
        )
}
