use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/slots/:id/book", post(handlers::bookings::book_slot))
        .route("/bookings", get(handlers::bookings::list_bookings))
        .route("/bookings/:id", delete(handlers::bookings::cancel_booking))
        .route(
            "/admin/bookings/:id",
            patch(handlers::bookings::admin_update_booking)
                .delete(handlers::bookings::admin_delete_booking),
        )
        .route(
            "/experts/:id/bookings",
            get(handlers::bookings::expert_bookings),
        )
}
