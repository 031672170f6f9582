use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/admin/login", post(handlers::session::admin_login))
        .route("/admin/logout", post(handlers::session::admin_logout))
        .route("/expert/login", post(handlers::session::expert_login))
        .route("/expert/logout", post(handlers::session::expert_logout))
}
