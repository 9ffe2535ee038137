use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/owners/:owner_id/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/api/notifications/:id/read",
            post(handlers::notification::mark_read),
        )
}
