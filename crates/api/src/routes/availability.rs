use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/owners/:owner_id/slots",
            get(handlers::availability::list_slots),
        )
        .route(
            "/api/owners/:owner_id/slots",
            post(handlers::availability::create_slot),
        )
        .route(
            "/api/owners/:owner_id/slots/:id",
            delete(handlers::availability::delete_slot),
        )
        .route(
            "/api/owners/:owner_id/slots/:id/book",
            post(handlers::availability::book_slot),
        )
}
