use axum::{
    Router,
    routing::{get, put},
};

pub mod entries;
pub mod system;

/// Router for the journal entry endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/entries", get(entries::list_entries).post(entries::create_entry))
        .route(
            "/entries/:id",
            put(entries::update_entry).delete(entries::delete_entry),
        )
}
