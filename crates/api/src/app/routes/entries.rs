use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
};

use gratitude_core::Entry;

use crate::app::dto::{Acknowledgement, EntryTextRequest};
use crate::app::services::{EntryService, ServiceError};

pub async fn list_entries(
    Extension(service): Extension<Arc<EntryService>>,
) -> Result<Json<Vec<Entry>>, ServiceError> {
    service.list().await.map(Json)
}

pub async fn create_entry(
    Extension(service): Extension<Arc<EntryService>>,
    body: Result<Json<EntryTextRequest>, JsonRejection>,
) -> Result<Json<Entry>, ServiceError> {
    service.create(request_text(body)).await.map(Json)
}

pub async fn update_entry(
    Extension(service): Extension<Arc<EntryService>>,
    Path(id): Path<String>,
    body: Result<Json<EntryTextRequest>, JsonRejection>,
) -> Result<Json<Entry>, ServiceError> {
    service.update(&id, request_text(body)).await.map(Json)
}

pub async fn delete_entry(
    Extension(service): Extension<Arc<EntryService>>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, ServiceError> {
    service.delete(&id).await?;
    Ok(Json(Acknowledgement::ENTRY_DELETED))
}

/// A body that is missing, not JSON, or has a non-string `text` counts as
/// "text not provided".
fn request_text(body: Result<Json<EntryTextRequest>, JsonRejection>) -> Option<String> {
    match body {
        Ok(Json(req)) => req.text,
        Err(rejection) => {
            tracing::debug!("unusable entry body: {rejection}");
            None
        }
    }
}
