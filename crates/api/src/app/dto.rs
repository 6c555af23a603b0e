use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /entries` and `PUT /entries/:id`.
///
/// `text` is optional at the wire level; presence rules live in the service.
#[derive(Debug, Default, Deserialize)]
pub struct EntryTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Body of a successful `DELETE /entries/:id`.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
}

impl Acknowledgement {
    pub const ENTRY_DELETED: Self = Self {
        message: "Entry deleted",
    };
}
