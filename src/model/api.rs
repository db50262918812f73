use serde::{Deserialize, Serialize};

/// Error body returned by every failing API endpoint.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Minimal success body for endpoints with nothing else to return
/// (deletes, status updates, webhook acknowledgements).
#[derive(Serialize, Deserialize)]
pub struct OkDto {
    pub ok: bool,
}

impl OkDto {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkDto {
    fn default() -> Self {
        Self::new()
    }
}
