use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}
