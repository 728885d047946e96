use serde::Deserialize;

/// Body of an inbound `/api/chat` request.
///
/// `message` is optional at the parse level so that an absent field or an
/// explicit `null` both land in the same "message is required" rejection
/// instead of a deserialization failure.
#[derive(Deserialize)]
pub struct ChatRequest {
    message: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
