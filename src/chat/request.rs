use serde::Serialize;

use super::msg::Msg;

/// Body of a completion call: `{"model", "messages", "max_tokens"}`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Msg>,
    pub max_tokens: u32,
}
