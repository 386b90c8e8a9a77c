use serde::Deserialize;

/// Completion response envelope. Only `choices[0]` is ever consulted; an
/// empty array is a valid empty result, not an error.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMsg,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMsg {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error payload the endpoint returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}
