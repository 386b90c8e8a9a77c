//! Wire types for the chat-completion endpoint.

pub mod msg;
pub mod request;
pub mod response;

pub use msg::{Msg, Role};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice, ErrorBody, ResponseMsg};
