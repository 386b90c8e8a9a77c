//! Chat-completion client and fix-suggestion pipeline.
//!
//! [`Client`] issues one POST per call to an OpenAI-compatible
//! `/chat/completions` endpoint; [`fix::parse_fix`] turns the
//! delimiter-marked model output into a structured suggestion; [`Session`]
//! ties both together behind an event surface a host editor can drive.

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod fix;
pub mod prompt;
pub mod session;
mod util;

pub use chat::{Msg, Role};
pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use fix::{parse_fix, FixResult};
pub use session::{Action, Event, Outcome, Session, Settings};
