//! Host-facing surface: editor events in, actions out, plus the facade that
//! executes them.
//!
//! The host delivers [`Event`]s as plain data; [`plan`] is the pure mapping
//! to an [`Action`] and the only place the evaluate-on-save setting is
//! consulted or flipped. No ambient state, no host callbacks.

use tokio::sync::Mutex;

use crate::client::Client;
use crate::config::{Config, ASK_MAX_TOKENS, FIX_MAX_TOKENS};
use crate::error::Error;
use crate::fix::{parse_fix, FixResult};
use crate::prompt;

/// Per-session knobs, passed explicitly rather than read from globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub evaluate_on_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { evaluate_on_save: true }
    }
}

/// Editor-side happenings, as data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    DocumentSaved { code: String },
    FixRequested { code: String },
    QuestionAsked { question: String },
    ApplyFixRequested,
    ToggleAutoEvaluate,
}

/// What the host should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    RunFix { code: String },
    RunAsk { question: String },
    ApplyFix,
    Nothing,
}

/// Map an event to an action. Pure apart from the settings value handed in:
/// a save runs the fix pipeline only while `evaluate_on_save` is set, and
/// the toggle event flips it.
pub fn plan(event: Event, settings: &mut Settings) -> Action {
    match event {
        Event::DocumentSaved { code } if settings.evaluate_on_save => Action::RunFix { code },
        Event::DocumentSaved { .. } => Action::Nothing,
        Event::FixRequested { code } => Action::RunFix { code },
        Event::QuestionAsked { question } => Action::RunAsk { question },
        Event::ApplyFixRequested => Action::ApplyFix,
        Event::ToggleAutoEvaluate => {
            settings.evaluate_on_save = !settings.evaluate_on_save;
            Action::Nothing
        }
    }
}

/// Result of handling one event.
#[derive(Clone, Debug)]
pub enum Outcome {
    Fix(FixResult),
    Answer(String),
    ApplyFix,
    None,
}

pub struct Session {
    config: Config,
    client: Client,
    settings: Settings,
    // Single-slot in-flight guard: at most one fix request per session.
    in_flight: Mutex<()>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::new(&config)?;
        Ok(Self {
            config,
            client,
            settings: Settings::default(),
            in_flight: Mutex::new(()),
        })
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_api_key(&mut self, value: &str) -> Result<(), Error> {
        self.config.set_api_key(value)
    }

    pub fn reset_api_key(&mut self) {
        self.config.reset_api_key();
    }

    /// Free-form question; returns the model's answer text.
    pub async fn ask(&self, question: &str) -> Result<String, Error> {
        let key = self.config.api_key()?;
        self.client
            .complete(key, &prompt::ask_messages(question), ASK_MAX_TOKENS)
            .await
    }

    /// Request a fix for `code` and parse the structured suggestion. A call
    /// issued while another is outstanding fails with `Busy`.
    pub async fn suggest_fix(&self, code: &str) -> Result<FixResult, Error> {
        let _guard = self.in_flight.try_lock().map_err(|_| Error::Busy)?;
        let key = self.config.api_key()?;
        let raw = self
            .client
            .complete(key, &prompt::fix_messages(code), FIX_MAX_TOKENS)
            .await?;
        parse_fix(code, &raw)
    }

    /// Drive one host event through [`plan`] and execute the result.
    pub async fn handle_event(&mut self, event: Event) -> Result<Outcome, Error> {
        match plan(event, &mut self.settings) {
            Action::RunFix { code } => Ok(Outcome::Fix(self.suggest_fix(&code).await?)),
            Action::RunAsk { question } => Ok(Outcome::Answer(self.ask(&question).await?)),
            Action::ApplyFix => Ok(Outcome::ApplyFix),
            Action::Nothing => Ok(Outcome::None),
        }
    }
}
