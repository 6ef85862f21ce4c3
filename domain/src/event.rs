//! Run events emitted during orchestration.
//!
//! [`RunEvent`] is the unit of the streaming contract between the
//! orchestrator and whatever transport consumes it: progress logs,
//! the intermediate outline, the final document, a fatal error, and a
//! terminal marker. `End` is always the last event of a run, success
//! or failure, so consumers can always detect completion.

use serde::{Deserialize, Serialize};

/// An event in the orchestration stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum RunEvent {
    /// A progress log line.
    Log(String),
    /// The primary outline, emitted once on the traditional path.
    PartialResult(String),
    /// The final document. Emitted exactly once on success.
    FinalResult(String),
    /// A fatal error terminating the run. Always followed by `End`.
    Error(String),
    /// Terminal marker; always the last event of every run.
    End,
}

impl RunEvent {
    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunEvent::End)
    }

    /// Returns the carried text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            RunEvent::Log(s)
            | RunEvent::PartialResult(s)
            | RunEvent::FinalResult(s)
            | RunEvent::Error(s) => Some(s),
            RunEvent::End => None,
        }
    }
}
