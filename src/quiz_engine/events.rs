//! Session events
//!
//! Emitted by the session for the presentation layer, in the order the
//! transitions happen. Drained with [`Session::drain_events`].
//!
//! [`Session::drain_events`]: crate::quiz_engine::session::Session::drain_events

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{grader::Outcome, models::QuestionCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Wheel committed to a spin; animate up to `rotation`.
    SpinStarted {
        rotation: u64,
        reveal_in_ms: u64,
    },

    /// Landed on a respin sector; the wheel is interactive again.
    Respin {
        sector_index: usize,
    },

    /// Landed on a topic (directly or through the random wildcard).
    TopicResolved {
        topic: String,
        via_random: bool,
    },

    /// Dealt question, without its answer or explanation.
    QuestionPresented {
        question: QuestionCard,
    },

    /// No question could be dealt for this cycle.
    QuestionUnavailable {
        reason: String,
    },

    SelectionChanged {
        selections: Vec<usize>,
    },

    Validated {
        outcome: Outcome,
    },

    /// Cycle finished; back to idle.
    SessionCompleted,
}
