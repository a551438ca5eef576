//! Error kinds for the engine.
//!
//! Nothing here is fatal to a running session: resolution failures send the
//! session to a "no question available" display, and contract violations are
//! rejected without touching state.

use std::path::PathBuf;

/// A selection cycle could not produce a question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The random wildcard found no normal topic with questions.
    #[error("no eligible topic has any questions")]
    NoEligibleTopic,

    /// A concretely resolved topic has zero questions.
    #[error("topic '{topic}' has no questions")]
    EmptyTopic { topic: String },
}

/// A caller action that is not allowed in the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectionState {
    #[error("no question is currently presented")]
    NoActiveQuestion,

    #[error("the answer has already been validated")]
    AlreadyValidated,

    #[error("validation requires at least one selection")]
    NoSelection,

    #[error("option {index} is out of range ({options} options)")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("discussion questions are not graded")]
    DiscussionOnly,

    #[error("the current cycle is not finished")]
    NotFinished,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question {id} in '{topic}': answer index {index} out of range ({options} options)")]
    AnswerOutOfRange {
        topic: String,
        id: u32,
        index: usize,
        options: usize,
    },

    #[error("question {id} in '{topic}': graded question has no correctAnswer")]
    MissingAnswer { topic: String, id: u32 },

    #[error("question {id} in '{topic}': empty correct-answer set")]
    EmptyAnswerSet { topic: String, id: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("the wheel needs at least one sector")]
    NoSectors,

    #[error("min_spins ({min}) is greater than max_spins ({max})")]
    SpinRange { min: u32, max: u32 },

    #[error("max_spins must be at least 1")]
    ZeroSpins,
}
