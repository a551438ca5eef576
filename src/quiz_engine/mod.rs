//! Core quiz engine — wheel selection, question dealing and grading.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: sectors and roles, questions, spin and selection outcomes |
//! | `catalog`  | Read-only topic → questions catalog, JSON loading and validation |
//! | `config`   | Wheel configuration with reference defaults and TOML loading |
//! | `deck`     | One shuffle cycle over a topic's questions (Fisher-Yates, draw-next) |
//! | `dealer`   | Per-topic decks; no repeat until a deck is spent, then reshuffle |
//! | `selector` | Spin draw, sector mapping, respin / random wildcard resolution |
//! | `grader`   | Answer sheet (radio or toggle picks) and pure grading |
//! | `links`    | Link markers in explanation and hint text |
//! | `session`  | The spin → question → grade → idle state machine |
//! | `events`   | Events the session emits for the presentation layer |
//! | `view`     | JSON snapshot of a session for a client |
//! | `error`    | Error kinds |

pub mod catalog;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod events;
pub mod grader;
pub mod links;
pub mod models;
pub mod selector;
pub mod session;
pub mod view;

// Re-export the public API surface so callers can use
// `quiz_engine::Session` without reaching into sub-modules.
pub use catalog::Catalog;
pub use config::{GameConfig, WheelConfig};
pub use dealer::Dealer;
pub use error::{CatalogError, ConfigError, InvalidSelectionState, ResolveError};
pub use events::SessionEvent;
pub use grader::{evaluate, AnswerSheet, Grade, OptionMark, Outcome, SelectionMode, Verdict};
pub use links::{hint_url, parse_rich_text, Segment};
pub use models::{
    CorrectAnswer, Question, QuestionCard, QuestionId, Sector, SectorRole, SelectionOutcome, Spin,
    TopicOutcome,
};
pub use selector::{sector_index, Selector};
pub use session::{Phase, Round, Session};
pub use view::to_view_state;
