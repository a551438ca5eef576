//! # wheel_quiz
//!
//! Selection-and-dealing engine for a spin-the-wheel trivia game.
//!
//! A wheel of N equal sectors picks a topic, a per-topic dealer serves one
//! question without repeats, the player's picks are graded, and the session
//! returns to the wheel. Rendering, animation and the question corpus itself
//! belong to the caller; this crate owns the rules.
//!
//! ## How it works
//!
//! 1. Load a [`Catalog`] (`topic -> [question]`) and a [`GameConfig`]
//!    (sectors, spin range, reveal delay, optional RNG seed).
//! 2. Call [`Session::spin`] — the wheel draws a rotation, maps it to a
//!    sector, and resolves wildcards (`respin` spins again, `random` picks a
//!    uniformly drawn topic that has questions).
//! 3. Drive [`Session::poll`] from your timer; once the reveal delay has
//!    passed the topic is revealed and a question is dealt from that topic's
//!    deck. Every question in a topic is served once before any repeats.
//! 4. Forward picks to [`Session::select`], grade with [`Session::validate`],
//!    and go back to the wheel with [`Session::finish`].
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed: Some(u64)` to reproduce every spin,
//!   wildcard draw and shuffle.
//! - **Exact sector mapping**: the same rotation always lands on the same
//!   sector ([`sector_index`]).
//! - **Lenient multi-answer grading**: one correct pick is enough.
//! - **Events**: every transition is reported as a [`SessionEvent`] for the
//!   presentation layer; [`to_view_state`] gives a JSON snapshot.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use wheel_quiz::{Catalog, GameConfig, Phase, Session};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "ma conso": [
//!         { "id": 1, "question": "Combien ?", "options": ["1", "2"],
//!           "correctAnswer": 1, "explanation": "Deux." }
//!     ]
//! }"#).unwrap();
//!
//! let mut session = Session::new(catalog, &GameConfig::default().with_seed(42)).unwrap();
//! let t0 = Instant::now();
//! session.spin(t0);
//!
//! if session.poll(t0 + Duration::from_secs(2)) == Phase::QuestionPresented {
//!     session.select(1).unwrap();
//!     let outcome = session.validate().unwrap();
//!     println!("{:?}", outcome.verdict());
//! }
//! session.finish().ok();
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `wheel_quiz::Session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    evaluate, hint_url, parse_rich_text, sector_index, to_view_state, AnswerSheet, Catalog,
    CatalogError, ConfigError, CorrectAnswer, Dealer, GameConfig, Grade,
    InvalidSelectionState, OptionMark, Outcome, Phase, Question, QuestionCard, QuestionId, ResolveError,
    Round, Sector, SectorRole, Segment, SelectionMode, SelectionOutcome, Selector, Session,
    SessionEvent, Spin, TopicOutcome, Verdict, WheelConfig,
};
