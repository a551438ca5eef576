//! Session state machine.
//!
//! ```text
//! Idle --spin--> Spinning --poll (after reveal delay)--> TopicResolved
//!   TopicResolved --respin--> Idle
//!   TopicResolved --dealt--> QuestionPresented --validate--> Validated --finish--> Idle
//!   TopicResolved --dealt (discussion)--> Validated
//!   TopicResolved --nothing to deal--> Unavailable --finish--> Idle
//! ```
//!
//! The spin outcome is committed when the spin starts and kept hidden until
//! [`Session::poll`] is called at or after the reveal deadline. There is no
//! blocking wait: the caller's timer drives `poll`. `TopicResolved` is passed
//! through inside `poll` and is never observed as a resting phase.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    catalog::Catalog,
    config::GameConfig,
    dealer::Dealer,
    error::{ConfigError, InvalidSelectionState, ResolveError},
    events::SessionEvent,
    grader::{AnswerSheet, Outcome},
    models::{Question, QuestionCard, SelectionOutcome, TopicOutcome},
    selector::Selector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Spinning,
    QuestionPresented,
    Validated,
    /// Terminal display for a cycle that produced no question.
    Unavailable,
}

/// The question dealt for the current cycle.
#[derive(Debug, Clone)]
pub struct Round {
    pub topic: String,
    pub via_random: bool,
    pub question: Question,
    sheet: AnswerSheet,
    outcome: Option<Outcome>,
}

impl Round {
    pub fn selections(&self) -> impl Iterator<Item = usize> + '_ {
        self.sheet.selections().iter().copied()
    }

    pub fn has_selection(&self) -> bool {
        !self.sheet.is_empty()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Spinning {
        reveal_at: Instant,
        pending: Result<SelectionOutcome, ResolveError>,
    },
    Question(Round),
    Unavailable(ResolveError),
}

pub struct Session {
    catalog: Catalog,
    selector: Selector,
    dealer: Dealer,
    rng: StdRng,
    reveal_delay: Duration,
    state: State,
    last_selection: Option<SelectionOutcome>,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(catalog: Catalog, config: &GameConfig) -> Result<Self, ConfigError> {
        let selector = Selector::new(&config.wheel)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(Session {
            catalog,
            selector,
            dealer: Dealer::new(),
            rng,
            reveal_delay: config.wheel.reveal_delay(),
            state: State::Idle,
            last_selection: None,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Idle                 => Phase::Idle,
            State::Spinning { .. }      => Phase::Spinning,
            State::Question(round)      => match round.outcome {
                None    => Phase::QuestionPresented,
                Some(_) => Phase::Validated,
            },
            State::Unavailable(_)       => Phase::Unavailable,
        }
    }

    pub fn round(&self) -> Option<&Round> {
        match &self.state {
            State::Question(round) => Some(round),
            _ => None,
        }
    }

    /// Why the current cycle has no question, in the `Unavailable` phase.
    pub fn unavailable_reason(&self) -> Option<&ResolveError> {
        match &self.state {
            State::Unavailable(err) => Some(err),
            _ => None,
        }
    }

    /// When the pending spin will be revealed.
    pub fn reveal_at(&self) -> Option<Instant> {
        match &self.state {
            State::Spinning { reveal_at, .. } => Some(*reveal_at),
            _ => None,
        }
    }

    /// The most recent revealed selection.
    pub fn last_selection(&self) -> Option<&SelectionOutcome> {
        self.last_selection.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Start a spin at `now`. Ignored (returns `false`) unless idle.
    pub fn spin(&mut self, now: Instant) -> bool {
        if !matches!(self.state, State::Idle) {
            tracing::debug!("Ignoring spin request in phase {:?}", self.phase());
            return false;
        }

        let pending = self.selector.spin(&self.catalog, &mut self.rng);
        let rotation = self.selector.resting_rotation();
        tracing::info!("Spin committed, resting rotation {}", rotation);

        self.events.push(SessionEvent::SpinStarted {
            rotation,
            reveal_in_ms: self.reveal_delay.as_millis() as u64,
        });
        self.state = State::Spinning { reveal_at: now + self.reveal_delay, pending };
        true
    }

    /// Advance time. Reveals the pending spin once `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> Phase {
        let due = matches!(self.state, State::Spinning { reveal_at, .. } if now >= reveal_at);
        if due {
            if let State::Spinning { pending, .. } = std::mem::replace(&mut self.state, State::Idle) {
                self.state = self.reveal(pending);
            }
        }
        self.phase()
    }

    fn reveal(&mut self, pending: Result<SelectionOutcome, ResolveError>) -> State {
        let selection = match pending {
            Ok(selection) => selection,
            Err(err) => return self.unavailable(err),
        };
        let sector_index = selection.sector_index;
        let outcome = selection.outcome.clone();
        self.last_selection = Some(selection);

        let (topic, via_random) = match outcome {
            TopicOutcome::Respin => {
                tracing::info!("Landed on respin sector {}", sector_index);
                self.events.push(SessionEvent::Respin { sector_index });
                return State::Idle;
            }
            TopicOutcome::Topic(topic)  => (topic, false),
            TopicOutcome::Random(topic) => (topic, true),
        };

        tracing::info!("Topic resolved: '{}' (random: {})", topic, via_random);
        self.events.push(SessionEvent::TopicResolved { topic: topic.clone(), via_random });

        let Some(question) = self.dealer.next(&self.catalog, &topic, &mut self.rng).cloned() else {
            return self.unavailable(ResolveError::EmptyTopic { topic });
        };

        self.events.push(SessionEvent::QuestionPresented {
            question: QuestionCard::from(&question),
        });
        let outcome = if question.is_discussion() {
            self.events.push(SessionEvent::Validated { outcome: Outcome::Discussion });
            Some(Outcome::Discussion)
        } else {
            None
        };

        State::Question(Round {
            topic,
            via_random,
            sheet: AnswerSheet::for_question(&question),
            question,
            outcome,
        })
    }

    fn unavailable(&mut self, err: ResolveError) -> State {
        tracing::warn!("No question available: {}", err);
        self.events.push(SessionEvent::QuestionUnavailable { reason: err.to_string() });
        State::Unavailable(err)
    }

    /// Pick option `index` on the presented question.
    pub fn select(&mut self, index: usize) -> Result<(), InvalidSelectionState> {
        let round = match &mut self.state {
            State::Question(round) if round.outcome.is_none() => round,
            State::Question(_) => return Err(InvalidSelectionState::AlreadyValidated),
            _ => return Err(InvalidSelectionState::NoActiveQuestion),
        };
        round.sheet.select(index)?;

        let selections: Vec<usize> = round.selections().collect();
        tracing::debug!("Selection changed: {:?}", selections);
        self.events.push(SessionEvent::SelectionChanged { selections });
        Ok(())
    }

    /// Grade the presented question. Needs at least one selection.
    pub fn validate(&mut self) -> Result<&Outcome, InvalidSelectionState> {
        let round = match &mut self.state {
            State::Question(round) if round.outcome.is_none() => round,
            State::Question(_) => return Err(InvalidSelectionState::AlreadyValidated),
            _ => return Err(InvalidSelectionState::NoActiveQuestion),
        };
        let grade = round.sheet.submit(&round.question)?;
        tracing::info!("Question {} graded {}", round.question.id, grade.verdict);

        let outcome = Outcome::Graded(grade);
        self.events.push(SessionEvent::Validated { outcome: outcome.clone() });
        Ok(&*round.outcome.insert(outcome))
    }

    /// Leave the validated or unavailable display and return to idle.
    pub fn finish(&mut self) -> Result<(), InvalidSelectionState> {
        match self.phase() {
            Phase::Validated | Phase::Unavailable => {
                self.state = State::Idle;
                tracing::info!("Cycle completed");
                self.events.push(SessionEvent::SessionCompleted);
                Ok(())
            }
            _ => Err(InvalidSelectionState::NotFinished),
        }
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
