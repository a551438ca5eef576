//! Answer collection and grading.
//!
//! Single-answer questions behave like radio buttons (a new pick replaces
//! the old one); multi-answer questions toggle picks on and off. Grading is
//! pure: the same question and selection always give the same [`Grade`].
//!
//! Multi-answer grading is lenient. One correct pick among the selections is
//! enough for [`Verdict::Correct`], even if wrong options were picked too.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::InvalidSelectionState,
    models::{CorrectAnswer, Question},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Correct   => write!(f, "correct"),
            Verdict::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Per-option highlight after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    CorrectPicked,
    /// Correct option the player did not pick; still revealed.
    CorrectMissed,
    WrongPicked,
    Untouched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub verdict: Verdict,
    /// One entry per option, in option order.
    pub marks: Vec<OptionMark>,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// Result shown to the player once a question is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Graded(Grade),
    /// Discussion question: no grading, show the reflection prompt.
    Discussion,
}

impl Outcome {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Outcome::Graded(grade) => Some(grade.verdict),
            Outcome::Discussion => None,
        }
    }
}

/// Grade `selections` against `question`.
///
/// Discussion questions and empty selections are rejected; callers are
/// expected to block both before asking for a grade.
pub fn evaluate(
    question: &Question,
    selections: &BTreeSet<usize>,
) -> Result<Grade, InvalidSelectionState> {
    if question.is_discussion() {
        return Err(InvalidSelectionState::DiscussionOnly);
    }
    if selections.is_empty() {
        return Err(InvalidSelectionState::NoSelection);
    }

    let verdict = match &question.correct_answer {
        Some(CorrectAnswer::Single(correct)) => {
            if selections.len() == 1 && selections.contains(correct) {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        }
        Some(CorrectAnswer::Multiple(correct)) => {
            if correct.iter().any(|i| selections.contains(i)) {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        }
        // Rejected at catalog load; a hand-built question has nothing to match.
        None => Verdict::Incorrect,
    };

    let marks = (0..question.options.len())
        .map(|i| match (question.is_correct_option(i), selections.contains(&i)) {
            (true, true)   => OptionMark::CorrectPicked,
            (true, false)  => OptionMark::CorrectMissed,
            (false, true)  => OptionMark::WrongPicked,
            (false, false) => OptionMark::Untouched,
        })
        .collect();

    Ok(Grade { verdict, marks })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Radio-button semantics.
    Single,
    /// Toggle semantics.
    Multiple,
}

/// The player's picks for one question; frozen once graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    mode: SelectionMode,
    option_count: usize,
    selected: BTreeSet<usize>,
    frozen: bool,
}

impl AnswerSheet {
    pub fn for_question(question: &Question) -> Self {
        let mode = if question.is_multi_answer() {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        };
        AnswerSheet {
            mode,
            option_count: question.options.len(),
            selected: BTreeSet::new(),
            frozen: false,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn selections(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Pick option `index`: replaces the pick in single mode, toggles it in
    /// multiple mode.
    pub fn select(&mut self, index: usize) -> Result<(), InvalidSelectionState> {
        if self.frozen {
            return Err(InvalidSelectionState::AlreadyValidated);
        }
        if index >= self.option_count {
            return Err(InvalidSelectionState::OptionOutOfRange {
                index,
                options: self.option_count,
            });
        }
        match self.mode {
            SelectionMode::Single => {
                self.selected.clear();
                self.selected.insert(index);
            }
            SelectionMode::Multiple => {
                if !self.selected.remove(&index) {
                    self.selected.insert(index);
                }
            }
        }
        Ok(())
    }

    /// Freeze the sheet and grade it. A failed grade leaves it editable.
    pub fn submit(&mut self, question: &Question) -> Result<Grade, InvalidSelectionState> {
        if self.frozen {
            return Err(InvalidSelectionState::AlreadyValidated);
        }
        let grade = evaluate(question, &self.selected)?;
        self.frozen = true;
        Ok(grade)
    }
}
