use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::links;

// ---------------------------------------------------------------------------
// Wheel sectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorRole {
    /// Lands directly on the sector's own topic.
    #[default]
    Normal,
    /// Spin again; no topic change.
    Respin,
    /// Substitute a uniformly drawn normal topic.
    Random,
}

impl SectorRole {
    pub fn is_wildcard(self) -> bool {
        !matches!(self, SectorRole::Normal)
    }
}

impl fmt::Display for SectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorRole::Normal => write!(f, "normal"),
            SectorRole::Respin => write!(f, "respin"),
            SectorRole::Random => write!(f, "random"),
        }
    }
}

/// One of the N equal angular divisions of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub topic: String,
    #[serde(default)]
    pub role: SectorRole,
}

impl Sector {
    pub fn normal(topic: impl Into<String>) -> Self {
        Sector { topic: topic.into(), role: SectorRole::Normal }
    }

    pub fn respin(topic: impl Into<String>) -> Self {
        Sector { topic: topic.into(), role: SectorRole::Respin }
    }

    pub fn random(topic: impl Into<String>) -> Self {
        Sector { topic: topic.into(), role: SectorRole::Random }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

pub type QuestionId = u32;

/// Either one correct option index or a set of them.
///
/// Deserialises from `2` or `[1, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Single(usize),
    Multiple(Vec<usize>),
}

impl CorrectAnswer {
    pub fn indices(&self) -> &[usize] {
        match self {
            CorrectAnswer::Single(i) => std::slice::from_ref(i),
            CorrectAnswer::Multiple(v) => v,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, CorrectAnswer::Multiple(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    /// Empty for discussion-only questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Required for graded questions; discussion questions may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<CorrectAnswer>,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Question {
    /// Discussion questions have no options and are never graded.
    pub fn is_discussion(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_multi_answer(&self) -> bool {
        !self.is_discussion() && self.correct_answer.as_ref().is_some_and(CorrectAnswer::is_multiple)
    }

    pub fn is_correct_option(&self, index: usize) -> bool {
        self.correct_answer.as_ref().is_some_and(|a| a.contains(index))
    }

    /// Link target to attach to the hint, if the hint carries one.
    pub fn hint_url(&self) -> Option<&str> {
        self.hint.as_deref().and_then(links::hint_url)
    }
}

/// What a player may see before grading: no answer, no explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCard {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    pub multi_answer: bool,
    pub discussion: bool,
    pub has_hint: bool,
    pub hint_url: Option<String>,
}

impl From<&Question> for QuestionCard {
    fn from(q: &Question) -> Self {
        QuestionCard {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
            multi_answer: q.is_multi_answer(),
            discussion: q.is_discussion(),
            has_hint: q.hint.is_some(),
            hint_url: q.hint_url().map(str::to_owned),
        }
    }
}

// ---------------------------------------------------------------------------
// Spin / selection outcomes
// ---------------------------------------------------------------------------

/// The random draw behind one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spin {
    /// Full turns, drawn from `[min_spins, max_spins]`.
    pub turns: u32,
    /// Extra degrees, drawn from `[0, 360)`.
    pub extra_degrees: u32,
    /// Accumulated resting rotation after this spin.
    pub rotation: u64,
}

impl Spin {
    pub fn normalized(&self) -> u32 {
        (self.rotation % 360) as u32
    }
}

/// What the landed sector means for the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "topic", rename_all = "snake_case")]
pub enum TopicOutcome {
    /// Landed on a respin sector: back to idle, nothing dealt.
    Respin,
    /// Landed on a normal sector.
    Topic(String),
    /// Landed on the random sector; carries the concrete topic drawn.
    Random(String),
}

impl TopicOutcome {
    /// Topic the dealer should be called with.
    pub fn topic(&self) -> Option<&str> {
        match self {
            TopicOutcome::Respin => None,
            TopicOutcome::Topic(t) | TopicOutcome::Random(t) => Some(t),
        }
    }

    pub fn via_random(&self) -> bool {
        matches!(self, TopicOutcome::Random(_))
    }
}

/// Immutable record of one selection event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub spin: Spin,
    pub sector_index: usize,
    pub role: SectorRole,
    pub outcome: TopicOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_accepts_number_or_array() {
        let single: CorrectAnswer = serde_json::from_str("2").unwrap();
        assert_eq!(single, CorrectAnswer::Single(2));
        assert_eq!(single.indices(), &[2]);
        assert!(!single.is_multiple());

        let multi: CorrectAnswer = serde_json::from_str("[1, 3]").unwrap();
        assert_eq!(multi, CorrectAnswer::Multiple(vec![1, 3]));
        assert!(multi.contains(3));
        assert!(!multi.contains(2));
    }

    #[test]
    fn question_reads_camel_case_fields() {
        let q: Question = serde_json::from_str(
            r#"{
                "id": 7,
                "question": "Which?",
                "options": ["a", "b", "c"],
                "correctAnswer": [0, 2],
                "explanation": "Because.",
                "hint": "See https://example.org/page"
            }"#,
        )
        .unwrap();
        assert!(q.is_multi_answer());
        assert!(q.is_correct_option(2));
        assert_eq!(q.source, None);
        assert_eq!(q.hint_url(), Some("https://example.org/page"));
    }

    #[test]
    fn discussion_question_is_never_multi_answer() {
        let q: Question = serde_json::from_str(
            r#"{ "id": 1, "question": "Talk?", "options": [], "correctAnswer": [0, 1], "explanation": "…" }"#,
        )
        .unwrap();
        assert!(q.is_discussion());
        assert!(!q.is_multi_answer());
    }

    #[test]
    fn question_card_leaves_out_answer_and_explanation() {
        let q: Question = serde_json::from_str(
            r#"{ "id": 3, "question": "Which?", "options": ["a", "b"], "correctAnswer": 1,
                 "explanation": "Secret.", "hint": "[guide](https://example.org/g)" }"#,
        )
        .unwrap();
        let card = serde_json::to_value(QuestionCard::from(&q)).unwrap();
        assert!(card.get("correctAnswer").is_none());
        assert!(card.get("explanation").is_none());
        assert_eq!(card["hint_url"], "https://example.org/g");
        assert_eq!(card["options"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn sector_role_defaults_to_normal() {
        let s: Sector = serde_json::from_str(r#"{ "topic": "bon plan" }"#).unwrap();
        assert_eq!(s, Sector::normal("bon plan"));
        assert!(!s.role.is_wildcard());
        assert!(SectorRole::Random.is_wildcard());
    }

    #[test]
    fn topic_outcome_exposes_dealer_topic() {
        assert_eq!(TopicOutcome::Respin.topic(), None);
        assert_eq!(TopicOutcome::Topic("a".into()).topic(), Some("a"));
        let r = TopicOutcome::Random("b".into());
        assert_eq!(r.topic(), Some("b"));
        assert!(r.via_random());
    }
}
