//! Read-only catalog of questions keyed by topic name.
//!
//! The catalog is supplied once at startup and never mutated. Topics are kept
//! in a `BTreeMap` so iteration order (and therefore any seeded random draw
//! over topics) is stable.

use std::collections::BTreeMap;
use std::path::Path;

use crate::quiz_engine::{
    error::CatalogError,
    models::{CorrectAnswer, Question},
};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    topics: BTreeMap<String, Vec<Question>>,
}

impl Catalog {
    /// Build a catalog, checking every graded question's answer indices.
    ///
    /// Discussion questions may omit `correctAnswer`; graded ones may not.
    pub fn new(topics: BTreeMap<String, Vec<Question>>) -> Result<Self, CatalogError> {
        for (topic, questions) in &topics {
            for q in questions.iter().filter(|q| !q.is_discussion()) {
                validate_answers(topic, q)?;
            }
        }
        Ok(Catalog { topics })
    }

    /// Parse the `{ "topic": [question, ...] }` JSON format.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let topics: BTreeMap<String, Vec<Question>> = serde_json::from_str(json)?;
        Self::new(topics)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} topics, {} questions",
            path.display(),
            catalog.topic_count(),
            catalog.question_count()
        );
        Ok(catalog)
    }

    /// Questions for `topic`; empty if the topic is unknown.
    pub fn questions(&self, topic: &str) -> &[Question] {
        self.topics.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Topics with at least one question, in sorted order.
    pub fn non_empty_topics(&self) -> impl Iterator<Item = &str> {
        self.topics
            .iter()
            .filter(|(_, qs)| !qs.is_empty())
            .map(|(t, _)| t.as_str())
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn question_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }
}

fn validate_answers(topic: &str, q: &Question) -> Result<(), CatalogError> {
    let Some(answer) = &q.correct_answer else {
        return Err(CatalogError::MissingAnswer { topic: topic.to_string(), id: q.id });
    };
    if let CorrectAnswer::Multiple(indices) = answer {
        if indices.is_empty() {
            return Err(CatalogError::EmptyAnswerSet { topic: topic.to_string(), id: q.id });
        }
    }
    match answer.indices().iter().find(|&&i| i >= q.options.len()) {
        Some(&index) => Err(CatalogError::AnswerOutOfRange {
            topic: topic.to_string(),
            id: q.id,
            index,
            options: q.options.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bon plan": [
            { "id": 1, "question": "Q1", "options": ["a", "b", "c"], "correctAnswer": 2, "explanation": "E1" },
            { "id": 2, "question": "Q2", "options": ["a", "b"], "correctAnswer": [0, 1], "explanation": "E2" }
        ],
        "on en parle !?": [
            { "id": 66, "question": "Talk", "options": [], "correctAnswer": 0, "explanation": "E66" },
            { "id": 67, "question": "Talk more", "options": [], "explanation": "E67" }
        ],
        "et ça repart !": []
    }"#;

    #[test]
    fn parses_topics_and_counts_questions() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.topic_count(), 3);
        assert_eq!(catalog.question_count(), 4);
        assert_eq!(catalog.questions("bon plan").len(), 2);
        assert!(catalog.questions("unknown").is_empty());
        assert!(catalog.contains_topic("et ça repart !"));
    }

    #[test]
    fn non_empty_topics_skip_empty_lists() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let topics: Vec<&str> = catalog.non_empty_topics().collect();
        assert_eq!(topics, vec!["bon plan", "on en parle !?"]);
    }

    #[test]
    fn discussion_question_answer_is_not_checked() {
        // id 66 has correctAnswer 0 with no options, id 67 has none at all.
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.questions("on en parle !?")[1].correct_answer, None);
    }

    #[test]
    fn rejects_graded_question_without_answer() {
        let json = r#"{ "t": [ { "id": 4, "question": "Q", "options": ["a", "b"], "explanation": "" } ] }"#;
        match Catalog::from_json_str(json) {
            Err(CatalogError::MissingAnswer { topic, id }) => assert_eq!((topic.as_str(), id), ("t", 4)),
            other => panic!("expected MissingAnswer, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let json = r#"{ "t": [ { "id": 9, "question": "Q", "options": ["a", "b"], "correctAnswer": [1, 2], "explanation": "" } ] }"#;
        match Catalog::from_json_str(json) {
            Err(CatalogError::AnswerOutOfRange { id, index, options, .. }) => {
                assert_eq!((id, index, options), (9, 2, 2));
            }
            other => panic!("expected AnswerOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_multi_answer_set() {
        let json = r#"{ "t": [ { "id": 3, "question": "Q", "options": ["a"], "correctAnswer": [], "explanation": "" } ] }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::EmptyAnswerSet { id: 3, .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Catalog::from_json_str("{ nope"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = std::env::temp_dir().join(format!("wheel_quiz_catalog_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Catalog::load(&path).unwrap().question_count(), 4);

        let missing = dir.join("missing.json");
        match Catalog::load(&missing) {
            Err(CatalogError::Io { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
