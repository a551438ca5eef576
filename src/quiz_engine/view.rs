use serde_json::{json, Value};

use crate::quiz_engine::{
    grader::Outcome,
    links::parse_rich_text,
    models::{Question, QuestionCard},
    session::{Phase, Round, Session},
};

/// Question fields safe to show before grading (no answers, no explanation).
fn public_question(q: &Question) -> Value {
    json!(QuestionCard::from(q))
}

/// Everything revealed once the question is settled.
fn settled(q: &Question, outcome: &Outcome) -> Value {
    let (verdict, marks) = match outcome {
        Outcome::Graded(grade) => (json!(grade.verdict), json!(grade.marks)),
        Outcome::Discussion    => (Value::Null, json!([])),
    };
    json!({
        "verdict": verdict,
        "marks": marks,
        "explanation": parse_rich_text(&q.explanation),
        "source": q.source,
    })
}

fn round_view(round: &Round) -> Value {
    let selections: Vec<usize> = round.selections().collect();
    json!({
        "topic": round.topic,
        "via_random": round.via_random,
        "question": public_question(&round.question),
        "selections": selections,
        "can_validate": round.outcome().is_none() && round.has_selection(),
        "result": round.outcome().map(|o| settled(&round.question, o)),
    })
}

/// Map the session to a JSON snapshot ready for a presentation client.
pub fn to_view_state(session: &Session) -> Value {
    let phase = session.phase();
    let selector = session.selector();

    json!({
        "phase": phase,
        "wheel": {
            "rotation": selector.resting_rotation(),
            "sectors": selector.sectors(),
            "interactive": phase == Phase::Idle,
        },
        "round": session.round().map(round_view),
        "unavailable": session.unavailable_reason().map(|e| e.to_string()),
    })
}
