//! Plays a handful of wheel cycles against the sample catalog.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=wheel_quiz=debug` to watch deck shuffles and draws)
//!
//! Each cycle shows:
//!
//! - the spin and where the wheel stopped (respin, direct topic or the random
//!   wildcard with the topic it drew),
//! - the dealt question with its options and hint link,
//! - the player's pick (always the first option here), the verdict, the
//!   per-option marks and the explanation split into text and links.

use std::path::Path;
use std::thread;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use wheel_quiz::{
    to_view_state, Catalog, GameConfig, OptionMark, Outcome, Phase, Segment, Session,
    SessionEvent,
};

fn print_question(session: &Session) {
    let Some(round) = session.round() else { return };
    let q = &round.question;
    let badge = if round.via_random { " (mystère)" } else { "" };
    println!("  [{}{}]  Q{}: {}", round.topic, badge, q.id, q.question);
    if let Some(url) = q.hint_url() {
        println!("  Indice: {url}");
    }
    if q.is_multi_answer() {
        println!("  Plusieurs réponses sont possibles. Trouvez-en au moins une !");
    }
    for (i, option) in q.options.iter().enumerate() {
        println!("    {i}. {option}");
    }
}

fn print_result(session: &Session) {
    let Some(round) = session.round() else { return };
    match round.outcome() {
        Some(Outcome::Graded(grade)) => {
            println!("  => {}", grade.verdict);
            for (i, mark) in grade.marks.iter().enumerate() {
                let symbol = match mark {
                    OptionMark::CorrectPicked | OptionMark::CorrectMissed => "✓",
                    OptionMark::WrongPicked => "✗",
                    OptionMark::Untouched => " ",
                };
                println!("    [{symbol}] {}", round.question.options[i]);
            }
        }
        Some(Outcome::Discussion) => println!("  => Piste de réflexion"),
        None => {}
    }
    for segment in wheel_quiz::parse_rich_text(&round.question.explanation) {
        match segment {
            Segment::Text { text } => print!("{text}"),
            Segment::Link { label, url } => print!("{label} <{url}>"),
            Segment::LineBreak => print!("\n  "),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let config = GameConfig::load(dir.join("wheel.toml"))?;
    let catalog = Catalog::load(dir.join("catalog.json"))?;
    let mut session = Session::new(catalog, &config)?;

    for cycle in 1..=8 {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Cycle {cycle}");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        session.spin(Instant::now());
        while session.poll(Instant::now()) == Phase::Spinning {
            thread::sleep(std::time::Duration::from_millis(50));
        }

        match session.phase() {
            Phase::Idle => println!("  Et ça repart ! The wheel is free again."),
            Phase::Unavailable => {
                let reason = session.unavailable_reason().map(|e| e.to_string()).unwrap_or_default();
                println!("  Aucune question disponible: {reason}");
            }
            Phase::QuestionPresented => {
                print_question(&session);
                session.select(0)?;
                session.validate()?;
                print_result(&session);
            }
            Phase::Validated => {
                print_question(&session);
                print_result(&session);
            }
            Phase::Spinning => unreachable!("poll loop exits once revealed"),
        }

        if session.phase() != Phase::Idle {
            println!();
            println!("  view: {}", to_view_state(&session));
            session.finish()?;
        }

        for event in session.drain_events() {
            if let SessionEvent::SpinStarted { rotation, .. } = event {
                println!("  (wheel came to rest at {rotation}°, {}° normalized)", rotation % 360);
            }
        }
        println!();
    }

    Ok(())
}
