//! Link markers inside explanation and hint text.
//!
//! Explanations may embed `[label](http(s)://...)` markers and newlines; the
//! presentation layer turns the segments into clickable regions and line
//! breaks. Hints carry at most one target, either as a marker or a bare URL.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)]+)\)").expect("valid link pattern")
});

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").expect("valid url pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Link { label: String, url: String },
    LineBreak,
}

/// Split `text` into plain text, link and line-break segments.
pub fn parse_rich_text(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (line_no, line) in text.split('\n').enumerate() {
        if line_no > 0 {
            segments.push(Segment::LineBreak);
        }

        let mut last = 0;
        for caps in MARKDOWN_LINK.captures_iter(line) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text { text: line[last..whole.start()].to_string() });
            }
            segments.push(Segment::Link {
                label: label.as_str().to_string(),
                url: url.as_str().to_string(),
            });
            last = whole.end();
        }
        if last < line.len() {
            segments.push(Segment::Text { text: line[last..].to_string() });
        }
    }

    segments
}

/// First link target in a hint: a markdown marker wins over a bare URL.
pub fn hint_url(hint: &str) -> Option<&str> {
    if let Some(url) = MARKDOWN_LINK.captures(hint).and_then(|c| c.get(2)) {
        return Some(url.as_str());
    }
    BARE_URL.find(hint).map(|m| m.as_str())
}
