use crate::models::QuestionKind;

/// Line that opens and closes a question section.
pub const SECTION_TOGGLE: &str = "???";

const VIDEO_PREFIX: &str = "video:";
const NOTEBOOK_PREFIX: &str = "jupyter:";
/// Characters dropped before a video URL (`"video: "`).
const VIDEO_URL_OFFSET: usize = 7;
/// Characters dropped before a notebook URL (`"jupyter: "`).
const NOTEBOOK_URL_OFFSET: usize = 9;
/// Answer text starts after the `(x) ` / `[ ] ` marker.
const ANSWER_TEXT_OFFSET: usize = 3;

/// Media embed directives, recognised in body mode only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Video { url: String },
    Notebook { url: String },
}

/// Question sub-section markers, recognised in question mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `Question:`
    Stem,
    /// `Explanation:`
    Explanation,
}

/// An answer option line such as `(x) 4` or `[ ] Blue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    pub kind: QuestionKind,
    pub correct: bool,
    pub text: String,
}

/// Classification of a single line containing only local facts.
///
/// Which of these facts matter depends on the builder's mode, so every
/// interpretation is computed up front and the builder picks.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line exactly as written.
    pub text: String,
    /// The line is exactly `???`.
    pub is_toggle: bool,
    pub directive: Option<Directive>,
    pub section: Option<Section>,
    pub answer: Option<AnswerLine>,
}

/// Classifies individual lines of course markup.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            text: line.to_string(),
            is_toggle: line == SECTION_TOGGLE,
            directive: directive(line),
            section: section(line),
            answer: answer_option(line),
        }
    }
}

fn directive(line: &str) -> Option<Directive> {
    let trimmed = line.trim();
    let folded = trimmed.to_lowercase();

    if folded.starts_with(VIDEO_PREFIX) {
        let url = chars_from(trimmed, VIDEO_URL_OFFSET);
        return Some(Directive::Video {
            url: embeddable_video_url(url),
        });
    }
    if folded.starts_with(NOTEBOOK_PREFIX) {
        return Some(Directive::Notebook {
            url: chars_from(trimmed, NOTEBOOK_URL_OFFSET).to_string(),
        });
    }
    None
}

/// Rewrite a `watch?v=` link to its `embed/` form unless it already is one.
pub fn embeddable_video_url(url: &str) -> String {
    if url.contains("/embed/") {
        url.to_string()
    } else {
        url.replacen("watch?v=", "embed/", 1)
    }
}

fn section(line: &str) -> Option<Section> {
    match line.trim().to_lowercase().as_str() {
        "question:" => Some(Section::Stem),
        "explanation:" => Some(Section::Explanation),
        _ => None,
    }
}

fn answer_option(line: &str) -> Option<AnswerLine> {
    let mut chars = line.chars();
    let kind = match chars.next()? {
        '(' => QuestionKind::Single,
        '[' => QuestionKind::Multiple,
        _ => return None,
    };
    Some(AnswerLine {
        kind,
        correct: chars.next() == Some('x'),
        text: chars_from(line, ANSWER_TEXT_OFFSET).trim().to_string(),
    })
}

/// Suffix of `s` starting at character `n` (empty when `s` is shorter).
fn chars_from(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
