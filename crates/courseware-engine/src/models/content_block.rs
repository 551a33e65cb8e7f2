use serde::{Deserialize, Serialize};

/// One unit of parsed, renderable module content.
///
/// Produced in document order by [`crate::parsing::parse_markup`]; the caller
/// owns the returned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A run of body lines, newline-joined in original order.
    Prose { text: String },
    /// A `???`-delimited question section.
    Question {
        stem: String,
        kind: QuestionKind,
        answers: Vec<Answer>,
        explanation: String,
    },
    /// A `Video:` directive, normalised to an embeddable URL.
    VideoEmbed { url: String },
    /// A `Jupyter:` directive.
    NotebookEmbed { url: String },
}

impl ContentBlock {
    pub fn prose(text: impl Into<String>) -> Self {
        ContentBlock::Prose { text: text.into() }
    }

    /// Text of a prose block, `None` for every other kind.
    pub fn prose_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Prose { text } => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_question(&self) -> bool {
        matches!(self, ContentBlock::Question { .. })
    }
}

/// Whether a question accepts one answer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Declared by `( )` / `(x)` answer lines.
    Single,
    /// Declared by `[ ]` / `[x]` answer lines. Also the kind of a question
    /// with no answer lines at all.
    #[default]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}
