use crate::models::{Answer, ContentBlock, QuestionKind};

use super::classify::{LineClass, Section};

/// Accumulates one question section until its closing `???`.
///
/// `kind` is reassigned by every answer line, so a question that mixes
/// `( )` and `[ ]` options ends up with the kind of its last option.
#[derive(Debug, Default)]
pub struct QuestionBuilder {
    section: Option<Section>,
    stem: Vec<String>,
    explanation: Vec<String>,
    answers: Vec<Answer>,
    kind: QuestionKind,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: &LineClass) {
        if let Some(section) = c.section {
            self.section = Some(section);
            return;
        }

        match self.current_section() {
            Section::Stem => match &c.answer {
                Some(answer) => {
                    self.kind = answer.kind;
                    self.answers.push(Answer::new(answer.text.clone(), answer.correct));
                }
                None => self.stem.push(c.text.clone()),
            },
            Section::Explanation => self.explanation.push(c.text.clone()),
        }
    }

    pub fn finish(self) -> ContentBlock {
        ContentBlock::Question {
            stem: self.stem.join("\n"),
            kind: self.kind,
            answers: self.answers,
            explanation: self.explanation.join("\n"),
        }
    }

    fn current_section(&self) -> Section {
        self.section.unwrap_or(Section::Stem)
    }
}
