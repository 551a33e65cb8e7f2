use crate::models::ContentBlock;

use super::{
    classify::{Directive, LineClass},
    question::QuestionBuilder,
};

/// Which part of the document the builder is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Body,
    Question,
}

enum State {
    Body { prose: Vec<String> },
    Question(QuestionBuilder),
}

/// Line-at-a-time state machine producing [`ContentBlock`]s.
pub struct MarkupBuilder {
    state: State,
    out: Vec<ContentBlock>,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Body { prose: Vec::new() },
            out: vec![],
        }
    }

    pub fn mode(&self) -> Mode {
        match self.state {
            State::Body { .. } => Mode::Body,
            State::Question(_) => Mode::Question,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_toggle {
            self.toggle();
            return;
        }

        match &mut self.state {
            State::Question(question) => question.push(c),
            State::Body { prose } => match &c.directive {
                Some(Directive::Video { url }) => {
                    self.out.push(ContentBlock::VideoEmbed { url: url.clone() })
                }
                Some(Directive::Notebook { url }) => {
                    self.out.push(ContentBlock::NotebookEmbed { url: url.clone() })
                }
                None => prose.push(c.text.clone()),
            },
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush; an open question is closed as if `???` followed
        if self.mode() == Mode::Question {
            log::trace!("closing unterminated question section at end of input");
        }
        let block = self.close_current();
        self.out.push(block);
        self.out
    }

    fn toggle(&mut self) {
        let next = match self.mode() {
            Mode::Body => State::Question(QuestionBuilder::new()),
            Mode::Question => State::Body { prose: Vec::new() },
        };
        let block = self.close_current();
        self.out.push(block);
        self.state = next;
        log::trace!("markup mode switched to {:?}", self.mode());
    }

    /// Turn the current state into its block, leaving an empty body behind.
    fn close_current(&mut self) -> ContentBlock {
        let prev = std::mem::replace(&mut self.state, State::Body { prose: Vec::new() });
        match prev {
            State::Body { prose } => ContentBlock::prose(prose.join("\n")),
            State::Question(question) => question.finish(),
        }
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
