//! # Course Markup Parsing
//!
//! Turns the plain-text course markup into an ordered list of
//! [`ContentBlock`]s in a single pass over the lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (section toggle, embed directive,
//!    question sub-section marker, answer option).
//!
//! 2. **Block Construction** (`builder`): a `MarkupBuilder` tracks the
//!    body/question mode, accumulates prose, and hands question lines to a
//!    `QuestionBuilder` (`question`) until the section closes.
//!
//! ## Markup
//!
//! ```text
//! Some prose, passed through untouched.
//! Video: https://www.youtube.com/watch?v=abc
//! Jupyter: https://example.com/lab.ipynb
//! ???
//! Question:
//! How many sides does a square have?
//! ( ) 3
//! (x) 4
//! Explanation:
//! A square has 4 sides.
//! ???
//! ```
//!
//! ## Key Invariants
//!
//! - Parsing never fails: anything unrecognised is prose (or question text)
//! - Every non-control, non-answer body line reaches a prose block unchanged
//! - An unterminated `???` section is closed at end of input

pub mod builder;
pub mod classify;
pub mod question;

#[cfg(test)]
mod tests;

pub use builder::{MarkupBuilder, Mode};
pub use classify::{Directive, LineClass, MarkupLineClassifier, Section};
pub use question::QuestionBuilder;

use crate::models::ContentBlock;

/// Parse course markup into content blocks.
pub fn parse_markup(raw: &str) -> Vec<ContentBlock> {
    let classifier = MarkupLineClassifier;
    let mut builder = MarkupBuilder::new();

    for line in raw.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
