//! Plain-text rendering of module content for the terminal.

use courseware_engine::{CellType, ContentBlock, Module, ModuleBody, Notebook, QuestionKind};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

pub const NO_MODULE: &str = "Select a module";
pub const UNPARSEABLE: &str = "Failed to parse";

/// Lines to show for `module`; `reveal` uncovers correct answers and explanations.
pub fn render_module(module: Option<&Module>, reveal: bool) -> Vec<String> {
    let Some(module) = module else {
        return vec![NO_MODULE.to_string()];
    };

    match module.body() {
        ModuleBody::Blocks(blocks) => render_blocks(&blocks, reveal),
        ModuleBody::Notebook(notebook) => render_notebook(&notebook),
        ModuleBody::Unparseable(reason) => vec![UNPARSEABLE.to_string(), reason],
    }
}

pub fn render_blocks(blocks: &[ContentBlock], reveal: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        let before = lines.len();
        match block {
            ContentBlock::Prose { text } => lines.extend(markdown_lines(text)),
            ContentBlock::Question {
                stem,
                kind,
                answers,
                explanation,
            } => {
                lines.push("❓ Question".to_string());
                lines.extend(markdown_lines(stem));
                for answer in answers {
                    let mark = if reveal && answer.correct { 'x' } else { ' ' };
                    let marker = match kind {
                        QuestionKind::Single => format!("({mark})"),
                        QuestionKind::Multiple => format!("[{mark}]"),
                    };
                    lines.push(format!("  {marker} {}", answer.text));
                }
                if !reveal {
                    lines.push("  (press r to reveal answers)".to_string());
                } else if !explanation.is_empty() {
                    lines.push("Explanation:".to_string());
                    lines.extend(markdown_lines(explanation));
                }
            }
            ContentBlock::VideoEmbed { url } => lines.push(format!("▶ Video: {url}")),
            ContentBlock::NotebookEmbed { url } => lines.push(format!("📓 Notebook: {url}")),
        }
        if lines.len() > before {
            lines.push(String::new());
        }
    }

    trim_trailing_blank(&mut lines);
    lines
}

pub fn render_notebook(notebook: &Notebook) -> Vec<String> {
    let mut lines = Vec::new();

    for cell in &notebook.cells {
        let source = cell.source_text();
        match cell.cell_type {
            CellType::Markdown => lines.extend(markdown_lines(&source)),
            CellType::Code => {
                lines.push("```".to_string());
                lines.extend(source.lines().map(str::to_string));
                lines.push("```".to_string());
            }
            CellType::Raw | CellType::Other => lines.extend(source.lines().map(str::to_string)),
        }
        lines.push(String::new());
    }

    trim_trailing_blank(&mut lines);
    lines
}

/// Flatten markdown into display lines, keeping headings and list structure.
pub fn markdown_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut list_depth = 0usize;
    let mut in_code = false;
    let mut in_image = false;

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current.push_str(&"#".repeat(level as usize));
                current.push(' ');
            }
            Event::Start(Tag::List(_)) => {
                flush(&mut lines, &mut current);
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    lines.push(String::new());
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut current);
                current.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                current.push_str("• ");
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut current);
                in_code = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code = false;
                lines.push(String::new());
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                current.push_str(&format!("[image: {dest_url}]"));
                in_image = true;
            }
            Event::End(TagEnd::Image) => in_image = false,
            Event::Text(t) if in_code => {
                lines.extend(t.lines().map(|l| format!("    {l}")));
            }
            Event::Text(t) if !in_image => current.push_str(&t),
            Event::Code(t) => {
                current.push('`');
                current.push_str(&t);
                current.push('`');
            }
            Event::SoftBreak => current.push(' '),
            Event::HardBreak | Event::End(TagEnd::Item) => flush(&mut lines, &mut current),
            Event::End(TagEnd::Paragraph) if list_depth > 0 => flush(&mut lines, &mut current),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => {
                flush(&mut lines, &mut current);
                lines.push(String::new());
            }
            Event::Rule => {
                flush(&mut lines, &mut current);
                lines.push("───".to_string());
                lines.push(String::new());
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current);
    trim_trailing_blank(&mut lines);
    lines
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }
}

fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
}
