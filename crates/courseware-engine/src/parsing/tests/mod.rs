//! Tests for the whole parsing pass.
//!
//! Fixtures (.md) live in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Answer, ContentBlock, QuestionKind};
use crate::parsing::parse_markup;

fn read_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn question(kind: QuestionKind, answers: Vec<Answer>) -> ContentBlock {
    ContentBlock::Question {
        stem: String::new(),
        kind,
        answers,
        explanation: String::new(),
    }
}

#[test]
fn fixture_geometry_warmup() {
    let blocks = parse_markup(&read_fixture("geometry_warmup"));

    insta::assert_debug_snapshot!(blocks, @r##"
    [
        Prose {
            text: "# Geometry Warm-up\n",
        },
        Question {
            stem: "How many sides does a square have?",
            kind: Single,
            answers: [
                Answer {
                    text: "3",
                    correct: false,
                },
                Answer {
                    text: "4",
                    correct: true,
                },
            ],
            explanation: "A square has 4 sides.",
        },
        VideoEmbed {
            url: "https://www.youtube.com/embed/rvVF5QWSYF4",
        },
        NotebookEmbed {
            url: "https://example.com/squares.ipynb",
        },
        Prose {
            text: "End of section.\n",
        },
    ]
    "##);
}

#[test]
fn empty_input_is_one_empty_prose_block() {
    assert_eq!(parse_markup(""), vec![ContentBlock::prose("")]);
}

#[test]
fn plain_text_keeps_line_breaks_and_blank_lines() {
    let md = "# Title\n\nFirst paragraph\n  indented\n\n";
    assert_eq!(parse_markup(md), vec![ContentBlock::prose(md)]);
}

#[rstest]
#[case("(x) A", "( ) B", QuestionKind::Single)]
#[case("[x] A", "[ ] B", QuestionKind::Multiple)]
#[case("(x) A", "[ ] B", QuestionKind::Multiple)]
#[case("[x] A", "( ) B", QuestionKind::Single)]
fn question_kind_follows_last_answer_line(
    #[case] first: &str,
    #[case] second: &str,
    #[case] kind: QuestionKind,
) {
    let md = format!("???\n{first}\n{second}\n???");

    let blocks = parse_markup(&md);

    assert_eq!(
        blocks,
        vec![
            ContentBlock::prose(""),
            question(kind, vec![Answer::new("A", true), Answer::new("B", false)]),
            ContentBlock::prose(""),
        ]
    );
}

#[test]
fn unterminated_question_is_closed_at_end() {
    let blocks = parse_markup("Intro\n???\nQuestion:\nWhy?\n(x) Because");

    assert_eq!(
        blocks,
        vec![
            ContentBlock::prose("Intro"),
            ContentBlock::Question {
                stem: "Why?".to_string(),
                kind: QuestionKind::Single,
                answers: vec![Answer::new("Because", true)],
                explanation: String::new(),
            },
        ]
    );
}

#[test]
fn consecutive_questions_start_in_the_stem() {
    let md = "???\nExplanation:\nFirst\n???\n???\n(x) Second\n???";

    let questions: Vec<_> = parse_markup(md).into_iter().filter(ContentBlock::is_question).collect();

    assert_eq!(questions.len(), 2);
    match &questions[1] {
        ContentBlock::Question {
            answers,
            explanation,
            ..
        } => {
            assert_eq!(answers, &vec![Answer::new("Second", true)]);
            assert_eq!(explanation, "");
        }
        other => panic!("expected question, got {other:?}"),
    }
}

#[test]
fn embeds_are_emitted_before_the_surrounding_prose() {
    let md = "Before\nVideo: https://www.youtube.com/watch?v=abc\nAfter";

    assert_eq!(
        parse_markup(md),
        vec![
            ContentBlock::VideoEmbed {
                url: "https://www.youtube.com/embed/abc".to_string()
            },
            ContentBlock::prose("Before\nAfter"),
        ]
    );
}

#[rstest]
#[case("Video: https://www.youtube.com/watch?v=abc", "https://www.youtube.com/embed/abc")]
#[case("Video: https://www.youtube.com/embed/abc", "https://www.youtube.com/embed/abc")]
fn video_urls_are_embeddable(#[case] line: &str, #[case] url: &str) {
    assert_eq!(
        parse_markup(line),
        vec![
            ContentBlock::VideoEmbed {
                url: url.to_string()
            },
            ContentBlock::prose(""),
        ]
    );
}

/// Body lines between toggles, minus embed lines, come back verbatim as one
/// prose block per body stretch.
#[rstest]
#[case("a\nb\nc")]
#[case("a\n???\n(x) q\n???\nb\n\nc")]
#[case("Video: v\na\nJupyter: j\nb")]
#[case("\r\n a \r\n")]
#[case("\n\n???\n???\n\n")]
#[case("???")]
fn prose_preserves_body_lines(#[case] md: &str) {
    let mut expected = Vec::new();
    let mut stretch: Vec<&str> = Vec::new();
    let mut in_question = false;
    for line in md.split('\n') {
        if line == "???" {
            if !in_question {
                expected.push(stretch.join("\n"));
                stretch.clear();
            }
            in_question = !in_question;
            continue;
        }
        let folded = line.trim().to_lowercase();
        if !in_question && !folded.starts_with("video:") && !folded.starts_with("jupyter:") {
            stretch.push(line);
        }
    }
    if !in_question {
        expected.push(stretch.join("\n"));
    }

    let blocks = parse_markup(md);
    let prose: Vec<String> = blocks
        .iter()
        .filter_map(ContentBlock::prose_text)
        .map(str::to_string)
        .collect();

    assert_eq!(prose, expected);
}
