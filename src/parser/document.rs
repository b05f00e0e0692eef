//! Document parsing - turns `.quiz` text into a [`Quiz`]

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use crate::quiz::{Choice, ProblemGroup, Question, Quiz};
use super::error::FormatError;
use super::lines::{normalize, repair_blank_before_options, runs, Line};
use super::option_line::{lex_option, split_explanation, Marker, OPTION_MARKER};

/// Marks the title line
const TITLE_MARKER: &str = "==";

/// Post-processing applied once the document is built
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Shuffle questions within groups and options within questions
    pub randomize: bool,

    /// Fixed seed for the shuffle; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

/// Parse quiz text
pub fn parse(content: &str) -> Result<Quiz, FormatError> {
    let lines = normalize(content);
    let lines = repair_blank_before_options(&lines);

    let (title_line, body) = lines
        .split_first()
        .ok_or(FormatError::MissingTitleMarker { line: 1 })?;

    let mut quiz = Quiz {
        title: parse_title(title_line)?,
        problem_groups: Vec::new(),
    };

    for run in runs(body) {
        let first = run[0];

        if first.starts_with('[') {
            let title = parse_group_title(&first)?;
            let rest = &run[1..];

            let group = if rest.iter().any(|l| l.starts_with(OPTION_MARKER)) {
                // A group may open directly on a question, with no intro
                ProblemGroup {
                    title,
                    intro: String::new(),
                    questions: vec![parse_question(rest)?],
                }
            } else {
                ProblemGroup {
                    title,
                    intro: join_lines(rest),
                    questions: Vec::new(),
                }
            };
            quiz.problem_groups.push(group);
        } else {
            let group = quiz
                .problem_groups
                .last_mut()
                .ok_or(FormatError::OrphanQuestion { line: first.number })?;
            group.questions.push(parse_question(run)?);
        }
    }

    Ok(quiz)
}

/// Parse quiz text, then apply `options`
pub fn parse_with(content: &str, options: &ParseOptions) -> Result<Quiz, FormatError> {
    let mut quiz = parse(content)?;

    if options.randomize {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        quiz.shuffle(&mut rng);
    }

    Ok(quiz)
}

/// Read and parse a quiz file
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Quiz, FormatError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormatError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz = parse_with(&content, options)?;
    debug!(
        "Parsed {}: {} group(s), {} question(s)",
        path.display(),
        quiz.problem_groups.len(),
        quiz.questions().count()
    );

    Ok(quiz)
}

fn parse_title(line: &Line) -> Result<String, FormatError> {
    line.text
        .strip_prefix(TITLE_MARKER)
        .map(|rest| rest.trim().to_string())
        .ok_or(FormatError::MissingTitleMarker { line: line.number })
}

/// `[Sensitivity Analysis]` => `Sensitivity Analysis`
fn parse_group_title(line: &Line) -> Result<String, FormatError> {
    let close = line
        .text
        .rfind(']')
        .ok_or(FormatError::MissingGroupBracket { line: line.number })?;
    Ok(line.text[1..close].to_string())
}

/// Parse a question run: description lines, then options with continuations
fn parse_question(run: &[Line]) -> Result<Question, FormatError> {
    let first_option = run
        .iter()
        .position(|l| l.starts_with(OPTION_MARKER))
        .ok_or(FormatError::MissingOptionMarker {
            line: run.first().map_or(0, |l| l.number),
        })?;

    let mut description = String::new();
    for line in &run[..first_option] {
        description.push('\n');
        description.push_str(line.text);
    }

    let mut options: Vec<Choice> = Vec::new();
    // Once an option has an explanation, continuation lines extend only the explanation
    let mut has_explanation = false;

    for line in &run[first_option..] {
        if let Some(option) = lex_option(line.text) {
            has_explanation = option.pieces.explanation.is_some();
            options.push(Choice {
                description: option.pieces.description.to_string(),
                explanation: option.pieces.explanation.unwrap_or_default().to_string(),
                correct: option.marker == Marker::Correct,
            });
        } else if let Some(current) = options.last_mut() {
            if has_explanation {
                push_line(&mut current.explanation, line.text);
            } else {
                let pieces = split_explanation(line.text);
                push_line(&mut current.description, pieces.description);
                if let Some(explanation) = pieces.explanation {
                    push_line(&mut current.explanation, explanation);
                    has_explanation = true;
                }
            }
        }
    }

    Ok(Question {
        description,
        options,
    })
}

/// Newline-join `piece` onto `target`, skipping empty pieces
fn push_line(target: &mut String, piece: &str) {
    if piece.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(piece);
}

fn join_lines(lines: &[Line]) -> String {
    lines.iter().map(|l| l.text).collect::<Vec<_>>().join("\n")
}
