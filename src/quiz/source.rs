//! Canonical `.quiz` source text for a parsed quiz

use super::{Choice, ProblemGroup, Question, Quiz};

/// Rebuild `.quiz` text from a quiz.
///
/// Parsing the result yields a quiz equal to the input.
pub fn to_source(quiz: &Quiz) -> String {
    let mut runs: Vec<String> = Vec::new();

    for group in &quiz.problem_groups {
        runs.extend(group_runs(group));
    }

    let mut out = if quiz.title.is_empty() {
        "==".to_string()
    } else {
        format!("== {}", quiz.title)
    };
    for run in runs {
        out.push('\n');
        out.push_str(&run);
        out.push('\n');
    }
    out
}

/// Blank-line separated runs for one group
fn group_runs(group: &ProblemGroup) -> Vec<String> {
    let heading = format!("[{}]", group.title);
    let mut runs = Vec::new();
    let mut questions = group.questions.iter();

    if !group.intro.is_empty() {
        runs.push(format!("{}\n{}", heading, group.intro));
    } else if let Some(first) = questions.next() {
        // No intro: the first question shares the bracket line's run
        runs.push(format!("{}\n{}", heading, question_source(first)));
    } else {
        runs.push(heading);
    }

    runs.extend(questions.map(question_source));
    runs
}

fn question_source(question: &Question) -> String {
    let mut lines: Vec<String> = question
        .description
        .split('\n')
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    for option in &question.options {
        lines.push(option_source(option));
    }

    lines.join("\n")
}

fn option_source(option: &Choice) -> String {
    let marker = if option.correct { "*=" } else { "*" };
    let mut out = marker.to_string();

    if !option.description.is_empty() {
        out.push(' ');
        // Wrapped description lines become continuation lines
        out.push_str(&option.description);
    }

    // The explanation rides on the last description line
    if !option.explanation.is_empty() {
        out.push_str(" :: ");
        out.push_str(&option.explanation);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn round_trip(text: &str) {
        let quiz = parse(text).unwrap();
        let rebuilt = to_source(&quiz);
        let reparsed = parse(&rebuilt).unwrap();
        assert_eq!(quiz, reparsed, "rebuilt source:\n{}", rebuilt);
    }

    #[test]
    fn test_source_of_simple_quiz() {
        let quiz = parse("== T\n[G]\nIntro.\n\nQ1?\n* A\n*= B :: why\n").unwrap();
        assert_eq!(to_source(&quiz), "== T\n[G]\nIntro.\n\nQ1?\n* A\n*= B :: why\n");
    }

    #[test]
    fn test_round_trip_inline_question() {
        round_trip("== \n[]\n*= X\n* Y\n");
    }

    #[test]
    fn test_round_trip_multiline_text() {
        round_trip(
            "== Quiz\n[Group]\nLine one\nline two\n\nFirst\nsecond\n* A :: e1\nmore e1\n*= B\nwraps\n\n[]\n\n[Next]\nQ\n*=C::x\n",
        );
    }

    #[test]
    fn test_round_trip_continuation_with_explanation() {
        round_trip("== Q\n[G]\nQ?\n* A\nstill a :: then why\nand more\n* :: only why\n");
    }
}
