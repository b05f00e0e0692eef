//! Builds the document tree for a quiz

use crate::quiz::{ChoiceMode, Choice, ProblemGroup, Question, Quiz};
use super::labels::Labels;
use super::node::{append, create_element, create_text, text_element, Handle};

const CORRECT_GLYPH: &str = "\u{2713}";
const INCORRECT_GLYPH: &str = "\u{2717}";

/// Stable identifier tying interactive nodes back to their question
pub fn question_id(group_num: usize, question_num: usize) -> String {
    format!("pg{:04}_q{:04}", group_num, question_num)
}

/// Render a quiz with the default English labels
pub fn render(quiz: &Quiz) -> Handle {
    render_with(quiz, &Labels::default())
}

/// Render a quiz into a single container node
pub fn render_with(quiz: &Quiz, labels: &Labels) -> Handle {
    let wrapper = create_element("div", vec![]);
    append(&wrapper, text_element("h1", vec![], &quiz.title));

    for (group_num, group) in quiz.problem_groups.iter().enumerate() {
        append(&wrapper, render_group(group, group_num, labels));
        append(&wrapper, create_element("br", vec![]));
    }

    wrapper
}

fn render_group(group: &ProblemGroup, group_num: usize, labels: &Labels) -> Handle {
    let fieldset = create_element("fieldset", vec![]);

    if !group.title.is_empty() {
        append(&fieldset, text_element("legend", vec![], &group.title));
    }

    let has_intro = !group.intro.is_empty();
    if has_intro {
        append(&fieldset, text_element("div", vec![("class", "intro")], &group.intro));
    }

    for (question_num, question) in group.questions.iter().enumerate() {
        // A rule separates questions, and the intro from the first one
        if question_num > 0 || has_intro {
            append(&fieldset, create_element("hr", vec![]));
        }
        let id = question_id(group_num, question_num);
        append(&fieldset, render_question(question, &id, labels));
    }

    fieldset
}

fn render_question(question: &Question, id: &str, labels: &Labels) -> Handle {
    let container = create_element("div", vec![]);
    append(
        &container,
        text_element("div", vec![("class", "description")], &question.description),
    );

    let choices = match question.mode() {
        ChoiceMode::SingleChoice => render_single_choice(&question.options, id, labels),
        ChoiceMode::MultipleChoice => render_multiple_choice(&question.options, id, labels),
    };
    append(&container, choices);

    container
}

/// Ordered list; clicking a selection reveals its response
fn render_single_choice(options: &[Choice], id: &str, labels: &Labels) -> Handle {
    let list = create_element("ol", vec![("type", "a")]);

    for option in options {
        let (verdict, marker) = if option.correct {
            ("right", labels.correct.as_str())
        } else {
            ("wrong", labels.incorrect.as_str())
        };

        let response_class = format!("response {}", verdict);
        let response = create_element("div", vec![("class", response_class.as_str())]);
        append(&response, text_element("span", vec![("class", verdict)], marker));
        append(&response, create_text(&option.explanation));

        let item = create_element("li", vec![("class", "choice")]);
        append(
            &item,
            text_element("div", vec![("class", "selection"), ("name", id)], &option.description),
        );
        append(&item, response);
        append(&list, item);
    }

    list
}

/// Checkbox rows and a submit button that reveals every response at once
fn render_multiple_choice(options: &[Choice], id: &str, labels: &Labels) -> Handle {
    let container = create_element("div", vec![("class", "mcq")]);

    for option in options {
        let (verdict, prefix) = if option.correct {
            ("right", labels.option_correct.as_str())
        } else {
            ("wrong", labels.option_incorrect.as_str())
        };

        let row = create_element("label", vec![]);
        append(&row, create_element("input", vec![("type", "checkbox")]));
        append(
            &row,
            text_element("span", vec![("class", "multiple-selection")], &option.description),
        );
        append(&row, text_element("span", vec![("class", "correct-checkbox")], CORRECT_GLYPH));
        append(&row, text_element("span", vec![("class", "incorrect-checkbox")], INCORRECT_GLYPH));

        let response_class = format!("response {}", verdict);
        let response_text = format!("{}{}", prefix, option.explanation);
        append(
            &row,
            text_element("div", vec![("class", response_class.as_str())], &response_text),
        );

        append(&container, row);
    }

    append(&container, text_element("button", vec![("name", id)], &labels.submit));
    container
}
