//! User-facing strings placed into the rendered page

use serde::Deserialize;

/// Every piece of UI text the page shows; override any of them from config
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Prefix of a revealed correct single-choice answer
    pub correct: String,

    /// Prefix of a revealed incorrect single-choice answer
    pub incorrect: String,

    /// Prefix of a correct option's response after submitting
    pub option_correct: String,

    /// Prefix of an incorrect option's response after submitting
    pub option_incorrect: String,

    pub submit: String,
    pub hide: String,

    /// Heading of the results line in the default footer
    pub results_heading: String,

    /// Follows the right-answer counter in the default footer
    pub right_answers: String,

    /// Follows the mistake counter in the default footer
    pub mistakes: String,

    /// Attribution line in the default footer
    pub generated_by: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            correct: "Correct! ".to_string(),
            incorrect: "Incorrect. ".to_string(),
            option_correct: "This option is correct. ".to_string(),
            option_incorrect: "This option is incorrect. ".to_string(),
            submit: "Submit".to_string(),
            hide: "Hide".to_string(),
            results_heading: "Your results:".to_string(),
            right_answers: "right answer(s) and".to_string(),
            mistakes: "mistake(s)!".to_string(),
            generated_by: "Page generated using quizgen".to_string(),
        }
    }
}
