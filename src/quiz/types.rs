//! Quiz type definitions

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A complete quiz, as read from a `.quiz` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Text after the `==` marker (may be empty)
    pub title: String,

    /// Problem groups in source order
    pub problem_groups: Vec<ProblemGroup>,
}

/// A cluster of related questions sharing an optional introduction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemGroup {
    /// Text between the brackets of the `[...]` line; empty for untitled groups
    pub title: String,

    /// Introductory text, newline-joined
    pub intro: String,

    pub questions: Vec<Question>,
}

/// A single question with its answer choices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Description text; every source line is prefixed with a newline
    pub description: String,

    pub options: Vec<Choice>,
}

/// One selectable answer within a question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub description: String,

    /// Shown once the choice is revealed (may be empty)
    pub explanation: String,

    pub correct: bool,
}

/// How a question is presented, derived from its correct-option count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    /// Exactly one correct option: clicking a choice reveals its response
    SingleChoice,
    /// Zero or several correct options: checkboxes plus a submit button
    MultipleChoice,
}

impl Question {
    /// Number of options flagged correct
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }

    pub fn mode(&self) -> ChoiceMode {
        if self.correct_count() == 1 {
            ChoiceMode::SingleChoice
        } else {
            ChoiceMode::MultipleChoice
        }
    }
}

/// Summary counts for a quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizStats {
    pub group_count: usize,
    pub question_count: usize,
    pub option_count: usize,
    pub single_choice: usize,
    pub multiple_choice: usize,
}

impl Quiz {
    /// Shuffle questions within each group and options within each question.
    ///
    /// Pass a seeded rng (e.g. `StdRng::seed_from_u64`) for reproducible output.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for group in &mut self.problem_groups {
            group.questions.shuffle(rng);
            for question in &mut group.questions {
                question.options.shuffle(rng);
            }
        }
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.problem_groups.iter().flat_map(|g| g.questions.iter())
    }

    pub fn stats(&self) -> QuizStats {
        let mut stats = QuizStats {
            group_count: self.problem_groups.len(),
            ..Default::default()
        };

        for question in self.questions() {
            stats.question_count += 1;
            stats.option_count += question.options.len();
            match question.mode() {
                ChoiceMode::SingleChoice => stats.single_choice += 1,
                ChoiceMode::MultipleChoice => stats.multiple_choice += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn choice(description: &str, correct: bool) -> Choice {
        Choice {
            description: description.to_string(),
            explanation: String::new(),
            correct,
        }
    }

    fn question(options: Vec<Choice>) -> Question {
        Question {
            description: "\nPick one".to_string(),
            options,
        }
    }

    #[test]
    fn test_mode_single_choice() {
        let q = question(vec![choice("A", false), choice("B", true)]);
        assert_eq!(q.mode(), ChoiceMode::SingleChoice);
    }

    #[test]
    fn test_mode_multiple_choice() {
        let q = question(vec![choice("A", true), choice("B", true), choice("C", false)]);
        assert_eq!(q.mode(), ChoiceMode::MultipleChoice);
    }

    #[test]
    fn test_mode_no_correct_option_is_multiple_choice() {
        let q = question(vec![choice("A", false), choice("B", false)]);
        assert_eq!(q.correct_count(), 0);
        assert_eq!(q.mode(), ChoiceMode::MultipleChoice);
    }

    #[test]
    fn test_stats() {
        let quiz = Quiz {
            title: "T".to_string(),
            problem_groups: vec![
                ProblemGroup {
                    title: "G".to_string(),
                    intro: String::new(),
                    questions: vec![
                        question(vec![choice("A", true), choice("B", false)]),
                        question(vec![choice("A", true), choice("B", true)]),
                    ],
                },
                ProblemGroup::default(),
            ],
        };

        let stats = quiz.stats();
        assert_eq!(stats.group_count, 2);
        assert_eq!(stats.question_count, 2);
        assert_eq!(stats.option_count, 4);
        assert_eq!(stats.single_choice, 1);
        assert_eq!(stats.multiple_choice, 1);
    }

    #[test]
    fn test_shuffle_is_reproducible_and_keeps_content() {
        let options: Vec<Choice> = (0..8).map(|i| choice(&i.to_string(), i == 3)).collect();
        let quiz = Quiz {
            title: String::new(),
            problem_groups: vec![ProblemGroup {
                title: String::new(),
                intro: String::new(),
                questions: vec![question(options.clone()), question(options.clone())],
            }],
        };

        let mut first = quiz.clone();
        first.shuffle(&mut StdRng::seed_from_u64(7));
        let mut second = quiz.clone();
        second.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let mut shuffled: Vec<String> = first.problem_groups[0].questions[0]
            .options
            .iter()
            .map(|o| o.description.clone())
            .collect();
        shuffled.sort();
        let mut original: Vec<String> = options.iter().map(|o| o.description.clone()).collect();
        original.sort();
        assert_eq!(shuffled, original);
    }
}
