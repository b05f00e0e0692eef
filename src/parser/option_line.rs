//! Tokenizer for option lines (`* text :: explanation`) and their continuations

/// Starts an option line
pub const OPTION_MARKER: char = '*';

/// Directly follows [`OPTION_MARKER`] on a correct option
pub const CORRECT_FLAG: char = '=';

/// Separates an option's description from its explanation
pub const EXPLANATION_DELIMITER: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `*=`
    Correct,
    /// `*`
    Incorrect,
}

/// Description/explanation split of a piece of option text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPieces<'a> {
    pub description: &'a str,

    /// `Some` whenever the delimiter was present, even if nothing follows it
    pub explanation: Option<&'a str>,
}

/// A lexed option line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLine<'a> {
    pub marker: Marker,
    pub pieces: TextPieces<'a>,
}

/// Split off the option marker, returning the rest of the line
pub fn split_marker(line: &str) -> Option<(Marker, &str)> {
    let rest = line.strip_prefix(OPTION_MARKER)?;
    match rest.strip_prefix(CORRECT_FLAG) {
        Some(rest) => Some((Marker::Correct, rest)),
        None => Some((Marker::Incorrect, rest)),
    }
}

/// Split text at the first explanation delimiter; both sides are trimmed
pub fn split_explanation(text: &str) -> TextPieces<'_> {
    match text.split_once(EXPLANATION_DELIMITER) {
        Some((description, explanation)) => TextPieces {
            description: description.trim(),
            explanation: Some(explanation.trim()),
        },
        None => TextPieces {
            description: text.trim(),
            explanation: None,
        },
    }
}

/// Lex an option line; `None` means the line is a continuation
pub fn lex_option(line: &str) -> Option<OptionLine<'_>> {
    let (marker, rest) = split_marker(line)?;
    Some(OptionLine {
        marker,
        pieces: split_explanation(rest),
    })
}
