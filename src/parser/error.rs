//! Parse errors for `.quiz` sources

use std::path::PathBuf;
use thiserror::Error;

/// A structural problem in a quiz source; the document is rejected as a whole
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: a quiz must start with \"==\" followed by an optional title")]
    MissingTitleMarker { line: usize },

    #[error("line {line}: problem group title must be written as [TITLE] with both square brackets")]
    MissingGroupBracket { line: usize },

    #[error("line {line}: question appears before any problem group; start every group with \"[]\"")]
    OrphanQuestion { line: usize },

    #[error("line {line}: no options found for question (is there a blank line inside the problem group?)")]
    MissingOptionMarker { line: usize },

    #[error("cannot read quiz file {}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FormatError {
    /// Source line the error points at, if it comes from the text itself
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::MissingTitleMarker { line }
            | FormatError::MissingGroupBracket { line }
            | FormatError::OrphanQuestion { line }
            | FormatError::MissingOptionMarker { line } => Some(*line),
            FormatError::UnreadableSource { .. } => None,
        }
    }
}
