//! Line normalization and blank-line segmentation

/// A trimmed source line with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn starts_with(&self, pat: char) -> bool {
        self.text.starts_with(pat)
    }
}

/// Split content into trimmed, numbered lines
pub fn normalize(content: &str) -> Vec<Line<'_>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, text)| Line {
            number: idx + 1,
            text: text.trim(),
        })
        .collect()
}

/// Drop every blank line that sits directly above an option line.
///
/// Older quizzes left an empty line between a question and its first option;
/// without this those options would form a run of their own.
pub fn repair_blank_before_options<'a>(lines: &[Line<'a>]) -> Vec<Line<'a>> {
    lines
        .iter()
        .enumerate()
        .filter(|(idx, line)| {
            let next_is_option = lines
                .get(idx + 1)
                .map_or(false, |next| next.starts_with('*'));
            !(line.is_blank() && next_is_option)
        })
        .map(|(_, line)| *line)
        .collect()
}

/// Group lines into runs of consecutive non-blank lines
pub fn runs<'s, 'a>(lines: &'s [Line<'a>]) -> Vec<&'s [Line<'a>]> {
    lines
        .split(|line| line.is_blank())
        .filter(|run| !run.is_empty())
        .collect()
}
