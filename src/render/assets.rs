//! Page assets - override files in the assets directory, built-in defaults otherwise

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/template.html");
pub const DEFAULT_HEAD: &str = include_str!("../../assets/head.html");
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/quiz.css");
pub const SAMPLE_QUIZ: &str = include_str!("../../assets/sample.quiz");

pub const TEMPLATE_FILE: &str = "template.html";
pub const HEAD_FILE: &str = "head.html";
pub const HEADER_FILE: &str = "header.html";
pub const FOOTER_FILE: &str = "footer.html";

/// Everything the page template is assembled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    /// Page skeleton with `[PLACEHOLDER]` slots
    pub template: String,

    /// Custom `<head>` contents; `None` means the built-in head is used
    pub head: Option<String>,

    /// Fragment placed above the quiz (empty when there is none)
    pub header: String,

    /// Custom footer; `None` means the built-in results footer
    pub footer: Option<String>,
}

impl Default for PageAssets {
    fn default() -> Self {
        PageAssets {
            template: DEFAULT_TEMPLATE.to_string(),
            head: None,
            header: String::new(),
            footer: None,
        }
    }
}

/// Read `dir/name` if it exists
fn read_override(dir: &Path, name: &str) -> Result<Option<String>> {
    let path = dir.join(name);

    if !path.exists() {
        debug!("No {} in {}, using default", name, dir.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read asset: {}", path.display()))?;
    debug!("Using {}", path.display());

    Ok(Some(contents))
}

/// Load page assets from `dir`, falling back to the built-in defaults
pub fn load_assets(dir: &Path) -> Result<PageAssets> {
    Ok(PageAssets {
        template: read_override(dir, TEMPLATE_FILE)?.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        head: read_override(dir, HEAD_FILE)?,
        header: read_override(dir, HEADER_FILE)?.unwrap_or_default(),
        footer: read_override(dir, FOOTER_FILE)?,
    })
}

/// Write the stylesheet into `out_dir` unless one is already there.
///
/// Its contents come from `assets_dir/<name>` when present, the built-in
/// stylesheet otherwise. Returns whether a file was written.
pub fn write_stylesheet_if_absent(out_dir: &Path, assets_dir: &Path, name: &str) -> Result<bool> {
    let target = out_dir.join(name);

    if target.exists() {
        return Ok(false);
    }

    let contents = read_override(assets_dir, name)?.unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    std::fs::write(&target, contents)
        .with_context(|| format!("Failed to write stylesheet: {}", target.display()))?;
    info!("No stylesheet found, wrote default {}", target.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_directory_is_empty() {
        let dir = tempdir().unwrap();
        let assets = load_assets(dir.path()).unwrap();

        assert_eq!(assets, PageAssets::default());
        assert!(assets.template.contains("[BODY]"));
    }

    #[test]
    fn test_files_override_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(TEMPLATE_FILE), "<html>[BODY]</html>").unwrap();
        std::fs::write(dir.path().join(HEADER_FILE), "<p>Course 101</p>").unwrap();
        std::fs::write(dir.path().join(FOOTER_FILE), "<p>bye</p>").unwrap();

        let assets = load_assets(dir.path()).unwrap();

        assert_eq!(assets.template, "<html>[BODY]</html>");
        assert_eq!(assets.head, None);
        assert_eq!(assets.header, "<p>Course 101</p>");
        assert_eq!(assets.footer.as_deref(), Some("<p>bye</p>"));
    }

    #[test]
    fn test_stylesheet_written_once() {
        let out = tempdir().unwrap();
        let assets = tempdir().unwrap();

        assert!(write_stylesheet_if_absent(out.path(), assets.path(), "quiz.css").unwrap());
        let written = std::fs::read_to_string(out.path().join("quiz.css")).unwrap();
        assert_eq!(written, DEFAULT_STYLESHEET);

        std::fs::write(out.path().join("quiz.css"), "body {}").unwrap();
        assert!(!write_stylesheet_if_absent(out.path(), assets.path(), "quiz.css").unwrap());
        let kept = std::fs::read_to_string(out.path().join("quiz.css")).unwrap();
        assert_eq!(kept, "body {}");
    }

    #[test]
    fn test_stylesheet_override_is_copied() {
        let out = tempdir().unwrap();
        let assets = tempdir().unwrap();
        std::fs::write(assets.path().join("theme.css"), "h1 { color: red; }").unwrap();

        write_stylesheet_if_absent(out.path(), assets.path(), "theme.css").unwrap();

        let written = std::fs::read_to_string(out.path().join("theme.css")).unwrap();
        assert_eq!(written, "h1 { color: red; }");
    }

    #[test]
    fn test_sample_quiz_parses() {
        let quiz = crate::parser::parse(SAMPLE_QUIZ).unwrap();
        assert_eq!(quiz.title, "Sample Quiz");
        assert_eq!(quiz.problem_groups.len(), 2);
        assert_eq!(quiz.stats().question_count, 5);
    }
}
