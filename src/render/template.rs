//! Page assembly - fills the template's `[PLACEHOLDER]` slots

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::quiz::Quiz;
use super::assets::{PageAssets, DEFAULT_HEAD};
use super::builder::render_with;
use super::labels::Labels;
use super::markers::substitute;
use super::node::{create_element, escape_text, serialize_node};

/// TeX macros available to every quiz using the built-in head
const TEX_PREAMBLE: &str = r"$\newcommand{\ones}{\mathbf 1}$";

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(
        r"\[(STYLES_SCRIPTS|SUBMIT_LABEL|HIDE_LABEL|TEX|HEADER|TITLE|BODY|FOOTER)\]"
    )
    .unwrap();
}

/// Render a complete HTML page for `quiz`
pub fn render_page(quiz: &Quiz, assets: &PageAssets, labels: &Labels, stylesheet: &str) -> Result<String> {
    let body = serialize_node(&render_with(quiz, labels)).context("Failed to serialize quiz")?;

    let (head, tex) = match &assets.head {
        Some(custom) => (custom.clone(), ""),
        None => (DEFAULT_HEAD.replace("[STYLESHEET]", &stylesheet_link(stylesheet)?), TEX_PREAMBLE),
    };

    let footer = match &assets.footer {
        Some(custom) => custom.clone(),
        None => default_footer(labels)?,
    };

    let title = escape_text(&quiz.title)?;
    let submit = js_string(&labels.submit);
    let hide = js_string(&labels.hide);

    // Single pass, so text pulled in from the quiz is never rescanned for slots
    let page = PLACEHOLDER_RE.replace_all(&assets.template, |caps: &Captures| {
        match &caps[1] {
            "STYLES_SCRIPTS" => head.clone(),
            "SUBMIT_LABEL" => submit.clone(),
            "HIDE_LABEL" => hide.clone(),
            "TEX" => tex.to_string(),
            "HEADER" => assets.header.clone(),
            "TITLE" => title.clone(),
            "BODY" => body.clone(),
            "FOOTER" => footer.clone(),
            other => format!("[{}]", other),
        }
    });

    Ok(substitute(&page))
}

fn stylesheet_link(stylesheet: &str) -> Result<String> {
    let link = create_element(
        "link",
        vec![("rel", "stylesheet"), ("href", stylesheet), ("type", "text/css")],
    );
    Ok(serialize_node(&link)?)
}

/// Results counters shown when no footer file is provided
pub fn default_footer(labels: &Labels) -> Result<String> {
    Ok(format!(
        r#"<div id="footer_results"><span class="heading">{}</span> <span class="right_counter"><span class="value">0</span></span> {} <span class="wrong_counter"><span class="value">0</span></span> {}</div>
  {}
  <div id="floating_results" class="results">
    <div class="right_counter">
      <span class="value">0</span>
    </div>
    <span class="delimiter">/</span>
    <div class="wrong_counter">
      <span class="value">0</span>
    </div>
  </div>"#,
        escape_text(&labels.results_heading)?,
        escape_text(&labels.right_answers)?,
        escape_text(&labels.mistakes)?,
        escape_text(&labels.generated_by)?,
    ))
}

/// Escape a label for a single-quoted string inside an inline script
fn js_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("</", "<\\/")
}
