//! Inline marker expansion (`||IMG: ...||`, `||LINK: ...||`, `||CODE:lang: ...||`)
//!
//! Markers are plain text inside quiz strings. They are expanded on the
//! serialized page, after all text has been escaped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMG_RE: Regex = Regex::new(r"\|\|IMG:\s?([^\s|]+)\|\|").unwrap();

    // ||LINK: url label|| must be tried before the bare ||LINK: url|| form
    static ref LABELED_LINK_RE: Regex =
        Regex::new(r"\|\|LINK:\s?([^\s|]+)\s+([^\s|][^|]*?)\|\|").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\|\|LINK:\s?([^\s|]+)\|\|").unwrap();

    static ref CODE_RE: Regex = Regex::new(r"(?s)\|\|CODE:([^\s:|]+):\s?(.*?)\|\|").unwrap();

    /// Escaped formatting tags authors may write in quiz text, and what they become
    static ref ALLOWED_TAGS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"&lt;br\s*/?&gt;").unwrap(), "<br/>"),
        (Regex::new(r"&lt;hr\s*/?&gt;").unwrap(), "<hr/>"),
        (Regex::new(r"&lt;center&gt;").unwrap(), r#"<span style="text-align: center;">"#),
        (Regex::new(r"&lt;/center&gt;").unwrap(), "</span>"),
        (Regex::new(r"&lt;u(?:nderline)?&gt;").unwrap(), r#"<span style="text-decoration: underline;">"#),
        (Regex::new(r"&lt;/u(?:nderline)?&gt;").unwrap(), "</span>"),
        (
            Regex::new(r"&lt;(/?)(blockquote|p|em|strong|code|ul|ol|li|sub|sup)&gt;").unwrap(),
            "<${1}${2}>",
        ),
        (Regex::new(r"&lt;(span|div)(\s+[^&]*)&gt;").unwrap(), "<${1}${2}>"),
        (Regex::new(r"&lt;/(span|div)&gt;").unwrap(), "</${1}>"),
    ];
}

/// Expand image, link and code markers
pub fn expand_markers(content: &str) -> String {
    let content = IMG_RE.replace_all(content, r#"<div><img src="${1}"></div>"#);
    let content = LABELED_LINK_RE.replace_all(&content, r#"<a href="${1}">${2}</a>"#);
    let content = LINK_RE.replace_all(&content, r#"<a href="${1}">${1}</a>"#);
    let content = CODE_RE.replace_all(&content, r#"<pre><code class="${1}">${2}</code></pre>"#);
    content.into_owned()
}

/// Turn the whitelisted escaped tags back into markup
pub fn unescape_allowed_tags(content: &str) -> String {
    ALLOWED_TAGS
        .iter()
        .fold(content.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// Full post-render text pass
pub fn substitute(content: &str) -> String {
    unescape_allowed_tags(&expand_markers(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_marker() {
        assert_eq!(
            expand_markers("See ||IMG: figs/plot.png|| here"),
            r#"See <div><img src="figs/plot.png"></div> here"#
        );
        assert_eq!(
            expand_markers("||IMG:a.png||||IMG:b.png||"),
            r#"<div><img src="a.png"></div><div><img src="b.png"></div>"#
        );
    }

    #[test]
    fn test_link_markers() {
        assert_eq!(
            expand_markers("||LINK: http://example.com||"),
            r#"<a href="http://example.com">http://example.com</a>"#
        );
        assert_eq!(
            expand_markers("||LINK: http://example.com the docs|| and ||LINK:http://x.org||"),
            r#"<a href="http://example.com">the docs</a> and <a href="http://x.org">http://x.org</a>"#
        );
    }

    #[test]
    fn test_code_marker_spans_lines() {
        assert_eq!(
            expand_markers("||CODE:rust: fn main() {\n}||"),
            "<pre><code class=\"rust\">fn main() {\n}</code></pre>"
        );
    }

    #[test]
    fn test_allowed_tags_are_unescaped() {
        assert_eq!(
            unescape_allowed_tags("a&lt;br/&gt;b &lt;em&gt;x&lt;/em&gt; &lt;u&gt;y&lt;/u&gt;"),
            r#"a<br/>b <em>x</em> <span style="text-decoration: underline;">y</span>"#
        );
        assert_eq!(
            unescape_allowed_tags("&lt;span class='k'&gt;z&lt;/span&gt;"),
            "<span class='k'>z</span>"
        );
    }

    #[test]
    fn test_other_tags_stay_escaped() {
        let text = "&lt;script&gt;alert(1)&lt;/script&gt;";
        assert_eq!(substitute(text), text);
    }
}
