// src/util/markup.rs
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::OnceLock;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Text(&'a str),
    Open { attrs: &'a str, empty: bool },
    Close,
}

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(
            r#"(?s)<!--.*?-->|<![^>]*>|<\?[^>]*>|<(/?)([A-Za-z][A-Za-z0-9:-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#,
        )
        .unwrap()
    })
}

fn class_regex() -> &'static Regex {
    static CLASS_RE: OnceLock<Regex> = OnceLock::new();
    CLASS_RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#).unwrap()
    })
}

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Split markup into text runs and tags. Comments, doctypes and processing
/// instructions are dropped. The body of `script` and `style` is kept as a
/// single text run and never scanned for tags.
fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(caps) = tag_regex().captures_at(markup, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if whole.start() > pos {
            tokens.push(Token::Text(&markup[pos..whole.start()]));
        }
        pos = whole.end();

        let Some(name) = caps.get(2) else {
            continue;
        };
        if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
            tokens.push(Token::Close);
            continue;
        }

        let name = name.as_str().to_ascii_lowercase();
        let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
        let empty = self_closing || VOID_ELEMENTS.contains(&name.as_str());
        tokens.push(Token::Open {
            attrs: caps.get(3).map_or("", |m| m.as_str()),
            empty,
        });

        if !empty && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            // ASCII lowercasing keeps byte offsets intact
            let close = format!("</{name}");
            let body_end = markup[pos..]
                .to_ascii_lowercase()
                .find(&close)
                .map_or(markup.len(), |offset| pos + offset);
            if body_end > pos {
                tokens.push(Token::Text(&markup[pos..body_end]));
            }
            pos = body_end;
        }
    }
    if pos < markup.len() {
        tokens.push(Token::Text(&markup[pos..]));
    }
    tokens
}

fn has_class(attrs: &str, class: &str) -> bool {
    class_regex().captures_iter(attrs).any(|caps| {
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        value.split_whitespace().any(|token| token == class)
    })
}

fn decode(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

/// Text content of the first child node of the first element carrying `class`.
///
/// Returns `None` when no element has the class or the element has no
/// children. The text is entity-decoded but not trimmed. An element child
/// contributes all text nested inside it.
///
/// # Examples
///
/// ```
/// use ankiwords::util::markup::first_child_text_by_class;
///
/// let html = r#"<div class="targetWordFront">犬<span>extra</span></div>"#;
/// assert_eq!(first_child_text_by_class(html, "targetWordFront").as_deref(), Some("犬"));
/// ```
pub fn first_child_text_by_class(markup: &str, class: &str) -> Option<String> {
    let tokens = tokenize(markup);

    let marker = tokens.iter().position(|token| match token {
        Token::Open { attrs, .. } => has_class(attrs, class),
        _ => false,
    })?;
    if matches!(tokens[marker], Token::Open { empty: true, .. }) {
        return None;
    }

    match tokens.get(marker + 1)? {
        Token::Text(text) => Some(decode(text)),
        Token::Close => None,
        Token::Open { empty: true, .. } => Some(String::new()),
        Token::Open { .. } => {
            let mut content = String::new();
            let mut depth = 1usize;
            for token in &tokens[marker + 2..] {
                match token {
                    Token::Text(text) => content.push_str(&decode(text)),
                    Token::Open { empty: false, .. } => depth += 1,
                    Token::Open { .. } => {}
                    Token::Close => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                }
            }
            Some(content)
        }
    }
}
