//! Tag-aware truncation of menu markup.

use super::tags::{classify, tag_at, visible_len, TagKind};

/// Cut `markup` down to at most `max_visible` visible characters.
///
/// Tags are copied whole and never count against the budget. Tags still open
/// when the cut happens are closed again, most recently opened first. A
/// non-positive budget, or markup that already fits, is returned unchanged.
///
/// Stray closing tags pop whatever is open; an empty stack ignores them.
///
/// # Examples
/// ```
/// use cs2_menu_text::markup::truncate;
///
/// assert_eq!(truncate("<b>Hello World</b>", 5), "<b>Hello</b>");
/// assert_eq!(truncate("<b><i>Hi there</i></b>", 2), "<b><i>Hi</i></b>");
/// assert_eq!(truncate("Short", 100), "Short");
/// ```
pub fn truncate(markup: &str, max_visible: i64) -> String {
    if max_visible <= 0 || markup.is_empty() {
        return markup.to_string();
    }

    let budget = usize::try_from(max_visible).unwrap_or(usize::MAX);
    if visible_len(markup) <= budget {
        return markup.to_string();
    }

    let mut open_tags: Vec<&str> = Vec::new();
    let mut result = String::with_capacity(markup.len());
    let mut visible = 0usize;
    let mut rest = markup;

    while !rest.is_empty() && visible < budget {
        if let Some(token) = tag_at(rest) {
            result.push_str(token);
            rest = &rest[token.len()..];

            match classify(token) {
                TagKind::Open(name) => open_tags.push(name),
                TagKind::Close => {
                    open_tags.pop();
                }
                TagKind::SelfClosing | TagKind::Declaration | TagKind::Unnamed => {}
            }
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            result.push(ch);
            visible += 1;
        }
        rest = chars.as_str();
    }

    while let Some(name) = open_tags.pop() {
        result.push_str("</");
        result.push_str(name);
        result.push('>');
    }

    result
}
