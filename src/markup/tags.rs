//! Tag token recognition for menu markup.
//!
//! A tag token is anything matching `<[^>]+>`. Attributes are never interpreted;
//! only the tag name is extracted so that open tags can be closed again.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag regex should compile"));

static LEADING_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<[^>]+>").expect("leading tag regex should compile"));

/// How a tag token affects the stack of open tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind<'a> {
    /// `<name ...>`: pushed onto the stack.
    Open(&'a str),
    /// `</name>`: pops whatever is on top, regardless of name.
    Close,
    /// `<name .../>`: copied, never pushed.
    SelfClosing,
    /// `<!...>` such as comments or doctype: copied, never pushed.
    Declaration,
    /// A token with no usable name, like `< >`.
    Unnamed,
}

/// Return the tag token that starts exactly at the beginning of `input`, if any.
///
/// # Examples
/// ```
/// use cs2_menu_text::markup::tags::tag_at;
///
/// assert_eq!(tag_at("<b>bold</b>"), Some("<b>"));
/// assert_eq!(tag_at("text<b>"), None);
/// assert_eq!(tag_at("a < b"), None);
/// ```
pub fn tag_at(input: &str) -> Option<&str> {
    if !input.starts_with('<') {
        return None;
    }
    LEADING_TAG_PATTERN.find(input).map(|m| m.as_str())
}

/// Classify a complete tag token.
///
/// # Examples
/// ```
/// use cs2_menu_text::markup::tags::{classify, TagKind};
///
/// assert_eq!(classify("<font color='red'>"), TagKind::Open("font"));
/// assert_eq!(classify("</font>"), TagKind::Close);
/// assert_eq!(classify("<br/>"), TagKind::SelfClosing);
/// assert_eq!(classify("<!-- note -->"), TagKind::Declaration);
/// ```
pub fn classify(token: &str) -> TagKind<'_> {
    if token.starts_with("</") {
        return TagKind::Close;
    }

    let name = tag_name(token);
    if token.ends_with("/>") {
        TagKind::SelfClosing
    } else if name.starts_with('!') {
        TagKind::Declaration
    } else if name.is_empty() {
        TagKind::Unnamed
    } else {
        TagKind::Open(name)
    }
}

/// First non-empty piece of the token split on space, `>` and `/`, minus the `<`.
fn tag_name(token: &str) -> &str {
    token
        .split([' ', '>', '/'])
        .find(|piece| !piece.is_empty())
        .map(|piece| piece.trim_start_matches('<'))
        .unwrap_or("")
}

/// Remove every tag token, leaving only the visible text.
///
/// # Examples
/// ```
/// use cs2_menu_text::markup::strip_tags;
///
/// assert_eq!(strip_tags("<b>Hello</b> <i>World</i>"), "Hello World");
/// ```
pub fn strip_tags(markup: &str) -> String {
    TAG_PATTERN.replace_all(markup, "").into_owned()
}

/// Number of visible characters in `markup`.
pub fn visible_len(markup: &str) -> usize {
    TAG_PATTERN.replace_all(markup, "").chars().count()
}
