//! Chat color names understood by the game chat.
//!
//! Chat colors are single control characters placed inline in a message. Menu
//! translations reference them as `{Name}` tags, e.g. `{Green}Selected`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COLOR_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("color tag regex should compile"));

/// Every chat color name with its control character.
///
/// Several names share a character; the table keeps all of them so either
/// spelling works in translations.
pub const CHAT_COLORS: &[(&str, char)] = &[
    ("Default", '\x01'),
    ("White", '\x01'),
    ("DarkRed", '\x02'),
    ("LightPurple", '\x03'),
    ("Green", '\x04'),
    ("Olive", '\x05'),
    ("Lime", '\x06'),
    ("Red", '\x07'),
    ("Grey", '\x08'),
    ("LightYellow", '\x09'),
    ("Yellow", '\x09'),
    ("Silver", '\x0A'),
    ("BlueGrey", '\x0A'),
    ("LightBlue", '\x0B'),
    ("Blue", '\x0B'),
    ("DarkBlue", '\x0C'),
    ("Purple", '\x0E'),
    ("Magenta", '\x0E'),
    ("LightRed", '\x0F'),
    ("Gold", '\x10'),
    ("Orange", '\x10'),
];

/// Look up a chat color by its exact name.
///
/// # Examples
/// ```
/// use cs2_menu_text::color::chat_color;
///
/// assert_eq!(chat_color("Red"), Some('\x07'));
/// assert_eq!(chat_color("red"), None);
/// ```
pub fn chat_color(name: &str) -> Option<char> {
    CHAT_COLORS
        .iter()
        .find(|(color_name, _)| *color_name == name)
        .map(|(_, ch)| *ch)
}

fn chat_color_ignore_case(name: &str) -> Option<char> {
    CHAT_COLORS
        .iter()
        .find(|(color_name, _)| color_name.eq_ignore_ascii_case(name))
        .map(|(_, ch)| *ch)
}

/// Replace `{Name}` color tags with their control characters.
///
/// Names match case-insensitively. Braced text that is not a color name, such
/// as positional placeholders like `{0}`, is left untouched.
///
/// # Examples
/// ```
/// use cs2_menu_text::color::replace_color_tags;
///
/// assert_eq!(replace_color_tags("{Red}Hi{default}"), "\x07Hi\x01");
/// assert_eq!(replace_color_tags("Page {0}"), "Page {0}");
/// ```
pub fn replace_color_tags(text: &str) -> String {
    COLOR_TAG_PATTERN
        .replace_all(text, |caps: &Captures| match chat_color_ignore_case(&caps[1]) {
            Some(ch) => ch.to_string(),
            None => {
                log::debug!("Unknown color tag left as-is: {}", &caps[0]);
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Remove chat color control characters, for output that is not game chat.
///
/// Yellow and Silver share their characters with tab and newline, which are
/// kept so multi-line text survives.
pub fn strip_chat_colors(text: &str) -> String {
    text.chars()
        .filter(|ch| {
            matches!(*ch, '\t' | '\n') || !CHAT_COLORS.iter().any(|(_, color)| color == ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_color_aliases_share_char() {
        assert_eq!(chat_color("Gold"), chat_color("Orange"));
        assert_eq!(chat_color("Default"), chat_color("White"));
        assert_eq!(chat_color("Purple"), Some('\x0E'));
    }

    #[test]
    fn test_chat_color_unknown() {
        assert_eq!(chat_color("Teal"), None);
        assert_eq!(chat_color(""), None);
    }

    #[test]
    fn test_replace_color_tags_case_insensitive() {
        assert_eq!(replace_color_tags("{GREEN}ok"), "\x04ok");
        assert_eq!(replace_color_tags("{lightred}x"), "\x0Fx");
    }

    #[test]
    fn test_replace_color_tags_unknown_untouched() {
        assert_eq!(replace_color_tags("{Unknown} {1}"), "{Unknown} {1}");
    }

    #[test]
    fn test_replace_color_tags_multiple() {
        assert_eq!(
            replace_color_tags("{Red}A {Blue}B {Default}"),
            "\x07A \x0BB \x01"
        );
    }

    #[test]
    fn test_strip_chat_colors() {
        assert_eq!(strip_chat_colors("\x07Red\x01 text"), "Red text");
    }

    #[test]
    fn test_strip_chat_colors_keeps_tab_and_newline() {
        assert_eq!(
            strip_chat_colors("\x04Line1\nLine2\tX"),
            "Line1\nLine2\tX"
        );
    }
}
