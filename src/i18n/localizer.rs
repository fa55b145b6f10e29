//! Culture-aware translation lookup.
//!
//! A player's culture (`pt-BR`) is tried first, then its language (`pt`), then
//! English. If none of them has the key, the key itself is shown.

use std::collections::HashMap;

use crate::color::replace_color_tags;
use crate::i18n::format::format_positional;

/// Culture used when neither the player's culture nor its language has a key.
pub const FALLBACK_CULTURE: &str = "en";

/// Translations keyed by culture name, then by message key.
pub type LangTable = HashMap<String, HashMap<String, String>>;

/// Resolves translation keys against a [`LangTable`].
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    lang: LangTable,
}

impl Localizer {
    pub fn new(lang: LangTable) -> Self {
        Self { lang }
    }

    /// Cultures that have at least one translation.
    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.lang.keys().map(String::as_str)
    }

    /// Raw template for `key`, following the culture fallback chain.
    pub fn template(&self, culture: &str, key: &str) -> Option<&str> {
        let language = language_of(culture);
        let candidates = [culture, language.as_str(), FALLBACK_CULTURE];

        candidates
            .iter()
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| {
                self.lang
                    .get(*candidate)
                    .and_then(|messages| messages.get(key))
                    .map(String::as_str)
            })
    }

    /// Localized, color-tagged and formatted text for `key`.
    ///
    /// # Examples
    /// ```
    /// use cs2_menu_text::i18n::{LangTable, Localizer};
    ///
    /// let mut lang = LangTable::new();
    /// lang.entry("en".into()).or_default().insert("Next".into(), "Next {0}".into());
    /// lang.entry("tr".into()).or_default().insert("Next".into(), "Sonraki {0}".into());
    ///
    /// let localizer = Localizer::new(lang);
    /// assert_eq!(localizer.localize("tr-TR", "Next", &["2"]), "Sonraki 2");
    /// assert_eq!(localizer.localize("de-DE", "Next", &["2"]), "Next 2");
    /// assert_eq!(localizer.localize("de-DE", "Missing", &["2"]), "Missing");
    /// ```
    pub fn localize<S: AsRef<str>>(&self, culture: &str, key: &str, args: &[S]) -> String {
        match self.template(culture, key) {
            Some(template) => format_positional(&replace_color_tags(template), args),
            None => {
                log::debug!("No translation for '{}' in culture '{}'", key, culture);
                key.to_string()
            }
        }
    }
}

/// Lower-cased language part of a culture name: `pt-BR` becomes `pt`.
///
/// # Examples
/// ```
/// use cs2_menu_text::i18n::language_of;
///
/// assert_eq!(language_of("pt-BR"), "pt");
/// assert_eq!(language_of("zh_Hans"), "zh");
/// assert_eq!(language_of("EN"), "en");
/// ```
pub fn language_of(culture: &str) -> String {
    culture
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}
