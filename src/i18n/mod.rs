//! Translation lookup for menu strings.

pub mod format;
pub mod localizer;

pub use format::format_positional;
pub use localizer::{language_of, LangTable, Localizer, FALLBACK_CULTURE};
