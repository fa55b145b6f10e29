//! Markup helpers for menu text.
//!
//! Menu titles and options are rendered by the game's HTML-ish panel, so every
//! length limit has to count what the player sees, not the tags around it.

pub mod tags;
pub mod truncate;

pub use tags::{strip_tags, visible_len, TagKind};
pub use truncate::truncate;
