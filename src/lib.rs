//! Text helpers for Counter-Strike 2 server menus.
//!
//! Menus render HTML-like markup (`<font color='...'>`, `<b>`, `<br/>`) and chat
//! strings with color tags. This crate keeps those strings well-formed when they
//! are cut to fit, resolves translations with culture fallback, and loads the
//! plugin's TOML configuration.

pub mod color;
pub mod commands;
pub mod config;
pub mod i18n;
pub mod markup;

pub use color::{chat_color, replace_color_tags, ColorError, Rgb};
pub use config::{get_or_default, load_config, ConfigError, MenuConfig, MenuSettings};
pub use i18n::{format_positional, LangTable, Localizer};
pub use markup::{strip_tags, truncate, visible_len};
