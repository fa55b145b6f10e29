//! Color helpers: chat color control characters and `#RRGGBB` parsing.

pub mod chat;
pub mod hex;

pub use chat::{chat_color, replace_color_tags, strip_chat_colors, CHAT_COLORS};
pub use hex::{ColorError, Rgb};
