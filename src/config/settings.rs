//! Typed menu settings read from `[Settings]`.

use crate::color::Rgb;
use crate::config::value::get_or_default;

/// Menu settings with their defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    /// Menu type opened when a caller does not pick one.
    pub default_menu: String,
    /// Visible characters allowed in a title; `0` disables truncation.
    pub max_title_length: i64,
    /// Visible characters allowed in an option label; `0` disables truncation.
    pub max_option_length: i64,
    pub title_color: Rgb,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            default_menu: "ScreenMenu".to_string(),
            max_title_length: 0,
            max_option_length: 0,
            title_color: Rgb::WHITE,
        }
    }
}

impl MenuSettings {
    pub fn from_table(table: &toml::Table) -> Self {
        let defaults = Self::default();

        let title_color = match get_or_default::<Option<String>>(table, "TitleColor", None) {
            Some(hex) => Rgb::from_hex(&hex).unwrap_or_else(|err| {
                log::warn!("Invalid TitleColor, using {}: {}", defaults.title_color, err);
                defaults.title_color
            }),
            None => defaults.title_color,
        };

        Self {
            default_menu: get_or_default(table, "DefaultMenu", defaults.default_menu),
            max_title_length: get_or_default(table, "MaxTitleLength", defaults.max_title_length),
            max_option_length: get_or_default(
                table,
                "MaxOptionLength",
                defaults.max_option_length,
            ),
            title_color,
        }
    }

    /// Title markup cut to `max_title_length`.
    pub fn fit_title(&self, title: &str) -> String {
        crate::markup::truncate(title, self.max_title_length)
    }

    /// Option markup cut to `max_option_length`.
    pub fn fit_option(&self, option: &str) -> String {
        crate::markup::truncate(option, self.max_option_length)
    }
}
