//! Plugin configuration loaded from TOML.
//!
//! The file carries free-form menu settings under `[Settings]` and translation
//! tables under `[Lang.<culture>]`. Settings are kept as a raw TOML table and
//! read through [`get_or_default`], so unknown or mistyped values fall back to
//! defaults instead of failing the whole load.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::i18n::{LangTable, Localizer};

pub mod settings;
pub mod value;

pub use settings::MenuSettings;
pub use value::get_or_default;

/// Environment variable that overrides the default config location.
pub const CONFIG_PATH_ENV: &str = "CS2_MENU_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "cs2-menu-text.toml";

/// Errors produced while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file missing: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read configuration {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuConfig {
    #[serde(rename = "Settings", default)]
    pub settings: toml::Table,

    #[serde(rename = "Lang", default)]
    pub lang: LangTable,
}

impl MenuConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Examples
    /// ```
    /// use cs2_menu_text::config::MenuConfig;
    ///
    /// let config = MenuConfig::from_toml_str("[Lang.en]\nExit = \"Exit\"\n").unwrap();
    /// assert_eq!(config.localizer().localize("fr", "Exit", &[] as &[&str]), "Exit");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Typed view of `[Settings]`.
    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings::from_table(&self.settings)
    }

    /// Localizer over the `[Lang.*]` tables.
    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.lang.clone())
    }
}

/// Pick the config path: explicit argument, then `CS2_MENU_CONFIG`, then the
/// default file name in the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(from_env) = std::env::var(CONFIG_PATH_ENV) {
        if !from_env.is_empty() {
            return PathBuf::from(from_env);
        }
    }

    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<MenuConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = MenuConfig::from_toml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded {} with {} language table(s)",
        path.display(),
        config.lang.len()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"
[Settings]
DefaultMenu = "WasdMenu"
MaxTitleLength = 24
TitleColor = "#00FF00"

[Lang.en]
Next = "Next {0}"
Exit = "{Red}Exit"

[Lang.tr]
Next = "Sonraki {0}"
"##;

    #[test]
    fn test_from_toml_str_reads_sections() {
        let config = MenuConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.lang.len(), 2);
        assert_eq!(config.lang["tr"]["Next"], "Sonraki {0}");
        assert_eq!(
            get_or_default(&config.settings, "DefaultMenu", String::new()),
            "WasdMenu"
        );
    }

    #[test]
    fn test_from_toml_str_empty_document() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert!(config.settings.is_empty());
        assert!(config.lang.is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_non_string_translation() {
        assert!(MenuConfig::from_toml_str("[Lang.en]\nNext = 5\n").is_err());
    }

    #[test]
    fn test_localizer_uses_lang_tables() {
        let config = MenuConfig::from_toml_str(SAMPLE).unwrap();
        let localizer = config.localizer();
        assert_eq!(localizer.localize("tr", "Next", &["2"]), "Sonraki 2");
        assert_eq!(localizer.localize("tr", "Exit", &[] as &[&str]), "\x07Exit");
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("menu.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.menu_settings().max_title_length, 24);
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[Lang.en\nNext = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve_config_path_prefers_explicit() {
        let explicit = Path::new("/etc/menu.toml");
        assert_eq!(resolve_config_path(Some(explicit)), explicit.to_path_buf());
    }
}
