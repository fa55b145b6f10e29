use clap::Args;

use crate::color::strip_chat_colors;
use crate::config::{load_config, resolve_config_path};

use std::path::PathBuf;

/// CLI command for resolving a translation key.
#[derive(Args, Debug)]
pub struct LocalizeCommand {
    /// Config file; defaults to $CS2_MENU_CONFIG or ./cs2-menu-text.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Player culture, e.g. pt-BR
    #[arg(short, long, default_value = "en")]
    pub culture: String,

    /// Keep chat color control characters in the output
    #[arg(long)]
    pub raw_colors: bool,

    /// Translation key
    pub key: String,

    /// Positional arguments for the template
    pub args: Vec<String>,
}

impl LocalizeCommand {
    pub fn execute(&self) -> Result<String, String> {
        let path = resolve_config_path(self.config.as_deref());
        let config = load_config(&path).map_err(|e| e.to_string())?;

        let text = config
            .localizer()
            .localize(&self.culture, &self.key, &self.args);

        if self.raw_colors {
            Ok(text)
        } else {
            Ok(strip_chat_colors(&text))
        }
    }
}
