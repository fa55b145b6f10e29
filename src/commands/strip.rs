use clap::Args;

use crate::markup;

/// CLI command for showing the visible text of markup.
#[derive(Args, Debug)]
pub struct StripCommand {
    /// Print the visible character count instead of the text
    #[arg(long)]
    pub count: bool,

    /// Markup to strip
    pub markup: String,
}

impl StripCommand {
    pub fn execute(&self) -> Result<String, String> {
        if self.count {
            Ok(markup::visible_len(&self.markup).to_string())
        } else {
            Ok(markup::strip_tags(&self.markup))
        }
    }
}
