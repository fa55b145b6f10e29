use clap::Args;

use crate::markup;

/// CLI command for cutting markup to a visible-character budget.
#[derive(Args, Debug)]
pub struct TruncateCommand {
    /// Maximum visible characters; zero or less prints the markup unchanged
    #[arg(short, long, allow_negative_numbers = true)]
    pub max: i64,

    /// Markup to truncate
    pub markup: String,
}

impl TruncateCommand {
    pub fn execute(&self) -> Result<String, String> {
        Ok(markup::truncate(&self.markup, self.max))
    }
}
