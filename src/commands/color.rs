use clap::Args;

use crate::color::Rgb;

/// CLI command for parsing a hex color.
#[derive(Args, Debug)]
pub struct ColorCommand {
    /// Color in `#RRGGBB` form
    pub hex: String,
}

impl ColorCommand {
    pub fn execute(&self) -> Result<Rgb, String> {
        Rgb::from_hex(&self.hex).map_err(|e| format!("invalid color: {}", e))
    }
}
