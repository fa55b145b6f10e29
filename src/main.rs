use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::{Builder, Env};

use cs2_menu_text::color::Rgb;
use cs2_menu_text::commands::{
    color::ColorCommand, localize::LocalizeCommand, strip::StripCommand,
    truncate::TruncateCommand,
};

#[derive(Parser, Debug)]
#[command(
    name = "cs2-menu-text",
    author,
    version,
    about = "Text helpers for CS2 server menus",
    long_about = "Truncate menu markup, resolve translations and parse menu colors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cut markup to a visible-character budget, closing open tags
    Truncate(TruncateCommand),
    /// Print the visible text of markup
    Strip(StripCommand),
    /// Resolve a translation key for a culture
    Localize(LocalizeCommand),
    /// Parse a #RRGGBB color
    Color(ColorCommand),
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Truncate(cmd) => cmd.execute().map(|text| println!("{}", text)),
        Commands::Strip(cmd) => cmd.execute().map(|text| println!("{}", text)),
        Commands::Localize(cmd) => cmd.execute().map(|text| println!("{}", text)),
        Commands::Color(cmd) => cmd.execute().map(|rgb| print_color(&rgb)),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn print_color(rgb: &Rgb) {
    println!("{} {} {}", rgb.r, rgb.g, rgb.b);
    println!("{} {}", "██████".truecolor(rgb.r, rgb.g, rgb.b), rgb);
}
