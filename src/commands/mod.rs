//! CLI subcommands.

pub mod color;
pub mod localize;
pub mod strip;
pub mod truncate;
