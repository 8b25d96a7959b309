//! CLI subcommands.

pub mod demo;
pub mod menu;
pub mod reserve;
