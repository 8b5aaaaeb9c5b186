//! CLI commands

pub mod export;
pub mod inspect;
pub mod show;
pub mod utils;
