//! nova-helper library
//!
//! Reads Nova Launcher backup archives and reconstructs where every app,
//! shortcut and folder is placed.
//!
//! This tool is not affiliated with or endorsed by TeslaCoil Software.
//! It only reads backup files you already have on your machine.

pub mod config;
pub mod nova;
