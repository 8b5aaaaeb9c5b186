//! Nova launcher backup handling
//!
//! A processing pass runs one way: archive → rows ([`extract`]) → typed rows
//! and lookups ([`resolve`]) → sorted tables ([`classify`]) → output
//! ([`export`]). Every pass returns fresh values; nothing is kept between
//! passes.

pub mod classify;
pub mod collate;
pub mod error;
pub mod export;
pub mod extract;
pub mod labels;
pub mod model;
pub mod resolve;

use std::path::Path;

pub use classify::{EntryKind, Resolution, ResolvedEntry};
pub use error::{ErrorKind, NovaError};
pub use labels::Lang;

/// Read a backup file and resolve its layout in one pass
pub fn process_backup<P: AsRef<Path>>(path: P, lang: Lang) -> error::Result<Resolution> {
    let tables = extract::read_backup(path)?;
    classify::resolve(&tables, lang)
}
