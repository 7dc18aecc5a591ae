//! Reading, editing and writing markdown changelogs in the
//! [Keep a Changelog](https://keepachangelog.com) style.
//!
//! ```no_run
//! use changelog::Changelog;
//!
//! let mut changelog = Changelog::read("CHANGELOG.md")?;
//! if let Some(version) = changelog.current_version(Some(false), "Unreleased") {
//!     version.add_entry("- Support for reference links", "added");
//! }
//! changelog.write(None)?;
//! # Ok::<(), changelog::ChangelogError>(())
//! ```

mod config;
mod core;
mod entry;
mod error;
mod formatter;
pub mod header;
pub mod markdown;
mod parser;
mod types;
mod utils;

pub use config::{ChangelogConfig, DEFAULT_FILE_NAME, DEFAULT_HEADER, DEFAULT_UNRELEASED_NAME};
pub use crate::core::Changelog;
pub use entry::VersionEntry;
pub use error::ChangelogError;
pub use formatter::{
    ChangelogFormat, HeaderFormatter, MarkdownFormatter, PlainFormatter, SectionFormatter,
};
pub use parser::{ParsedChangelog, Parser};
pub use types::{LinkTable, Result, Sections, VersionLink};
pub use utils::title_case;
