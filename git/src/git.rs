//! Just enough git to record a release: stage the changelog, commit it and
//! tag the result.

pub mod config;
pub mod error;
pub mod repository;

pub use config::{AuthorInfo, Config, RealGitConfig};
pub use error::{GitError, Result, ResultExt};
pub use repository::{RealGitRepository, Repository};
