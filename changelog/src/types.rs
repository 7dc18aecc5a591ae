use crate::error::ChangelogError;
use indexmap::IndexMap;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Entries of one version by section title, in the order sections first appeared.
/// The uncategorized section is keyed by the empty string.
pub type Sections = IndexMap<String, Vec<String>>;

/// Reference definitions (`[id]: url`) keyed by lowercase id
pub type LinkTable = IndexMap<String, String>;

/// Where a version heading points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLink {
    /// A URL, either inline or already resolved from the link table
    Url(String),
    /// A `[name][id]` reference whose id was not found in the link table
    Reference(String),
}
