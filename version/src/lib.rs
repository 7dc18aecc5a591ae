mod error;
mod increment;
mod parse;

pub use error::{Result, VersionError};
pub use increment::increment_version;
pub use parse::{PreRelease, Stage, VersionMatch, VersionNumber, extract_version, is_release};

/// Which release number to bump
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseSegment {
    Major,
    Minor,
    Patch,
}

impl ReleaseSegment {
    /// Position of the segment in a dotted release number
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }
}

/// Which pre-release stage to move to, or `Full` to leave pre-release entirely
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreSegment {
    Alpha,
    Beta,
    Rc,
    Full,
}

impl PreSegment {
    #[must_use]
    pub const fn stage(self) -> Option<Stage> {
        match self {
            Self::Alpha => Some(Stage::Alpha),
            Self::Beta => Some(Stage::Beta),
            Self::Rc => Some(Stage::ReleaseCandidate),
            Self::Full => None,
        }
    }
}
