use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

/// Matches the first version number inside a free-form version name.
///
/// Pre-releases are accepted in semver form (`1.0.0-beta.1`) and in the
/// compact form used by Python packages (`1.0.0b1`, `1.0rc2`, `1.0.dev3`).
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \b
        (?P<prefix>v)?
        (?P<release>\d+(?:\.\d+)*)
        (?:
            -(?P<semver>[0-9a-z]+(?:\.[0-9a-z-]+)*)
          | (?P<sep>[._-]?)(?P<label>alpha|beta|preview|pre|rc|a|b|c)(?P<joiner>[._-]?)(?P<number>\d+)?
        )?
        (?P<dev>[._-]?dev\d*)?
        (?P<build>\+[0-9a-z]+(?:\.[0-9a-z-]+)*)?
        ",
    )
    .expect("Failed to compile version pattern regex")
});

static COMPACT_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<label>[a-zA-Z]+)(?P<number>\d*)$")
        .expect("Failed to compile pre-release identifier regex")
});

/// Pre-release stages in the order a version moves through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Alpha,
    Beta,
    ReleaseCandidate,
}

/// The pre-release part of a version number, kept in the spelling it was written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub label: String,
    pub number: Option<u64>,
    separator: String,
    joiner: String,
    opaque: bool,
}

impl PreRelease {
    /// A fresh pre-release for `stage`, spelled like `hint` when there is one
    pub(crate) fn start(stage: Stage, hint: Option<&PreRelease>) -> Self {
        match hint.filter(|pre| !pre.opaque) {
            Some(pre) => Self {
                label: stage_label(stage, pre.uses_short_labels()).to_string(),
                number: Some(1),
                separator: pre.separator.clone(),
                joiner: pre.joiner.clone(),
                opaque: false,
            },
            None => Self {
                label: stage_label(stage, false).to_string(),
                number: Some(1),
                separator: "-".to_string(),
                joiner: ".".to_string(),
                opaque: false,
            },
        }
    }

    /// The stage this pre-release belongs to, if its label is a known one
    pub fn stage(&self) -> Option<Stage> {
        if self.opaque {
            return None;
        }
        match self.label.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Some(Stage::Alpha),
            "b" | "beta" => Some(Stage::Beta),
            "c" | "rc" | "pre" | "preview" => Some(Stage::ReleaseCandidate),
            _ => None,
        }
    }

    pub(crate) fn advance(&mut self) {
        self.number = Some(self.number.unwrap_or(0) + 1);
    }

    pub(crate) fn move_to(&mut self, stage: Stage) {
        self.label = stage_label(stage, self.uses_short_labels()).to_string();
        self.number = Some(1);
        self.opaque = false;
    }

    fn uses_short_labels(&self) -> bool {
        match self.label.to_ascii_lowercase().as_str() {
            "a" | "b" | "c" => true,
            "alpha" | "beta" => false,
            _ => self.separator.is_empty(),
        }
    }

    fn from_semver(raw: &str) -> Option<Self> {
        // semver rejects identifiers like leading-zero numbers
        semver::Prerelease::new(raw).ok()?;

        let identifiers: Vec<&str> = raw.split('.').collect();
        let (label, joiner, number, opaque) = match identifiers.as_slice() {
            [label, number]
                if label.chars().all(|c| c.is_ascii_alphabetic())
                    && number.chars().all(|c| c.is_ascii_digit()) =>
            {
                (label.to_string(), ".", number.parse::<u64>().ok(), false)
            }
            [single] => match COMPACT_IDENTIFIER.captures(single) {
                Some(caps) => (
                    caps["label"].to_string(),
                    "",
                    caps["number"].parse::<u64>().ok(),
                    false,
                ),
                None => (raw.to_string(), "", None, true),
            },
            _ => (raw.to_string(), "", None, true),
        };

        Some(Self {
            label,
            number,
            separator: "-".to_string(),
            joiner: joiner.to_string(),
            opaque,
        })
    }

    fn from_compact(caps: &Captures<'_>) -> Option<Self> {
        let label = caps.name("label")?.as_str().to_string();
        let number = match caps.name("number") {
            Some(m) => Some(m.as_str().parse::<u64>().ok()?),
            None => None,
        };
        Some(Self {
            label,
            number,
            separator: caps.name("sep").map_or("", |m| m.as_str()).to_string(),
            joiner: caps.name("joiner").map_or("", |m| m.as_str()).to_string(),
            opaque: false,
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.separator, self.label)?;
        if let Some(number) = self.number {
            write!(f, "{}{}", self.joiner, number)?;
        }
        Ok(())
    }
}

fn stage_label(stage: Stage, short: bool) -> &'static str {
    match (stage, short) {
        (Stage::Alpha, true) => "a",
        (Stage::Alpha, false) => "alpha",
        (Stage::Beta, true) => "b",
        (Stage::Beta, false) => "beta",
        (Stage::ReleaseCandidate, _) => "rc",
    }
}

/// A version number found inside a version name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber {
    pub prefix: Option<String>,
    pub release: Vec<u64>,
    pub pre: Option<PreRelease>,
    pub dev: Option<String>,
    pub build: Option<String>,
}

impl VersionNumber {
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}")?;
        }
        let release: Vec<String> = self.release.iter().map(u64::to_string).collect();
        write!(f, "{}", release.join("."))?;
        if let Some(pre) = &self.pre {
            write!(f, "{pre}")?;
        }
        if let Some(dev) = &self.dev {
            write!(f, "{dev}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "{build}")?;
        }
        Ok(())
    }
}

/// Where a version number sits inside a name, and what it parsed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    pub start: usize,
    pub end: usize,
    pub version: VersionNumber,
}

/// Finds the first version number in `name`
pub fn extract_version(name: &str) -> Option<VersionMatch> {
    let caps = VERSION_PATTERN.captures(name)?;
    let whole = caps.get(0)?;
    let release_match = caps.name("release")?;

    let release = release_match
        .as_str()
        .split('.')
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()
        .ok()?;

    let prefix = caps.name("prefix").map(|m| m.as_str().to_string());

    let pre = if let Some(raw) = caps.name("semver") {
        match PreRelease::from_semver(raw.as_str()) {
            Some(pre) => Some(pre),
            None => {
                // not a valid semver pre-release, the version ends at its release numbers
                return Some(VersionMatch {
                    start: whole.start(),
                    end: release_match.end(),
                    version: VersionNumber {
                        prefix,
                        release,
                        pre: None,
                        dev: None,
                        build: None,
                    },
                });
            }
        }
    } else if caps.name("label").is_some() {
        Some(PreRelease::from_compact(&caps)?)
    } else {
        None
    };

    Some(VersionMatch {
        start: whole.start(),
        end: whole.end(),
        version: VersionNumber {
            prefix,
            release,
            pre,
            dev: caps.name("dev").map(|m| m.as_str().to_string()),
            build: caps.name("build").map(|m| m.as_str().to_string()),
        },
    })
}

/// Returns true if `name` carries a final (non pre-release) version number
pub fn is_release(name: &str) -> bool {
    if let Ok(parsed) = semver::Version::parse(name.trim_start_matches(['v', 'V'])) {
        return parsed.pre.is_empty();
    }

    extract_version(name).is_some_and(|found| !found.version.is_prerelease())
}
