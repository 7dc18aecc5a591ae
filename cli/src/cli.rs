use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

use version::{PreSegment, ReleaseSegment};

#[derive(Parser)]
#[command(name = "yaclog")]
#[command(author, version, about = "Manipulate markdown changelog files")]
pub struct Cli {
    /// Location of the changelog file
    #[arg(
        long,
        global = true,
        env = "YACLOG_PATH",
        default_value = changelog::DEFAULT_FILE_NAME
    )]
    pub path: PathBuf,

    /// Enable verbose output with additional information
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true, default_value_t = false)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new changelog file
    Init,

    /// Reformat the changelog file
    Format,

    /// Show changes from the changelog file
    Show(ShowArgs),

    /// Modify version tags
    Tag(TagArgs),

    /// Add entries to the changelog
    Entry(EntryArgs),

    /// Release versions in the changelog and increment their version numbers
    Release(ReleaseArgs),
}

#[derive(Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("part").args(["full", "name", "body", "header"])))]
pub struct ShowArgs {
    /// Versions to show. If not given, the most recent version is used
    #[arg(value_name = "VERSIONS")]
    pub versions: Vec<String>,

    /// Show the entire changelog
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Display as markdown instead of plain text
    #[arg(short, long, default_value_t = false)]
    pub markdown: bool,

    /// Show version header and body (default)
    #[arg(short, long, default_value_t = false)]
    pub full: bool,

    /// Show only the version name
    #[arg(short, long, default_value_t = false)]
    pub name: bool,

    /// Show only the version body
    #[arg(short, long, default_value_t = false)]
    pub body: bool,

    /// Show only the version header
    #[arg(short = 'H', long, default_value_t = false)]
    pub header: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TagArgs {
    /// Tag to add or remove
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Version to modify. If not given, the most recent version is used
    #[arg(value_name = "VERSION")]
    pub version: Option<String>,

    /// Delete the tag instead of adding it
    #[arg(short, long, default_value_t = false)]
    pub delete: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Section to append to. If not given, entries are uncategorized
    #[arg(value_name = "SECTION", default_value = "")]
    pub section: String,

    /// Version to append to. If not given, the most recent unreleased version
    /// is used, or a new one is added
    #[arg(value_name = "VERSION")]
    pub version: Option<String>,

    /// Bullet points to add
    #[arg(short, long = "bullet", value_name = "TEXT")]
    pub bullets: Vec<String>,

    /// Paragraphs to add
    #[arg(short, long = "paragraph", value_name = "TEXT")]
    pub paragraphs: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("release_segment").args(["major", "minor", "patch"])))]
#[command(group(ArgGroup::new("pre_segment").args(["alpha", "beta", "rc", "full"])))]
pub struct ReleaseArgs {
    /// The new version number to use
    #[arg(short = 'v', long = "version", value_name = "NAME")]
    pub version_name: Option<String>,

    /// Increment major version number
    #[arg(short = 'M', long, default_value_t = false)]
    pub major: bool,

    /// Increment minor version number
    #[arg(short, long, default_value_t = false)]
    pub minor: bool,

    /// Increment patch number
    #[arg(short, long, default_value_t = false)]
    pub patch: bool,

    /// Increment alpha version number
    #[arg(short, long, default_value_t = false)]
    pub alpha: bool,

    /// Increment beta version number
    #[arg(short, long, default_value_t = false)]
    pub beta: bool,

    /// Increment release candidate version number
    #[arg(short, long, default_value_t = false)]
    pub rc: bool,

    /// Clear the pre-release value, creating a full release
    #[arg(short, long, default_value_t = false)]
    pub full: bool,

    /// Create a git commit tagged with the new version number. If there are
    /// no changes to commit, the current commit is tagged instead
    #[arg(short, long, default_value_t = false)]
    pub commit: bool,
}

impl ReleaseArgs {
    pub fn release_segment(&self) -> Option<ReleaseSegment> {
        match (self.major, self.minor, self.patch) {
            (true, _, _) => Some(ReleaseSegment::Major),
            (_, true, _) => Some(ReleaseSegment::Minor),
            (_, _, true) => Some(ReleaseSegment::Patch),
            _ => None,
        }
    }

    pub fn pre_segment(&self) -> Option<PreSegment> {
        match (self.alpha, self.beta, self.rc, self.full) {
            (true, ..) => Some(PreSegment::Alpha),
            (_, true, ..) => Some(PreSegment::Beta),
            (_, _, true, _) => Some(PreSegment::Rc),
            (.., true) => Some(PreSegment::Full),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("yaclog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&["--path", "docs/CHANGES.md", "-y", "format"]);
        assert_eq!(cli.path, PathBuf::from("docs/CHANGES.md"));
        assert!(cli.yes);
        assert!(matches!(cli.command, Commands::Format));
    }

    #[test]
    fn test_entry_arguments() {
        let cli = parse(&["entry", "added", "-b", "one", "-b", "two", "-p", "intro"]);
        let Commands::Entry(args) = cli.command else {
            panic!("expected entry command");
        };
        assert_eq!(args.section, "added");
        assert_eq!(args.version, None);
        assert_eq!(args.bullets, vec!["one", "two"]);
        assert_eq!(args.paragraphs, vec!["intro"]);
    }

    #[test]
    fn test_release_segments() {
        let cli = parse(&["release", "-m", "-r", "-c"]);
        let Commands::Release(args) = cli.command else {
            panic!("expected release command");
        };
        assert_eq!(args.release_segment(), Some(ReleaseSegment::Minor));
        assert_eq!(args.pre_segment(), Some(PreSegment::Rc));
        assert!(args.commit);
    }

    #[test]
    fn test_release_version_name() {
        let cli = parse(&["release", "-v", "2.0.0"]);
        let Commands::Release(args) = cli.command else {
            panic!("expected release command");
        };
        assert_eq!(args.version_name.as_deref(), Some("2.0.0"));
        assert_eq!(args.release_segment(), None);
    }

    #[test]
    fn test_conflicting_segments_rejected() {
        assert!(Cli::try_parse_from(["yaclog", "release", "-M", "-p"]).is_err());
        assert!(Cli::try_parse_from(["yaclog", "release", "-a", "-f"]).is_err());
        assert!(Cli::try_parse_from(["yaclog", "show", "-n", "-b"]).is_err());
    }
}
