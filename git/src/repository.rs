use std::path::{Path, PathBuf};

use crate::config::{Config, RealGitConfig};
use crate::error::{GitError, Result, ResultExt};
use git2::{ObjectType, Repository as GitRepository, Status, StatusOptions};

pub trait Repository {
    fn open_at(path: &Path) -> Result<Self>
    where
        Self: Sized;
    fn stage(&self, path: &Path) -> Result<()>;
    fn staged_changes(&self) -> Result<usize>;
    fn unstaged_changes(&self) -> Result<usize>;
    fn commit(&self, message: &str) -> Result<String>;
    fn head_short_id(&self) -> Result<String>;
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;
}

const INDEX_CHANGES: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

const WORKTREE_CHANGES: Status = Status::WT_NEW
    .union(Status::WT_MODIFIED)
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE);

pub struct RealGitRepository {
    repo: GitRepository,
}

impl RealGitRepository {
    fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| GitError::Repository("Repository has no work tree".to_string()))
    }

    // The index wants paths relative to the work tree
    fn relative_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let workdir = self.workdir()?.canonicalize()?;
        let absolute = path.canonicalize()?;
        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| GitError::PathOutsideRepository(path.display().to_string()))
    }

    fn count_statuses(&self, include_untracked: bool, mask: Status) -> Result<usize> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(include_untracked)
            .recurse_untracked_dirs(include_untracked);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .context("Failed to get repository status")?;

        Ok(statuses
            .iter()
            .filter(|entry| entry.status().intersects(mask))
            .count())
    }

    fn author_signature(&self) -> Result<git2::Signature<'static>> {
        RealGitConfig::from_repository(&self.repo)?
            .author()?
            .signature()
    }
}

impl Repository for RealGitRepository {
    fn open_at(path: &Path) -> Result<Self> {
        let repo = GitRepository::discover(path).map_err(|e| {
            GitError::Repository(format!("Failed to discover git repository: {e}"))
        })?;
        Ok(Self { repo })
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let relative = self.relative_path(path)?;
        let mut index = self.repo.index()?;
        index
            .add_path(&relative)
            .with_context(|| format!("Failed to stage {}", relative.display()))?;
        index.write()?;
        Ok(())
    }

    fn staged_changes(&self) -> Result<usize> {
        self.count_statuses(false, INDEX_CHANGES)
    }

    fn unstaged_changes(&self) -> Result<usize> {
        self.count_statuses(true, WORKTREE_CHANGES)
    }

    fn commit(&self, message: &str) -> Result<String> {
        let signature = self.author_signature()?;

        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        // An unborn HEAD means this is the first commit
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .context("Failed to create commit")?;

        self.head_short_id()
    }

    fn head_short_id(&self) -> Result<String> {
        let commit = self
            .repo
            .head()
            .context("Failed to get HEAD")?
            .peel_to_commit()?;
        let short = commit.as_object().short_id()?;
        short
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| GitError::Repository("Invalid commit id".to_string()))
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        if self
            .repo
            .find_reference(&format!("refs/tags/{name}"))
            .is_ok()
        {
            return Err(GitError::TagExists(name.to_string()));
        }

        let signature = self.author_signature()?;
        let target = self
            .repo
            .head()
            .context("Failed to get HEAD")?
            .peel(ObjectType::Commit)?;

        self.repo
            .tag(name, &target, &signature, message, false)
            .with_context(|| format!("Failed to create tag {name}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, RealGitRepository) {
        let dir = TempDir::new().unwrap();
        let repo = GitRepository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let wrapped = RealGitRepository::open_at(dir.path()).unwrap();
        (dir, wrapped)
    }

    #[test]
    fn test_stage_and_commit() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();

        assert_eq!(repo.unstaged_changes().unwrap(), 1);
        assert_eq!(repo.staged_changes().unwrap(), 0);

        repo.stage(Path::new("CHANGELOG.md")).unwrap();
        assert_eq!(repo.staged_changes().unwrap(), 1);
        assert_eq!(repo.unstaged_changes().unwrap(), 0);

        let id = repo.commit("Version 1.0.0").unwrap();
        assert!(!id.is_empty());
        assert_eq!(id, repo.head_short_id().unwrap());
        assert_eq!(repo.staged_changes().unwrap(), 0);

        let raw = GitRepository::open(dir.path()).unwrap();
        let head = raw.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("Version 1.0.0"));
        assert_eq!(head.author().name(), Some("Test User"));
    }

    #[test]
    fn test_stage_absolute_path() {
        let (dir, repo) = init_repo();
        let file = dir.path().join("notes.md");
        fs::write(&file, "notes").unwrap();

        repo.stage(&file).unwrap();
        assert_eq!(repo.staged_changes().unwrap(), 1);
    }

    #[test]
    fn test_stage_outside_repository() {
        let (_dir, repo) = init_repo();
        let other = TempDir::new().unwrap();
        let file = other.path().join("elsewhere.md");
        fs::write(&file, "x").unwrap();

        let err = repo.stage(&file).unwrap_err();
        assert!(matches!(err, GitError::PathOutsideRepository(_)));
    }

    #[test]
    fn test_annotated_tag() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();
        repo.stage(Path::new("CHANGELOG.md")).unwrap();
        repo.commit("initial").unwrap();

        repo.create_tag("1.0.0", "ADDED:\n\n- everything").unwrap();

        let raw = GitRepository::open(dir.path()).unwrap();
        let tag = raw
            .find_reference("refs/tags/1.0.0")
            .unwrap()
            .peel_to_tag()
            .unwrap();
        assert_eq!(tag.message(), Some("ADDED:\n\n- everything"));

        let err = repo.create_tag("1.0.0", "again").unwrap_err();
        assert!(matches!(err, GitError::TagExists(ref t) if t == "1.0.0"));
    }
}
