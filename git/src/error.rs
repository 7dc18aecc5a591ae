use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("libgit2: {0}")]
    Git2(#[from] git2::Error),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository: {0}")]
    Repository(String),

    #[error("Missing git configuration: {0}")]
    MissingConfig(String),

    #[error("Path {0} is outside the repository work tree")]
    PathOutsideRepository(String),

    #[error("Tag already exists: {0}")]
    TagExists(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Message for the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Git2(e) => {
                // libgit2 appends "; class=..; code=.."
                let msg = e.to_string();
                let main = msg.split(';').next().unwrap_or(&msg).trim();
                format!("Git error: {main}")
            }
            Self::Io(e) => format!("I/O error: {e}"),
            Self::Repository(msg) => format!("Repository error: {msg}"),
            Self::MissingConfig(msg) => msg.clone(),
            Self::PathOutsideRepository(path) => {
                format!("{path} is not inside the git repository")
            }
            Self::TagExists(tag) => format!("A tag named {tag} already exists"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Wraps any error convertible to [`GitError`] with a description of the step
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;

    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: Into<GitError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let wrapped: GitError = err.into();
            wrapped.with_context(context())
        })
    }

    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.with_context(|| context)
    }
}
