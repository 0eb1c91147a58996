use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutopushError>;

#[derive(Error, Debug)]
pub enum AutopushError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing added to commit")]
    NothingToCommit,

    /// The remote or the remote ref could not be derived for a reference
    #[error("no {what} configured for '{reference}'")]
    MissingUpstream {
        what: &'static str,
        reference: String,
    },

    #[error("push of '{reference}' rejected by remote: {reason}")]
    PushRejected { reference: String, reason: String },
}

impl AutopushError {
    /// Hint printed after the error message
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AutopushError::NothingToCommit => Some(
                "Check the 'commit-files' patterns, or set 'fail-if-empty' to false to allow runs without changes",
            ),
            AutopushError::MissingUpstream { what: "remote", .. } => {
                Some("Set the 'remote' input or configure an upstream with 'git branch --set-upstream-to'")
            }
            AutopushError::MissingUpstream { .. } => {
                Some("Set the 'remote-ref' input or configure an upstream with 'git branch --set-upstream-to'")
            }
            AutopushError::PushRejected { reason, .. }
                if reason.contains("fast-forward")
                    || reason.contains("fastforward")
                    || reason.contains("not present locally")
                    || reason.contains("fetch first") =>
            {
                Some("The remote has commits missing locally. Rebase the branch or set 'force' to true")
            }
            AutopushError::Git(e) if e.class() == git2::ErrorClass::Http => {
                Some("Check that the 'token' input grants write access to the repository")
            }
            AutopushError::Git(e) if e.code() == git2::ErrorCode::Auth => {
                Some("Check that the 'token' input grants write access to the repository")
            }
            _ => None,
        }
    }
}
