use std::env;

/// Subset of the runner's default environment used in commit messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitHubContext {
    /// `GITHUB_WORKFLOW`
    pub workflow: String,
    /// `GITHUB_ACTION`
    pub action: String,
}

impl GitHubContext {
    /// Read from the environment; unset variables become empty strings
    pub fn from_env() -> Self {
        Self {
            workflow: env::var("GITHUB_WORKFLOW").unwrap_or_default(),
            action: env::var("GITHUB_ACTION").unwrap_or_default(),
        }
    }

    /// Message used when no `commit-message` input is given
    pub fn default_commit_message(&self) -> String {
        format!(
            "[Auto] Update generated from github workflow {}/{}",
            self.workflow, self.action
        )
    }
}
