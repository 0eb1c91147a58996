//! Raw action inputs as supplied by the host.

use std::fmt;

use serde::Deserialize;

/// Inputs of the step, one field per `INPUT_<NAME>` variable
///
/// Every value is kept as the host's string; defaults and flag parsing happen
/// in [`PushOptions`](crate::commands::PushOptions).
///
/// # Example
/// ```yaml
/// - uses: actions-go/push@v1
///   with:
///     commit-files: "*.md,docs/*.html"
///     force: true
/// ```
#[derive(Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct ActionInputs {
    /// Local reference to push (default `HEAD`)
    #[serde(rename = "ref")]
    pub reference: Option<String>,

    pub remote: Option<String>,

    pub remote_ref: Option<String>,

    pub fail_if_empty: Option<String>,

    pub force: Option<String>,

    pub create_commit: Option<String>,

    /// Skip the push when the remote-tracking ref already matches
    pub skip_if_unchanged: Option<String>,

    pub commit_message: Option<String>,

    /// Comma-separated glob list
    pub commit_files: Option<String>,

    pub author_name: Option<String>,

    pub author_email: Option<String>,

    pub token: Option<String>,
}

impl ActionInputs {
    /// Trimmed value of an input, `None` when unset or blank
    pub fn value(input: &Option<String>) -> Option<&str> {
        input.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

// token stays out of logs
impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("reference", &self.reference)
            .field("remote", &self.remote)
            .field("remote_ref", &self.remote_ref)
            .field("fail_if_empty", &self.fail_if_empty)
            .field("force", &self.force)
            .field("create_commit", &self.create_commit)
            .field("skip_if_unchanged", &self.skip_if_unchanged)
            .field("commit_message", &self.commit_message)
            .field("commit_files", &self.commit_files)
            .field("author_name", &self.author_name)
            .field("author_email", &self.author_email)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
