//! Resolved step options
//!
//! Turns the raw string inputs into typed values with their defaults applied.
//!
//! # Example
//! ```
//! use autopush::commands::options::PushOptions;
//! use autopush::config::ActionInputs;
//! use autopush::host::GitHubContext;
//!
//! let inputs = ActionInputs {
//!     force: Some("TRUE".to_string()),
//!     commit_files: Some("*.md".to_string()),
//!     ..Default::default()
//! };
//! let options = PushOptions::resolve(&inputs, &GitHubContext::default());
//! assert!(options.force);
//! assert!(options.create_commit);
//! assert_eq!(options.reference, "HEAD");
//! ```

use std::fmt;

use crate::config::ActionInputs;
use crate::git::Author;
use crate::git::pattern::PatternSet;
use crate::host::GitHubContext;

pub const DEFAULT_REFERENCE: &str = "HEAD";
pub const DEFAULT_AUTHOR_NAME: &str = "ActionsGo Bot";
pub const DEFAULT_AUTHOR_EMAIL: &str = "actions-go@users.noreply.github.com";

/// Options for [`commands::run`](crate::commands::run)
///
/// # Fields
/// - `reference`: local reference to push (default `HEAD`)
/// - `remote`: remote name, `None` = the branch's configured remote
/// - `remote_ref`: destination ref, `None` = the branch's merge ref
/// - `fail_if_empty`: fail when nothing was staged (default `false`)
/// - `force`: prefix the ref-spec with `+` (default `false`)
/// - `create_commit`: stage and commit before pushing (default `true`)
/// - `skip_if_unchanged`: skip the push when the remote-tracking ref already
///   matches (default `true`)
/// - `commit_message`: default names the workflow and action
/// - `commit_files`: patterns to stage, empty = every changed tracked file
/// - `author`: commit author and committer
/// - `token`: password sent alongside [`TOKEN_USERNAME`](crate::git::push::TOKEN_USERNAME)
#[derive(Clone)]
pub struct PushOptions {
    pub reference: String,
    pub remote: Option<String>,
    pub remote_ref: Option<String>,
    pub fail_if_empty: bool,
    pub force: bool,
    pub create_commit: bool,
    pub skip_if_unchanged: bool,
    pub commit_message: String,
    pub commit_files: PatternSet,
    pub author: Author,
    pub token: String,
}

impl PushOptions {
    /// Apply defaults to raw inputs
    pub fn resolve(inputs: &ActionInputs, context: &GitHubContext) -> Self {
        let value = ActionInputs::value;
        let owned = |input: &Option<String>, default: &str| {
            value(input).unwrap_or(default).to_string()
        };

        Self {
            reference: owned(&inputs.reference, DEFAULT_REFERENCE),
            remote: value(&inputs.remote).map(str::to_string),
            remote_ref: value(&inputs.remote_ref).map(str::to_string),
            fail_if_empty: parse_flag(value(&inputs.fail_if_empty), false),
            force: parse_flag(value(&inputs.force), false),
            create_commit: parse_flag(value(&inputs.create_commit), true),
            skip_if_unchanged: parse_flag(value(&inputs.skip_if_unchanged), true),
            commit_message: value(&inputs.commit_message)
                .map(str::to_string)
                .unwrap_or_else(|| context.default_commit_message()),
            commit_files: PatternSet::parse(value(&inputs.commit_files).unwrap_or("")),
            author: Author {
                name: owned(&inputs.author_name, DEFAULT_AUTHOR_NAME),
                email: owned(&inputs.author_email, DEFAULT_AUTHOR_EMAIL),
            },
            token: value(&inputs.token).unwrap_or("").to_string(),
        }
    }
}

impl fmt::Debug for PushOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushOptions")
            .field("reference", &self.reference)
            .field("remote", &self.remote)
            .field("remote_ref", &self.remote_ref)
            .field("fail_if_empty", &self.fail_if_empty)
            .field("force", &self.force)
            .field("create_commit", &self.create_commit)
            .field("skip_if_unchanged", &self.skip_if_unchanged)
            .field("commit_message", &self.commit_message)
            .field("commit_files", &self.commit_files)
            .field("author", &self.author)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .finish()
    }
}

/// A flag is on only when its value is `true`, in any case
///
/// Unset flags take `default`; any other value is off.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    value.map_or(default, |v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context() -> GitHubContext {
        GitHubContext {
            workflow: "build".to_string(),
            action: "push".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let options = PushOptions::resolve(&ActionInputs::default(), &context());
        assert_eq!(options.reference, "HEAD");
        assert_eq!(options.remote, None);
        assert_eq!(options.remote_ref, None);
        assert!(!options.fail_if_empty);
        assert!(!options.force);
        assert!(options.create_commit);
        assert!(options.skip_if_unchanged);
        assert_eq!(
            options.commit_message,
            "[Auto] Update generated from github workflow build/push"
        );
        assert!(options.commit_files.is_empty());
        assert_eq!(options.author.name, "ActionsGo Bot");
        assert_eq!(options.author.email, "actions-go@users.noreply.github.com");
        assert_eq!(options.token, "");
    }

    #[test]
    fn test_explicit_values() {
        let inputs = ActionInputs {
            reference: Some("refs/heads/docs".to_string()),
            remote: Some(" upstream ".to_string()),
            remote_ref: Some("refs/heads/gh-pages".to_string()),
            commit_message: Some("docs: rebuild".to_string()),
            commit_files: Some("*.html, *.css".to_string()),
            author_name: Some("Docs Bot".to_string()),
            author_email: Some("docs@example.com".to_string()),
            token: Some("ghs_123".to_string()),
            ..Default::default()
        };
        let options = PushOptions::resolve(&inputs, &context());
        assert_eq!(options.reference, "refs/heads/docs");
        assert_eq!(options.remote.as_deref(), Some("upstream"));
        assert_eq!(options.remote_ref.as_deref(), Some("refs/heads/gh-pages"));
        assert_eq!(options.commit_message, "docs: rebuild");
        assert_eq!(
            options.commit_files.iter().collect::<Vec<_>>(),
            vec!["*.html", "*.css"]
        );
        assert_eq!(options.author.name, "Docs Bot");
        assert_eq!(options.token, "ghs_123");
    }

    #[test]
    fn test_blank_inputs_fall_back_to_defaults() {
        let inputs = ActionInputs {
            reference: Some("  ".to_string()),
            create_commit: Some("".to_string()),
            ..Default::default()
        };
        let options = PushOptions::resolve(&inputs, &context());
        assert_eq!(options.reference, "HEAD");
        assert!(options.create_commit);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("TRUE"), false));
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some("True"), false));
        assert!(!parse_flag(Some("FALSE"), true));
        assert!(!parse_flag(Some("yes"), true));
        assert!(!parse_flag(Some("1"), true));
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
    }

    #[test]
    fn test_flags_from_inputs() {
        let inputs = ActionInputs {
            fail_if_empty: Some("TRUE".to_string()),
            force: Some("true".to_string()),
            create_commit: Some("FALSE".to_string()),
            skip_if_unchanged: Some("no".to_string()),
            ..Default::default()
        };
        let options = PushOptions::resolve(&inputs, &context());
        assert!(options.fail_if_empty);
        assert!(options.force);
        assert!(!options.create_commit);
        assert!(!options.skip_if_unchanged);
    }

    #[test]
    fn test_debug_hides_token() {
        let inputs = ActionInputs {
            token: Some("ghs_secret".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", PushOptions::resolve(&inputs, &context()));
        assert!(!printed.contains("ghs_secret"));
    }
}
