//! The commit-and-push step.
//!
//! # Modules
//! - `options` - Typed step options with defaults.
//! - `commit` - Selective staging and the commit decision.
//! - `push` - Target resolution, redundancy check and push.
//!
//! # Flow
//! ```text
//! resolve target ─> [stage + commit] ─> compare with remote-tracking ref ─> push
//! ```

/// Selective staging and commit.
pub mod commit;
/// Typed step options.
pub mod options;
/// Reference resolution and push.
pub mod push;

pub use options::PushOptions;
pub use push::{PushOutcome, PushTarget};

use std::path::Path;

use git2::Oid;

use crate::error::Result;
use crate::git::{GitOperations, repository::GitRepository};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Commit created by this run, if any
    pub commit: Option<Oid>,
    pub push: PushOutcome,
}

/// Open the repository at `path` and run the step
pub fn run(options: &PushOptions, path: &Path) -> Result<RunReport> {
    let repo = GitRepository::open(path)?;
    run_with_deps(options, &repo)
}

/// Run the step against any [`GitOperations`] implementation
///
/// The local reference and its upstream are resolved before committing, so
/// a bad `ref` input fails without touching the index.
pub fn run_with_deps(options: &PushOptions, git: &dyn GitOperations) -> Result<RunReport> {
    let target = push::resolve_target(options, git)?;

    let commit = if options.create_commit {
        commit::run(options, git)?
    } else {
        None
    };

    let push = push::run(options, git, &target)?;
    Ok(RunReport { commit, push })
}
