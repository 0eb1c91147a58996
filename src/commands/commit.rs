use git2::Oid;

use crate::commands::options::PushOptions;
use crate::error::{AutopushError, Result};
use crate::git::pattern::PatternSet;
use crate::git::{FileState, FileStatus, GitOperations, WorktreeStatus};

/// Whether a path reported by the status scan gets staged
///
/// - untracked: only when it matches a pattern
/// - unmodified or unmerged: never
/// - anything else: when no patterns are set, or one matches
pub fn should_stage(path: &str, status: &FileStatus, patterns: &PatternSet) -> bool {
    match status.worktree {
        FileState::Untracked => patterns.matches_any(path),
        FileState::Unmodified | FileState::UpdatedButUnmerged => false,
        _ => patterns.is_empty() || patterns.matches_any(path),
    }
}

/// Whether the index holds anything to commit
pub fn has_staged_changes(status: &WorktreeStatus) -> bool {
    status.values().any(|s| {
        !matches!(
            s.staging,
            FileState::Unmodified | FileState::Untracked | FileState::UpdatedButUnmerged
        )
    })
}

/// Stage every selected path, returning them in order
///
/// Stops at the first failure; paths staged before it stay in the index.
pub fn stage_changes(git: &dyn GitOperations, patterns: &PatternSet) -> Result<Vec<String>> {
    if patterns.is_empty() {
        tracing::debug!("committing all updated tracked files");
    } else {
        tracing::debug!(
            "committing files matching patterns {:?}",
            patterns.iter().collect::<Vec<_>>()
        );
    }

    let status = git.status()?;
    let mut staged = Vec::new();
    for (path, file) in &status {
        if should_stage(path, file, patterns) {
            tracing::debug!("adding {} to index", path);
            git.stage(path, file.worktree)?;
            staged.push(path.clone());
        }
    }
    Ok(staged)
}

/// Stage selected files and commit them
///
/// Returns the new commit, or `None` when nothing ended up staged and
/// `fail_if_empty` is off.
pub fn run(options: &PushOptions, git: &dyn GitOperations) -> Result<Option<Oid>> {
    stage_changes(git, &options.commit_files)?;

    tracing::debug!("getting worktree status");
    let status = git.status()?;
    if !has_staged_changes(&status) {
        if options.fail_if_empty {
            return Err(AutopushError::NothingToCommit);
        }
        tracing::debug!("no modified files, skipping commit");
        return Ok(None);
    }

    tracing::debug!("committing changes");
    let oid = git.commit(&options.author, &options.commit_message)?;
    tracing::info!("created commit {}", oid);
    Ok(Some(oid))
}
