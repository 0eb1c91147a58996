//! Mapping from libgit2 status flags to [`FileStatus`] pairs.

use git2::Status;

use super::{FileState, FileStatus};

/// Split libgit2's combined status bits into index and worktree states
///
/// Untracked paths report `Untracked` on both sides and conflicted paths
/// report `UpdatedButUnmerged` on both sides.
pub fn file_status(status: Status) -> FileStatus {
    if status.is_conflicted() {
        return FileStatus {
            staging: FileState::UpdatedButUnmerged,
            worktree: FileState::UpdatedButUnmerged,
        };
    }

    let staging = if status.is_index_new() {
        FileState::Added
    } else if status.is_index_modified() {
        FileState::Modified
    } else if status.is_index_deleted() {
        FileState::Deleted
    } else if status.is_index_renamed() {
        FileState::Renamed
    } else if status.is_index_typechange() {
        FileState::TypeChanged
    } else if status.is_wt_new() {
        FileState::Untracked
    } else {
        FileState::Unmodified
    };

    let worktree = if status.is_wt_new() {
        FileState::Untracked
    } else if status.is_wt_modified() {
        FileState::Modified
    } else if status.is_wt_deleted() {
        FileState::Deleted
    } else if status.is_wt_renamed() {
        FileState::Renamed
    } else if status.is_wt_typechange() {
        FileState::TypeChanged
    } else {
        FileState::Unmodified
    };

    FileStatus { staging, worktree }
}
