pub mod commit;
pub mod pattern;
pub mod push;
pub mod repository;
pub mod status;

use std::collections::BTreeMap;

use git2::Oid;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// State of one side (index or worktree) of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Unmodified,
    Untracked,
    Modified,
    Added,
    Deleted,
    Renamed,
    TypeChanged,
    UpdatedButUnmerged,
}

/// Index and worktree state of a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub staging: FileState,
    pub worktree: FileState,
}

/// Repository-relative path → status, ordered by path
pub type WorktreeStatus = BTreeMap<String, FileStatus>;

/// Commit author; also used as committer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A reference after following symbolic links
///
/// # Fields
/// - `name`: full name, e.g. `refs/heads/main` (or `HEAD` when detached)
/// - `oid`: the commit it points at
/// - `branch`: short branch name when `name` is a local branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    pub name: String,
    pub oid: Oid,
    pub branch: Option<String>,
}

/// Upstream recorded in `branch.<name>.remote` / `branch.<name>.merge`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upstream {
    pub remote: Option<String>,
    pub merge: Option<String>,
}

/// Repository primitives used by the commit and push steps
///
/// Main implementation: [`GitRepository`](repository::GitRepository).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// Current status of every non-ignored path that differs from HEAD
    ///
    /// Untracked directories are expanded into their files.
    fn status(&self) -> Result<WorktreeStatus>;

    /// Stage one path into the index
    ///
    /// `worktree` is the path's worktree state: `Deleted` removes the entry,
    /// anything else adds the worktree content. The index is written out.
    fn stage(&self, path: &str, worktree: FileState) -> Result<()>;

    /// Commit the index on top of HEAD with the current time
    fn commit(&self, author: &Author, message: &str) -> Result<Oid>;

    /// Resolve a full or short reference name to a direct reference
    fn resolve_reference(&self, name: &str) -> Result<ResolvedRef>;

    /// Upstream configuration of a local branch (fields are `None` when unset)
    fn branch_upstream(&self, branch: &str) -> Result<Upstream>;

    /// Fail unless `name` is a configured remote
    fn ensure_remote(&self, name: &str) -> Result<()>;

    /// Target of a reference, `None` if it does not exist
    fn reference_target(&self, name: &str) -> Result<Option<Oid>>;

    /// Push a single ref-spec to `remote`, authenticating with `token`
    fn push(&self, remote: &str, refspec: &str, token: &str) -> Result<()>;
}
