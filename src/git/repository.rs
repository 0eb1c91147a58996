use std::path::Path;

use git2::{Commit, ErrorCode, Oid, Repository, StatusOptions};

use crate::error::{AutopushError, Result};
use crate::git::status::file_status;
use crate::git::{
    Author, FileState, GitOperations, ResolvedRef, Upstream, WorktreeStatus, commit, push,
};

pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`
    ///
    /// Searches upwards like `git rev-parse --show-toplevel`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// HEAD commit, `None` on an unborn branch
    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn config_string(&self, key: &str) -> Result<Option<String>> {
        let config = self.repo.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl GitOperations for GitRepository {
    fn status(&self) -> Result<WorktreeStatus> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .include_unmodified(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut result = WorktreeStatus::new();
        for entry in statuses.iter() {
            let Some(path) = entry.path() else {
                tracing::warn!(
                    "skipping non UTF-8 path {}",
                    String::from_utf8_lossy(entry.path_bytes())
                );
                continue;
            };
            result.insert(path.to_string(), file_status(entry.status()));
        }
        Ok(result)
    }

    fn stage(&self, path: &str, worktree: FileState) -> Result<()> {
        let mut index = self.repo.index()?;
        match worktree {
            FileState::Deleted => index.remove_path(Path::new(path))?,
            _ => index.add_path(Path::new(path))?,
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, author: &Author, message: &str) -> Result<Oid> {
        let signature = commit::signature_now(author)?;

        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = self.head_commit()?;
        let parents: Vec<&Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(oid)
    }

    fn resolve_reference(&self, name: &str) -> Result<ResolvedRef> {
        let reference = match self.repo.find_reference(name) {
            Ok(reference) => reference,
            Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec => {
                self.repo.resolve_reference_from_short_name(name)?
            }
            Err(e) => return Err(e.into()),
        };
        let resolved = reference.resolve()?;

        let full_name = resolved
            .name()
            .ok_or_else(|| AutopushError::Config(format!("reference '{name}' is not valid UTF-8")))?
            .to_string();
        let oid = resolved.target().ok_or_else(|| {
            AutopushError::Config(format!("reference '{full_name}' has no target"))
        })?;
        let branch = full_name.strip_prefix("refs/heads/").map(str::to_string);

        Ok(ResolvedRef {
            name: full_name,
            oid,
            branch,
        })
    }

    fn branch_upstream(&self, branch: &str) -> Result<Upstream> {
        Ok(Upstream {
            remote: self.config_string(&format!("branch.{branch}.remote"))?,
            merge: self.config_string(&format!("branch.{branch}.merge"))?,
        })
    }

    fn ensure_remote(&self, name: &str) -> Result<()> {
        self.repo.find_remote(name)?;
        Ok(())
    }

    fn reference_target(&self, name: &str) -> Result<Option<Oid>> {
        let reference = match self.repo.find_reference(name) {
            Ok(reference) => reference,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(reference.resolve()?.target())
    }

    fn push(&self, remote: &str, refspec: &str, token: &str) -> Result<()> {
        push::push_refspec(&self.repo, remote, refspec, token)
    }
}
