use crate::commands::options::PushOptions;
use crate::error::{AutopushError, Result};
use crate::git::push::{refspec, remote_tracking_name};
use crate::git::{GitOperations, ResolvedRef};

/// Where the local reference goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub local: ResolvedRef,
    pub remote: String,
    pub remote_ref: String,
}

/// What the push step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// Remote-tracking ref already at the local commit; nothing was sent
    UpToDate,
}

/// Resolve the local reference and where it is pushed to
///
/// Inputs win over the branch's upstream configuration.
pub fn resolve_target(options: &PushOptions, git: &dyn GitOperations) -> Result<PushTarget> {
    let local = git.resolve_reference(&options.reference)?;
    let upstream = match &local.branch {
        Some(branch) => git.branch_upstream(branch)?,
        None => Default::default(),
    };

    let remote = options
        .remote
        .clone()
        .or(upstream.remote)
        .ok_or_else(|| AutopushError::MissingUpstream {
            what: "remote",
            reference: local.name.clone(),
        })?;
    let remote_ref = options
        .remote_ref
        .clone()
        .or(upstream.merge)
        .ok_or_else(|| AutopushError::MissingUpstream {
            what: "remote ref",
            reference: local.name.clone(),
        })?;

    Ok(PushTarget {
        local,
        remote,
        remote_ref,
    })
}

/// Push `target`, unless the remote-tracking ref shows it is already there
///
/// The local commit is re-read so a commit made after
/// [`resolve_target`] is the one pushed and compared.
pub fn run(options: &PushOptions, git: &dyn GitOperations, target: &PushTarget) -> Result<PushOutcome> {
    git.ensure_remote(&target.remote)?;

    if options.skip_if_unchanged {
        let local = git
            .reference_target(&target.local.name)?
            .unwrap_or(target.local.oid);
        let tracking = remote_tracking_name(&target.remote, &target.remote_ref);
        match git.reference_target(&tracking)? {
            Some(remote) if remote == local => {
                tracing::info!(
                    "{} is already at {} on {}, skipping push",
                    target.local.name,
                    local,
                    target.remote
                );
                return Ok(PushOutcome::UpToDate);
            }
            Some(_) => {}
            // first push of this ref
            None => tracing::debug!("{} not found, pushing unconditionally", tracking),
        }
    }

    let spec = refspec(&target.local.name, &target.remote_ref, options.force);
    tracing::debug!(
        "pushing ref {} to {}/{} ({})",
        target.local.name,
        target.remote,
        target.remote_ref,
        spec
    );
    git.push(&target.remote, &spec, &options.token)?;
    tracing::info!("pushed {} to {}/{}", target.local.name, target.remote, target.remote_ref);
    Ok(PushOutcome::Pushed)
}
