//! Ref-spec construction and the authenticated push itself.

use std::io::Write;

use git2::{Cred, CredentialType, ErrorCode, PushOptions, RemoteCallbacks, Repository};

use crate::error::{AutopushError, Result};

/// Username sent with the token; servers only require it to be non-empty
pub const TOKEN_USERNAME: &str = "x-access-token";

/// `<local>:<remote>`, with a leading `+` when forcing
pub fn refspec(local_ref: &str, remote_ref: &str, force: bool) -> String {
    let spec = format!("{local_ref}:{remote_ref}");
    if force { format!("+{spec}") } else { spec }
}

/// Strip the well-known namespace from a full reference name
///
/// `refs/heads/main` → `main`, `refs/remotes/origin/dev` → `origin/dev`.
pub fn short_ref_name(name: &str) -> &str {
    ["refs/heads/", "refs/tags/", "refs/remotes/", "refs/"]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

/// Local cache of `remote_ref` on `remote`: `refs/remotes/<remote>/<short>`
pub fn remote_tracking_name(remote: &str, remote_ref: &str) -> String {
    format!("refs/remotes/{}/{}", remote, short_ref_name(remote_ref))
}

/// Push `spec` to `remote_name`, streaming remote progress to stdout
///
/// A ref update refused by the remote is returned as
/// [`AutopushError::PushRejected`].
pub fn push_refspec(repo: &Repository, remote_name: &str, spec: &str, token: &str) -> Result<()> {
    let mut remote = repo.find_remote(remote_name)?;
    let mut rejected: Vec<(String, String)> = Vec::new();

    {
        let mut callbacks = RemoteCallbacks::new();

        let mut offered = false;
        callbacks.credentials(move |_url, _username, allowed| {
            // libgit2 asks again after a refused credential; stop instead of looping
            if offered {
                return Err(git2::Error::from_str(
                    "authentication failed with the provided token",
                ));
            }
            offered = true;
            if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
                Cred::userpass_plaintext(TOKEN_USERNAME, token)
            } else if allowed.contains(CredentialType::DEFAULT) {
                Cred::default()
            } else {
                Err(git2::Error::from_str(&format!(
                    "remote requested unsupported credentials: {allowed:?}"
                )))
            }
        });

        callbacks.sideband_progress(|data| {
            let mut out = std::io::stdout();
            let _ = out.write_all(data);
            let _ = out.flush();
            true
        });

        callbacks.push_transfer_progress(|current, total, bytes| {
            tracing::debug!("pushed {}/{} objects ({} bytes)", current, total, bytes);
        });

        callbacks.push_update_reference(|reference, status| {
            if let Some(reason) = status {
                rejected.push((reference.to_string(), reason.to_string()));
            }
            Ok(())
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        remote
            .push(&[spec], Some(&mut options))
            .map_err(|e| match e.code() {
                ErrorCode::NotFastForward => AutopushError::PushRejected {
                    reference: destination(spec).to_string(),
                    reason: e.message().to_string(),
                },
                _ => AutopushError::Git(e),
            })?;
    }

    match rejected.into_iter().next() {
        Some((reference, reason)) => Err(AutopushError::PushRejected { reference, reason }),
        None => Ok(()),
    }
}

fn destination(spec: &str) -> &str {
    spec.rsplit_once(':').map(|(_, dst)| dst).unwrap_or(spec)
}
