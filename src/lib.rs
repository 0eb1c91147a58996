//! # autopush
//!
//! CI step that commits files a workflow generated and pushes a reference back
//! to its remote.
//!
//! ## Flow
//! 1. Read step inputs (`INPUT_*` variables) and apply defaults
//! 2. Stage changed files, filtered by `commit-files` glob patterns
//! 3. Commit them, or skip / fail when nothing is staged
//! 4. Skip the push when the remote-tracking ref already matches
//! 5. Push `<ref>:<remote-ref>` (force-prefixed on request) with the token
//!
//! ## Usage as a library
//! ```no_run
//! use autopush::commands::{self, PushOptions};
//! use autopush::config::load_inputs;
//! use autopush::host::GitHubContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let inputs = load_inputs()?;
//! let options = PushOptions::resolve(&inputs, &GitHubContext::from_env());
//! let report = commands::run(&options, std::path::Path::new("."))?;
//! println!("{:?}", report.push);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//! - [`config`] - Raw step inputs
//! - [`commands`] - The commit and push steps
//! - [`git`] - Repository primitives over libgit2
//! - [`host`] - Runner context and workflow-command logging
//! - [`error`] - Error type

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod host;
