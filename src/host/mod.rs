//! Integration with the automation host (GitHub Actions runner).
//!
//! - [`context`]: workflow metadata exported by the runner
//! - [`log`]: tracing output rendered as workflow commands

pub mod context;
pub mod log;

pub use context::GitHubContext;

/// Whether the process runs as a GitHub Actions step
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Escape data for a workflow command (`::error::<data>`)
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
