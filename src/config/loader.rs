// Input loading
//
// Reads the step inputs the host exports as environment variables.

use config::{Config, Environment, Map};

use super::structs::ActionInputs;
use crate::error::Result;

/// Prefix of the variables carrying step inputs (`INPUT_FORCE`, `INPUT_COMMIT-FILES`, ...)
pub const INPUT_PREFIX: &str = "INPUT";

/// Load step inputs from the process environment
///
/// Names follow the GitHub Actions convention: `INPUT_` + upper-cased input
/// name, hyphens kept. Empty variables are treated as unset.
pub fn load_inputs() -> Result<ActionInputs> {
    load_inputs_from(None)
}

/// Load step inputs from `source` instead of the process environment
///
/// `None` reads the real environment.
pub fn load_inputs_from(source: Option<Map<String, String>>) -> Result<ActionInputs> {
    let config = Config::builder()
        .add_source(
            Environment::with_prefix(INPUT_PREFIX)
                .ignore_empty(true)
                .try_parsing(false)
                .source(source),
        )
        .build()?;

    let inputs: ActionInputs = config.try_deserialize()?;
    tracing::debug!("inputs: {:?}", inputs);
    Ok(inputs)
}
