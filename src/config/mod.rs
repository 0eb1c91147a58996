//! Step configuration.
//!
//! - [`structs`]: raw, string-valued [`ActionInputs`]
//! - [`loader`]: reading inputs from the host environment

pub mod loader;
pub mod structs;

pub use loader::{INPUT_PREFIX, load_inputs, load_inputs_from};
pub use structs::ActionInputs;
