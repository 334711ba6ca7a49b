//! Configuration types and input resolution.
//!
//! This module contains the typed configuration produced from the action's
//! raw inputs, the option enumerations it is built from, and the optional
//! TOML input file used when running outside of GitHub Actions.

pub mod file;
pub mod inputs;
pub mod options;

pub use file::FileConfig;
pub use inputs::Inputs;
pub use options::{InputOption, OmitOption, SortOption, UnknownOption, parse_option_set};
