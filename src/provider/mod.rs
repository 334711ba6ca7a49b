//! Sources of raw input values.
//!
//! The resolver never reaches for process-wide state. Everything it reads and
//! the one diagnostic it may emit go through an [`InputProvider`] handed to it
//! by the caller.
//!
//! ## Implementations
//!
//! - [`ActionsEnv`] - the GitHub Actions host (`INPUT_*` variables, workflow commands)
//! - [`MemoryProvider`] - an in-memory map, used for overrides and tests
//! - [`LayeredProvider`] - stacks providers by precedence

pub mod env;
pub mod layered;
pub mod memory;

pub use env::ActionsEnv;
pub use layered::LayeredProvider;
pub use memory::MemoryProvider;

/// Supplies raw input values by name and accepts non-fatal diagnostics.
pub trait InputProvider {
    /// Raw value of the named input, or an empty string when it is unset.
    fn get_string(&self, name: &str) -> String;

    /// Boolean interpretation of the named input.
    ///
    /// Unset or unrecognized values read as `false`.
    fn get_boolean(&self, name: &str) -> bool {
        parse_boolean(&self.get_string(name)).unwrap_or(false)
    }

    /// Record a warning visible to whoever invoked the action.
    fn warn(&mut self, message: &str);
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn get_string(&self, name: &str) -> String {
        (**self).get_string(name)
    }

    fn get_boolean(&self, name: &str) -> bool {
        (**self).get_boolean(name)
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }
}

/// Parse a boolean the way workflow inputs are parsed (YAML 1.2 core schema).
///
/// Returns `None` for anything other than `true`, `True`, `TRUE`, `false`,
/// `False` or `FALSE`.
#[must_use]
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
