//! In-memory input provider.

use std::collections::HashMap;

use super::InputProvider;

/// A provider backed by a plain map of input names to raw values.
///
/// Warnings are kept in order so callers can inspect them afterwards.
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    inputs: HashMap<String, String>,
    warnings: Vec<String>,
}

impl MemoryProvider {
    /// An empty provider with no inputs set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an input, replacing any previous value.
    #[must_use]
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an input in place, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Warnings recorded so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether no input has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl InputProvider for MemoryProvider {
    fn get_string(&self, name: &str) -> String {
        self.inputs.get(name).cloned().unwrap_or_default()
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
