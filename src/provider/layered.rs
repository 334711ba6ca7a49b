//! Precedence-ordered stacking of providers.
//!
//! The precedence order is: **last override added > ... > first override added > base**.
//! An input counts as set in a layer when its raw value is non-empty.

use super::InputProvider;

/// A base provider with zero or more override layers on top.
///
/// Warnings always go to the base layer, which is the one connected to the
/// invoking environment.
pub struct LayeredProvider {
    base: Box<dyn InputProvider>,
    overrides: Vec<Box<dyn InputProvider>>,
}

impl LayeredProvider {
    /// Start a stack from the provider connected to the invoking environment.
    pub fn new(base: impl InputProvider + 'static) -> Self {
        Self {
            base: Box::new(base),
            overrides: Vec::new(),
        }
    }

    /// Add a layer that takes precedence over every layer added before it.
    #[must_use]
    pub fn with_override(mut self, layer: impl InputProvider + 'static) -> Self {
        self.overrides.push(Box::new(layer));
        self
    }
}

impl InputProvider for LayeredProvider {
    fn get_string(&self, name: &str) -> String {
        self.overrides
            .iter()
            .rev()
            .map(|layer| layer.get_string(name))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| self.base.get_string(name))
    }

    fn warn(&mut self, message: &str) {
        self.base.warn(message);
    }
}
