//! Input file support for running outside of GitHub Actions.
//!
//! The file mirrors the `with:` block of a workflow step, using the same
//! camelCase input names. Values from the file sit between CLI flags and the
//! `INPUT_*` environment.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > input file > environment > hardcoded default**.
//!
//! # Example file
//!
//! ```toml
//! moduleDirectory = "./service"
//! testArguments = "-race -count=1 ./..."
//! omit = ["untested", "pie"]
//! sort = ["elapsed"]
//! ```

use std::path::Path;

use serde::Deserialize;

use super::inputs::{
    FROM_JSON_FILE, MODULE_DIRECTORY, OMIT, OMIT_PIE, OMIT_SUCCESSFUL_PACKAGES,
    OMIT_UNTESTED_PACKAGES, SORT, TEST_ARGUMENTS,
};
use crate::provider::MemoryProvider;

/// Contents of an input file.
///
/// All fields are `Option<T>` so absent keys fall through to the next layer.
/// List entries are kept as raw tokens; unknown ones are dropped during
/// resolution, exactly as they would be from the environment.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Directory containing the Go module
    pub module_directory: Option<String>,

    /// Arguments for `go test`
    pub test_arguments: Option<String>,

    /// Pre-recorded `go test -json` output
    #[serde(rename = "fromJSONFile")]
    pub from_json_file: Option<String>,

    /// Report sections to omit (`"untested"`, `"successful"`, `"pie"`)
    pub omit: Option<Vec<String>>,

    /// Sort criteria (`"name"`, `"elapsed"`)
    pub sort: Option<Vec<String>>,

    /// Deprecated, use `omit = ["untested"]`
    pub omit_untested_packages: Option<bool>,

    /// Deprecated, use `omit = ["successful"]`
    pub omit_successful_packages: Option<bool>,

    /// Deprecated, use `omit = ["pie"]`
    pub omit_pie: Option<bool>,
}

impl FileConfig {
    /// Load an input file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML or values of the wrong type
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read input file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse input file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// Convert into a provider layer holding only the keys present in the file.
    #[must_use]
    pub fn into_provider(self) -> MemoryProvider {
        let mut provider = MemoryProvider::new();

        let strings = [
            (MODULE_DIRECTORY, self.module_directory),
            (TEST_ARGUMENTS, self.test_arguments),
            (FROM_JSON_FILE, self.from_json_file),
            (OMIT, self.omit.map(|tokens| tokens.join("\n"))),
            (SORT, self.sort.map(|tokens| tokens.join("\n"))),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                provider.set(name, value);
            }
        }

        let flags = [
            (OMIT_UNTESTED_PACKAGES, self.omit_untested_packages),
            (OMIT_SUCCESSFUL_PACKAGES, self.omit_successful_packages),
            (OMIT_PIE, self.omit_pie),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                provider.set(name, value.to_string());
            }
        }

        provider
    }
}
