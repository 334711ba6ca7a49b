//! Presentation of a resolved configuration.
//!
//! Two forms are supported: a colored human-readable summary and a single
//! JSON document for scripting (`--json`).

use colored::Colorize;
use serde::Serialize;

use crate::config::{InputOption, Inputs};

/// Top-level JSON document emitted with `--json`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput<'a> {
    /// The resolved configuration
    pub inputs: &'a Inputs,

    /// The `go` arguments the runner would use, or `null` when a JSON file is rendered instead
    pub go_test_args: Option<Vec<String>>,

    /// Diagnostics emitted during resolution
    pub warnings: &'a [String],
}

impl<'a> JsonOutput<'a> {
    #[must_use]
    pub fn new(inputs: &'a Inputs, warnings: &'a [String]) -> Self {
        Self {
            inputs,
            go_test_args: inputs
                .from_json_file
                .is_none()
                .then(|| inputs.go_test_args()),
            warnings,
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join_options<T: InputOption>(set: &std::collections::BTreeSet<T>) -> String {
    if set.is_empty() {
        return "none".dimmed().to_string();
    }
    set.iter()
        .map(|opt| opt.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the human-readable summary, one labelled line per field.
#[must_use]
pub fn render_summary(inputs: &Inputs) -> String {
    let json_file = inputs.from_json_file.as_ref().map_or_else(
        || "none".dimmed().to_string(),
        |p| p.display().to_string().cyan().to_string(),
    );
    let source = if inputs.from_json_file.is_some() {
        "render from JSON file".to_string()
    } else {
        format!("go {}", inputs.go_test_args().join(" "))
    };

    let fields = [
        (
            "moduleDirectory",
            inputs.module_directory.display().to_string().cyan().to_string(),
        ),
        ("testArguments", inputs.test_arguments.join(" ")),
        ("fromJSONFile", json_file),
        ("omit", join_options(&inputs.omit)),
        ("sort", join_options(&inputs.sorting)),
    ];

    let mut out = format!("{}\n", "Resolved inputs:".bold());
    for (label, value) in fields {
        out.push_str(&format!("  {label:<18} {value}\n"));
    }
    out.push_str(&format!(
        "\n{} {}\n",
        "Report source:".bold(),
        source.bright_white()
    ));

    out
}
