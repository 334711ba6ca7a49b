//! GitHub Actions host provider.
//!
//! The runner exposes each `with:` input as an environment variable named
//! `INPUT_<NAME>`, where `<NAME>` is the input name upper-cased with spaces
//! replaced by underscores. Warnings become `::warning::` workflow commands
//! so they show up as annotations on the run. The runner picks commands up
//! from stderr as well, which keeps stdout free for machine-readable output.

use std::collections::HashMap;

use colored::Colorize;

use super::InputProvider;

/// Reads inputs from a snapshot of the Actions environment.
#[derive(Clone, Debug, Default)]
pub struct ActionsEnv {
    vars: HashMap<String, String>,
    annotations: bool,
    commands_on_stderr: bool,
    emitted: Vec<String>,
}

impl ActionsEnv {
    /// Snapshot the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build a provider from explicit variables.
    ///
    /// Workflow-command annotations are enabled when `GITHUB_ACTIONS` is
    /// `true`; otherwise warnings are printed to stderr.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let annotations = vars.get("GITHUB_ACTIONS").is_some_and(|v| v == "true");

        Self {
            vars,
            annotations,
            commands_on_stderr: false,
            emitted: Vec::new(),
        }
    }

    /// Write workflow commands to stderr instead of stdout.
    #[must_use]
    pub fn with_commands_on_stderr(mut self) -> Self {
        self.commands_on_stderr = true;
        self
    }

    /// Every warning emitted through this provider, oldest first.
    #[must_use]
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }
}

/// Environment variable holding the named input.
#[must_use]
pub fn input_var_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escape a message for use as workflow-command data.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl InputProvider for ActionsEnv {
    fn get_string(&self, name: &str) -> String {
        self.vars
            .get(&input_var_name(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn warn(&mut self, message: &str) {
        if self.annotations {
            let command = format!("::warning::{}", escape_data(message));
            if self.commands_on_stderr {
                eprintln!("{command}");
            } else {
                println!("{command}");
            }
        } else {
            eprintln!("{} {message}", "Warning:".yellow());
        }
        self.emitted.push(message.to_string());
    }
}
