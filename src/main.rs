//! # go-test-inputs
//!
//! Resolves the inputs of a Go test GitHub Action and prints the result.
//!
//! Inside a workflow the inputs come from the `INPUT_*` environment the runner
//! sets up. Locally they can be supplied through an input file or flags.
//!
//! ## Usage
//!
//! ```bash
//! # Resolve from the environment only
//! go-test-inputs
//!
//! # Layer a file and a flag on top
//! go-test-inputs --config inputs.toml --omit pie --json
//! ```

use anyhow::Result;
use clap::Parser;
use go_test_inputs::{
    cli::Cli,
    config::{FileConfig, Inputs},
    output::{JsonOutput, render_summary},
    provider::{ActionsEnv, InputProvider, LayeredProvider},
};
use std::process::exit;

/// Collects warnings for the JSON document while forwarding them to the host.
struct Recording<P> {
    inner: P,
    warnings: Vec<String>,
}

impl<P: InputProvider> InputProvider for Recording<P> {
    fn get_string(&self, name: &str) -> String {
        self.inner.get_string(name)
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        self.inner.warn(message);
    }
}

fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Build the provider stack, resolve, and print.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or parsed, or if the
/// JSON document cannot be serialized.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let mut env = ActionsEnv::from_env();
    if args.json {
        env = env.with_commands_on_stderr();
    }

    let mut layered = LayeredProvider::new(env);
    if let Some(path) = &args.config {
        layered = layered.with_override(FileConfig::load(path)?.into_provider());
    }
    layered = layered.with_override(args.input_overrides());

    let mut provider = Recording {
        inner: layered,
        warnings: Vec::new(),
    };
    let inputs = Inputs::resolve(&mut provider);

    if args.json {
        println!("{}", JsonOutput::new(&inputs, &provider.warnings).to_json()?);
    } else {
        print!("{}", render_summary(&inputs));
    }

    Ok(())
}
