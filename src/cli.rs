//! Command-line interface definition.
//!
//! Flags given here form the highest-precedence input layer. Anything left
//! unset falls through to the input file and then to the `INPUT_*`
//! environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    OmitOption, SortOption,
    inputs::{FROM_JSON_FILE, MODULE_DIRECTORY, OMIT, SORT, TEST_ARGUMENTS},
};
use crate::provider::MemoryProvider;

#[derive(Parser, Debug)]
struct InputArgs {
    /// Directory containing the Go module to test
    #[arg(long, value_name = "DIR")]
    module_directory: Option<PathBuf>,

    /// Arguments passed to `go test`, separated by whitespace
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    test_arguments: Option<String>,

    /// Render this `go test -json` output instead of running the tests
    #[arg(long, value_name = "FILE")]
    from_json_file: Option<PathBuf>,

    /// Report sections to omit
    #[arg(long, value_enum, action = clap::ArgAction::Append)]
    omit: Vec<OmitOption>,

    /// Criteria to sort the report by
    #[arg(long, value_enum, action = clap::ArgAction::Append)]
    sort: Vec<SortOption>,
}

#[derive(Parser, Debug)]
#[command(name = "go-test-inputs")]
#[command(
    about = "Resolve the inputs of a Go test GitHub Action into a typed configuration",
    version
)]
pub struct Cli {
    /// TOML file with input values, keyed like a workflow `with:` block
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Input overrides
    #[command(flatten)]
    inputs: InputArgs,
}

impl Cli {
    /// Input layer built from the flags that were given.
    #[must_use]
    pub fn input_overrides(&self) -> MemoryProvider {
        let args = &self.inputs;
        let mut provider = MemoryProvider::new();

        if let Some(dir) = &args.module_directory {
            provider.set(MODULE_DIRECTORY, dir.display().to_string());
        }
        if let Some(test_arguments) = &args.test_arguments {
            provider.set(TEST_ARGUMENTS, test_arguments.clone());
        }
        if let Some(file) = &args.from_json_file {
            provider.set(FROM_JSON_FILE, file.display().to_string());
        }
        if !args.omit.is_empty() {
            provider.set(OMIT, join_lines(&args.omit));
        }
        if !args.sort.is_empty() {
            provider.set(SORT, join_lines(&args.sort));
        }

        provider
    }
}

fn join_lines<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
