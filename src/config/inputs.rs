//! Resolution of raw action inputs into an [`Inputs`] value.
//!
//! Every field has a defined fallback, so resolution is total: missing or
//! malformed values degrade to defaults or are dropped, never to an error.

use std::{collections::BTreeSet, path::PathBuf};

use serde::Serialize;

use super::options::{OmitOption, SortOption, parse_option_set};
use crate::provider::InputProvider;

/// Directory of the Go module to test.
pub const MODULE_DIRECTORY: &str = "moduleDirectory";
/// Whitespace-separated `go test` arguments.
pub const TEST_ARGUMENTS: &str = "testArguments";
/// Existing `go test -json` output to render.
pub const FROM_JSON_FILE: &str = "fromJSONFile";
/// Newline-separated [`OmitOption`] tokens.
pub const OMIT: &str = "omit";
/// Newline-separated [`SortOption`] tokens.
pub const SORT: &str = "sort";
/// Deprecated boolean for [`OmitOption::Untested`].
pub const OMIT_UNTESTED_PACKAGES: &str = "omitUntestedPackages";
/// Deprecated boolean for [`OmitOption::Successful`].
pub const OMIT_SUCCESSFUL_PACKAGES: &str = "omitSuccessfulPackages";
/// Deprecated boolean for [`OmitOption::Pie`].
pub const OMIT_PIE: &str = "omitPie";

/// Used when `moduleDirectory` is empty.
pub const DEFAULT_MODULE_DIRECTORY: &str = ".";
/// Sole test argument when `testArguments` has no tokens.
pub const DEFAULT_TEST_ARGUMENTS: &str = "./...";

/// Legacy boolean inputs and the `omit` member each one stands for.
pub const DEPRECATED_OMIT_INPUTS: [(&str, OmitOption); 3] = [
    (OMIT_UNTESTED_PACKAGES, OmitOption::Untested),
    (OMIT_SUCCESSFUL_PACKAGES, OmitOption::Successful),
    (OMIT_PIE, OmitOption::Pie),
];

/// Emitted once per resolution when any deprecated boolean is true.
pub const DEPRECATION_WARNING: &str = "The omitUntestedPackages, omitSuccessfulPackages and omitPie inputs are deprecated. Use the omit input instead.";

/// Fully resolved action configuration.
///
/// Built once per invocation by [`Inputs::resolve`] and handed to the test
/// runner and the report renderer unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    /// Directory containing the `go.mod` to test
    pub module_directory: PathBuf,

    /// Arguments passed to `go test`, whitespace-split
    pub test_arguments: Vec<String>,

    /// Pre-recorded `go test -json` output to render instead of running tests
    #[serde(rename = "fromJSONFile")]
    pub from_json_file: Option<PathBuf>,

    /// Report sections to leave out
    pub omit: BTreeSet<OmitOption>,

    /// Ordering applied to the report
    pub sorting: BTreeSet<SortOption>,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            module_directory: PathBuf::from(DEFAULT_MODULE_DIRECTORY),
            test_arguments: vec![DEFAULT_TEST_ARGUMENTS.to_string()],
            from_json_file: None,
            omit: BTreeSet::new(),
            sorting: BTreeSet::new(),
        }
    }
}

impl Inputs {
    /// Read every recognized input from `provider` and resolve it.
    ///
    /// If any of the deprecated `omit*` booleans is set, their members are
    /// merged into `omit` and exactly one deprecation warning is sent to
    /// `provider`. Repeated calls warn again each time.
    pub fn resolve<P: InputProvider + ?Sized>(provider: &mut P) -> Self {
        let module_directory = non_empty(provider.get_string(MODULE_DIRECTORY))
            .map_or_else(|| PathBuf::from(DEFAULT_MODULE_DIRECTORY), PathBuf::from);

        let test_arguments = split_arguments(&provider.get_string(TEST_ARGUMENTS));

        let from_json_file = non_empty(provider.get_string(FROM_JSON_FILE)).map(PathBuf::from);

        let mut omit: BTreeSet<OmitOption> = parse_option_set(&provider.get_string(OMIT));
        let sorting: BTreeSet<SortOption> = parse_option_set(&provider.get_string(SORT));

        let mut deprecated_used = false;
        for (name, opt) in DEPRECATED_OMIT_INPUTS {
            if provider.get_boolean(name) {
                omit.insert(opt);
                deprecated_used = true;
            }
        }
        if deprecated_used {
            provider.warn(DEPRECATION_WARNING);
        }

        Self {
            module_directory,
            test_arguments,
            from_json_file,
            omit,
            sorting,
        }
    }

    /// Whether `opt` is left out of the report.
    #[must_use]
    pub fn omits(&self, opt: OmitOption) -> bool {
        self.omit.contains(&opt)
    }

    /// Whether the report is ordered by `opt`.
    #[must_use]
    pub fn sorts_by(&self, opt: SortOption) -> bool {
        self.sorting.contains(&opt)
    }

    /// Arguments for the `go` invocation that produces the test report.
    #[must_use]
    pub fn go_test_args(&self) -> Vec<String> {
        ["test", "-json"]
            .into_iter()
            .map(String::from)
            .chain(self.test_arguments.iter().cloned())
            .collect()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn split_arguments(raw: &str) -> Vec<String> {
    let args: Vec<String> = raw.split_whitespace().map(String::from).collect();
    if args.is_empty() {
        vec![DEFAULT_TEST_ARGUMENTS.to_string()]
    } else {
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputOption;
    use crate::provider::MemoryProvider;

    fn deprecated_flags(value: &str) -> MemoryProvider {
        MemoryProvider::new()
            .with_input(OMIT_UNTESTED_PACKAGES, value)
            .with_input(OMIT_SUCCESSFUL_PACKAGES, value)
            .with_input(OMIT_PIE, value)
    }

    #[test]
    fn test_uses_default_values() {
        let mut provider = MemoryProvider::new();
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs, Inputs::default());
        assert_eq!(inputs.module_directory, PathBuf::from("."));
        assert_eq!(inputs.test_arguments, vec!["./...".to_string()]);
        assert!(inputs.from_json_file.is_none());
        assert!(inputs.omit.is_empty());
        assert!(inputs.sorting.is_empty());
        assert!(provider.warnings().is_empty());
    }

    #[test]
    fn test_parses_module_directory() {
        let mut provider = MemoryProvider::new().with_input(MODULE_DIRECTORY, "foo");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.module_directory, PathBuf::from("foo"));
    }

    #[test]
    fn test_parses_test_arguments() {
        let mut provider = MemoryProvider::new().with_input(TEST_ARGUMENTS, "foo     bar");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.test_arguments, vec!["foo", "bar"]);
    }

    #[test]
    fn test_test_arguments_mixed_whitespace() {
        let mut provider =
            MemoryProvider::new().with_input(TEST_ARGUMENTS, " -race\t-count=1 \n ./pkg/... ");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.test_arguments, vec!["-race", "-count=1", "./pkg/..."]);
    }

    #[test]
    fn test_whitespace_only_test_arguments_use_default() {
        let mut provider = MemoryProvider::new().with_input(TEST_ARGUMENTS, "   \t ");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.test_arguments, vec!["./..."]);
    }

    #[test]
    fn test_parses_from_json_file() {
        let mut provider = MemoryProvider::new().with_input(FROM_JSON_FILE, "foo.json");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.from_json_file, Some(PathBuf::from("foo.json")));
    }

    #[test]
    fn test_parses_omit() {
        let raw = [
            OmitOption::ALL.iter().map(|o| o.as_str()).collect::<Vec<_>>(),
            vec!["foo", "bar", "baz"],
        ]
        .concat()
        .join("\n");
        let mut provider = MemoryProvider::new().with_input(OMIT, raw);
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.omit, OmitOption::ALL.iter().copied().collect::<BTreeSet<_>>());
        assert!(provider.warnings().is_empty());
    }

    #[test]
    fn test_parses_sort() {
        let raw = [
            SortOption::ALL.iter().map(|o| o.as_str()).collect::<Vec<_>>(),
            vec!["foo", "bar", "baz"],
        ]
        .concat()
        .join("\n");
        let mut provider = MemoryProvider::new().with_input(SORT, raw);
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.sorting, SortOption::ALL.iter().copied().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_parses_partial_omit() {
        let mut provider = MemoryProvider::new().with_input(OMIT, "foo\npie");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.omit, BTreeSet::from([OmitOption::Pie]));
        assert!(inputs.omits(OmitOption::Pie));
        assert!(!inputs.omits(OmitOption::Untested));
    }

    #[test]
    fn test_omit_with_crlf_line_endings_keeps_last_token_only() {
        let mut provider = MemoryProvider::new().with_input(OMIT, "pie\r\nuntested");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.omit, BTreeSet::from([OmitOption::Untested]));
    }

    #[test]
    fn test_supports_deprecated_inputs() {
        let mut provider = deprecated_flags("true");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(
            inputs.omit,
            BTreeSet::from([OmitOption::Untested, OmitOption::Successful, OmitOption::Pie])
        );
        assert_eq!(provider.warnings(), [DEPRECATION_WARNING]);
    }

    #[test]
    fn test_no_warning_when_deprecated_inputs_are_false() {
        let mut provider = deprecated_flags("false").with_input(OMIT, "untested");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.omit, BTreeSet::from([OmitOption::Untested]));
        assert!(provider.warnings().is_empty());
    }

    #[test]
    fn test_single_deprecated_flag_merges_with_omit() {
        let mut provider = MemoryProvider::new()
            .with_input(OMIT, "untested\npie")
            .with_input(OMIT_PIE, "true")
            .with_input(OMIT_SUCCESSFUL_PACKAGES, "true");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(
            inputs.omit,
            BTreeSet::from([OmitOption::Untested, OmitOption::Successful, OmitOption::Pie])
        );
        assert_eq!(provider.warnings().len(), 1);
    }

    #[test]
    fn test_unparseable_deprecated_flag_is_ignored() {
        let mut provider = MemoryProvider::new().with_input(OMIT_PIE, "yes");
        let inputs = Inputs::resolve(&mut provider);

        assert!(inputs.omit.is_empty());
        assert!(provider.warnings().is_empty());
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let mut provider = deprecated_flags("true")
            .with_input(SORT, "elapsed")
            .with_input(TEST_ARGUMENTS, "-v ./...");

        let first = Inputs::resolve(&mut provider);
        let second = Inputs::resolve(&mut provider);

        assert_eq!(first, second);
        assert_eq!(provider.warnings().len(), 2);
    }

    #[test]
    fn test_go_test_args() {
        let mut provider = MemoryProvider::new().with_input(TEST_ARGUMENTS, "-race ./cmd/...");
        let inputs = Inputs::resolve(&mut provider);

        assert_eq!(inputs.go_test_args(), vec!["test", "-json", "-race", "./cmd/..."]);
        assert_eq!(
            Inputs::default().go_test_args(),
            vec!["test", "-json", "./..."]
        );
    }

    #[test]
    fn test_serializes_with_input_names() {
        let inputs = Inputs {
            from_json_file: Some(PathBuf::from("report.json")),
            sorting: BTreeSet::from([SortOption::Name]),
            ..Inputs::default()
        };
        let json = serde_json::to_value(&inputs).unwrap();

        assert_eq!(json["moduleDirectory"], ".");
        assert_eq!(json["testArguments"][0], "./...");
        assert_eq!(json["fromJSONFile"], "report.json");
        assert_eq!(json["omit"].as_array().map(Vec::len), Some(0));
        assert_eq!(json["sorting"][0], "name");
        assert!(inputs.sorts_by(SortOption::Name));
    }
}
