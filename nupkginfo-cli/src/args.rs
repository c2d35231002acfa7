//! Argument parsing for the `-key=value` invocation grammar.
//!
//! The tool accepts single-dash tokens: `-path=<file>` carries a value,
//! `-withName` and `-scanNupkg` are bare flags. Keys are case-insensitive
//! and values may be wrapped in double quotes. This grammar predates the
//! current implementation and is kept as-is for script compatibility.

use std::collections::HashMap;

/// One extraction request, built from the CLI argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// Path to the package archive.
    pub path: String,
    /// Prefix filename-mode output with the package name.
    pub with_name: bool,
    /// Dump manifest fields instead of filename-derived values.
    pub scan_nupkg: bool,
}

/// Error parsing the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Required `-path=<file>` argument was not supplied.
    MissingPath,
    /// Token did not start with the `-` prefix.
    MissingDash(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgsError::MissingPath => write!(f, "parameter 'path' must be supplied"),
            ArgsError::MissingDash(token) => write!(
                f,
                "expected a parameter starting with '-' but found '{}'",
                token
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

impl ExtractionRequest {
    /// Parse the argument list (without the program name) into a request.
    ///
    /// Keys are matched case-insensitively; unknown keys are ignored. A
    /// repeated key keeps its last value.
    pub fn from_args<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut mapped: HashMap<String, Option<String>> = HashMap::new();

        for argument in args {
            let (key, value) = parse_argument(argument.trim())?;
            mapped.insert(key.to_lowercase(), value);
        }

        let path = mapped
            .get("path")
            .and_then(|v| v.clone())
            .ok_or(ArgsError::MissingPath)?;

        Ok(Self {
            path,
            with_name: mapped.contains_key("withname"),
            scan_nupkg: mapped.contains_key("scannupkg"),
        })
    }
}

/// Split one `-key=value` or `-flag` token into key and optional value.
fn parse_argument(argument: &str) -> Result<(String, Option<String>), ArgsError> {
    let stripped = argument
        .strip_prefix('-')
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ArgsError::MissingDash(argument.to_string()))?;

    match stripped.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), Some(value.trim_matches('"').to_string()))),
        None => Ok((stripped.to_string(), None)),
    }
}
