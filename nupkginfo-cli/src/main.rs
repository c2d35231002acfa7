//! Nupkginfo CLI - extract name, version and manifest metadata from
//! NuGet package archives.
//!
//! ```text
//! nupkginfo -path=<file> [-withName] [-scanNupkg]
//! ```
//!
//! Without flags, prints the version encoded in the filename. `-withName`
//! prefixes it with the package name. `-scanNupkg` extracts the archive
//! and prints the manifest's metadata fields instead, one `<field> <value>`
//! per line.

mod args;
mod error;
mod path;

use std::env;
use std::io;

use nupkginfo::manifest::read_manifest;
use nupkginfo::package::parse_package_filename;
use tracing_subscriber::EnvFilter;

use args::ExtractionRequest;
use error::CliError;

fn main() {
    init_logging();

    let request = match ExtractionRequest::from_args(env::args().skip(1)) {
        Ok(request) => request,
        Err(e) => CliError::from(e).exit(),
    };

    match run(&request) {
        Ok(output) => println!("{}", output),
        Err(e) => e.exit(),
    }
}

/// Produce the requested output for one extraction request.
fn run(request: &ExtractionRequest) -> Result<String, CliError> {
    let path = path::validate_path(&request.path)?;
    let parsed = parse_package_filename(&path.to_string_lossy())?;

    if request.scan_nupkg {
        let fields = read_manifest(&path, parsed.base_name())?;
        let lines: Vec<String> = fields
            .iter()
            .map(|(field, value)| format!("{} {}", field, value))
            .collect();
        Ok(lines.join("\n"))
    } else if request.with_name {
        Ok(format!("{} {}", parsed.base_name(), parsed.version))
    } else {
        Ok(parsed.version)
    }
}

/// Route tracing output to stderr so stdout stays machine-consumable.
/// Level defaults to `warn`; override with `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
