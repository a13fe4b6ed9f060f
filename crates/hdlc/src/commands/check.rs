//! The `check` command: resolve every handle listed in a file.

use super::resolve::{resolve_batch, ResolveOptions};
use super::{builtin_resolver, read_file, CliError};

/// A handle read from a handle list, with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandleLine {
    pub line: usize,
    pub handle: String,
}

/// Extract handles from a handle list: one per line, surrounding whitespace
/// ignored, blank lines and `//` comment lines skipped.
pub fn parse_handle_list(content: &str) -> Vec<HandleLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let handle = raw.trim();
            if handle.is_empty() || handle.starts_with("//") {
                return None;
            }
            Some(HandleLine {
                line: index + 1,
                handle: handle.to_owned(),
            })
        })
        .collect()
}

/// Split `check` arguments into the file path and resolve options.
///
/// Exactly one path is accepted; unknown options are rejected.
pub fn parse_check_args(args: &[String]) -> Result<(&str, ResolveOptions), CliError> {
    let mut options = ResolveOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--no-parallel" => options.parallel = false,
            "--fail-fast" => options.fail_fast = true,
            "--verbose" | "-v" => options.verbose = true,
            option if option.starts_with('-') => {
                return Err(CliError::UnknownOption(arg.clone()));
            }
            _ if path.is_none() => path = Some(arg.as_str()),
            _ => return Err(CliError::UnexpectedArgument(arg.clone())),
        }
    }

    let path = path.ok_or(CliError::MissingArgument("file path"))?;
    Ok((path, options))
}

/// Resolve every handle in the file at `path`.
///
/// Reports all failures, not just the first, unless `fail_fast` is set.
pub fn check_file(path: &str, options: &ResolveOptions) -> Result<(), CliError> {
    let content = read_file(path)?;
    let entries = parse_handle_list(&content);
    let handles: Vec<String> = entries.iter().map(|entry| entry.handle.clone()).collect();

    let resolver = builtin_resolver()?;
    let reports = resolve_batch(&resolver, &handles, options);

    let mut failed = 0;
    for (entry, report) in entries.iter().zip(&reports) {
        match &report.outcome {
            Ok(value) if options.verbose => {
                for line in report.describe(value, true) {
                    println!("{path}:{}: {line}", entry.line);
                }
            }
            Ok(_) => {}
            Err(err) => {
                failed += 1;
                eprintln!("{path}:{}: {err}", entry.line);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Unresolved {
            failed,
            total: handles.len(),
        });
    }

    println!("OK: {path} ({} handles)", handles.len());
    Ok(())
}
