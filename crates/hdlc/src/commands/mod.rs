//! Command handlers for the `hdlc` CLI.
//!
//! Each submodule implements one command. Commands return [`CliError`]
//! instead of exiting so the binary decides how failures are reported.

use std::error::Error;

use hdl_ir::MalformedHandle;
use hdl_resolve::HandleResolver;
use hdl_runtime::ImportError;

mod check;
mod modules;
mod parse;
mod resolve;

pub use check::{check_file, parse_check_args, parse_handle_list, HandleLine};
pub use modules::list_modules;
pub use parse::{describe_handle, parse_handle};
pub use resolve::{resolve_batch, resolve_handles, ResolveOptions, ResolveReport};

/// Why a command failed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot install built-in modules")]
    Setup(#[source] ImportError),

    #[error(transparent)]
    Malformed(#[from] MalformedHandle),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("{failed} of {total} handles failed to resolve")]
    Unresolved { failed: usize, total: usize },
}

/// Render an error and its `source()` chain, outermost first.
pub fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut lines = vec![format!("error: {err}")];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("  caused by: {cause}"));
        source = cause.source();
    }
    lines
}

/// Print an error and its causes to stderr.
pub fn report_error(err: &dyn Error) {
    for line in error_chain(err) {
        eprintln!("{line}");
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

pub(crate) fn builtin_resolver() -> Result<HandleResolver, CliError> {
    HandleResolver::with_builtins().map_err(CliError::Setup)
}

#[cfg(test)]
mod tests;
