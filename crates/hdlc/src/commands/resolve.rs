//! The `resolve` command: resolve handles against the built-in modules.

use hdl_resolve::{HandleResolver, ModuleImporter, ResolveError, Value};
use hdl_runtime::Reflectable;
use rayon::prelude::*;

use super::{builtin_resolver, CliError};

/// Options for batch resolution.
#[derive(Clone, Debug)]
pub struct ResolveOptions {
    /// Resolve handles concurrently.
    pub parallel: bool,
    /// Print kind, type and members of each resolved value.
    pub verbose: bool,
    /// Stop at the first failure. Implies sequential resolution.
    pub fail_fast: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            parallel: true,
            verbose: false,
            fail_fast: false,
        }
    }
}

/// Outcome of resolving one handle.
#[derive(Debug)]
pub struct ResolveReport {
    pub handle: String,
    pub outcome: Result<Value, ResolveError>,
}

impl ResolveReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Lines describing a successful resolution.
    pub(crate) fn describe(&self, value: &Value, verbose: bool) -> Vec<String> {
        let mut lines = vec![format!("{} -> {value}", self.handle)];
        if verbose {
            lines.push(format!("    kind: {}, type: {}", value.kind(), value.type_name()));
            let members = value.dir();
            if !members.is_empty() {
                lines.push(format!("    members: {}", members.join(", ")));
            }
        }
        lines
    }
}

fn resolve_one<I: ModuleImporter>(resolver: &HandleResolver<I>, handle: &str) -> ResolveReport {
    ResolveReport {
        handle: handle.to_owned(),
        outcome: resolver.dereference(handle),
    }
}

fn resolve_sequential<I: ModuleImporter>(
    resolver: &HandleResolver<I>,
    handles: &[String],
    fail_fast: bool,
) -> Vec<ResolveReport> {
    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = resolve_one(resolver, handle);
        let failed = !report.is_ok();
        reports.push(report);
        if failed && fail_fast {
            break;
        }
    }
    reports
}

/// Resolve every handle, returning reports in input order.
///
/// With `fail_fast`, resolution runs sequentially and the reports end at the
/// first failure.
pub fn resolve_batch<I>(
    resolver: &HandleResolver<I>,
    handles: &[String],
    options: &ResolveOptions,
) -> Vec<ResolveReport>
where
    I: ModuleImporter + Sync,
{
    if options.fail_fast || !options.parallel || handles.len() < 2 {
        return resolve_sequential(resolver, handles, options.fail_fast);
    }

    // Scoped pool so worker threads are joined before returning.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                handles
                    .par_iter()
                    .map(|handle| resolve_one(resolver, handle))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), resolving sequentially");
            resolve_sequential(resolver, handles, false)
        })
}

/// Resolve `handles` and print one line per handle.
pub fn resolve_handles(handles: &[String], options: &ResolveOptions) -> Result<(), CliError> {
    let resolver = builtin_resolver()?;
    let reports = resolve_batch(&resolver, handles, options);

    let mut failed = 0;
    for report in &reports {
        match &report.outcome {
            Ok(value) => {
                for line in report.describe(value, options.verbose) {
                    println!("{line}");
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{} -> error: {err}", report.handle);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Unresolved {
            failed,
            total: handles.len(),
        });
    }
    Ok(())
}
