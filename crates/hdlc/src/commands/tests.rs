#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use hdl_ir::Handle;
use hdl_resolve::ResolveErrorKind;
use pretty_assertions::assert_eq;

use super::*;

fn handles(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn handle_list_skips_blanks_and_comments() {
    let content = "\
// connectors
collections#deque

   asyncio.tasks#Task
// ssl#SSLContext
ssl
";
    assert_eq!(
        parse_handle_list(content),
        vec![
            HandleLine { line: 2, handle: "collections#deque".to_owned() },
            HandleLine { line: 4, handle: "asyncio.tasks#Task".to_owned() },
            HandleLine { line: 6, handle: "ssl".to_owned() },
        ]
    );
}

#[test]
fn describe_module_only_handle() {
    let handle = Handle::parse("concurrent.futures#").unwrap();
    assert_eq!(
        describe_handle(&handle),
        "handle: concurrent.futures#\nmodule: concurrent.futures\nattributes: none\n"
    );
}

#[test]
fn describe_handle_with_chain() {
    let handle = Handle::parse("asyncio.tasks#Task.cancel").unwrap();
    assert_eq!(
        describe_handle(&handle),
        "handle: asyncio.tasks#Task.cancel\n\
         module: asyncio.tasks\n\
         attributes:\n  0: Task\n  1: cancel\n"
    );
}

#[test]
fn batch_keeps_input_order() {
    let resolver = builtin_resolver().unwrap();
    let input = handles(&[
        "collections#deque",
        "no.such#x",
        "asyncio#Task",
        "ssl#PROTOCOL_TLS_CLIENT",
        "#bad",
    ]);
    let reports = resolve_batch(&resolver, &input, &ResolveOptions::default());

    let names: Vec<&str> = reports.iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(names, input.iter().map(String::as_str).collect::<Vec<_>>());

    let ok: Vec<bool> = reports.iter().map(ResolveReport::is_ok).collect();
    assert_eq!(ok, vec![true, false, true, true, false]);
    assert_eq!(
        reports[4].outcome.as_ref().unwrap_err().kind(),
        ResolveErrorKind::MalformedHandle
    );
}

#[test]
fn parallel_and_sequential_agree() {
    let resolver = builtin_resolver().unwrap();
    let input = handles(&[
        "asyncio.tasks#Task",
        "asyncio#Task",
        "collections#OrderedDict",
        "concurrent.futures#ThreadPoolExecutor",
    ]);
    let parallel = resolve_batch(&resolver, &input, &ResolveOptions::default());
    let sequential = resolve_batch(
        &resolver,
        &input,
        &ResolveOptions {
            parallel: false,
            ..ResolveOptions::default()
        },
    );

    for (a, b) in parallel.iter().zip(&sequential) {
        assert!(a.outcome.as_ref().unwrap().is(b.outcome.as_ref().unwrap()));
    }
    assert!(parallel[0]
        .outcome
        .as_ref()
        .unwrap()
        .is(parallel[1].outcome.as_ref().unwrap()));
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let resolver = builtin_resolver().unwrap();
    let input = handles(&["collections", "collections#nope", "ssl", "no.such"]);
    let reports = resolve_batch(
        &resolver,
        &input,
        &ResolveOptions {
            fail_fast: true,
            ..ResolveOptions::default()
        },
    );
    assert_eq!(reports.len(), 2);
    assert!(!reports[1].is_ok());
}

#[test]
fn verbose_description_lists_members() {
    let resolver = builtin_resolver().unwrap();
    let reports = resolve_batch(
        &resolver,
        &handles(&["collections.abc#Sequence"]),
        &ResolveOptions::default(),
    );
    let value = reports[0].outcome.as_ref().unwrap();

    assert_eq!(
        reports[0].describe(value, false),
        vec!["collections.abc#Sequence -> <class 'collections.abc.Sequence'>"]
    );
    let verbose = reports[0].describe(value, true);
    assert_eq!(verbose[1], "    kind: class, type: type");
    assert!(verbose[2].contains("count"));
    assert!(verbose[2].contains("index"));
}

#[test]
fn error_chain_lists_causes() {
    let resolver = builtin_resolver().unwrap();
    let err = resolver.dereference("no.such.module#x").unwrap_err();
    assert_eq!(
        error_chain(&err),
        vec![
            "error: cannot import module 'no.such.module' for handle 'no.such.module#x': \
             no module named 'no'"
                .to_owned(),
            "  caused by: no module named 'no'".to_owned(),
        ]
    );
}

#[test]
fn missing_file_reports_path() {
    let err = check_file("/nonexistent/handles.txt", &ResolveOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    let chain = error_chain(&err);
    assert_eq!(chain[0], "error: cannot read '/nonexistent/handles.txt'");
    assert_eq!(chain.len(), 2);
}

#[test]
fn unresolved_message() {
    let err = CliError::Unresolved { failed: 2, total: 5 };
    assert_eq!(err.to_string(), "2 of 5 handles failed to resolve");
}

#[test]
fn check_args_take_one_path_and_options() {
    let args = handles(&["--no-parallel", "handles.txt", "-v"]);
    let (path, options) = parse_check_args(&args).unwrap();
    assert_eq!(path, "handles.txt");
    assert!(!options.parallel);
    assert!(options.verbose);
    assert!(!options.fail_fast);
}

#[test]
fn check_args_reject_unknown_options() {
    for option in ["--quiet", "-x"] {
        let args = handles(&["handles.txt", option]);
        let err = parse_check_args(&args).unwrap_err();
        assert!(matches!(&err, CliError::UnknownOption(o) if o == option), "{err}");
    }
}

#[test]
fn check_args_reject_extra_paths() {
    let args = handles(&["a.txt", "b.txt"]);
    let err = parse_check_args(&args).unwrap_err();
    assert_eq!(err.to_string(), "unexpected argument 'b.txt'");
}

#[test]
fn check_args_require_a_path() {
    let err = parse_check_args(&handles(&["--fail-fast"])).unwrap_err();
    assert_eq!(err.to_string(), "missing file path");
}
