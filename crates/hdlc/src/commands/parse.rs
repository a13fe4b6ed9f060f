//! The `parse` command: show how a handle splits, without importing.

use std::fmt::Write as _;

use hdl_ir::Handle;

use super::CliError;

pub fn describe_handle(handle: &Handle<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "handle: {handle}");
    let _ = writeln!(out, "module: {}", handle.module_ref());
    if handle.has_attributes() {
        let _ = writeln!(out, "attributes:");
        for (index, segment) in handle.attributes().enumerate() {
            let _ = writeln!(out, "  {index}: {segment}");
        }
    } else {
        let _ = writeln!(out, "attributes: none");
    }
    out
}

pub fn parse_handle(raw: &str) -> Result<(), CliError> {
    let handle = Handle::parse(raw)?;
    print!("{}", describe_handle(&handle));
    Ok(())
}
