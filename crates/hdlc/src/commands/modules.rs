//! The `modules` command: list the built-in module catalogue.

use hdl_runtime::ModuleRegistry;

use super::CliError;

pub fn list_modules() -> Result<(), CliError> {
    let registry = ModuleRegistry::with_builtins().map_err(CliError::Setup)?;
    for name in registry.registered_names() {
        println!("{name}");
    }
    Ok(())
}
