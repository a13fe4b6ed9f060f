//! Built-in module catalogue.
//!
//! A small set of well-known namespaces, modelled on the standard library
//! modules that configuration data most often points at (container types,
//! task types, executors, TLS contexts). Installing the catalogue only
//! registers loaders; nothing is built until first import.
//!
//! | Module | Members |
//! |--------|---------|
//! | `collections` | `deque`, `OrderedDict`, `Counter`, `defaultdict`, `namedtuple` |
//! | `collections.abc` | `Mapping`, `Sequence`, `Iterable` |
//! | `asyncio` | re-exports `Task`, `gather`, `sleep` from `asyncio.tasks` |
//! | `asyncio.tasks` | `Task`, `gather`, `sleep` |
//! | `concurrent` | (package) |
//! | `concurrent.futures` | `Future`, `ThreadPoolExecutor`, `wait`, `FIRST_COMPLETED`, `ALL_COMPLETED` |
//! | `ssl` | `SSLContext`, `Purpose`, `create_default_context`, `PROTOCOL_TLS_CLIENT`, `HAS_SNI` |

use std::sync::Arc;

use crate::{
    ClassObject, Constant, FunctionObject, ImportError, ModuleObject, ModuleRegistry, Value,
};

/// Register every built-in module on `registry`.
pub fn install(registry: &ModuleRegistry) -> Result<(), ImportError> {
    registry.register_with_doc("collections", "Container datatypes.", load_collections)?;
    registry.register_with_doc(
        "collections.abc",
        "Abstract base classes for containers.",
        load_collections_abc,
    )?;
    registry.register_with_doc("asyncio", "Asynchronous I/O.", load_asyncio)?;
    registry.register_with_doc("asyncio.tasks", "Support for tasks and coroutines.", load_asyncio_tasks)?;
    registry.register_with_doc("concurrent", "Concurrent execution package.", |_, _| Ok(()))?;
    registry.register_with_doc(
        "concurrent.futures",
        "Asynchronous execution of callables.",
        load_concurrent_futures,
    )?;
    registry.register_with_doc("ssl", "TLS wrapper for sockets.", load_ssl)?;
    Ok(())
}

fn add_class(module: &ModuleObject, class: Arc<ClassObject>) {
    module.set_attr(class.name(), Value::Class(Arc::clone(&class)));
}

fn add_function(module: &ModuleObject, name: &str) {
    let function = FunctionObject::new(module.name(), name);
    module.set_attr(name, Value::Function(Arc::new(function)));
}

fn load_collections(_: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    let name = module.name();
    add_class(
        module,
        ClassObject::builder(name, "deque")
            .doc("Double-ended queue.")
            .method("append")
            .method("appendleft")
            .method("pop")
            .method("popleft")
            .method("extend")
            .method("rotate")
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "OrderedDict")
            .doc("Dictionary that remembers insertion order.")
            .method("move_to_end")
            .method("popitem")
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "Counter")
            .doc("Dict subclass for counting hashable items.")
            .method("most_common")
            .method("elements")
            .method("update")
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "defaultdict")
            .method("__missing__")
            .constant("default_factory", Constant::None)
            .build(),
    );
    add_function(module, "namedtuple");
    Ok(())
}

fn load_collections_abc(_: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    let name = module.name();
    add_class(
        module,
        ClassObject::builder(name, "Mapping")
            .method("get")
            .method("keys")
            .method("items")
            .method("values")
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "Sequence")
            .method("index")
            .method("count")
            .build(),
    );
    add_class(module, ClassObject::builder(name, "Iterable").method("__iter__").build());
    Ok(())
}

fn load_asyncio(registry: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    let tasks = registry.import("asyncio.tasks")?;
    for export in ["Task", "gather", "sleep"] {
        let Some(value) = tasks.get(export) else {
            return Err(ImportError::failed(
                module.name().as_str(),
                format!("cannot import name '{export}' from 'asyncio.tasks'"),
            ));
        };
        module.set_attr(export, value);
    }
    Ok(())
}

fn load_asyncio_tasks(_: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    add_class(
        module,
        ClassObject::builder(module.name(), "Task")
            .doc("A coroutine wrapped in a Future.")
            .method("cancel")
            .method("done")
            .method("result")
            .method("get_name")
            .build(),
    );
    add_function(module, "gather");
    add_function(module, "sleep");
    Ok(())
}

fn load_concurrent_futures(_: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    let name = module.name();
    add_class(
        module,
        ClassObject::builder(name, "Future")
            .method("result")
            .method("exception")
            .method("add_done_callback")
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "ThreadPoolExecutor")
            .method("submit")
            .method("map")
            .method("shutdown")
            .build(),
    );
    add_function(module, "wait");
    module.set_attr("FIRST_COMPLETED", Value::string("FIRST_COMPLETED"));
    module.set_attr("ALL_COMPLETED", Value::string("ALL_COMPLETED"));
    Ok(())
}

fn load_ssl(_: &ModuleRegistry, module: &ModuleObject) -> Result<(), ImportError> {
    let name = module.name();
    add_class(
        module,
        ClassObject::builder(name, "SSLContext")
            .method("load_cert_chain")
            .method("load_verify_locations")
            .method("wrap_socket")
            .constant("check_hostname", Constant::Bool(true))
            .build(),
    );
    add_class(
        module,
        ClassObject::builder(name, "Purpose")
            .constant("SERVER_AUTH", Constant::Str(Arc::from("1.3.6.1.5.5.7.3.1")))
            .constant("CLIENT_AUTH", Constant::Str(Arc::from("1.3.6.1.5.5.7.3.2")))
            .build(),
    );
    add_function(module, "create_default_context");
    module.set_attr("PROTOCOL_TLS_CLIENT", Value::int(16));
    module.set_attr("HAS_SNI", Value::bool(true));
    Ok(())
}
