//! Property-based tests for handle resolution.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "proptest strategies and assertions use unwrap for brevity"
)]

use hdl_resolve::{HandleResolver, ResolveErrorKind, Value};
use hdl_runtime::{ClassObject, ModuleName, ModuleRegistry, Reflectable};
use proptest::prelude::*;

const LEAF: i64 = 42;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn attribute() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,6}"
}

/// Registry where `module` exists (with every parent package) and
/// `module#chain` names the integer `LEAF`.
fn registry_with_chain(module: &[String], chain: &[String]) -> ModuleRegistry {
    let registry = ModuleRegistry::new();
    for depth in 1..module.len() {
        registry
            .register(&module[..depth].join("."), |_, _| Ok(()))
            .unwrap();
    }

    let chain = chain.to_vec();
    registry
        .register(&module.join("."), move |_, object| {
            let name: &ModuleName = object.name();
            let mut value = Value::int(LEAF);
            for (index, segment) in chain.iter().enumerate().skip(1).rev() {
                let class = ClassObject::builder(name, &format!("Level{index}"))
                    .attr(segment, value)
                    .build();
                value = Value::Class(class);
            }
            object.set_attr(chain[0].as_str(), value);
            Ok(())
        })
        .unwrap();
    registry
}

proptest! {
    #[test]
    fn resolution_equals_sequential_lookup(
        module in prop::collection::vec(segment(), 1..4),
        chain in prop::collection::vec(attribute(), 1..5),
    ) {
        let registry = registry_with_chain(&module, &chain);
        let module_name = module.join(".");
        let resolver = HandleResolver::new(&registry);

        let handle = format!("{module_name}#{}", chain.join("."));
        let resolved = resolver.dereference(&handle).unwrap();
        prop_assert_eq!(&resolved, &Value::int(LEAF));

        let mut walked = Value::Module(registry.import(&module_name).unwrap());
        for segment in &chain {
            walked = walked.get_attr(segment).unwrap();
        }
        prop_assert!(resolved.is(&walked));
    }

    #[test]
    fn trailing_separator_is_the_module(
        module in prop::collection::vec(segment(), 1..4),
        chain in prop::collection::vec(attribute(), 1..3),
    ) {
        let registry = registry_with_chain(&module, &chain);
        let module_name = module.join(".");
        let resolver = HandleResolver::new(&registry);

        let bare = resolver.dereference(&module_name).unwrap();
        let trailing = resolver.dereference(&format!("{module_name}#")).unwrap();
        prop_assert!(bare.is(&trailing));
        prop_assert_eq!(bare.as_module().unwrap().name().as_str(), module_name.as_str());
    }

    #[test]
    fn failure_reports_first_unknown_segment(
        module in prop::collection::vec(segment(), 1..3),
        chain in prop::collection::vec(attribute(), 1..5),
        cut in any::<prop::sample::Index>(),
    ) {
        let registry = registry_with_chain(&module, &chain);
        let resolver = HandleResolver::new(&registry);

        // `_` cannot start a generated attribute, so this segment never exists.
        let index = cut.index(chain.len());
        let mut broken = chain.clone();
        broken[index] = "_absent".to_owned();
        let handle = format!("{}#{}", module.join("."), broken.join("."));

        let err = resolver.dereference(&handle).unwrap_err();
        prop_assert_eq!(err.kind(), ResolveErrorKind::AttributeResolution);
        prop_assert_eq!(err.failed_segment(), Some((index, "_absent")));
    }
}
