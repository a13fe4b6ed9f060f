//! Property-based tests for handle parsing.
//!
//! These tests generate random handles and verify:
//! 1. Parsing recovers exactly the module path and attribute segments used to
//!    build the handle
//! 2. A trailing `#` never changes what a handle refers to
//! 3. Arbitrary input never panics, and anything accepted is well formed

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use hdl_ir::{Handle, HandleBuf, MalformedKind};
use proptest::prelude::*;

// -- Strategies --

/// Generate an identifier-like segment.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,11}").expect("valid regex")
}

fn dotted_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..=max)
}

proptest! {
    #[test]
    fn module_only_round_trips(module in dotted_strategy(4)) {
        let raw = module.join(".");
        let handle = Handle::parse(&raw).unwrap();
        prop_assert_eq!(handle.module_ref(), raw.as_str());
        prop_assert!(!handle.has_attributes());
        prop_assert_eq!(handle.module_name().depth(), module.len());
    }

    #[test]
    fn attribute_chain_round_trips(
        module in dotted_strategy(3),
        attrs in dotted_strategy(4),
    ) {
        let raw = format!("{}#{}", module.join("."), attrs.join("."));
        let handle = Handle::parse(&raw).unwrap();
        prop_assert_eq!(handle.module_ref(), module.join("."));
        let parsed: Vec<&str> = handle.attributes().collect();
        let expected: Vec<&str> = attrs.iter().map(|s| s.as_str()).collect();
        prop_assert_eq!(parsed, expected);
        prop_assert_eq!(handle.attribute_count(), attrs.len());
    }

    #[test]
    fn trailing_separator_is_module_only(module in dotted_strategy(4)) {
        let plain = module.join(".");
        let trailing = format!("{plain}#");
        let a = Handle::parse(&plain).unwrap();
        let b = Handle::parse(&trailing).unwrap();
        prop_assert_eq!(a.module_ref(), b.module_ref());
        prop_assert!(!b.has_attributes());
    }

    #[test]
    fn leading_separator_is_rejected(rest in ".*") {
        let raw = format!("#{rest}");
        let err = Handle::parse(&raw).unwrap_err();
        prop_assert_eq!(err.kind, MalformedKind::EmptyModuleReference);
    }

    #[test]
    fn arbitrary_input_is_well_formed_when_accepted(raw in ".{0,40}") {
        if let Ok(handle) = Handle::parse(&raw) {
            prop_assert!(!handle.module_ref().is_empty());
            prop_assert!(!handle.module_ref().contains('#'));
            prop_assert!(handle.module_ref().split('.').all(|s| !s.is_empty()));
            prop_assert!(handle.attributes().all(|s| !s.is_empty()));
            // The owned form agrees with the borrowed one.
            let buf = HandleBuf::new(raw.clone()).unwrap();
            prop_assert_eq!(buf.as_handle(), handle);
        } else {
            prop_assert!(HandleBuf::new(raw.clone()).is_err());
        }
    }
}
