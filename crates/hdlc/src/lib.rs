//! HDLC - command-line front end for the handle resolver.
//!
//! The binary in `main.rs` only parses arguments; every command lives in
//! [`commands`] so it can be driven from tests.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `HDLC_LOG_TREE` also set,
/// spans are rendered as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = if std::env::var_os("HDLC_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            (None, Some(flat))
        };

        tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .init();
    });
}
