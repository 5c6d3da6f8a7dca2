//! Header import resolution.
//!
//! Given a type from the binding layer, works out which generated header
//! declares it and which headers are needed to fully describe it.
//!
//! # Architecture
//!
//! ```text
//! ImportConfig (frozen, Arc)        TypeBindings + TypeMapper
//!        │                                   │
//!        └──────────────┬────────────────────┘
//!                       ↓
//!              ImportCollector::collect(root)
//!        unwraps pointers, type variables, primitives
//!                       ↓
//!              ImportResolver::resolve(ty)
//!        nesting walk → erasure/override → mapping / layout
//!                       ↓
//!        ImportSet { ImportRecord, ... }  (deduplicated by type name)
//! ```
//!
//! Resolution never fails. Configuration problems are reported to the
//! caller's `DiagnosticQueue` and resolution carries on.
//!
//! # Debugging
//!
//! - `RUST_LOG=xlat_imports=debug`: foundation skips and mapped headers.
//! - `RUST_LOG=xlat_imports=trace`: every resolve/collect step.

mod collect;
pub mod config;
pub mod platform;
mod record;
mod resolve;
mod set;
mod stack;

pub use collect::ImportCollector;
pub use config::{ConfigLoadError, HeaderMappings, ImportConfig, ImportConfigBuilder, HEADER_SUFFIX};
pub use platform::is_platform_class;
pub use record::ImportRecord;
pub use resolve::{main_type, ImportResolver};
pub use set::ImportSet;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=xlat_imports=debug` or `RUST_LOG=xlat_imports=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
