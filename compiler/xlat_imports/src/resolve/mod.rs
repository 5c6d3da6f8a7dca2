//! Resolution of a single type to its import.
//!
//! # Algorithm
//!
//! ```text
//! ty ──nesting walk──→ main type (outermost enclosing type)
//!                         │
//!            erasure name, or the type's header override
//!                         │
//!          ┌──────────────┴───────────────┐
//!     mapped in config               not mapped
//!          │                              │
//!   strip ".h" (or report      package dirs or platform class?
//!   and keep value as is)         yes: a.b.C → a/b/C
//!                                 no:  a.b.C → C
//! ```

use tracing::{debug, warn};
use xlat_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use xlat_types::{simple_name, TypeBindings};

use crate::platform::is_platform_class;
use crate::{ImportConfig, ImportRecord, HEADER_SUFFIX};

/// Walk enclosing types until a top-level type is reached.
///
/// A nested type whose binding has no enclosing type ends the walk.
pub fn main_type<B: TypeBindings + ?Sized>(bindings: &B, ty: B::Id) -> B::Id {
    let mut main = ty;
    while !bindings.is_top_level(main) {
        match bindings.enclosing_type(main) {
            Some(outer) => main = outer,
            None => break,
        }
    }
    main
}

/// Resolves types to [`ImportRecord`]s under a frozen configuration.
///
/// Expects an ordinary (class or interface) type. Pointers, type variables
/// and primitives are unwrapped by [`ImportCollector`](crate::ImportCollector).
#[derive(Copy, Clone, Debug)]
pub struct ImportResolver<'cfg> {
    config: &'cfg ImportConfig,
}

impl<'cfg> ImportResolver<'cfg> {
    pub fn new(config: &'cfg ImportConfig) -> Self {
        ImportResolver { config }
    }

    pub fn config(&self) -> &'cfg ImportConfig {
        self.config
    }

    /// Resolve `ty` to its import.
    ///
    /// The header comes from the outermost enclosing type, never from a
    /// nested type itself.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = bindings.qualified_name(ty)))]
    pub fn resolve<B: TypeBindings + ?Sized>(
        &self,
        bindings: &B,
        ty: B::Id,
        diagnostics: &mut DiagnosticQueue,
    ) -> ImportRecord {
        let main = main_type(bindings, ty);
        ImportRecord::new(
            bindings.qualified_name(ty).to_owned(),
            bindings.qualified_name(main).to_owned(),
            self.header_path(bindings, main, diagnostics),
            bindings.is_interface(ty),
        )
    }

    /// Extension-free header path for top-level type `main_type`.
    ///
    /// A mapping value without the `.h` suffix is reported as `E1001` and
    /// returned unmodified; existing mapping files rely on that.
    pub fn header_path<B: TypeBindings + ?Sized>(
        &self,
        bindings: &B,
        main_type: B::Id,
        diagnostics: &mut DiagnosticQueue,
    ) -> String {
        let canonical = bindings
            .header_override(main_type)
            .unwrap_or_else(|| bindings.qualified_name(bindings.erasure(main_type)));

        if let Some(mapped) = self.config.header_mapping(canonical) {
            debug!(canonical, mapped, "explicit header mapping");
            return match mapped.strip_suffix(HEADER_SUFFIX) {
                Some(stem) => stem.to_owned(),
                None => {
                    warn!(canonical, mapped, "header mapping lacks header suffix");
                    diagnostics.add(invalid_header_name(canonical, mapped));
                    mapped.to_owned()
                }
            };
        }

        if self.config.use_package_directories() || is_platform_class(canonical) {
            canonical.replace('.', "/")
        } else {
            simple_name(canonical).to_owned()
        }
    }
}

#[cold]
fn invalid_header_name(type_name: &str, header: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("filename \"{header}\" is not a valid header file name"))
        .with_subject(type_name)
        .with_note("the configured value is used unchanged as the header path")
        .with_suggestion(format!("header mapping values must end in `{HEADER_SUFFIX}`"))
}
