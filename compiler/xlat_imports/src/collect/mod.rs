//! Transitive import collection.
//!
//! Computes every import needed to fully describe a type: pointer-like
//! wrappers contribute their pointee, type variables contribute their
//! bounds, and ordinary types contribute themselves after being mapped to
//! their runtime representation.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};
use xlat_diagnostic::DiagnosticQueue;
use xlat_types::{is_foundation_type, TypeBindings, TypeKind, TypeMapper};

use crate::stack::ensure_sufficient_stack;
use crate::{ImportConfig, ImportResolver, ImportSet};

/// Collects imports reachable from a root type.
pub struct ImportCollector<'a, B: TypeBindings + ?Sized, M> {
    bindings: &'a B,
    mapper: &'a M,
    resolver: ImportResolver<'a>,
}

impl<'a, B, M> ImportCollector<'a, B, M>
where
    B: TypeBindings + ?Sized,
    M: TypeMapper<B>,
{
    pub fn new(bindings: &'a B, mapper: &'a M, config: &'a ImportConfig) -> Self {
        ImportCollector {
            bindings,
            mapper,
            resolver: ImportResolver::new(config),
        }
    }

    pub fn resolver(&self) -> ImportResolver<'a> {
        self.resolver
    }

    /// Imports needed by `root`, in discovery order.
    pub fn collect(&self, root: Option<B::Id>, diagnostics: &mut DiagnosticQueue) -> ImportSet {
        let mut imports = ImportSet::new();
        self.collect_into(root, &mut imports, diagnostics);
        imports
    }

    /// Add the imports needed by `root` to `imports`.
    ///
    /// Call repeatedly with the same set to accumulate imports for several
    /// types; names already present are not resolved again.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(root = root.map(|r| self.bindings.qualified_name(r)))
    )]
    pub fn collect_into(
        &self,
        root: Option<B::Id>,
        imports: &mut ImportSet,
        diagnostics: &mut DiagnosticQueue,
    ) {
        let Some(root) = root else {
            return;
        };
        let mut visited = FxHashSet::default();
        self.add_imports(root, imports, &mut visited, diagnostics);
    }

    fn add_imports(
        &self,
        ty: B::Id,
        imports: &mut ImportSet,
        visited: &mut FxHashSet<B::Id>,
        diagnostics: &mut DiagnosticQueue,
    ) {
        // Bounds may refer back to the variable (`T extends Comparable<T>`)
        // or to each other.
        if !visited.insert(ty) {
            return;
        }

        ensure_sufficient_stack(|| match self.bindings.kind(ty) {
            TypeKind::Primitive => {}
            TypeKind::PointerLike { pointee } => {
                self.add_imports(pointee, imports, visited, diagnostics);
            }
            TypeKind::TypeVariable { bounds } => {
                for &bound in bounds {
                    self.add_imports(bound, imports, visited, diagnostics);
                }
            }
            TypeKind::Ordinary => self.add_ordinary(ty, imports, diagnostics),
        });
    }

    fn add_ordinary(&self, ty: B::Id, imports: &mut ImportSet, diagnostics: &mut DiagnosticQueue) {
        let mapped = self.mapper.map(self.bindings, self.bindings.erasure(ty));

        let name = self.bindings.name(mapped);
        if is_foundation_type(name) {
            debug!(name, "foundation type needs no import");
            return;
        }

        if imports.contains(self.bindings.qualified_name(mapped)) {
            return;
        }

        let record = self.resolver.resolve(self.bindings, mapped, diagnostics);
        trace!(%record, header = record.header_path(), "import added");
        imports.insert(record);
    }
}
