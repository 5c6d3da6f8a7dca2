//! Arena-backed binding layer.
//!
//! `TypePool` owns every type the translator has seen and hands out
//! [`TypeId`] handles. Declared classes and interfaces are interned by
//! qualified name; parameterized types, variables and pointers are
//! structural and always get a fresh entry.

mod construct;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{TypeBindings, TypeFlags, TypeId, TypeKind};

/// Kind payload stored per entry.
#[derive(Clone, Debug)]
enum EntryKind {
    Primitive,
    Declared,
    /// Bounds inline for the usual one- or two-bound case.
    TypeVariable(SmallVec<[TypeId; 2]>),
    Pointer(TypeId),
}

#[derive(Clone, Debug)]
struct TypeEntry {
    qualified_name: String,
    name: String,
    kind: EntryKind,
    erasure: TypeId,
    enclosing: Option<TypeId>,
    header: Option<String>,
    flags: TypeFlags,
}

/// Owner of all pooled types.
#[derive(Clone, Debug, Default)]
pub struct TypePool {
    entries: Vec<TypeEntry>,
    /// Declared (and primitive) types by qualified name.
    by_name: FxHashMap<String, TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pooled types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a declared or primitive type by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        self.by_name.get(qualified_name).copied()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn id_at(index: usize) -> TypeId {
        TypeId::from_raw(index as u32)
    }

    /// Entry for `ty`.
    ///
    /// Ids only come from this pool, so an out-of-range id is a caller
    /// mixing pools; indexing panics in that case.
    #[inline]
    fn entry(&self, ty: TypeId) -> &TypeEntry {
        &self.entries[ty.index()]
    }

    #[inline]
    fn entry_mut(&mut self, ty: TypeId) -> &mut TypeEntry {
        &mut self.entries[ty.index()]
    }

    /// Append an entry whose erasure is itself.
    fn push(&mut self, mut entry: TypeEntry) -> TypeId {
        let id = Self::id_at(self.entries.len());
        if entry.erasure.is_none() {
            entry.erasure = id;
        }
        self.entries.push(entry);
        id
    }
}

impl TypeBindings for TypePool {
    type Id = TypeId;

    fn kind(&self, ty: TypeId) -> TypeKind<'_, TypeId> {
        match &self.entry(ty).kind {
            EntryKind::Primitive => TypeKind::Primitive,
            EntryKind::Declared => TypeKind::Ordinary,
            EntryKind::TypeVariable(bounds) => TypeKind::TypeVariable {
                bounds: bounds.as_slice(),
            },
            EntryKind::Pointer(pointee) => TypeKind::PointerLike { pointee: *pointee },
        }
    }

    fn qualified_name(&self, ty: TypeId) -> &str {
        &self.entry(ty).qualified_name
    }

    fn name(&self, ty: TypeId) -> &str {
        &self.entry(ty).name
    }

    fn erasure(&self, ty: TypeId) -> TypeId {
        self.entry(ty).erasure
    }

    fn enclosing_type(&self, ty: TypeId) -> Option<TypeId> {
        self.entry(ty).enclosing
    }

    fn is_top_level(&self, ty: TypeId) -> bool {
        !self.entry(ty).flags.contains(TypeFlags::NESTED)
    }

    fn is_interface(&self, ty: TypeId) -> bool {
        self.entry(ty).flags.contains(TypeFlags::INTERFACE)
    }

    fn header_override(&self, ty: TypeId) -> Option<&str> {
        self.entry(ty).header.as_deref()
    }
}
