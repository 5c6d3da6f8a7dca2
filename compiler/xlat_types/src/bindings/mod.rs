//! The binding-layer seam: what import resolution may ask about a type.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Structural classification of a type.
///
/// Matched exhaustively wherever imports are computed, so a new kind cannot
/// be silently treated as an ordinary class.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TypeKind<'a, Id> {
    /// A primitive (`int`, `boolean`, ...). Needs no header.
    Primitive,
    /// A type variable. Its headers are those of its bounds.
    TypeVariable { bounds: &'a [Id] },
    /// A pointer-like wrapper around a manually managed reference.
    PointerLike { pointee: Id },
    /// A class or interface, possibly parameterized or nested.
    Ordinary,
}

/// Read-only access to the facts the translator needs about types.
///
/// Handles are cheap copyable ids owned by the implementor; they must stay
/// valid for as long as the bindings value lives.
pub trait TypeBindings {
    /// Handle identifying one type.
    ///
    /// Import collection remembers visited types by id, so every query that
    /// reaches the same type (a bound, a pointee, an erasure) must return the
    /// same id for it. Handing out a fresh id on each query would let a
    /// self-referential bound recurse without end.
    type Id: Copy + Eq + Hash + fmt::Debug;

    /// Classify `ty`.
    fn kind(&self, ty: Self::Id) -> TypeKind<'_, Self::Id>;

    /// Fully qualified, dot-separated name, including enclosing types.
    fn qualified_name(&self, ty: Self::Id) -> &str;

    /// Simple name of `ty`.
    fn name(&self, ty: Self::Id) -> &str {
        simple_name(self.qualified_name(ty))
    }

    /// The type with its generic arguments stripped.
    fn erasure(&self, ty: Self::Id) -> Self::Id;

    /// The type whose declaration directly contains `ty`'s declaration.
    fn enclosing_type(&self, ty: Self::Id) -> Option<Self::Id>;

    /// Whether `ty` is declared outside any other type.
    fn is_top_level(&self, ty: Self::Id) -> bool {
        self.enclosing_type(ty).is_none()
    }

    fn is_interface(&self, ty: Self::Id) -> bool;

    /// Header name for runtime types declared somewhere other than
    /// their own name suggests.
    fn header_override(&self, _ty: Self::Id) -> Option<&str> {
        None
    }
}

/// Last dot-separated segment of a qualified name.
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or(qualified, |(_, simple)| simple)
}

/// Maps a source type to the target runtime type that represents it.
pub trait TypeMapper<B: TypeBindings + ?Sized> {
    fn map(&self, bindings: &B, ty: B::Id) -> B::Id;
}

/// Mapper that leaves every type as it is.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentityMapper;

impl<B: TypeBindings + ?Sized> TypeMapper<B> for IdentityMapper {
    fn map(&self, _bindings: &B, ty: B::Id) -> B::Id {
        ty
    }
}

/// Mapper backed by an explicit source-to-target table.
///
/// Types missing from the table map to themselves.
#[derive(Clone, Debug)]
pub struct TableMapper<Id> {
    table: FxHashMap<Id, Id>,
}

impl<Id> Default for TableMapper<Id> {
    fn default() -> Self {
        TableMapper {
            table: FxHashMap::default(),
        }
    }
}

impl<Id: Copy + Eq + Hash> TableMapper<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `source` to `target`, replacing any previous entry.
    pub fn insert(&mut self, source: Id, target: Id) {
        self.table.insert(source, target);
    }

    /// Look up the target for `source` without falling back.
    pub fn get(&self, source: Id) -> Option<Id> {
        self.table.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<B: TypeBindings + ?Sized> TypeMapper<B> for TableMapper<B::Id> {
    fn map(&self, _bindings: &B, ty: B::Id) -> B::Id {
        self.get(ty).unwrap_or(ty)
    }
}
