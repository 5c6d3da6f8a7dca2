//! Type construction helpers for the pool.

use smallvec::SmallVec;

use super::{EntryKind, TypeEntry, TypePool};
use crate::{simple_name, TypeFlags, TypeId};

impl TypePool {
    // === Declared Types ===

    /// Intern a primitive type such as `int`.
    pub fn primitive(&mut self, name: &str) -> TypeId {
        if let Some(id) = self.lookup(name) {
            return id;
        }
        let id = self.push(TypeEntry {
            qualified_name: name.to_owned(),
            name: name.to_owned(),
            kind: EntryKind::Primitive,
            erasure: TypeId::NONE,
            enclosing: None,
            header: None,
            flags: TypeFlags::empty(),
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Intern a top-level class.
    pub fn class(&mut self, qualified_name: &str) -> TypeId {
        self.declare(qualified_name, None, TypeFlags::empty())
    }

    /// Intern a top-level interface.
    pub fn interface(&mut self, qualified_name: &str) -> TypeId {
        self.declare(qualified_name, None, TypeFlags::INTERFACE)
    }

    /// Intern a class declared inside `outer`.
    pub fn nested_class(&mut self, outer: TypeId, simple: &str) -> TypeId {
        let qualified = format!("{}.{simple}", self.entry(outer).qualified_name);
        self.declare(&qualified, Some(outer), TypeFlags::NESTED)
    }

    /// Intern an interface declared inside `outer`.
    pub fn nested_interface(&mut self, outer: TypeId, simple: &str) -> TypeId {
        let qualified = format!("{}.{simple}", self.entry(outer).qualified_name);
        self.declare(
            &qualified,
            Some(outer),
            TypeFlags::NESTED | TypeFlags::INTERFACE,
        )
    }

    fn declare(
        &mut self,
        qualified_name: &str,
        enclosing: Option<TypeId>,
        flags: TypeFlags,
    ) -> TypeId {
        if let Some(id) = self.lookup(qualified_name) {
            return id;
        }
        let id = self.push(TypeEntry {
            qualified_name: qualified_name.to_owned(),
            name: simple_name(qualified_name).to_owned(),
            kind: EntryKind::Declared,
            erasure: TypeId::NONE,
            enclosing,
            header: None,
            flags,
        });
        self.by_name.insert(qualified_name.to_owned(), id);
        id
    }

    // === Structural Types ===

    /// Apply generic type `generic` to `args`, e.g. `java.util.List<java.lang.String>`.
    ///
    /// The result erases to `generic` and shares its nesting.
    pub fn parameterized(&mut self, generic: TypeId, args: &[TypeId]) -> TypeId {
        let base = self.entry(generic);
        let (enclosing, flags) = (base.enclosing, base.flags);

        let qualified_args: Vec<&str> = args
            .iter()
            .map(|&a| self.entry(a).qualified_name.as_str())
            .collect();
        let simple_args: Vec<&str> = args.iter().map(|&a| self.entry(a).name.as_str()).collect();
        let qualified_name = format!("{}<{}>", base.qualified_name, qualified_args.join(", "));
        let name = format!("{}<{}>", base.name, simple_args.join(", "));

        self.push(TypeEntry {
            qualified_name,
            name,
            kind: EntryKind::Declared,
            erasure: generic,
            enclosing,
            header: None,
            flags,
        })
    }

    /// Create a type variable with the given bounds.
    pub fn type_variable(&mut self, name: &str, bounds: &[TypeId]) -> TypeId {
        self.push(TypeEntry {
            qualified_name: name.to_owned(),
            name: name.to_owned(),
            kind: EntryKind::TypeVariable(SmallVec::from_slice(bounds)),
            erasure: TypeId::NONE,
            enclosing: None,
            header: None,
            flags: TypeFlags::empty(),
        })
    }

    /// Replace the bounds of type variable `var`.
    ///
    /// Lets callers build bounds that refer back to the variable itself
    /// (`T extends Comparable<T>`). Has no effect on other kinds.
    pub fn set_bounds(&mut self, var: TypeId, bounds: &[TypeId]) {
        if let EntryKind::TypeVariable(existing) = &mut self.entry_mut(var).kind {
            *existing = SmallVec::from_slice(bounds);
        }
    }

    /// Create a pointer-like wrapper around `pointee`.
    pub fn pointer(&mut self, pointee: TypeId) -> TypeId {
        let target = self.entry(pointee);
        let qualified_name = format!("{}*", target.qualified_name);
        let name = format!("{}*", target.name);
        self.push(TypeEntry {
            qualified_name,
            name,
            kind: EntryKind::Pointer(pointee),
            erasure: TypeId::NONE,
            enclosing: None,
            header: None,
            flags: TypeFlags::empty(),
        })
    }

    /// Record that `ty` is declared in `header` instead of its own header.
    pub fn set_header_override(&mut self, ty: TypeId, header: &str) {
        self.entry_mut(ty).header = Some(header.to_owned());
    }
}
