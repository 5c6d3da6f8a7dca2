//! Type bindings for the translator.
//!
//! Import resolution never inspects source syntax. It only needs a handful
//! of structural facts about a type (its qualified name, erasure, nesting,
//! kind) which the binding layer supplies through the [`TypeBindings`]
//! trait. This crate defines that seam, the [`TypeMapper`] seam that maps
//! source built-ins to target runtime types, and [`TypePool`], an
//! arena-backed binding layer used by the driver and by tests.
//!
//! # Type Kinds
//!
//! Every type is classified by a closed [`TypeKind`]:
//!
//! ```text
//! Primitive            int, boolean, ...       (never imported)
//! TypeVariable(bounds) T extends A & B          (imports come from bounds)
//! PointerLike(pointee) Foo*                     (imports come from pointee)
//! Ordinary             classes and interfaces   (resolved to a header)
//! ```

mod bindings;
mod flags;
mod id;
mod pool;
pub mod runtime;

pub use bindings::{simple_name, IdentityMapper, TableMapper, TypeBindings, TypeKind, TypeMapper};
use flags::TypeFlags;
pub use id::TypeId;
pub use pool::TypePool;
pub use runtime::{is_foundation_type, RuntimeTypes, FOUNDATION_TYPES};
