//! Target runtime types and the built-in source-to-runtime mapping.
//!
//! Some source built-ins have no translated header of their own: they are
//! represented by Foundation or runtime types. [`RuntimeTypes::install`]
//! registers those types in a pool and [`RuntimeTypes::mapper`] produces the
//! mapper that swaps a source built-in for its runtime counterpart.

use crate::{TableMapper, TypeId, TypePool};

/// Simple names of runtime types that are always available without an import.
pub const FOUNDATION_TYPES: &[&str] = &[
    "id",
    "NSObject",
    "NSString",
    "NSNumber",
    "NSCopying",
    "NSZone",
];

/// Check whether `name` is an always-available foundation type.
pub fn is_foundation_type(name: &str) -> bool {
    FOUNDATION_TYPES.contains(&name)
}

/// Header declaring every primitive array wrapper.
pub const PRIMITIVE_ARRAY_HEADER: &str = "IOSPrimitiveArray";

/// Primitive element type paired with its runtime array wrapper.
const PRIMITIVE_ARRAYS: &[(&str, &str)] = &[
    ("boolean", "IOSBooleanArray"),
    ("byte", "IOSByteArray"),
    ("char", "IOSCharArray"),
    ("double", "IOSDoubleArray"),
    ("float", "IOSFloatArray"),
    ("int", "IOSIntArray"),
    ("long", "IOSLongArray"),
    ("short", "IOSShortArray"),
];

/// Handles of the runtime types installed in a pool.
#[derive(Clone, Debug)]
pub struct RuntimeTypes {
    pub id: TypeId,
    pub ns_object: TypeId,
    pub ns_string: TypeId,
    pub ns_number: TypeId,
    pub ns_copying: TypeId,
    pub ns_zone: TypeId,
    pub ios_class: TypeId,
    pub object_array: TypeId,
    /// `(element primitive, wrapper)` pairs.
    primitive_arrays: Vec<(TypeId, TypeId)>,
    /// `(source built-in, runtime type)` pairs.
    mappings: Vec<(TypeId, TypeId)>,
}

impl RuntimeTypes {
    /// Register runtime types and the source built-ins they replace.
    ///
    /// Safe to call more than once on the same pool: declared types are
    /// interned, so the same handles come back.
    pub fn install(pool: &mut TypePool) -> Self {
        let id = pool.class("id");
        let ns_object = pool.class("NSObject");
        let ns_string = pool.class("NSString");
        let ns_number = pool.class("NSNumber");
        let ns_copying = pool.interface("NSCopying");
        let ns_zone = pool.class("NSZone");
        let ios_class = pool.class("IOSClass");
        let object_array = pool.class("IOSObjectArray");

        let primitive_arrays = PRIMITIVE_ARRAYS
            .iter()
            .map(|&(element, wrapper)| {
                let element = pool.primitive(element);
                let wrapper = pool.class(wrapper);
                pool.set_header_override(wrapper, PRIMITIVE_ARRAY_HEADER);
                (element, wrapper)
            })
            .collect();

        let mappings = vec![
            (pool.class("java.lang.Object"), ns_object),
            (pool.class("java.lang.String"), ns_string),
            (pool.class("java.lang.Number"), ns_number),
            (pool.interface("java.lang.Cloneable"), ns_copying),
        ];

        RuntimeTypes {
            id,
            ns_object,
            ns_string,
            ns_number,
            ns_copying,
            ns_zone,
            ios_class,
            object_array,
            primitive_arrays,
            mappings,
        }
    }

    /// Runtime array wrapper for arrays of `element`.
    ///
    /// Primitive elements get their dedicated wrapper; everything else
    /// uses `IOSObjectArray`.
    pub fn array_type(&self, element: TypeId) -> TypeId {
        self.primitive_arrays
            .iter()
            .find(|&&(e, _)| e == element)
            .map_or(self.object_array, |&(_, wrapper)| wrapper)
    }

    /// Mapper replacing source built-ins with their runtime types.
    pub fn mapper(&self) -> TableMapper<TypeId> {
        let mut mapper = TableMapper::new();
        for &(source, target) in &self.mappings {
            mapper.insert(source, target);
        }
        mapper
    }
}
