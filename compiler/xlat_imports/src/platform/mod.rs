//! Platform package registry.
//!
//! Headers for the runtime's own libraries are always laid out in package
//! directories, even when the translation is configured for flat header
//! names. Without this, `java.util.List` would resolve to a bare `List`
//! header that the runtime does not ship.

/// Namespaces shipped with the runtime libraries, sorted for binary search.
pub const PLATFORM_PACKAGES: &[&str] = &[
    "android",
    "com.android.internal.util",
    "com.google.android",
    "com.google.common",
    "com.google.common.annotations",
    "com.google.common.base",
    "com.google.common.cache",
    "com.google.common.collect",
    "com.google.common.hash",
    "com.google.common.io",
    "com.google.common.math",
    "com.google.common.net",
    "com.google.common.primitives",
    "com.google.common.util",
    "com.google.j2objc",
    "com.google.protobuf",
    "dalvik",
    "java",
    "javax",
    "junit",
    "libcore",
    "org.apache.harmony",
    "org.hamcrest",
    "org.json",
    "org.junit",
    "org.kxml2",
    "org.mockito",
    "org.w3c",
    "org.xml.sax",
    "org.xmlpull",
    "sun.misc",
];

/// Check whether `prefix` is exactly a platform namespace.
#[inline]
pub fn is_platform_package(prefix: &str) -> bool {
    PLATFORM_PACKAGES.binary_search(&prefix).is_ok()
}

/// Check whether any dotted prefix of `qualified_name` is a platform namespace.
///
/// Prefixes grow one segment at a time up to and including the full name,
/// so the leaf type name takes part in the match too.
pub fn is_platform_class(qualified_name: &str) -> bool {
    if qualified_name.is_empty() {
        return false;
    }
    qualified_name
        .match_indices('.')
        .map(|(dot, _)| &qualified_name[..dot])
        .chain(std::iter::once(qualified_name))
        .any(is_platform_package)
}

#[cfg(test)]
mod tests;
