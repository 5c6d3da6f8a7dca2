//! Property-based tests for import resolution.
//!
//! Generates qualified names and type shapes and checks:
//! 1. Records order exactly like their type names
//! 2. Pointer wrappers never change an import set
//! 3. A type variable imports the union of its bounds
//! 4. Platform detection follows whole-segment prefixes

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use xlat_diagnostic::DiagnosticQueue;
use xlat_imports::{
    is_platform_class, platform::PLATFORM_PACKAGES, ImportCollector, ImportConfig, ImportSet,
};
use xlat_types::{is_foundation_type, RuntimeTypes, TypeId, TypePool};

// -- Strategies --

/// A lowercase package segment.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}").expect("valid regex")
}

/// A qualified class name `pkg.pkg.Type` that always needs an import.
fn qualified_name_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..4),
        prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}")
            .expect("valid regex")
            .prop_filter("not a foundation type", |class| !is_foundation_type(class)),
    )
        .prop_map(|(packages, class)| format!("{}.{class}", packages.join(".")))
        .prop_filter("not a runtime-mapped built-in", |name| !name.starts_with("java.lang."))
}

fn collect(pool: &TypePool, runtime: &RuntimeTypes, root: TypeId) -> ImportSet {
    let mapper = runtime.mapper();
    let config = ImportConfig::default();
    ImportCollector::new(pool, &mapper, &config).collect(Some(root), &mut DiagnosticQueue::new())
}

proptest! {
    #[test]
    fn records_sort_like_names(
        names in prop::collection::btree_set(qualified_name_strategy(), 1..12),
    ) {
        let mut pool = TypePool::new();
        let runtime = RuntimeTypes::install(&mut pool);
        let mut imports = ImportSet::new();
        // Insert in reverse to make sure sorting does the work.
        for name in names.iter().rev() {
            let ty = pool.class(name);
            imports.extend(collect(&pool, &runtime, ty));
        }

        let sorted: Vec<String> = imports
            .into_sorted()
            .into_iter()
            .map(|r| r.type_name().to_owned())
            .collect();
        let expected: Vec<String> = names.into_iter().collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn pointers_are_transparent(name in qualified_name_strategy(), depth in 1usize..6) {
        let mut pool = TypePool::new();
        let runtime = RuntimeTypes::install(&mut pool);
        let base = pool.class(&name);
        let mut wrapped = base;
        for _ in 0..depth {
            wrapped = pool.pointer(wrapped);
        }

        prop_assert_eq!(collect(&pool, &runtime, wrapped), collect(&pool, &runtime, base));
    }

    #[test]
    fn variables_union_bounds(
        first in qualified_name_strategy(),
        second in qualified_name_strategy(),
    ) {
        let mut pool = TypePool::new();
        let runtime = RuntimeTypes::install(&mut pool);
        let a = pool.class(&first);
        let b = pool.interface(&second);
        let var = pool.type_variable("T", &[a, b]);

        let mut union = collect(&pool, &runtime, a);
        union.extend(collect(&pool, &runtime, b));
        let from_var = collect(&pool, &runtime, var);

        prop_assert_eq!(from_var.len(), if first == second { 1 } else { 2 });
        prop_assert_eq!(from_var, union);
    }

    #[test]
    fn platform_prefix_detection(
        index in 0..PLATFORM_PACKAGES.len(),
        rest in prop::collection::vec(segment_strategy(), 0..3),
    ) {
        let package = PLATFORM_PACKAGES[index];
        let name = std::iter::once(package.to_owned()).chain(rest).collect::<Vec<_>>().join(".");
        prop_assert!(is_platform_class(&name));

        // Gluing extra characters onto the namespace breaks the segment match,
        // unless a shorter registered prefix still covers it.
        let glued = format!("{package}zz");
        let shorter_match = PLATFORM_PACKAGES
            .iter()
            .any(|p| glued.starts_with(&format!("{p}.")));
        prop_assert_eq!(is_platform_class(&glued), shorter_match);
    }
}
