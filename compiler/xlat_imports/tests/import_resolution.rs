//! End-to-end import resolution through the public API.
//!
//! Builds a small binding layer the way the translator driver does (runtime
//! types installed, source types declared), then checks the import sets the
//! emission layer would receive.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;

use pretty_assertions::assert_eq;
use xlat_diagnostic::{DiagnosticQueue, ErrorCode};
use xlat_imports::{ImportCollector, ImportConfig, ImportResolver, ImportSet};
use xlat_types::{RuntimeTypes, TypeId, TypePool};

struct Unit {
    pool: TypePool,
    runtime: RuntimeTypes,
}

impl Unit {
    fn new() -> Self {
        let mut pool = TypePool::new();
        let runtime = RuntimeTypes::install(&mut pool);
        Unit { pool, runtime }
    }

    fn imports(&self, config: &ImportConfig, roots: &[TypeId]) -> (ImportSet, DiagnosticQueue) {
        let mapper = self.runtime.mapper();
        let collector = ImportCollector::new(&self.pool, &mapper, config);
        let mut diagnostics = DiagnosticQueue::new();
        let mut imports = ImportSet::new();
        for &root in roots {
            collector.collect_into(Some(root), &mut imports, &mut diagnostics);
        }
        (imports, diagnostics)
    }
}

/// Render include directives the way the emission layer does.
fn includes(imports: &ImportSet) -> Vec<String> {
    imports
        .sorted()
        .into_iter()
        .map(|r| format!("#include \"{}\"", r.header_file()))
        .collect()
}

#[test]
fn method_signature_imports() {
    // class Widget<T extends Comparable<T>> {
    //   Map<String, List<T>> index(T key, int[] data, Widget.Part part);
    // }
    let mut unit = Unit::new();
    let widget = unit.pool.class("com.example.Widget");
    let part = unit.pool.nested_class(widget, "Part");
    let comparable = unit.pool.interface("java.lang.Comparable");
    let t = unit.pool.type_variable("T", &[]);
    let comparable_t = unit.pool.parameterized(comparable, &[t]);
    unit.pool.set_bounds(t, &[comparable_t]);

    let string = unit.pool.class("java.lang.String");
    let list = unit.pool.interface("java.util.List");
    let map = unit.pool.interface("java.util.Map");
    let list_t = unit.pool.parameterized(list, &[t]);
    let map_type = unit.pool.parameterized(map, &[string, list_t]);
    let int = unit.pool.primitive("int");
    let int_array = unit.runtime.array_type(int);

    let (imports, diagnostics) = unit.imports(
        &ImportConfig::default(),
        &[map_type, t, int_array, part, string, int],
    );

    assert!(diagnostics.is_empty());
    assert_eq!(
        includes(&imports),
        [
            "#include \"IOSPrimitiveArray.h\"",
            "#include \"Widget.h\"",
            "#include \"java/lang/Comparable.h\"",
            "#include \"java/util/Map.h\"",
        ]
    );

    let part_record = imports.get("com.example.Widget.Part").unwrap();
    assert_eq!(part_record.main_type_name(), "com.example.Widget");
    assert!(!imports.contains("java.lang.String"));
    assert!(!imports.contains("NSString"));
}

#[test]
fn protocols_are_flagged() {
    let mut unit = Unit::new();
    let runnable = unit.pool.interface("java.lang.Runnable");
    let thread = unit.pool.class("java.lang.Thread");

    let (imports, _) = unit.imports(&ImportConfig::default(), &[runnable, thread]);
    let protocols: Vec<_> = imports
        .iter()
        .filter(|r| r.is_interface())
        .map(|r| r.type_name())
        .collect();
    assert_eq!(protocols, ["java.lang.Runnable"]);
}

#[test]
fn mapping_file_drives_header_paths() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# app headers").unwrap();
    writeln!(file, "com.foo.Bar=bar.h").unwrap();
    writeln!(file, "com.x.Y=y.txt").unwrap();

    let config = ImportConfig::builder()
        .load_header_mappings(file.path())
        .unwrap()
        .build();

    let mut unit = Unit::new();
    let bar = unit.pool.class("com.foo.Bar");
    let y = unit.pool.class("com.x.Y");
    let y_ptr = unit.pool.pointer(y);
    let (imports, mut diagnostics) = unit.imports(&config, &[bar, y, y_ptr]);

    assert_eq!(imports.get("com.foo.Bar").unwrap().header_path(), "bar");
    assert_eq!(imports.get("com.x.Y").unwrap().header_path(), "y.txt");

    let reported = diagnostics.flush();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].code, ErrorCode::E1001);
}

#[test]
fn package_directory_layout() {
    let mut unit = Unit::new();
    let widget = unit.pool.class("com.example.Widget");
    let flat = ImportConfig::default();
    let dirs = ImportConfig::builder().use_package_directories(true).build();

    let (flat_imports, _) = unit.imports(&flat, &[widget]);
    let (dir_imports, _) = unit.imports(&dirs, &[widget]);

    assert_eq!(includes(&flat_imports), ["#include \"Widget.h\""]);
    assert_eq!(includes(&dir_imports), ["#include \"com/example/Widget.h\""]);
    // Same identity under both layouts.
    assert_eq!(flat_imports, dir_imports);
}

#[test]
fn resolver_used_directly() {
    let mut unit = Unit::new();
    let outer = unit.pool.class("Outer");
    let inner = unit.pool.nested_class(outer, "Inner");
    let leaf = unit.pool.nested_class(inner, "Leaf");

    let config = ImportConfig::default();
    let record =
        ImportResolver::new(&config).resolve(&unit.pool, leaf, &mut DiagnosticQueue::new());

    assert_eq!(record.type_name(), "Outer.Inner.Leaf");
    assert_eq!(record.main_type_name(), "Outer");
    assert_eq!(record.header_path(), "Outer");
    assert_eq!(record.to_string(), "Outer.Inner.Leaf");
}

#[test]
fn shared_config_across_threads() {
    let config = ImportConfig::builder()
        .header_mapping("com.foo.Bar", "bar.h")
        .build();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || {
                let mut unit = Unit::new();
                let bar = unit.pool.class("com.foo.Bar");
                let (imports, _) = unit.imports(&config, &[bar]);
                imports.get("com.foo.Bar").unwrap().header_path().to_owned()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "bar");
    }
}

#[test]
fn tracing_init_is_idempotent() {
    xlat_imports::init_tracing();
    xlat_imports::init_tracing();

    let mut unit = Unit::new();
    let widget = unit.pool.class("com.example.Widget");
    let (imports, _) = unit.imports(&ImportConfig::default(), &[widget]);
    assert_eq!(imports.len(), 1);
}
