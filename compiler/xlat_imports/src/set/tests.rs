use super::*;
use pretty_assertions::assert_eq;

fn record(type_name: &str, header_path: &str) -> ImportRecord {
    ImportRecord::new(type_name.to_owned(), type_name.to_owned(), header_path.to_owned(), false)
}

fn names(set: &ImportSet) -> Vec<&str> {
    set.iter().map(ImportRecord::type_name).collect()
}

#[test]
fn duplicates_are_absorbed_first_wins() {
    let mut set = ImportSet::new();
    assert!(set.insert(record("com.foo.Bar", "bar")));
    assert!(!set.insert(record("com.foo.Bar", "com/foo/Bar")));

    assert_eq!(set.len(), 1);
    assert_eq!(set.get("com.foo.Bar").map(ImportRecord::header_path), Some("bar"));
}

#[test]
fn insertion_order_preserved() {
    let set: ImportSet = [
        record("z.Z", "Z"),
        record("a.A", "A"),
        record("m.M", "M"),
        record("a.A", "other"),
    ]
    .into_iter()
    .collect();

    assert_eq!(names(&set), ["z.Z", "a.A", "m.M"]);
}

#[test]
fn sorted_views() {
    let set: ImportSet = [record("z.Z", "Z"), record("a.A", "A"), record("m.M", "M")]
        .into_iter()
        .collect();

    let sorted: Vec<_> = set.sorted().into_iter().map(ImportRecord::type_name).collect();
    assert_eq!(sorted, ["a.A", "m.M", "z.Z"]);

    let owned: Vec<_> = set.into_sorted().into_iter().map(|r| r.type_name().to_owned()).collect();
    assert_eq!(owned, ["a.A", "m.M", "z.Z"]);
}

#[test]
fn equality_is_order_insensitive() {
    let a: ImportSet = [record("a.A", "A"), record("b.B", "B")].into_iter().collect();
    let b: ImportSet = [record("b.B", "x"), record("a.A", "y")].into_iter().collect();
    let c: ImportSet = [record("a.A", "A")].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn empty_set() {
    let set = ImportSet::new();
    assert!(set.is_empty());
    assert!(!set.contains("a.A"));
    assert!(set.get("a.A").is_none());
    assert_eq!((&set).into_iter().count(), 0);
}
