use super::*;

#[test]
fn packages_are_sorted_and_unique() {
    assert!(PLATFORM_PACKAGES.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn top_level_namespace_matches() {
    assert!(is_platform_class("java.util.List"));
    assert!(is_platform_class("javax.inject.Inject"));
    assert!(is_platform_class("android.os.Bundle"));
}

#[test]
fn multi_segment_namespace_matches() {
    assert!(is_platform_class("com.google.common.collect.ImmutableList"));
    assert!(is_platform_class("org.xml.sax.Attributes"));
    assert!(is_platform_class("sun.misc.Unsafe"));
}

#[test]
fn partial_segment_does_not_match() {
    // "com.google" alone is not registered, and prefixes are whole segments.
    assert!(!is_platform_class("com.google.gson.Gson"));
    assert!(!is_platform_class("javafx.scene.Node"));
    assert!(!is_platform_class("org.xmlunit.Diff"));
    assert!(!is_platform_class("com.example.Widget"));
}

#[test]
fn full_name_takes_part() {
    // The leaf segment is included in the last prefix.
    assert!(is_platform_class("java"));
    assert!(is_platform_class("org.json"));
    assert!(!is_platform_class("org"));
}

#[test]
fn degenerate_names() {
    assert!(!is_platform_class(""));
    assert!(!is_platform_class("."));
    assert!(!is_platform_class(".java"));
    assert!(is_platform_class("java."));
    assert!(is_platform_class("java..util"));
}
