//! A resolved import.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::HEADER_SUFFIX;

/// One resolved import: a type and the header that declares it.
///
/// Imports are equal if their fully qualified type names are equal. The
/// header path does not take part in equality, hashing or ordering.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportRecord {
    type_name: String,
    main_type_name: String,
    header_path: String,
    is_interface: bool,
}

impl ImportRecord {
    pub(crate) fn new(
        type_name: String,
        main_type_name: String,
        header_path: String,
        is_interface: bool,
    ) -> Self {
        ImportRecord {
            type_name,
            main_type_name,
            header_path,
            is_interface,
        }
    }

    /// Qualified name of the imported type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Qualified name of the top-level type whose header declares this type.
    pub fn main_type_name(&self) -> &str {
        &self.main_type_name
    }

    /// Header path without extension: `java/util/List`, `Widget`, `foo/bar`.
    pub fn header_path(&self) -> &str {
        &self.header_path
    }

    /// Header file name as written in an include directive.
    pub fn header_file(&self) -> String {
        format!("{}{HEADER_SUFFIX}", self.header_path)
    }

    /// Whether the type is an interface (forward-declared as a protocol).
    pub fn is_interface(&self) -> bool {
        self.is_interface
    }
}

impl PartialEq for ImportRecord {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for ImportRecord {}

impl Hash for ImportRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
    }
}

impl PartialOrd for ImportRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ImportRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name.cmp(&other.type_name)
    }
}

impl fmt::Display for ImportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}
