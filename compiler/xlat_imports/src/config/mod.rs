//! Import resolution configuration.
//!
//! Configuration is built once with [`ImportConfigBuilder`] and frozen into
//! an `Arc<ImportConfig>` before any resolution starts. There is no way to
//! mutate a built configuration, so it can be shared across threads that
//! translate different compilation units.
//!
//! Header mappings can be loaded from properties files:
//!
//! ```text
//! # qualified type name = header file
//! com.foo.Bar=foo/bar.h
//! com.foo.Baz: baz.h
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use xlat_diagnostic::{Diagnostic, ErrorCode};

/// Suffix every explicitly mapped header must carry.
pub const HEADER_SUFFIX: &str = ".h";

/// Origin name used for mappings parsed from an in-memory string.
const INLINE_ORIGIN: &str = "<inline>";

/// Error loading header mappings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read header mapping file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}:{line}: header mapping entry `{key}` has no value")]
    MissingValue {
        origin: String,
        line: usize,
        key: String,
    },
    #[error("{origin}:{line}: header mapping entry has no type name")]
    MissingKey { origin: String, line: usize },
}

impl ConfigLoadError {
    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigLoadError::Io { path, .. } => Diagnostic::error(ErrorCode::E1003)
                .with_message(self.to_string())
                .with_subject(path.display().to_string()),
            ConfigLoadError::MissingValue { key, .. } => Diagnostic::error(ErrorCode::E1002)
                .with_message(self.to_string())
                .with_subject(key.clone())
                .with_suggestion("write entries as `qualified.TypeName=header.h`"),
            ConfigLoadError::MissingKey { origin, .. } => Diagnostic::error(ErrorCode::E1002)
                .with_message(self.to_string())
                .with_subject(origin.clone())
                .with_suggestion("write entries as `qualified.TypeName=header.h`"),
        }
    }
}

/// Explicit qualified-name to header-file table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMappings {
    entries: FxHashMap<String, String>,
}

impl HeaderMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `type_name` to `header`, returning the previous header if any.
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        header: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(type_name.into(), header.into())
    }

    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.entries.get(type_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse properties text into a new table.
    pub fn parse_properties(text: &str) -> Result<Self, ConfigLoadError> {
        let mut mappings = Self::new();
        mappings.extend_from_properties(text, INLINE_ORIGIN)?;
        Ok(mappings)
    }

    /// Read and parse a properties file into a new table.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let mut mappings = Self::new();
        mappings.extend_from_file(path)?;
        Ok(mappings)
    }

    /// Add the entries of a properties file. Later entries win.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), ConfigLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_properties(&text, &path.display().to_string())
    }

    /// Add the entries of properties text. Later entries win.
    ///
    /// Supports the subset of the properties format header mappings use:
    /// `key=value`, `key:value` or `key value`, with `#` and `!` comment
    /// lines. Line continuations and escapes are not supported.
    fn extend_from_properties(&mut self, text: &str, origin: &str) -> Result<(), ConfigLoadError> {
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let split = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let (key, rest) = line.split_at(split);
            if key.is_empty() {
                return Err(ConfigLoadError::MissingKey {
                    origin: origin.to_owned(),
                    line: index + 1,
                });
            }
            let rest = rest.trim_start();
            let value = rest
                .strip_prefix(['=', ':'])
                .unwrap_or(rest)
                .trim_start();

            if value.is_empty() {
                return Err(ConfigLoadError::MissingValue {
                    origin: origin.to_owned(),
                    line: index + 1,
                    key: key.to_owned(),
                });
            }
            self.insert(key, value);
        }
        Ok(())
    }

    /// Render as properties text, one `key=value` line per entry, sorted by key.
    ///
    /// The output parses back to an equal table.
    pub fn to_properties(&self) -> String {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries.into_iter().fold(String::new(), |mut out, (key, header)| {
            out.push_str(key);
            out.push('=');
            out.push_str(header);
            out.push('\n');
            out
        })
    }
}

impl Extend<(String, String)> for HeaderMappings {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<(String, String)> for HeaderMappings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        HeaderMappings {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Frozen import resolution settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportConfig {
    header_mappings: HeaderMappings,
    use_package_directories: bool,
}

impl ImportConfig {
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }

    pub fn header_mappings(&self) -> &HeaderMappings {
        &self.header_mappings
    }

    /// Explicit header configured for `type_name`, if any.
    pub fn header_mapping(&self, type_name: &str) -> Option<&str> {
        self.header_mappings.get(type_name)
    }

    /// Whether unmapped headers use package-directory paths.
    pub fn use_package_directories(&self) -> bool {
        self.use_package_directories
    }
}

impl fmt::Display for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} header mapping(s), {} layout",
            self.header_mappings.len(),
            if self.use_package_directories { "package-directory" } else { "flat" }
        )
    }
}

/// Builder for [`ImportConfig`].
#[derive(Debug, Default)]
pub struct ImportConfigBuilder {
    header_mappings: HeaderMappings,
    use_package_directories: bool,
}

impl ImportConfigBuilder {
    /// Add one explicit header mapping.
    #[must_use]
    pub fn header_mapping(
        mut self,
        type_name: impl Into<String>,
        header: impl Into<String>,
    ) -> Self {
        self.header_mappings.insert(type_name, header);
        self
    }

    /// Add all entries of `mappings`, replacing existing keys.
    #[must_use]
    pub fn header_mappings(mut self, mappings: HeaderMappings) -> Self {
        self.header_mappings.extend(mappings.entries);
        self
    }

    /// Add the entries of a header mapping properties file.
    pub fn load_header_mappings(mut self, path: &Path) -> Result<Self, ConfigLoadError> {
        self.header_mappings.extend_from_file(path)?;
        Ok(self)
    }

    #[must_use]
    pub fn use_package_directories(mut self, enabled: bool) -> Self {
        self.use_package_directories = enabled;
        self
    }

    /// Freeze the configuration.
    pub fn build(self) -> Arc<ImportConfig> {
        tracing::debug!(
            mappings = self.header_mappings.len(),
            package_directories = self.use_package_directories,
            "import configuration frozen"
        );
        Arc::new(ImportConfig {
            header_mappings: self.header_mappings,
            use_package_directories: self.use_package_directories,
        })
    }
}
