//! Diagnostic queue for collecting and deduplicating diagnostics.
//!
//! Identical diagnostics are queued once, so the same bad mapping entry is
//! reported once per batch however many types reach it.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::{Diagnostic, ErrorCode};

/// Hash the identity of a diagnostic for dedup comparison.
///
/// Notes and suggestions are derived from the same facts as the message,
/// so code, message and subject are enough.
#[inline]
fn identity_hash(diag: &Diagnostic) -> u64 {
    let mut hasher = FxHasher::default();
    diag.code.hash(&mut hasher);
    diag.message.hash(&mut hasher);
    diag.subject.hash(&mut hasher);
    hasher.finish()
}

/// Queue for collecting diagnostics in report order.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let record = resolver.resolve(&pool, ty, &mut queue);
/// for diag in queue.flush() { eprintln!("{diag}"); }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    /// Collected diagnostics, in the order they were reported.
    diagnostics: Vec<Diagnostic>,
    /// Identity hashes of queued diagnostics.
    seen: FxHashSet<u64>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `false` if an identical diagnostic was already queued.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if !self.seen.insert(identity_hash(&diag)) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Number of queued diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Count queued diagnostics carrying `code`.
    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Return queued diagnostics in report order and reset the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
