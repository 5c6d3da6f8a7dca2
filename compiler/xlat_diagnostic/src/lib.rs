//! Diagnostic system for translator error reporting.
//!
//! Every recoverable problem found while translating is reported as a
//! [`Diagnostic`] pushed into a [`DiagnosticQueue`] that the caller owns.
//! Nothing in the translator writes to stderr directly; the driver decides
//! how (and whether) to render the queue.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
