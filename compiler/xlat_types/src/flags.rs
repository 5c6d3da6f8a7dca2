//! Per-type property flags.
//!
//! Computed once when a type enters the pool and never recomputed.

use bitflags::bitflags;

bitflags! {
    /// Cached declaration properties of a pooled type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// Declared as an interface (protocol on the target side).
        const INTERFACE = 1 << 0;
        /// Declared inside another type.
        const NESTED = 1 << 1;
    }
}
