//! Stack safety for the recursive import walk.
//!
//! Pointer chains and type-variable bounds are walked recursively. The
//! visited set stops cycles but not depth: an acyclic chain of thousands of
//! distinct pointer or variable types still recurses once per link, and a
//! generated binding layer can produce such chains. Each step therefore
//! grows the stack on demand instead of trusting the default thread stack.
//!
//! - **Native targets**: `stacker` grows the stack when less than the red
//!   zone remains.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
