//! Pipeline logging, compiled out by default.
//!
//! Host integrations embed this crate inside an interactive tool, so logging
//! is opt-in: enable the `tracing` cargo feature to get the real `tracing`
//! macros. Without it the macros below take the same token streams and
//! expand to nothing, so call sites never evaluate their field expressions.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

// macro_export lands these at the crate root; mirror them here so call
// sites can use crate::log::debug! under either feature state.
#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
