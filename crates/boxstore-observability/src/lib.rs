//! Structured logging for the BoxStore storefront.
//!
//! `StructuredLogger` formats entries as JSON or human-readable lines and
//! hands them to `tracing`, so whichever subscriber the host installs
//! (console in the browser, fmt on the server) receives them.

mod logging;

pub use logging::*;
