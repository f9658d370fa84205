//! Development-time utilities.
//!
//! - [`logging`]: a console subscriber for the `tracing` events the layout
//!   engine emits.

pub mod logging;

pub use logging::install_tracing;
