//! Diagnostic logging to stderr.
//!
//! Modules log through the [`tracing`] macros; the subscriber installed by
//! [`init_subscriber`] decides what reaches the terminal.

mod subscriber;

pub use subscriber::init_subscriber;
