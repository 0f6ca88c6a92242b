//! Observability: structured logging for register operations.
//!
//! Principles:
//! 1. Logging is read-only; it never affects an operation's outcome.
//! 2. One log line = one event, synchronous, no buffering.
//! 3. Deterministic output: fields are emitted in sorted order.
//! 4. Stdout belongs to command output; every log line goes to stderr.

mod logger;

pub use logger::{Logger, Severity};
