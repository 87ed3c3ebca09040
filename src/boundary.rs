//! Runtime-facing boundary: inbound calls, outbound events, and the callback table.

/// Wire enums for inbound calls and their dispatcher.
pub mod calls;
/// Outbound runtime events and the sinks that deliver them.
pub mod events;
pub mod handlers;
