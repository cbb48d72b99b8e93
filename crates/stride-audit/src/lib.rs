//! stride-audit
//!
//! Structured audit events, emitted via `tracing` so they land in CloudWatch
//! Logs alongside the rest of the application's output. Durable merge audit
//! entries are a separate concern and persist through the record store.

pub mod error;
pub mod events;
