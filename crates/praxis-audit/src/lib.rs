//! praxis-audit
//!
//! Structured audit events for report lifecycle actions, emitted via
//! `tracing` so they land in the log pipeline alongside request logs.

pub mod events;
