//! praxis-responses
//!
//! Response aggregation for completed assessments. Pure logic — no AWS
//! dependency. Normalizes question/answer pairs into the display model that
//! the completion form, the report editor, and every export renderer share.

pub mod display;
pub mod fallback;
pub mod group;
pub mod validate;
