//! Purpose: JSON boundary with one fixed, explicit configuration.
//! Exports: `JsonCodec`, `CodecConfig`, plus `comments` and `datetime` helpers.
//! Role: Single seam for serde_json usage so callsites avoid ad hoc policies.
//! Invariants: Configuration is immutable after construction; no global state.
//! Invariants: Numeric literals keep arbitrary precision end to end.

pub mod codec;
pub mod comments;
pub mod datetime;

pub use codec::{CodecConfig, JsonCodec};
