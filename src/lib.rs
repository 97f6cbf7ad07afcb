//! Purpose: Small shared helpers for files, property resources, and JSON.
//! Exports: `error`, `fs`, `props`, `json`.
//! Role: Boundary glue over the filesystem and serde_json with fixed policies.
//! Invariants: Modules are independent; only `error` is shared between them.
//! Invariants: No hidden global state; configuration is passed explicitly.
pub mod error;
pub mod fs;
pub mod json;
pub mod props;
