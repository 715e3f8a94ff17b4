//! Page-granular binary diff/patch and GPU command-stream verification.
//!
//! Two independent, self-contained subsystems:
//!
//! - [`delta`] computes a page-aligned diff between a base and target byte
//!   sequence, and applies such a diff to reconstruct the target.
//! - [`verify`] decodes a linear command stream of GPU-style opcodes and
//!   checks it against a phase/domain state machine at a chosen strictness
//!   level.
//!
//! The two share no state; both operate purely on byte buffers passed in
//! and owned values handed back.

#![deny(dead_code)]

pub mod delta;
pub mod verify;
