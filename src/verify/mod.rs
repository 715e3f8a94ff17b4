//! GPU command-stream verifier.
//!
//! [`verify`] decodes a linear byte stream of 1-byte [`Opcode`]s and checks
//! it against a phase/domain state machine (see [`Phase`] and [`Domain`])
//! at a chosen [`VerifyLevel`]. The outcome is a [`VerifyReport`] carrying
//! a capped list of [`Diagnostic`]s.

pub mod level;
pub mod opcode;
pub mod report;
mod state;
mod verify;

pub use level::VerifyLevel;
pub use opcode::{Opcode, OpcodeInfo};
pub use report::{Diagnostic, Severity, VerifyReport, MAX_DIAGNOSTICS, MAX_MESSAGE_LEN};
pub use state::{Domain, Phase};
pub use verify::verify;
