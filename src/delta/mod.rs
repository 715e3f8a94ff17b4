//! Page-granular binary diff/patch.
//!
//! [`diff`] compares a base and target byte sequence page by page (4096
//! bytes per page by default) and records only the pages that changed,
//! along with their new contents. [`patch`] applies such a
//! [`DiffResult`] to a base buffer (or `None`) to reconstruct the target.
//! [`changed_set`] and friends expose the set of changed page indices.
//!
//! `DiffResult` can additionally be serialized to and from the crate's
//! canonical on-wire format via [`DiffResult::to_wire_bytes`] and
//! [`DiffResult::from_wire_bytes`] for cross-process exchange.

mod changed_set;
mod chunk;
mod diff;
pub mod errors;
mod header;
mod patch;
mod result;

pub use changed_set::{changed_pages, changed_set, changed_set_len};
pub use chunk::Chunk;
pub use diff::diff;
pub use errors::{DeltaError, DeltaErrorKind, DeltaResult};
pub use header::{DiffHeader, DEFAULT_PAGE_SIZE, DIFF_VERSION};
pub use patch::patch;
pub use result::DiffResult;
