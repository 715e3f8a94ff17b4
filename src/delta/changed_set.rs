use crate::delta::errors::{DeltaError, DeltaResult};
use crate::delta::result::DiffResult;

/// Writes `diff`'s changed page indices, in order, into `out` and returns
/// the count written.
///
/// Fails with [`DeltaErrorKind::BufferTooSmall`][crate::delta::errors::DeltaErrorKind::BufferTooSmall]
/// without writing anything if `out` is shorter than the number of chunks.
pub fn changed_set(diff: &DiffResult, out: &mut [usize]) -> DeltaResult<usize> {
  if diff.chunks.len() > out.len() {
    return Err(DeltaError::buffer_too_small(format!(
      "destination holds {} indices but diff has {} chunks",
      out.len(),
      diff.chunks.len()
    )));
  }

  for (slot, chunk) in out.iter_mut().zip(diff.chunks.iter()) {
    *slot = chunk.page_index;
  }
  Ok(diff.chunks.len())
}

/// Number of changed pages in `diff`, equivalent to `diff.chunks.len()`.
pub fn changed_set_len(diff: &DiffResult) -> usize {
  diff.chunks.len()
}

/// Owned convenience wrapper around [`changed_set`] that never fails.
pub fn changed_pages(diff: &DiffResult) -> Vec<usize> {
  diff.chunks.iter().map(|c| c.page_index).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::delta::diff::diff;
  use crate::delta::errors::DeltaErrorKind;

  fn multi_page_diff() -> DiffResult {
    let base = vec![0u8; 12_288];
    let mut target = base.clone();
    target[0] = 1;
    target[4096] = 1;
    target[8192] = 1;
    diff(&base, &target)
  }

  #[test]
  fn matches_chunk_page_indices_in_order() {
    let result = multi_page_diff();
    assert_eq!(changed_pages(&result), vec![0, 1, 2]);
    assert_eq!(changed_set_len(&result), 3);

    let mut out = [0usize; 3];
    let count = changed_set(&result, &mut out).unwrap();
    assert_eq!(count, 3);
    assert_eq!(out, [0, 1, 2]);
  }

  #[test]
  fn fails_without_writing_when_buffer_too_small() {
    let result = multi_page_diff();
    let mut out = [99usize; 2];
    let err = changed_set(&result, &mut out).unwrap_err();
    assert_eq!(err.kind, DeltaErrorKind::BufferTooSmall);
    assert_eq!(out, [99, 99]);
  }

  #[test]
  fn empty_diff_yields_empty_set() {
    let base = vec![0u8; 100];
    let result = diff(&base, &base);
    assert_eq!(changed_pages(&result), Vec::<usize>::new());
    let mut out: [usize; 0] = [];
    assert_eq!(changed_set(&result, &mut out).unwrap(), 0);
  }
}
