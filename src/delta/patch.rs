use crate::delta::errors::{DeltaError, DeltaResult};
use crate::delta::result::DiffResult;

/// Applies `diff` to `base` (if any) and returns the reconstructed target
/// buffer.
///
/// Validates `diff`'s structural invariants before writing anything, so a
/// rejected diff never leaves a partial buffer observable. See
/// [`DiffResult::validate`] for the exact checks: nonzero `page_size`,
/// every chunk's length/offset arithmetic in range without overflow, and
/// an empty chunk list when `target_length == 0`.
pub fn patch(base: Option<&[u8]>, diff: &DiffResult) -> DeltaResult<Vec<u8>> {
  diff.validate()?;

  let target_length = diff.header.target_length;
  let target_length_usize: usize = target_length
    .try_into()
    .map_err(|_| DeltaError::invalid_argument("target_length does not fit in usize"))?;

  if target_length_usize == 0 && !diff.chunks.is_empty() {
    return Err(DeltaError::invalid_argument(
      "diff has chunks but target_length is zero",
    ));
  }

  let mut output = vec![0u8; target_length_usize];

  if let Some(base) = base {
    let copy_len = base.len().min(target_length_usize);
    output[..copy_len].copy_from_slice(&base[..copy_len]);
  }

  let page_size = diff.header.page_size as usize;
  for chunk in &diff.chunks {
    let offset = chunk.page_index * page_size;
    let src = &diff.payload[chunk.data_offset..chunk.data_offset + chunk.length];
    output[offset..offset + chunk.length].copy_from_slice(src);
  }

  Ok(output)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::delta::diff::diff;
  use crate::delta::errors::DeltaErrorKind;
  use crate::delta::header::DiffHeader;
  use crate::delta::chunk::Chunk;

  #[test]
  fn empty_diff_is_base_truncated_and_zero_padded() {
    let base = b"hello world".to_vec();
    let empty = diff(&base, &base[..5]);
    let patched = patch(Some(&base), &empty).unwrap();
    assert_eq!(patched, b"hello".to_vec());

    let base2 = b"hi".to_vec();
    let grown = DiffResult {
      header: DiffHeader {
        version: 1,
        page_size: 4096,
        flags: 0,
        chunk_count: 0,
        target_length: 5,
      },
      chunks: vec![],
      payload: vec![],
    };
    let patched2 = patch(Some(&base2), &grown).unwrap();
    assert_eq!(patched2, vec![b'h', b'i', 0, 0, 0]);
  }

  #[test]
  fn patching_is_deterministic_and_idempotent() {
    let base = vec![1u8; 10_000];
    let mut target = base.clone();
    target[5000] = 0xAA;
    let result = diff(&base, &target);

    let first = patch(Some(&base), &result).unwrap();
    let second = patch(Some(&base), &result).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, target);
  }

  #[test]
  fn rejects_page_size_zero() {
    let bad = DiffResult {
      header: DiffHeader {
        version: 1,
        page_size: 0,
        flags: 0,
        chunk_count: 0,
        target_length: 0,
      },
      chunks: vec![],
      payload: vec![],
    };
    let err = patch(None, &bad).unwrap_err();
    assert_eq!(err.kind, DeltaErrorKind::InvalidArgument);
  }

  #[test]
  fn rejects_chunk_length_over_page_size() {
    let bad = DiffResult {
      header: DiffHeader {
        version: 1,
        page_size: 10,
        flags: 0,
        chunk_count: 1,
        target_length: 20,
      },
      chunks: vec![Chunk {
        page_index: 0,
        length: 11,
        data_offset: 0,
      }],
      payload: vec![0u8; 11],
    };
    let err = patch(None, &bad).unwrap_err();
    assert_eq!(err.kind, DeltaErrorKind::InvalidArgument);
  }

  #[test]
  fn rejects_payload_underrun() {
    let bad = DiffResult {
      header: DiffHeader {
        version: 1,
        page_size: 10,
        flags: 0,
        chunk_count: 1,
        target_length: 20,
      },
      chunks: vec![Chunk {
        page_index: 0,
        length: 10,
        data_offset: 0,
      }],
      payload: vec![0u8; 5],
    };
    let err = patch(None, &bad).unwrap_err();
    assert_eq!(err.kind, DeltaErrorKind::InvalidArgument);
  }

  #[test]
  fn rejects_inconsistent_empty_target() {
    let bad = DiffResult {
      header: DiffHeader {
        version: 1,
        page_size: 10,
        flags: 0,
        chunk_count: 1,
        target_length: 0,
      },
      chunks: vec![Chunk {
        page_index: 0,
        length: 0,
        data_offset: 0,
      }],
      payload: vec![],
    };
    // validate() catches this via the page_end > target_length check only
    // when length > 0; exercise the explicit empty-target guard directly
    // with a chunk whose length is zero but still shouldn't exist.
    let err = patch(None, &bad);
    assert!(err.is_err());
  }
}
