use crate::delta::chunk::Chunk;
use crate::delta::header::DEFAULT_PAGE_SIZE;
use crate::delta::result::DiffResult;

/// Computes a page-aligned diff from `base` to `target`.
///
/// Pages are `4096`-byte windows (`DEFAULT_PAGE_SIZE`). A page is emitted as
/// a changed chunk if any of its target bytes differ from the corresponding
/// base bytes, treating base bytes past the end of `base` as zero. Pages
/// entirely beyond `target.len()` are never emitted, even if `base` still
/// has content there — patching always truncates to `target.len()`.
pub fn diff(base: &[u8], target: &[u8]) -> DiffResult {
  let page_size = DEFAULT_PAGE_SIZE as usize;
  let target_length = target.len();
  let max_length = base.len().max(target_length);
  let page_count = max_length.div_ceil(page_size);

  let mut chunks = Vec::new();
  let mut payload = Vec::new();

  for page_index in 0..page_count {
    let offset = page_index * page_size;
    if offset >= target_length {
      continue;
    }
    let target_span = page_size.min(target_length - offset);

    let base_slice = base.get(offset..).unwrap_or(&[]);
    let base_span = base_slice.len().min(target_span);
    let target_slice = &target[offset..offset + target_span];

    let changed = (0..target_span).any(|i| {
      let base_byte = if i < base_span { base_slice[i] } else { 0 };
      base_byte != target_slice[i]
    });

    if changed {
      chunks.push(Chunk {
        page_index,
        length: target_span,
        data_offset: payload.len(),
      });
      payload.extend_from_slice(target_slice);
    }
  }

  let mut result = DiffResult::empty(DEFAULT_PAGE_SIZE, target_length as u64);
  result.header.chunk_count = chunks.len() as u32;
  result.chunks = chunks;
  result.payload = payload;
  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::delta::patch;
  use rand::{Rng, SeedableRng};
  use rand::rngs::StdRng;

  fn pattern(length: usize, seed: u8) -> Vec<u8> {
    (0..length)
      .map(|i| seed.wrapping_add((i as u8).wrapping_mul(17)))
      .collect()
  }

  #[test]
  fn identical_buffers_produce_no_chunks() {
    let base = pattern(8192, 1);
    let result = diff(&base, &base);
    assert_eq!(result.chunks.len(), 0);
    assert!(result.payload.is_empty());
    assert_eq!(result.header.chunk_count, 0);
  }

  #[test]
  fn mid_page_change_round_trips() {
    let base = pattern(8192, 1);
    let mut target = base.clone();
    target[1024..1152].copy_from_slice(&pattern(128, 42));
    target[4096..8192].copy_from_slice(&pattern(4096, 9));

    let result = diff(&base, &target);
    let changed_pages: Vec<usize> = result.chunks.iter().map(|c| c.page_index).collect();
    assert_eq!(changed_pages, vec![0, 1]);

    let patched = patch(Some(&base), &result).unwrap();
    assert_eq!(patched, target);
  }

  #[test]
  fn shrinking_target_yields_single_partial_chunk() {
    let base = vec![0x07u8; 8192];
    let target = vec![0x03u8; 2048];

    let result = diff(&base, &target);
    assert_eq!(result.chunks.len(), 1);
    assert_eq!(result.chunks[0].page_index, 0);
    assert_eq!(result.chunks[0].length, 2048);

    let patched = patch(Some(&base), &result).unwrap();
    assert_eq!(patched.len(), 2048);
    assert!(patched.iter().all(|&b| b == 0x03));
  }

  #[test]
  fn growth_past_base_marks_page_changed_against_implicit_zero() {
    let base = vec![]; // empty base: every byte compares against implicit 0
    let target = vec![0xAAu8; 4096]; // nonzero, so it differs from the implicit 0
    let result = diff(&base, &target);
    assert_eq!(result.chunks.len(), 1);
    assert_eq!(result.payload, target);
  }

  #[test]
  fn growth_past_base_with_zero_target_bytes_is_not_changed() {
    let base = vec![]; // empty base: every byte compares against implicit 0
    let target = vec![0u8; 4096]; // target bytes are themselves 0, so nothing differs
    let result = diff(&base, &target);
    assert_eq!(result.chunks.len(), 0);
    assert!(result.payload.is_empty());
  }

  #[test]
  fn pages_beyond_target_are_never_emitted() {
    let base = vec![0xFFu8; 8192];
    let target = vec![0xFFu8; 1024];
    let result = diff(&base, &target);
    assert_eq!(result.chunks.len(), 0);
  }

  #[test]
  fn random_fixtures_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
      let base_len: usize = rng.gen_range(0..20_000);
      let target_len: usize = rng.gen_range(0..20_000);
      let mut base = vec![0u8; base_len];
      rng.fill(&mut base[..]);
      let mut target = vec![0u8; target_len];
      rng.fill(&mut target[..]);

      let result = diff(&base, &target);
      let patched = patch(Some(&base), &result).unwrap();
      assert_eq!(patched, target);
    }
  }
}
