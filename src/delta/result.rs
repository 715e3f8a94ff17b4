use crate::delta::chunk::Chunk;
use crate::delta::errors::{DeltaError, DeltaResult};
use crate::delta::header::DiffHeader;

const WIRE_HEADER_LEN: usize = 24;
const WIRE_CHUNK_LEN: usize = 24;

/// The result of a [`diff`][crate::delta::diff] call: a header, an ordered
/// list of changed-page chunks, and the contiguous payload those chunks
/// point into.
///
/// See the crate's invariants: chunks are strictly increasing by
/// `page_index`, each chunk's slice fits within both the payload and the
/// target length, and the payload is exactly the concatenation of chunk
/// slices in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffResult {
  pub header: DiffHeader,
  pub chunks: Vec<Chunk>,
  pub payload: Vec<u8>,
}

impl DiffResult {
  pub(crate) fn empty(page_size: u32, target_length: u64) -> Self {
    DiffResult {
      header: DiffHeader::new(page_size, target_length),
      chunks: Vec::new(),
      payload: Vec::new(),
    }
  }

  /// Serializes this diff to the canonical little-endian wire format
  /// described in the crate docs: a 24-byte header, `chunk_count` 24-byte
  /// chunk records, then the payload.
  pub fn to_wire_bytes(&self) -> Vec<u8> {
    let mut dst = Vec::with_capacity(
      WIRE_HEADER_LEN + self.chunks.len() * WIRE_CHUNK_LEN + self.payload.len(),
    );
    dst.extend_from_slice(&self.header.version.to_le_bytes());
    dst.extend_from_slice(&self.header.page_size.to_le_bytes());
    dst.extend_from_slice(&self.header.flags.to_le_bytes());
    dst.extend_from_slice(&self.header.chunk_count.to_le_bytes());
    dst.extend_from_slice(&self.header.target_length.to_le_bytes());

    for chunk in &self.chunks {
      dst.extend_from_slice(&(chunk.page_index as u64).to_le_bytes());
      dst.extend_from_slice(&(chunk.length as u64).to_le_bytes());
      dst.extend_from_slice(&(chunk.data_offset as u64).to_le_bytes());
    }

    dst.extend_from_slice(&self.payload);
    dst
  }

  /// Parses a buffer produced by [`to_wire_bytes`][Self::to_wire_bytes],
  /// validating the header and every chunk record against this crate's
  /// invariants before accepting it.
  pub fn from_wire_bytes(bytes: &[u8]) -> DeltaResult<Self> {
    if bytes.len() < WIRE_HEADER_LEN {
      return Err(DeltaError::corrupt("buffer shorter than diff header"));
    }

    let version = read_u32(bytes, 0);
    let page_size = read_u32(bytes, 4);
    let flags = read_u32(bytes, 8);
    let chunk_count = read_u32(bytes, 12);
    let target_length = read_u64(bytes, 16);

    if version != crate::delta::header::DIFF_VERSION {
      return Err(DeltaError::corrupt(format!(
        "unsupported diff version {}",
        version
      )));
    }
    if page_size == 0 {
      return Err(DeltaError::corrupt("page_size must be nonzero"));
    }

    let chunks_start = WIRE_HEADER_LEN;
    let chunks_len = chunk_count as usize * WIRE_CHUNK_LEN;
    let chunks_end = chunks_start
      .checked_add(chunks_len)
      .ok_or_else(|| DeltaError::corrupt("chunk table length overflow"))?;
    if bytes.len() < chunks_end {
      return Err(DeltaError::corrupt("buffer shorter than chunk table"));
    }

    let mut chunks = Vec::with_capacity(chunk_count as usize);
    let mut prev_page_index: Option<u64> = None;
    for i in 0..chunk_count as usize {
      let base = chunks_start + i * WIRE_CHUNK_LEN;
      let page_index = read_u64(bytes, base);
      let length = read_u64(bytes, base + 8);
      let data_offset = read_u64(bytes, base + 16);

      if let Some(prev) = prev_page_index {
        if page_index <= prev {
          return Err(DeltaError::corrupt(
            "chunk page_index is not strictly increasing",
          ));
        }
      }
      prev_page_index = Some(page_index);

      chunks.push(Chunk {
        page_index: page_index as usize,
        length: length as usize,
        data_offset: data_offset as usize,
      });
    }

    let payload = bytes[chunks_end..].to_vec();

    let result = DiffResult {
      header: DiffHeader {
        version,
        page_size,
        flags,
        chunk_count,
        target_length,
      },
      chunks,
      payload,
    };
    result.validate()?;
    Ok(result)
  }

  /// Checks the structural invariants from the crate docs, independent of
  /// how the value was constructed.
  pub(crate) fn validate(&self) -> DeltaResult<()> {
    if self.header.page_size == 0 {
      return Err(DeltaError::invalid_argument("page_size must be nonzero"));
    }
    if self.header.chunk_count as usize != self.chunks.len() {
      return Err(DeltaError::invalid_argument(
        "header chunk_count does not match chunk list length",
      ));
    }

    let page_size = self.header.page_size as u64;
    let mut expected_offset: usize = 0;
    let mut prev_page_index: Option<usize> = None;

    for chunk in &self.chunks {
      if let Some(prev) = prev_page_index {
        if chunk.page_index <= prev {
          return Err(DeltaError::invalid_argument(
            "chunks are not in strictly increasing page_index order",
          ));
        }
      }
      prev_page_index = Some(chunk.page_index);

      if chunk.length as u64 > page_size {
        return Err(DeltaError::invalid_argument(
          "chunk length exceeds page_size",
        ));
      }

      let page_offset = (chunk.page_index as u64)
        .checked_mul(page_size)
        .ok_or_else(|| DeltaError::invalid_argument("page_index * page_size overflows"))?;
      let page_end = page_offset
        .checked_add(chunk.length as u64)
        .ok_or_else(|| DeltaError::invalid_argument("page_index * page_size + length overflows"))?;
      if page_end > self.header.target_length {
        return Err(DeltaError::invalid_argument(
          "chunk extends past target_length",
        ));
      }

      if chunk.data_offset != expected_offset {
        return Err(DeltaError::invalid_argument(
          "chunk data_offset is not the prefix sum of preceding chunk lengths",
        ));
      }
      expected_offset = expected_offset
        .checked_add(chunk.length)
        .ok_or_else(|| DeltaError::invalid_argument("payload offset overflows"))?;
    }

    if expected_offset != self.payload.len() {
      return Err(DeltaError::invalid_argument(
        "payload length does not match sum of chunk lengths",
      ));
    }

    Ok(())
  }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
  u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn read_u64(bytes: &[u8], offset: usize) -> u64 {
  u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap())
}
