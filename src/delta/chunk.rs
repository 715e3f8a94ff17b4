/// A single changed-page record within a [`DiffResult`][crate::delta::DiffResult].
///
/// `data_offset` indexes into the diff's payload buffer; the chunk's bytes
/// are `payload[data_offset..data_offset + length]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
  pub page_index: usize,
  pub length: usize,
  pub data_offset: usize,
}
