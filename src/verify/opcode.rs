/// A recognized command-stream opcode.
///
/// Every currently defined opcode is 1 byte; [`OpcodeInfo::size`] exists so
/// a future variable-width instruction could be added without changing the
/// shape of the decode loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
  Nop = 0x00,
  BeginStream = 0x01,
  Barrier = 0x02,
  Submit = 0x03,
  FenceWait = 0x04,
  EndStream = 0x05,
  EndProgram = 0x06,
  SnapshotBegin = 0x07,
  SnapshotEnd = 0x08,
  Checkpoint = 0x09,
}

/// Per-opcode metadata: display name and encoded instruction size in bytes.
#[derive(Clone, Copy, Debug)]
pub struct OpcodeInfo {
  pub name: &'static str,
  pub size: u8,
}

impl Opcode {
  pub fn info(self) -> OpcodeInfo {
    let (name, size) = match self {
      Opcode::Nop => ("NOP", 1),
      Opcode::BeginStream => ("BEGIN_STREAM", 1),
      Opcode::Barrier => ("BARRIER", 1),
      Opcode::Submit => ("SUBMIT", 1),
      Opcode::FenceWait => ("FENCE_WAIT", 1),
      Opcode::EndStream => ("END_STREAM", 1),
      Opcode::EndProgram => ("END_PROGRAM", 1),
      Opcode::SnapshotBegin => ("SNAPSHOT_BEGIN", 1),
      Opcode::SnapshotEnd => ("SNAPSHOT_END", 1),
      Opcode::Checkpoint => ("CHECKPOINT", 1),
    };
    OpcodeInfo { name, size }
  }
}

impl TryFrom<u8> for Opcode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(Opcode::Nop),
      0x01 => Ok(Opcode::BeginStream),
      0x02 => Ok(Opcode::Barrier),
      0x03 => Ok(Opcode::Submit),
      0x04 => Ok(Opcode::FenceWait),
      0x05 => Ok(Opcode::EndStream),
      0x06 => Ok(Opcode::EndProgram),
      0x07 => Ok(Opcode::SnapshotBegin),
      0x08 => Ok(Opcode::SnapshotEnd),
      0x09 => Ok(Opcode::Checkpoint),
      _ => Err(()),
    }
  }
}
