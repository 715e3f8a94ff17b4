/// Coarse lifecycle state of a command stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
  Build,
  Record,
  Submitted,
  Idle,
  Finished,
}

/// Execution locus of the most recent effective instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
  Host,
  Device,
}

/// The verifier's running state while scanning a command stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct VerifierState {
  pub phase: Phase,
  pub domain: Domain,
  pub snapshot_active: bool,
}

impl VerifierState {
  pub(crate) fn new() -> Self {
    VerifierState {
      phase: Phase::Build,
      domain: Domain::Host,
      snapshot_active: false,
    }
  }
}
