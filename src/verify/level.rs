/// Verification strictness level. Each level implies all checks of the
/// levels below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerifyLevel {
  /// Opcode recognition and instruction framing only.
  Syntax = 0,
  /// Adds phase transition legality and pending-work warnings.
  Phase = 1,
  /// Adds domain constraints and snapshot region checks.
  Domain = 2,
}
