/// Maximum number of diagnostics a [`VerifyReport`] retains. Diagnostics
/// beyond this are dropped entirely and not counted in the severity
/// totals.
pub const MAX_DIAGNOSTICS: usize = 64;

/// Maximum byte length of a [`Diagnostic`] message; longer messages are
/// truncated at a `char` boundary.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Severity of a single verifier finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
  Info,
  Warning,
  Error,
}

/// A single verifier finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
  pub instruction_index: usize,
  pub severity: Severity,
  pub message: String,
}

/// The fully populated outcome of a [`crate::verify::verify`] call.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct VerifyReport {
  pub success: bool,
  pub instruction_count: usize,
  pub error_count: usize,
  pub warning_count: usize,
  pub info_count: usize,
  pub diagnostics: Vec<Diagnostic>,
}

impl VerifyReport {
  pub(crate) fn new() -> Self {
    VerifyReport::default()
  }

  /// Records a diagnostic, silently dropping it (and excluding it from the
  /// severity counters) once [`MAX_DIAGNOSTICS`] has already been reached.
  pub(crate) fn push(&mut self, instruction_index: usize, severity: Severity, message: impl Into<String>) {
    if self.diagnostics.len() >= MAX_DIAGNOSTICS {
      return;
    }

    let mut message = message.into();
    if message.len() > MAX_MESSAGE_LEN {
      let mut truncate_at = MAX_MESSAGE_LEN;
      while !message.is_char_boundary(truncate_at) {
        truncate_at -= 1;
      }
      message.truncate(truncate_at);
    }

    self.diagnostics.push(Diagnostic {
      instruction_index,
      severity,
      message,
    });

    match severity {
      Severity::Error => self.error_count += 1,
      Severity::Warning => self.warning_count += 1,
      Severity::Info => self.info_count += 1,
    }
  }
}
