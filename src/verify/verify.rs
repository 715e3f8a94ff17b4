use crate::verify::level::VerifyLevel;
use crate::verify::opcode::Opcode;
use crate::verify::report::{Severity, VerifyReport};
use crate::verify::state::{Domain, Phase, VerifierState};

/// Decodes and validates `stream` as a command program, at the given
/// strictness `level`.
///
/// The decode loop always applies the opcode's state transition; `level`
/// only gates which diagnostics are emitted around an illegal transition.
/// The two terminal checks (unterminated snapshot, stream not reaching
/// `Finished`) run unconditionally at every level. The returned report is
/// always fully populated; `report.success` is `true` iff no `Error`
/// diagnostic was recorded.
pub fn verify(stream: &[u8], level: VerifyLevel) -> VerifyReport {
  let mut report = VerifyReport::new();
  let mut state = VerifierState::new();

  let mut offset = 0usize;
  let mut instruction_index = 0usize;

  while offset < stream.len() {
    let byte = stream[offset];
    let Ok(opcode) = Opcode::try_from(byte) else {
      report.push(
        instruction_index,
        Severity::Error,
        format!("unknown opcode 0x{byte:02x}"),
      );
      offset += 1;
      instruction_index += 1;
      continue;
    };

    let info = opcode.info();
    let size = info.size as usize;
    if size == 0 || offset + size > stream.len() {
      report.push(
        instruction_index,
        Severity::Error,
        format!("truncated instruction for {}", info.name),
      );
      break;
    }

    report.instruction_count += 1;
    apply_transition(opcode, level, &mut state, &mut report, instruction_index);

    offset += size;
    instruction_index += 1;
  }

  if state.snapshot_active {
    report.push(
      instruction_index,
      Severity::Error,
      "unterminated snapshot region",
    );
  }
  if state.phase != Phase::Finished {
    report.push(
      instruction_index,
      Severity::Error,
      "stream did not reach END_STREAM/END_PROGRAM",
    );
  }

  report.success = report.error_count == 0;
  report
}

fn transition_error(
  report: &mut VerifyReport,
  instruction_index: usize,
  op_name: &str,
  expected_phase: &str,
) {
  report.push(
    instruction_index,
    Severity::Error,
    format!("{op_name} not allowed in {expected_phase} phase"),
  );
}

fn apply_transition(
  opcode: Opcode,
  level: VerifyLevel,
  state: &mut VerifierState,
  report: &mut VerifyReport,
  instruction_index: usize,
) {
  let checks_phase = level >= VerifyLevel::Phase;
  let checks_domain = level >= VerifyLevel::Domain;

  match opcode {
    Opcode::Nop => {}

    Opcode::BeginStream => {
      if checks_phase {
        if state.snapshot_active {
          report.push(
            instruction_index,
            Severity::Error,
            "cannot BEGIN_STREAM while snapshot is active",
          );
        }
        if state.phase != Phase::Build && state.phase != Phase::Idle {
          let expected = if state.phase == Phase::Record {
            "Record"
          } else {
            "Idle"
          };
          transition_error(report, instruction_index, "BEGIN_STREAM", expected);
        }
      }
      state.phase = Phase::Record;
    }

    Opcode::Barrier => {
      if checks_phase && state.phase != Phase::Record {
        transition_error(report, instruction_index, "BARRIER", "Record");
      }
      if checks_domain && state.domain != Domain::Device {
        report.push(
          instruction_index,
          Severity::Warning,
          "BARRIER issued outside device domain; assuming implicit promotion",
        );
        state.domain = Domain::Device;
      }
    }

    Opcode::Submit => {
      if checks_phase {
        if state.phase != Phase::Record {
          transition_error(report, instruction_index, "SUBMIT", "Record");
        }
        if state.snapshot_active {
          report.push(
            instruction_index,
            Severity::Error,
            "cannot SUBMIT inside a snapshot",
          );
        }
      }
      state.phase = Phase::Submitted;
      state.domain = Domain::Device;
    }

    Opcode::FenceWait => {
      if checks_phase && state.phase != Phase::Submitted {
        transition_error(report, instruction_index, "FENCE_WAIT", "Submitted");
      }
      state.phase = Phase::Idle;
      state.domain = Domain::Host;
    }

    Opcode::EndStream => {
      if checks_phase {
        if state.phase != Phase::Idle && state.phase != Phase::Record {
          transition_error(report, instruction_index, "END_STREAM", "Idle");
        }
        if state.phase == Phase::Record {
          report.push(
            instruction_index,
            Severity::Warning,
            "END_STREAM while GPU work still pending; assuming idle transition",
          );
        }
      }
      state.phase = Phase::Finished;
    }

    Opcode::EndProgram => {
      if checks_phase && state.phase != Phase::Finished {
        transition_error(report, instruction_index, "END_PROGRAM", "Finished");
      }
    }

    Opcode::SnapshotBegin => {
      if checks_domain {
        if state.snapshot_active {
          report.push(
            instruction_index,
            Severity::Error,
            "nested SNAPSHOT_BEGIN not allowed",
          );
        }
        if state.phase != Phase::Idle {
          transition_error(report, instruction_index, "SNAPSHOT_BEGIN", "Idle");
        }
        if state.domain != Domain::Host {
          report.push(
            instruction_index,
            Severity::Error,
            "snapshots require host domain but current domain is device",
          );
        }
      }
      state.snapshot_active = true;
    }

    Opcode::SnapshotEnd => {
      if checks_domain && !state.snapshot_active {
        report.push(
          instruction_index,
          Severity::Error,
          "SNAPSHOT_END without SNAPSHOT_BEGIN",
        );
      }
      state.snapshot_active = false;
    }

    Opcode::Checkpoint => {
      if checks_domain && state.phase != Phase::Idle {
        transition_error(report, instruction_index, "CHECKPOINT", "Idle");
      }
    }
  }
}
