//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives at 0x0100-0x01FF and grows downward. A push writes to
//! 0x0100 | SP then decrements SP; a pull increments SP then reads. SP wraps
//! within the page.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{ExecutionError, Flags};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.push(exec.state.a)?;
    Ok(Step::Continue)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and U (bit 5) set; the live status
/// register is unchanged.
pub(crate) fn execute_php(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.push(exec.state.status.to_stack_byte())?;
    Ok(Step::Continue)
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.pull()?;
    exec.state.a = value;
    exec.state.status.update_zero_negative(value);
    Ok(Step::Continue)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Loads every flag from the stack except B, which is cleared, and U, which
/// stays set.
pub(crate) fn execute_plp(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.pull()?;
    exec.state.status = Flags::from_stack_byte(value);
    Ok(Step::Continue)
}
