//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from memory, update N and Z
//! - STA, STX, STY: store a register to memory, no flags affected

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::ExecutionError;

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.a = value;
    exec.state.status.update_zero_negative(value);
    Ok(Step::Continue)
}

/// Executes the LDX (Load X Register) instruction. Updates Z and N.
pub(crate) fn execute_ldx(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.x = value;
    exec.state.status.update_zero_negative(value);
    Ok(Step::Continue)
}

/// Executes the LDY (Load Y Register) instruction. Updates Z and N.
pub(crate) fn execute_ldy(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.y = value;
    exec.state.status.update_zero_negative(value);
    Ok(Step::Continue)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let addr = exec.operand_address(opcode.mode)?;
    exec.write(addr, exec.state.a)?;
    Ok(Step::Continue)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let addr = exec.operand_address(opcode.mode)?;
    exec.write(addr, exec.state.x)?;
    Ok(Step::Continue)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let addr = exec.operand_address(opcode.mode)?;
    exec.write(addr, exec.state.y)?;
    Ok(Step::Continue)
}
