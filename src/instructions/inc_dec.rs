//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: memory
//! - INX, INY, DEX, DEY: index registers
//!
//! All wrap at 8 bits and update Z and N from the result.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::ExecutionError;

/// Adds `delta` (wrapping) to the addressed memory byte.
fn step_memory(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
    delta: u8,
) -> Result<Step, ExecutionError> {
    let addr = exec.operand_address(opcode.mode)?;
    let result = exec.read(addr)?.wrapping_add(delta);
    exec.write(addr, result)?;
    exec.state.status.update_zero_negative(result);
    Ok(Step::Continue)
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    step_memory(exec, opcode, 1)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    step_memory(exec, opcode, 0xFF)
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.x = exec.state.x.wrapping_add(1);
    exec.state.status.update_zero_negative(exec.state.x);
    Ok(Step::Continue)
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.y = exec.state.y.wrapping_add(1);
    exec.state.status.update_zero_negative(exec.state.y);
    Ok(Step::Continue)
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.x = exec.state.x.wrapping_sub(1);
    exec.state.status.update_zero_negative(exec.state.x);
    Ok(Step::Continue)
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.y = exec.state.y.wrapping_sub(1);
    exec.state.status.update_zero_negative(exec.state.y);
    Ok(Step::Continue)
}
