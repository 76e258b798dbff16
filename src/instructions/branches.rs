//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: carry clear / set
//! - BNE / BEQ: zero clear / set
//! - BPL / BMI: negative clear / set
//! - BVC / BVS: overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit
//! offset, measured from the address of the next instruction. The offset byte
//! is consumed whether or not the branch is taken. No flags are affected.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{ExecutionError, Flags};

/// Resolves the branch target and, if `flag` is in the wanted state, moves PC.
fn branch_if(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
    flag: Flags,
    wanted: bool,
) -> Result<Step, ExecutionError> {
    let target = exec.operand_address(opcode.mode)?;

    if exec.state.status.contains(flag) == wanted {
        exec.state.pc = target;
    }

    Ok(Step::Continue)
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::CARRY, false)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::CARRY, true)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::ZERO, true)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::ZERO, false)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::NEGATIVE, true)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::NEGATIVE, false)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::OVERFLOW, false)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    branch_if(exec, opcode, Flags::OVERFLOW, true)
}
