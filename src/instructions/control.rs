//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Halt the interpreter
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//!
//! BRK is the interpreter's stop instruction. It does not push anything or
//! read the IRQ vector; the loop returns to the caller with PC just past the
//! BRK byte.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{ExecutionError, Flags};

/// Executes the BRK instruction: stop the fetch-decode-execute loop.
pub(crate) fn execute_brk(
    _exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    Ok(Step::Halt)
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(
    _exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    Ok(Step::Continue)
}

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The indirect form reproduces the page-wrap bug: JMP ($10FF) reads the
/// target from $10FF and $1000.
pub(crate) fn execute_jmp(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.pc = exec.operand_address(opcode.mode)?;
    Ok(Step::Continue)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address - 1), high byte first, then jumps.
pub(crate) fn execute_jsr(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let target = exec.fetch_word()?;
    let return_addr = exec.state.pc.wrapping_sub(1);
    exec.push_word(return_addr)?;
    exec.state.pc = target;
    Ok(Step::Continue)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let return_addr = exec.pull_word()?;
    exec.state.pc = return_addr.wrapping_add(1);
    Ok(Step::Continue)
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B cleared, U set), then PC. Unlike RTS, the
/// pulled PC is used as-is.
pub(crate) fn execute_rti(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let status = exec.pull()?;
    exec.state.status = Flags::from_stack_byte(status);
    exec.state.pc = exec.pull_word()?;
    Ok(Step::Continue)
}
