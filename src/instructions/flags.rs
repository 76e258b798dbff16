//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! All use implied addressing and touch only their own flag.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{ExecutionError, Flags};

fn set_flag(exec: &mut Execution<'_>, flag: Flags, value: bool) -> Result<Step, ExecutionError> {
    exec.state.status.set(flag, value);
    Ok(Step::Continue)
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::CARRY, false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::CARRY, true)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::INTERRUPT_DISABLE, false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::INTERRUPT_DISABLE, true)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::DECIMAL, false)
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// The flag is stored and can be read back through PHP, but the ALU ignores
/// it.
pub(crate) fn execute_sed(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::DECIMAL, true)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    set_flag(exec, Flags::OVERFLOW, false)
}
