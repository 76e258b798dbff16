//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or on memory
//! (read-modify-write). All four update C, Z and N.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{AddressingMode, ExecutionError, Flags};

/// Applies `shift` to the accumulator or to the addressed memory byte.
///
/// `shift` receives the status register and the old value and returns the
/// new value; it is responsible for the carry. Z and N are set from the
/// result here.
fn read_modify_write(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
    shift: fn(&mut Flags, u8) -> u8,
) -> Result<Step, ExecutionError> {
    let result = if opcode.mode == AddressingMode::Accumulator {
        let result = shift(&mut exec.state.status, exec.state.a);
        exec.state.a = result;
        result
    } else {
        let addr = exec.operand_address(opcode.mode)?;
        let value = exec.read(addr)?;
        let result = shift(&mut exec.state.status, value);
        exec.write(addr, result)?;
        result
    };

    exec.state.status.update_zero_negative(result);
    Ok(Step::Continue)
}

fn asl(status: &mut Flags, value: u8) -> u8 {
    status.set(Flags::CARRY, value & 0x80 != 0);
    value << 1
}

fn lsr(status: &mut Flags, value: u8) -> u8 {
    status.set(Flags::CARRY, value & 0x01 != 0);
    value >> 1
}

fn rol(status: &mut Flags, value: u8) -> u8 {
    let carry_in = status.contains(Flags::CARRY) as u8;
    status.set(Flags::CARRY, value & 0x80 != 0);
    (value << 1) | carry_in
}

fn ror(status: &mut Flags, value: u8) -> u8 {
    let carry_in = (status.contains(Flags::CARRY) as u8) << 7;
    status.set(Flags::CARRY, value & 0x01 != 0);
    (value >> 1) | carry_in
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    read_modify_write(exec, opcode, asl)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    read_modify_write(exec, opcode, lsr)
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    read_modify_write(exec, opcode, rol)
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    read_modify_write(exec, opcode, ror)
}
