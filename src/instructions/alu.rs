//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: register comparisons
//! - BIT: bit test
//!
//! The 2A03 has no BCD circuitry, so ADC and SBC are always binary regardless
//! of the D flag.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::{ExecutionError, Flags, ProcessorState};

/// Adds `value` plus carry to the accumulator and updates N, V, Z, C.
fn add_with_carry(state: &mut ProcessorState, value: u8) {
    let a = state.a;
    let carry_in = state.status.contains(Flags::CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    state.status.set(Flags::CARRY, result16 > 0xFF);
    // Overflow when both operands share a sign the result does not.
    state
        .status
        .set(Flags::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    state.status.update_zero_negative(result);

    state.a = result;
}

/// Compares `register` against `value`: C = register >= value, N/Z from the
/// difference.
fn compare(status: &mut Flags, register: u8, value: u8) {
    status.set(Flags::CARRY, register >= value);
    status.update_zero_negative(register.wrapping_sub(value));
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates N, V, Z, C.
pub(crate) fn execute_adc(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    add_with_carry(exec.state, value);
    Ok(Step::Continue)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as A + !M + C. Carry clear after the
/// operation means a borrow occurred.
pub(crate) fn execute_sbc(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    add_with_carry(exec.state, !value);
    Ok(Step::Continue)
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.a &= value;
    exec.state.status.update_zero_negative(exec.state.a);
    Ok(Step::Continue)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.a |= value;
    exec.state.status.update_zero_negative(exec.state.a);
    Ok(Step::Continue)
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    exec.state.a ^= value;
    exec.state.status.update_zero_negative(exec.state.a);
    Ok(Step::Continue)
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    compare(&mut exec.state.status, exec.state.a, value);
    Ok(Step::Continue)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    compare(&mut exec.state.status, exec.state.x, value);
    Ok(Step::Continue)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    compare(&mut exec.state.status, exec.state.y, value);
    Ok(Step::Continue)
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Overflow (V): Copy of bit 6 of M
/// - Negative (N): Copy of bit 7 of M
/// - The accumulator is not modified
pub(crate) fn execute_bit(
    exec: &mut Execution<'_>,
    opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    let value = exec.operand_value(opcode.mode)?;
    let status = &mut exec.state.status;
    status.set(Flags::ZERO, exec.state.a & value == 0);
    status.set(Flags::OVERFLOW, value & 0x40 != 0);
    status.set(Flags::NEGATIVE, value & 0x80 != 0);
    Ok(Step::Continue)
}
