//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer except TXS updates Z and N from the copied value.

use crate::cpu::{Execution, Step};
use crate::opcodes::Opcode;
use crate::ExecutionError;

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.x = exec.state.a;
    exec.state.status.update_zero_negative(exec.state.x);
    Ok(Step::Continue)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.y = exec.state.a;
    exec.state.status.update_zero_negative(exec.state.y);
    Ok(Step::Continue)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.a = exec.state.x;
    exec.state.status.update_zero_negative(exec.state.a);
    Ok(Step::Continue)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.a = exec.state.y;
    exec.state.status.update_zero_negative(exec.state.a);
    Ok(Step::Continue)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.x = exec.state.sp;
    exec.state.status.update_zero_negative(exec.state.x);
    Ok(Step::Continue)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS affects no flags.
pub(crate) fn execute_txs(
    exec: &mut Execution<'_>,
    _opcode: &Opcode,
) -> Result<Step, ExecutionError> {
    exec.state.sp = exec.state.x;
    Ok(Step::Continue)
}
