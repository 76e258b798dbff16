//! # Processor State
//!
//! The externally visible register file of the 6502. `ProcessorState` holds
//! data only; the interpreter in [`crate::cpu`] is the one that mutates it.

use crate::Flags;

/// Register file of a 6502.
///
/// # Examples
///
/// ```
/// use nes_cpu::{Flags, ProcessorState};
///
/// let mut state = ProcessorState::new();
/// state.a = 0x42;
/// state.pc = 0x1234;
///
/// state.reset();
/// assert_eq!(state.a, 0);
/// assert_eq!(state.pc, 0);
/// assert_eq!(state.status, Flags::POWER_ON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorState {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Status register
    pub status: Flags,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub sp: u8,

    /// Program counter (address of the next byte to fetch)
    pub pc: u16,
}

impl ProcessorState {
    /// Power-on state: all registers zero, status `I | U`.
    pub const fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            status: Flags::POWER_ON,
            sp: 0x00,
            pc: 0x0000,
        }
    }

    /// Restores the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ProcessorState {
    fn default() -> Self {
        Self::new()
    }
}
