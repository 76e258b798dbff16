//! # NES 6502 Instruction Interpreter
//!
//! An interpreter for the 6502 core of the NES's Ricoh 2A03: registers, status
//! flags, a table-driven decoder covering the 151 documented opcodes, and a
//! fetch-decode-execute loop that stops on BRK.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes_cpu::{Cpu, Flags};
//!
//! let mut cpu = Cpu::new();
//!
//! // LDA #$00; BRK
//! cpu.interpret(&[0xA9, 0x00, 0x00]).unwrap();
//!
//! assert_eq!(cpu.a(), 0x00);
//! assert!(cpu.status().contains(Flags::ZERO));
//! assert!(!cpu.status().contains(Flags::NEGATIVE));
//! ```
//!
//! ## Architecture
//!
//! - **State/behavior split**: [`ProcessorState`] is plain data; [`Cpu`] owns
//!   one and is the only thing that mutates it
//! - **Memory through a trait**: every access goes through [`MemoryBus`]; a
//!   flat program image ([`ProgramImage`]) and 64KB RAM ([`FlatMemory`]) are
//!   provided
//! - **Table-driven decoding**: [`OPCODE_TABLE`] maps each opcode byte to its
//!   mnemonic, addressing mode, size, affected flags and handler
//! - **Fatal bounds errors**: touching an address the bus does not map stops
//!   execution with [`ExecutionError::OutOfBounds`]
//!
//! ## Modules
//!
//! - `cpu` - Interpreter and execution loop
//! - `state` - Register file
//! - `flags` - Status register bit set
//! - `memory` - MemoryBus trait and implementations
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing mode enumeration
//! - `config` - Interpreter configuration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod state;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{CpuConfig, UnknownOpcodePolicy};
pub use cpu::{Cpu, Step};
pub use flags::Flags;
pub use memory::{FlatMemory, MemoryBus, ProgramImage};
pub use opcodes::{Opcode, OPCODE_TABLE};
pub use state::ProcessorState;

/// Errors that stop execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// An opcode, operand or data access hit an address the bus does not
    /// map. For a program image this means reading at or past its end.
    #[error("access to unmapped address 0x{addr:04X}")]
    OutOfBounds {
        /// The address that was accessed.
        addr: u16,
    },

    /// An opcode without a handler was fetched while
    /// [`UnknownOpcodePolicy::Error`] is active.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// A handler asked for the effective address of a mode that has none
    /// (Implicit or Accumulator). Indicates a miswired opcode table entry.
    #[error("addressing mode {0:?} has no effective address")]
    NoEffectiveAddress(AddressingMode),

    /// A program image too long for the 16-bit program counter.
    #[error("program image of {len} bytes does not fit the 16-bit address space")]
    ProgramTooLarge {
        /// Length of the rejected image.
        len: usize,
    },
}
