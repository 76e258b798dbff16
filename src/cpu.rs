//! # CPU State and Execution
//!
//! This module contains the `Cpu` interpreter and the fetch-decode-execute
//! loop.
//!
//! ## Execution Model
//!
//! - [`Cpu::interpret`]: run a flat program image from address 0 until BRK
//! - [`Cpu::run`]: run against any [`MemoryBus`] from the current PC until BRK
//! - [`Cpu::step`]: execute exactly one instruction
//!
//! Each step fetches the opcode at PC, advances PC, looks the opcode up in
//! [`OPCODE_TABLE`] and calls its handler. Handlers pull their own operand
//! bytes through the per-instruction `Execution` view, so PC always points
//! at the next unread byte.
//!
//! Every read is checked against [`MemoryBus::is_mapped`] and every write
//! against [`MemoryBus::is_writable`]; failing either stops execution with
//! [`ExecutionError::OutOfBounds`].

use crate::config::{CpuConfig, UnknownOpcodePolicy};
use crate::memory::ProgramImage;
use crate::{AddressingMode, ExecutionError, Flags, MemoryBus, ProcessorState, OPCODE_TABLE};
use log::{debug, trace, warn};

/// Base address of the hardware stack page.
pub(crate) const STACK_PAGE: u16 = 0x0100;

/// Outcome of a single [`Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The instruction completed; execution may continue.
    Continue,

    /// The halt opcode (BRK, 0x00) was executed.
    Halt,
}

/// 6502 instruction interpreter.
///
/// The `Cpu` owns its [`ProcessorState`] for its whole lifetime. Memory is
/// lent to it per call, so one interpreter can run several program images and
/// several interpreters can coexist in one process.
///
/// # Examples
///
/// ```
/// use nes_cpu::{Cpu, Flags};
///
/// let mut cpu = Cpu::new();
/// cpu.interpret(&[0xA9, 0x80, 0x00]).unwrap(); // LDA #$80; BRK
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.status().contains(Flags::NEGATIVE));
/// assert!(!cpu.status().contains(Flags::ZERO));
///
/// cpu.reset();
/// assert_eq!(cpu.a(), 0x00);
/// assert_eq!(cpu.status(), Flags::POWER_ON);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: ProcessorState,
    config: CpuConfig,
}

impl Cpu {
    /// Creates an interpreter in the power-on state with the default
    /// configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter around an existing register file.
    pub fn with_state(state: ProcessorState) -> Self {
        Self {
            state,
            config: CpuConfig::default(),
        }
    }

    /// Creates an interpreter in the power-on state with `config`.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            state: ProcessorState::new(),
            config,
        }
    }

    /// Executes a program image from its first byte until the halt opcode.
    ///
    /// The image is mapped read-only at 0x0000 and PC is set to 0 before the
    /// first fetch; no reset vector is read. Running past the end of the
    /// image, including an empty image, is an
    /// [`ExecutionError::OutOfBounds`]. So is any write, since the image has
    /// no RAM behind it: stores and stack pushes need [`Cpu::run`] on a
    /// writable bus.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{Cpu, ExecutionError};
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.interpret(&[0xA9, 0x05, 0x00]).unwrap();
    /// assert_eq!(cpu.a(), 0x05);
    /// assert_eq!(cpu.pc(), 3);
    ///
    /// // No BRK: the fetch after LDA runs off the end.
    /// assert_eq!(
    ///     cpu.interpret(&[0xA9, 0x05]),
    ///     Err(ExecutionError::OutOfBounds { addr: 2 })
    /// );
    /// ```
    pub fn interpret(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        let mut image = ProgramImage::new(program)?;
        self.state.pc = 0;
        self.run(&mut image)
    }

    /// Executes instructions from the current PC until the halt opcode.
    pub fn run<B: MemoryBus>(&mut self, bus: &mut B) -> Result<(), ExecutionError> {
        while self.step(bus)? == Step::Continue {}
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up the opcode record in [`OPCODE_TABLE`]
    /// 3. Call its handler, or apply the unknown-opcode policy if it has none
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{Cpu, FlatMemory, Step};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xE8, 0x00]); // INX; BRK
    ///
    /// let mut cpu = Cpu::new();
    /// assert_eq!(cpu.step(&mut memory), Ok(Step::Continue));
    /// assert_eq!(cpu.x(), 1);
    /// assert_eq!(cpu.step(&mut memory), Ok(Step::Halt));
    /// ```
    pub fn step<B: MemoryBus>(&mut self, bus: &mut B) -> Result<Step, ExecutionError> {
        let config = self.config;
        let mut exec = Execution {
            state: &mut self.state,
            bus,
        };

        let pc = exec.state.pc;
        let code = exec.fetch_byte()?;
        let opcode = &OPCODE_TABLE[code as usize];

        trace!(
            "{:04X}  {:02X}  {} {:?} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            pc,
            code,
            opcode.mnemonic,
            opcode.mode,
            exec.state.a,
            exec.state.x,
            exec.state.y,
            exec.state.status.bits(),
            exec.state.sp
        );

        match opcode.handler {
            Some(handler) => {
                let step = handler(&mut exec, opcode)?;
                if step == Step::Halt {
                    debug!("halted at 0x{:04X}", pc);
                }
                Ok(step)
            }
            None => match config.unknown_opcodes {
                UnknownOpcodePolicy::Skip => {
                    warn!("skipping unknown opcode 0x{:02X} at 0x{:04X}", code, pc);
                    Ok(Step::Continue)
                }
                UnknownOpcodePolicy::Error => Err(ExecutionError::UnimplementedOpcode(code)),
            },
        }
    }

    /// Restores all registers and flags to their power-on values.
    pub fn reset(&mut self) {
        debug!("reset");
        self.state.reset();
    }

    // ========== Register Getters ==========

    /// Returns the full register file.
    pub fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Returns the register file for direct modification.
    pub fn state_mut(&mut self) -> &mut ProcessorState {
        &mut self.state
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.state.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.state.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.state.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Flags {
        self.state.status
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.state.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.state.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.state.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.state.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.state.sp = value;
    }

    /// Sets the status register.
    pub fn set_status(&mut self, value: Flags) {
        self.state.status = value;
    }
}

/// Borrowed view of the register file and bus for the duration of one
/// instruction. Handlers use it to pull operands and touch memory.
pub(crate) struct Execution<'a> {
    pub(crate) state: &'a mut ProcessorState,
    pub(crate) bus: &'a mut dyn MemoryBus,
}

impl Execution<'_> {
    /// Reads a mapped byte.
    pub(crate) fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
        if !self.bus.is_mapped(addr) {
            return Err(ExecutionError::OutOfBounds { addr });
        }
        Ok(self.bus.read(addr))
    }

    /// Writes a byte to a writable address.
    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        if !self.bus.is_writable(addr) {
            return Err(ExecutionError::OutOfBounds { addr });
        }
        self.bus.write(addr, value);
        Ok(())
    }

    /// Reads the byte at PC and advances PC past it.
    pub(crate) fn fetch_byte(&mut self) -> Result<u8, ExecutionError> {
        let value = self.read(self.state.pc)?;
        self.state.pc = self.state.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC and advances PC past it.
    pub(crate) fn fetch_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.fetch_byte()? as u16;
        let hi = self.fetch_byte()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads a pointer from the zero page. The high byte wraps within page 0.
    fn read_zero_page_word(&self, ptr: u8) -> Result<u16, ExecutionError> {
        let lo = self.read(ptr as u16)? as u16;
        let hi = self.read(ptr.wrapping_add(1) as u16)? as u16;
        Ok((hi << 8) | lo)
    }

    /// Consumes the operand bytes of a memory addressing mode and returns the
    /// effective address.
    ///
    /// Immediate yields the address of the operand byte itself and Relative
    /// the branch target. Implicit and Accumulator have no effective address.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::Immediate => {
                let addr = self.state.pc;
                self.fetch_byte()?;
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte()? as u16,
            AddressingMode::ZeroPageX => self.fetch_byte()?.wrapping_add(self.state.x) as u16,
            AddressingMode::ZeroPageY => self.fetch_byte()?.wrapping_add(self.state.y) as u16,
            AddressingMode::Absolute => self.fetch_word()?,
            AddressingMode::AbsoluteX => self.fetch_word()?.wrapping_add(self.state.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word()?.wrapping_add(self.state.y as u16),
            AddressingMode::Indirect => {
                let ptr = self.fetch_word()?;
                // The high byte never carries into the next page.
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let lo = self.read(ptr)? as u16;
                let hi = self.read(hi_addr)? as u16;
                (hi << 8) | lo
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte()?.wrapping_add(self.state.x);
                self.read_zero_page_word(ptr)?
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte()?;
                self.read_zero_page_word(ptr)?
                    .wrapping_add(self.state.y as u16)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte()? as i8;
                self.state.pc.wrapping_add_signed(offset as i16)
            }
            AddressingMode::Implicit | AddressingMode::Accumulator => {
                return Err(ExecutionError::NoEffectiveAddress(mode));
            }
        };
        Ok(addr)
    }

    /// Consumes the operand bytes of `mode` and returns the operand value.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(),
            AddressingMode::Accumulator => Ok(self.state.a),
            _ => {
                let addr = self.operand_address(mode)?;
                self.read(addr)
            }
        }
    }

    /// Pushes a byte: write to 0x0100 | SP, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.write(STACK_PAGE | self.state.sp as u16, value)?;
        self.state.sp = self.state.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte: increment SP, then read from 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> Result<u8, ExecutionError> {
        self.state.sp = self.state.sp.wrapping_add(1);
        self.read(STACK_PAGE | self.state.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) -> Result<(), ExecutionError> {
        self.push((value >> 8) as u8)?;
        self.push(value as u8)
    }

    /// Pulls a word, low byte first.
    pub(crate) fn pull_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.pull()? as u16;
        let hi = self.pull()? as u16;
        Ok((hi << 8) | lo)
    }
}
