//! # Memory Bus Abstraction
//!
//! The interpreter never touches memory directly; every opcode fetch, operand
//! fetch, data access and stack operation goes through the `MemoryBus` trait.
//! Two implementations ship with the crate:
//!
//! - [`FlatMemory`]: 64KB of RAM, every address mapped
//! - [`ProgramImage`]: a read-only program image mapped at 0x0000, the
//!   backing store of [`Cpu::interpret`](crate::Cpu::interpret)
//!
//! Console-specific address decoding (PPU registers, cartridge mappers) is the
//! host's business and plugs in by implementing the trait.

use crate::ExecutionError;
use log::trace;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - `is_mapped(&self)`: lets an address space declare holes. The CPU checks
///   it before every access and stops with
///   [`ExecutionError::OutOfBounds`] instead of reading garbage.
/// - `is_writable(&self)`: the same check for writes, so read-only regions
///   are fatal to write instead of silently keeping their old contents.
///
/// # Examples
///
/// ```
/// use nes_cpu::MemoryBus;
///
/// /// 2KB of internal RAM mirrored four times, nothing above 0x2000.
/// struct InternalRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for InternalRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr & 0x07FF) as usize] = value;
///     }
///
///     fn is_mapped(&self, addr: u16) -> bool {
///         addr < 0x2000
///     }
/// }
///
/// let mut bus = InternalRam { ram: [0; 0x0800] };
/// bus.write(0x0801, 0x42);
/// assert_eq!(bus.read(0x0001), 0x42);
/// assert!(!bus.is_mapped(0x2000));
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Only called for addresses where [`is_mapped`](MemoryBus::is_mapped)
    /// returns `true`.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Only called for addresses where
    /// [`is_writable`](MemoryBus::is_writable) returns `true`.
    fn write(&mut self, addr: u16, value: u8);

    /// Returns `true` if the address is backed by something.
    ///
    /// Defaults to `true`: a full 64KB address space has no holes.
    fn is_mapped(&self, _addr: u16) -> bool {
        true
    }

    /// Returns `true` if a write to the address lands somewhere.
    ///
    /// Defaults to [`is_mapped`](MemoryBus::is_mapped). Read-only regions
    /// return `false`, so the CPU stops on a write there instead of losing
    /// it.
    fn is_writable(&self, addr: u16) -> bool {
        self.is_mapped(addr)
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nes_cpu::{Cpu, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42, 0x00]); // LDA #$42; BRK
///
/// let mut cpu = Cpu::new();
/// cpu.set_pc(0x8000);
/// cpu.run(&mut memory).unwrap();
///
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Read-only view of a program image mapped at address 0x0000.
///
/// Addresses at or past the end of the image are unmapped, so running off the
/// end of a program (or reading data beyond it) is an
/// [`ExecutionError::OutOfBounds`]. No address is writable: a store or stack
/// push into the image is out of bounds too. Programs that need RAM run on a
/// [`FlatMemory`] through [`Cpu::run`](crate::Cpu::run).
///
/// # Examples
///
/// ```
/// use nes_cpu::{MemoryBus, ProgramImage};
///
/// let program = [0xA9, 0x05, 0x00];
/// let mut image = ProgramImage::new(&program).unwrap();
///
/// assert_eq!(image.read(1), 0x05);
/// assert!(image.is_mapped(2));
/// assert!(!image.is_mapped(3));
/// assert!(!image.is_writable(1));
///
/// image.write(1, 0xFF);
/// assert_eq!(image.read(1), 0x05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProgramImage<'a> {
    bytes: &'a [u8],
}

impl<'a> ProgramImage<'a> {
    /// Largest image the 16-bit program counter can step through without
    /// wrapping back to 0x0000.
    pub const MAX_LEN: usize = 0xFFFF;

    /// Wraps `bytes`, rejecting images longer than [`Self::MAX_LEN`].
    pub fn new(bytes: &'a [u8]) -> Result<Self, ExecutionError> {
        if bytes.len() > Self::MAX_LEN {
            return Err(ExecutionError::ProgramTooLarge { len: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// Length of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty image.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl MemoryBus for ProgramImage<'_> {
    fn read(&self, addr: u16) -> u8 {
        self.bytes.get(addr as usize).copied().unwrap_or(0)
    }

    fn write(&mut self, addr: u16, value: u8) {
        trace!(
            "dropping write of 0x{:02X} to read-only program image at 0x{:04X}",
            value,
            addr
        );
    }

    fn is_mapped(&self, addr: u16) -> bool {
        (addr as usize) < self.bytes.len()
    }

    fn is_writable(&self, _addr: u16) -> bool {
        false
    }
}
