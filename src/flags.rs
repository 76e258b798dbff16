//! # Processor Status Flags
//!
//! The 6502 status register packs eight condition bits into one byte
//! (`NV-BDIZC`). Bit positions are fixed by the hardware.

use bitflags::bitflags;

bitflags! {
    /// Status register of the 6502.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: U (unused, held at 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// Handlers change individual bits with [`Flags::set`], which inserts the
    /// flag when the condition holds and removes it otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::Flags;
    ///
    /// let mut status = Flags::POWER_ON;
    /// assert_eq!(status.bits(), 0b0010_0100);
    ///
    /// status.set(Flags::ZERO, true);
    /// assert!(status.contains(Flags::ZERO));
    ///
    /// status.set(Flags::ZERO, false);
    /// assert_eq!(status, Flags::POWER_ON);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Carry (set on unsigned overflow, clear on borrow)
        const CARRY = 0b0000_0001;
        /// Zero (set if the result is zero)
        const ZERO = 0b0000_0010;
        /// Interrupt disable (blocks IRQ when set)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode (toggled by CLD/SED, ignored by the 2A03's ALU)
        const DECIMAL = 0b0000_1000;
        /// Break (only meaningful in status bytes pushed to the stack)
        const BREAK = 0b0001_0000;
        /// Unused bit, held at 1 on this chip family
        const UNUSED = 0b0010_0000;
        /// Overflow (set on signed overflow)
        const OVERFLOW = 0b0100_0000;
        /// Negative (copy of bit 7 of the result)
        const NEGATIVE = 0b1000_0000;
    }
}

impl Flags {
    /// Status value after power-on or reset: I and U set, everything else clear.
    pub const POWER_ON: Flags = Flags::INTERRUPT_DISABLE.union(Flags::UNUSED);

    /// Updates Z and N from a freshly produced register or memory value.
    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        self.set(Flags::ZERO, value == 0);
        self.set(Flags::NEGATIVE, value & 0x80 != 0);
    }

    /// Builds the status register from a byte pulled off the stack.
    ///
    /// B does not exist as a latch inside the CPU, so it is dropped; U always
    /// reads back as 1.
    pub(crate) fn from_stack_byte(value: u8) -> Flags {
        let mut status = Flags::from_bits_retain(value);
        status.remove(Flags::BREAK);
        status.insert(Flags::UNUSED);
        status
    }

    /// Status byte as pushed by PHP (and BRK on real hardware): B and U set.
    pub(crate) fn to_stack_byte(self) -> u8 {
        self.union(Flags::BREAK).union(Flags::UNUSED).bits()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::POWER_ON
    }
}
