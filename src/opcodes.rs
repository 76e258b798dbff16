//! # Opcode Table
//!
//! A 256-entry table, indexed by opcode byte, that is the single source of
//! truth for decoding. Each entry carries:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Instruction size in bytes
//! - The set of status flags the instruction may change
//! - The handler that executes it
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! bytes are marked with the "???" mnemonic and have no handler; the
//! interpreter treats them according to its
//! [`UnknownOpcodePolicy`](crate::UnknownOpcodePolicy).
//!
//! Adding an instruction means writing its handler in `instructions` and
//! adding one row to `DOCUMENTED`; the fetch loop never changes.

use std::fmt;

use crate::addressing::AddressingMode::{
    self, Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use crate::cpu::{Execution, Step};
use crate::instructions::{
    alu, branches, control, flags as flag_ops, inc_dec, load_store, shifts, stack, transfer,
};
use crate::{ExecutionError, Flags};

/// Signature shared by every instruction handler.
///
/// When called, PC points at the first operand byte (the opcode has already
/// been consumed).
pub(crate) type Handler = fn(&mut Execution<'_>, &Opcode) -> Result<Step, ExecutionError>;

/// Decoding record for a single opcode byte.
///
/// # Examples
///
/// ```
/// use nes_cpu::{AddressingMode, Flags, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.affects, Flags::NEGATIVE | Flags::ZERO);
/// assert!(lda_imm.is_documented());
/// ```
#[derive(Clone, Copy)]
pub struct Opcode {
    /// The opcode byte this record describes.
    pub code: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Status flags this instruction may change. Every other flag is left
    /// exactly as it was.
    pub affects: Flags,

    pub(crate) handler: Option<Handler>,
}

impl Opcode {
    const UNDOCUMENTED: Opcode = Opcode {
        code: 0x00,
        mnemonic: "???",
        mode: Implicit,
        size_bytes: 1,
        affects: Flags::empty(),
        handler: None,
    };

    /// Returns `true` if the opcode is part of the documented instruction set.
    pub fn is_documented(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opcode")
            .field("code", &format_args!("0x{:02X}", self.code))
            .field("mnemonic", &self.mnemonic)
            .field("mode", &self.mode)
            .field("size_bytes", &self.size_bytes)
            .field("affects", &self.affects)
            .finish()
    }
}

const NONE: Flags = Flags::empty();
const NZ: Flags = Flags::NEGATIVE.union(Flags::ZERO);
const NZC: Flags = NZ.union(Flags::CARRY);
const NVZ: Flags = NZ.union(Flags::OVERFLOW);
const NVZC: Flags = NZC.union(Flags::OVERFLOW);
const ALL: Flags = Flags::all();

const fn op(
    code: u8,
    mnemonic: &'static str,
    mode: AddressingMode,
    affects: Flags,
    handler: Handler,
) -> Opcode {
    Opcode {
        code,
        mnemonic,
        mode,
        size_bytes: 1 + mode.operand_bytes(),
        affects,
        handler: Some(handler),
    }
}

#[rustfmt::skip]
const DOCUMENTED: [Opcode; 151] = [
    // Load / store
    op(0xA9, "LDA", Immediate, NZ, load_store::execute_lda),
    op(0xA5, "LDA", ZeroPage,  NZ, load_store::execute_lda),
    op(0xB5, "LDA", ZeroPageX, NZ, load_store::execute_lda),
    op(0xAD, "LDA", Absolute,  NZ, load_store::execute_lda),
    op(0xBD, "LDA", AbsoluteX, NZ, load_store::execute_lda),
    op(0xB9, "LDA", AbsoluteY, NZ, load_store::execute_lda),
    op(0xA1, "LDA", IndirectX, NZ, load_store::execute_lda),
    op(0xB1, "LDA", IndirectY, NZ, load_store::execute_lda),
    op(0xA2, "LDX", Immediate, NZ, load_store::execute_ldx),
    op(0xA6, "LDX", ZeroPage,  NZ, load_store::execute_ldx),
    op(0xB6, "LDX", ZeroPageY, NZ, load_store::execute_ldx),
    op(0xAE, "LDX", Absolute,  NZ, load_store::execute_ldx),
    op(0xBE, "LDX", AbsoluteY, NZ, load_store::execute_ldx),
    op(0xA0, "LDY", Immediate, NZ, load_store::execute_ldy),
    op(0xA4, "LDY", ZeroPage,  NZ, load_store::execute_ldy),
    op(0xB4, "LDY", ZeroPageX, NZ, load_store::execute_ldy),
    op(0xAC, "LDY", Absolute,  NZ, load_store::execute_ldy),
    op(0xBC, "LDY", AbsoluteX, NZ, load_store::execute_ldy),
    op(0x85, "STA", ZeroPage,  NONE, load_store::execute_sta),
    op(0x95, "STA", ZeroPageX, NONE, load_store::execute_sta),
    op(0x8D, "STA", Absolute,  NONE, load_store::execute_sta),
    op(0x9D, "STA", AbsoluteX, NONE, load_store::execute_sta),
    op(0x99, "STA", AbsoluteY, NONE, load_store::execute_sta),
    op(0x81, "STA", IndirectX, NONE, load_store::execute_sta),
    op(0x91, "STA", IndirectY, NONE, load_store::execute_sta),
    op(0x86, "STX", ZeroPage,  NONE, load_store::execute_stx),
    op(0x96, "STX", ZeroPageY, NONE, load_store::execute_stx),
    op(0x8E, "STX", Absolute,  NONE, load_store::execute_stx),
    op(0x84, "STY", ZeroPage,  NONE, load_store::execute_sty),
    op(0x94, "STY", ZeroPageX, NONE, load_store::execute_sty),
    op(0x8C, "STY", Absolute,  NONE, load_store::execute_sty),

    // Register transfers
    op(0xAA, "TAX", Implicit, NZ,   transfer::execute_tax),
    op(0xA8, "TAY", Implicit, NZ,   transfer::execute_tay),
    op(0x8A, "TXA", Implicit, NZ,   transfer::execute_txa),
    op(0x98, "TYA", Implicit, NZ,   transfer::execute_tya),
    op(0xBA, "TSX", Implicit, NZ,   transfer::execute_tsx),
    op(0x9A, "TXS", Implicit, NONE, transfer::execute_txs),

    // Stack
    op(0x48, "PHA", Implicit, NONE, stack::execute_pha),
    op(0x08, "PHP", Implicit, NONE, stack::execute_php),
    op(0x68, "PLA", Implicit, NZ,   stack::execute_pla),
    op(0x28, "PLP", Implicit, ALL,  stack::execute_plp),

    // Arithmetic and logic
    op(0x69, "ADC", Immediate, NVZC, alu::execute_adc),
    op(0x65, "ADC", ZeroPage,  NVZC, alu::execute_adc),
    op(0x75, "ADC", ZeroPageX, NVZC, alu::execute_adc),
    op(0x6D, "ADC", Absolute,  NVZC, alu::execute_adc),
    op(0x7D, "ADC", AbsoluteX, NVZC, alu::execute_adc),
    op(0x79, "ADC", AbsoluteY, NVZC, alu::execute_adc),
    op(0x61, "ADC", IndirectX, NVZC, alu::execute_adc),
    op(0x71, "ADC", IndirectY, NVZC, alu::execute_adc),
    op(0xE9, "SBC", Immediate, NVZC, alu::execute_sbc),
    op(0xE5, "SBC", ZeroPage,  NVZC, alu::execute_sbc),
    op(0xF5, "SBC", ZeroPageX, NVZC, alu::execute_sbc),
    op(0xED, "SBC", Absolute,  NVZC, alu::execute_sbc),
    op(0xFD, "SBC", AbsoluteX, NVZC, alu::execute_sbc),
    op(0xF9, "SBC", AbsoluteY, NVZC, alu::execute_sbc),
    op(0xE1, "SBC", IndirectX, NVZC, alu::execute_sbc),
    op(0xF1, "SBC", IndirectY, NVZC, alu::execute_sbc),
    op(0x29, "AND", Immediate, NZ, alu::execute_and),
    op(0x25, "AND", ZeroPage,  NZ, alu::execute_and),
    op(0x35, "AND", ZeroPageX, NZ, alu::execute_and),
    op(0x2D, "AND", Absolute,  NZ, alu::execute_and),
    op(0x3D, "AND", AbsoluteX, NZ, alu::execute_and),
    op(0x39, "AND", AbsoluteY, NZ, alu::execute_and),
    op(0x21, "AND", IndirectX, NZ, alu::execute_and),
    op(0x31, "AND", IndirectY, NZ, alu::execute_and),
    op(0x09, "ORA", Immediate, NZ, alu::execute_ora),
    op(0x05, "ORA", ZeroPage,  NZ, alu::execute_ora),
    op(0x15, "ORA", ZeroPageX, NZ, alu::execute_ora),
    op(0x0D, "ORA", Absolute,  NZ, alu::execute_ora),
    op(0x1D, "ORA", AbsoluteX, NZ, alu::execute_ora),
    op(0x19, "ORA", AbsoluteY, NZ, alu::execute_ora),
    op(0x01, "ORA", IndirectX, NZ, alu::execute_ora),
    op(0x11, "ORA", IndirectY, NZ, alu::execute_ora),
    op(0x49, "EOR", Immediate, NZ, alu::execute_eor),
    op(0x45, "EOR", ZeroPage,  NZ, alu::execute_eor),
    op(0x55, "EOR", ZeroPageX, NZ, alu::execute_eor),
    op(0x4D, "EOR", Absolute,  NZ, alu::execute_eor),
    op(0x5D, "EOR", AbsoluteX, NZ, alu::execute_eor),
    op(0x59, "EOR", AbsoluteY, NZ, alu::execute_eor),
    op(0x41, "EOR", IndirectX, NZ, alu::execute_eor),
    op(0x51, "EOR", IndirectY, NZ, alu::execute_eor),
    op(0xC9, "CMP", Immediate, NZC, alu::execute_cmp),
    op(0xC5, "CMP", ZeroPage,  NZC, alu::execute_cmp),
    op(0xD5, "CMP", ZeroPageX, NZC, alu::execute_cmp),
    op(0xCD, "CMP", Absolute,  NZC, alu::execute_cmp),
    op(0xDD, "CMP", AbsoluteX, NZC, alu::execute_cmp),
    op(0xD9, "CMP", AbsoluteY, NZC, alu::execute_cmp),
    op(0xC1, "CMP", IndirectX, NZC, alu::execute_cmp),
    op(0xD1, "CMP", IndirectY, NZC, alu::execute_cmp),
    op(0xE0, "CPX", Immediate, NZC, alu::execute_cpx),
    op(0xE4, "CPX", ZeroPage,  NZC, alu::execute_cpx),
    op(0xEC, "CPX", Absolute,  NZC, alu::execute_cpx),
    op(0xC0, "CPY", Immediate, NZC, alu::execute_cpy),
    op(0xC4, "CPY", ZeroPage,  NZC, alu::execute_cpy),
    op(0xCC, "CPY", Absolute,  NZC, alu::execute_cpy),
    op(0x24, "BIT", ZeroPage,  NVZ, alu::execute_bit),
    op(0x2C, "BIT", Absolute,  NVZ, alu::execute_bit),

    // Increments and decrements
    op(0xE6, "INC", ZeroPage,  NZ, inc_dec::execute_inc),
    op(0xF6, "INC", ZeroPageX, NZ, inc_dec::execute_inc),
    op(0xEE, "INC", Absolute,  NZ, inc_dec::execute_inc),
    op(0xFE, "INC", AbsoluteX, NZ, inc_dec::execute_inc),
    op(0xC6, "DEC", ZeroPage,  NZ, inc_dec::execute_dec),
    op(0xD6, "DEC", ZeroPageX, NZ, inc_dec::execute_dec),
    op(0xCE, "DEC", Absolute,  NZ, inc_dec::execute_dec),
    op(0xDE, "DEC", AbsoluteX, NZ, inc_dec::execute_dec),
    op(0xE8, "INX", Implicit,  NZ, inc_dec::execute_inx),
    op(0xC8, "INY", Implicit,  NZ, inc_dec::execute_iny),
    op(0xCA, "DEX", Implicit,  NZ, inc_dec::execute_dex),
    op(0x88, "DEY", Implicit,  NZ, inc_dec::execute_dey),

    // Shifts and rotates
    op(0x0A, "ASL", Accumulator, NZC, shifts::execute_asl),
    op(0x06, "ASL", ZeroPage,    NZC, shifts::execute_asl),
    op(0x16, "ASL", ZeroPageX,   NZC, shifts::execute_asl),
    op(0x0E, "ASL", Absolute,    NZC, shifts::execute_asl),
    op(0x1E, "ASL", AbsoluteX,   NZC, shifts::execute_asl),
    op(0x4A, "LSR", Accumulator, NZC, shifts::execute_lsr),
    op(0x46, "LSR", ZeroPage,    NZC, shifts::execute_lsr),
    op(0x56, "LSR", ZeroPageX,   NZC, shifts::execute_lsr),
    op(0x4E, "LSR", Absolute,    NZC, shifts::execute_lsr),
    op(0x5E, "LSR", AbsoluteX,   NZC, shifts::execute_lsr),
    op(0x2A, "ROL", Accumulator, NZC, shifts::execute_rol),
    op(0x26, "ROL", ZeroPage,    NZC, shifts::execute_rol),
    op(0x36, "ROL", ZeroPageX,   NZC, shifts::execute_rol),
    op(0x2E, "ROL", Absolute,    NZC, shifts::execute_rol),
    op(0x3E, "ROL", AbsoluteX,   NZC, shifts::execute_rol),
    op(0x6A, "ROR", Accumulator, NZC, shifts::execute_ror),
    op(0x66, "ROR", ZeroPage,    NZC, shifts::execute_ror),
    op(0x76, "ROR", ZeroPageX,   NZC, shifts::execute_ror),
    op(0x6E, "ROR", Absolute,    NZC, shifts::execute_ror),
    op(0x7E, "ROR", AbsoluteX,   NZC, shifts::execute_ror),

    // Branches
    op(0x90, "BCC", Relative, NONE, branches::execute_bcc),
    op(0xB0, "BCS", Relative, NONE, branches::execute_bcs),
    op(0xF0, "BEQ", Relative, NONE, branches::execute_beq),
    op(0xD0, "BNE", Relative, NONE, branches::execute_bne),
    op(0x30, "BMI", Relative, NONE, branches::execute_bmi),
    op(0x10, "BPL", Relative, NONE, branches::execute_bpl),
    op(0x50, "BVC", Relative, NONE, branches::execute_bvc),
    op(0x70, "BVS", Relative, NONE, branches::execute_bvs),

    // Jumps, subroutines, halt
    op(0x4C, "JMP", Absolute, NONE, control::execute_jmp),
    op(0x6C, "JMP", Indirect, NONE, control::execute_jmp),
    op(0x20, "JSR", Absolute, NONE, control::execute_jsr),
    op(0x60, "RTS", Implicit, NONE, control::execute_rts),
    op(0x40, "RTI", Implicit, ALL,  control::execute_rti),
    op(0x00, "BRK", Implicit, NONE, control::execute_brk),
    op(0xEA, "NOP", Implicit, NONE, control::execute_nop),

    // Flag manipulation
    op(0x18, "CLC", Implicit, Flags::CARRY,             flag_ops::execute_clc),
    op(0x38, "SEC", Implicit, Flags::CARRY,             flag_ops::execute_sec),
    op(0x58, "CLI", Implicit, Flags::INTERRUPT_DISABLE, flag_ops::execute_cli),
    op(0x78, "SEI", Implicit, Flags::INTERRUPT_DISABLE, flag_ops::execute_sei),
    op(0xD8, "CLD", Implicit, Flags::DECIMAL,           flag_ops::execute_cld),
    op(0xF8, "SED", Implicit, Flags::DECIMAL,           flag_ops::execute_sed),
    op(0xB8, "CLV", Implicit, Flags::OVERFLOW,          flag_ops::execute_clv),
];

const fn build_table() -> [Opcode; 256] {
    let mut table = [Opcode::UNDOCUMENTED; 256];

    let mut code = 0;
    while code < 256 {
        table[code].code = code as u8;
        code += 1;
    }

    let mut i = 0;
    while i < DOCUMENTED.len() {
        let entry = DOCUMENTED[i];
        table[entry.code as usize] = entry;
        i += 1;
    }

    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use nes_cpu::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.size_bytes, 1);
///
/// // Undocumented opcodes are marked with "???"
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.is_documented());
/// ```
pub static OPCODE_TABLE: [Opcode; 256] = build_table();
