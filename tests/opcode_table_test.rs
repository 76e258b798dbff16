//! Opcode table validation tests
//!
//! Verifies that the opcode table is complete and agrees with the 6502's
//! documented instruction set.

use nes_cpu::{AddressingMode, Flags, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256);

    for (index, opcode) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(opcode.code as usize, index);
        assert!(
            !opcode.mnemonic.is_empty(),
            "Opcode 0x{:02X} has empty mnemonic",
            index
        );
    }
}

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE.iter().filter(|op| op.is_documented()).count();
    assert_eq!(documented, 151);

    let mnemonics: std::collections::BTreeSet<_> = OPCODE_TABLE
        .iter()
        .filter(|op| op.is_documented())
        .map(|op| op.mnemonic)
        .collect();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_opcode_table_size_validation() {
    for opcode in OPCODE_TABLE.iter() {
        assert!(
            (1..=3).contains(&opcode.size_bytes),
            "Opcode 0x{:02X} has invalid size: {}",
            opcode.code,
            opcode.size_bytes
        );
        assert_eq!(opcode.size_bytes, 1 + opcode.mode.operand_bytes());
    }
}

#[test]
fn test_undocumented_entries_are_inert() {
    for opcode in OPCODE_TABLE.iter().filter(|op| !op.is_documented()) {
        assert_eq!(opcode.mnemonic, "???");
        assert_eq!(opcode.size_bytes, 1);
        assert_eq!(opcode.affects, Flags::empty());
    }
}

#[test]
fn test_well_known_entries() {
    let cases = [
        (0x00, "BRK", AddressingMode::Implicit),
        (0xA9, "LDA", AddressingMode::Immediate),
        (0x6C, "JMP", AddressingMode::Indirect),
        (0x0A, "ASL", AddressingMode::Accumulator),
        (0xB6, "LDX", AddressingMode::ZeroPageY),
        (0x91, "STA", AddressingMode::IndirectY),
        (0xD0, "BNE", AddressingMode::Relative),
        (0xEA, "NOP", AddressingMode::Implicit),
    ];

    for (code, mnemonic, mode) in cases {
        let opcode = &OPCODE_TABLE[code];
        assert_eq!(opcode.mnemonic, mnemonic, "0x{:02X}", code);
        assert_eq!(opcode.mode, mode, "0x{:02X}", code);
        assert!(opcode.is_documented());
    }
}

#[test]
fn test_affected_flags() {
    assert_eq!(OPCODE_TABLE[0xA9].affects, Flags::NEGATIVE | Flags::ZERO);
    assert_eq!(
        OPCODE_TABLE[0x69].affects,
        Flags::NEGATIVE | Flags::OVERFLOW | Flags::ZERO | Flags::CARRY
    );
    assert_eq!(
        OPCODE_TABLE[0x24].affects,
        Flags::NEGATIVE | Flags::OVERFLOW | Flags::ZERO
    );
    assert_eq!(OPCODE_TABLE[0x18].affects, Flags::CARRY);
    assert_eq!(OPCODE_TABLE[0xB8].affects, Flags::OVERFLOW);
    assert_eq!(OPCODE_TABLE[0x28].affects, Flags::all());
    assert_eq!(OPCODE_TABLE[0x8D].affects, Flags::empty());
    assert_eq!(OPCODE_TABLE[0x9A].affects, Flags::empty());
    assert_eq!(OPCODE_TABLE[0x00].affects, Flags::empty());
}

#[test]
fn test_branches_are_relative() {
    for opcode in OPCODE_TABLE.iter().filter(|op| op.mnemonic.starts_with('B')) {
        if opcode.mnemonic == "BIT" || opcode.mnemonic == "BRK" {
            continue;
        }
        assert_eq!(opcode.mode, AddressingMode::Relative, "{}", opcode.mnemonic);
        assert_eq!(opcode.size_bytes, 2);
    }
}
