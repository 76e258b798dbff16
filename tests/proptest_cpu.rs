//! Property-based tests for interpreter invariants.
//!
//! These tests use proptest to check that instruction execution keeps its
//! fundamental guarantees across arbitrary register and memory contents.

use nes_cpu::{
    Cpu, ExecutionError, FlatMemory, Flags, ProcessorState, ProgramImage, Step, OPCODE_TABLE,
};
use proptest::prelude::*;

/// Get all documented opcodes from the opcode table
fn documented_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .filter(|op| op.is_documented())
        .map(|op| op.code)
        .collect()
}

/// Get opcodes that leave PC just past their operands (no branches, jumps, calls or returns)
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .filter(|op| {
            op.is_documented()
                && !matches!(
                    op.mnemonic,
                    "BCC" | "BCS" | "BEQ" | "BMI" | "BNE" | "BPL" | "BVC" | "BVS" | "JMP" | "JSR"
                        | "RTS" | "RTI"
                )
        })
        .map(|op| op.code)
        .collect()
}

fn arb_state() -> impl Strategy<Value = ProcessorState> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(
        |(a, x, y, sp, status)| ProcessorState {
            a,
            x,
            y,
            status: Flags::from_bits_retain(status),
            sp,
            pc: 0x8000,
        },
    )
}

/// Places `opcode` and two operand bytes at 0x8000 and fills the zero page
/// with `zero_page`.
fn setup_memory(opcode: u8, operands: [u8; 2], zero_page: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, zero_page);
    memory.load(0x8000, &[opcode, operands[0], operands[1]]);
    memory
}

proptest! {
    // ========== LDA Immediate ==========

    #[test]
    fn prop_lda_immediate_sets_z_and_n(value in any::<u8>(), status in any::<u8>()) {
        let mut cpu = Cpu::new();
        let before = Flags::from_bits_retain(status);
        cpu.set_status(before);

        cpu.interpret(&[0xA9, value, 0x00]).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.status().contains(Flags::ZERO), value == 0);
        prop_assert_eq!(cpu.status().contains(Flags::NEGATIVE), value & 0x80 != 0);
        let others = !(Flags::ZERO | Flags::NEGATIVE);
        prop_assert_eq!(cpu.status() & others, before & others);
        prop_assert_eq!(cpu.pc(), 3);
    }

    // ========== Flags ==========

    #[test]
    fn prop_flag_set_is_idempotent(
        bits in any::<u8>(),
        flag_bit in 0u8..8,
        value in any::<bool>(),
    ) {
        let flag = Flags::from_bits_retain(1 << flag_bit);
        let mut once = Flags::from_bits_retain(bits);
        once.set(flag, value);
        let mut twice = once;
        twice.set(flag, value);

        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.contains(flag), value);
        prop_assert_eq!(once & !flag, Flags::from_bits_retain(bits) & !flag);
    }

    #[test]
    fn prop_only_declared_flags_change(
        index in 0usize..151,
        state in arb_state(),
        operands in any::<[u8; 2]>(),
        zero_page in proptest::collection::vec(any::<u8>(), 256),
    ) {
        let opcode = documented_opcodes()[index];
        let mut memory = setup_memory(opcode, operands, &zero_page);
        let mut cpu = Cpu::with_state(state);

        cpu.step(&mut memory).unwrap();

        let untouched = !OPCODE_TABLE[opcode as usize].affects;
        prop_assert_eq!(
            cpu.status() & untouched,
            state.status & untouched,
            "opcode 0x{:02X} changed an undeclared flag",
            opcode
        );
    }

    // ========== Program Counter ==========

    #[test]
    fn prop_pc_advances_by_instruction_size(
        index in 0usize..1000,
        state in arb_state(),
        operands in any::<[u8; 2]>(),
    ) {
        let opcodes = non_branching_opcodes();
        let opcode = opcodes[index % opcodes.len()];
        let mut memory = setup_memory(opcode, operands, &[]);
        let mut cpu = Cpu::with_state(state);

        cpu.step(&mut memory).unwrap();

        let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;
        prop_assert_eq!(cpu.pc(), 0x8000 + size, "opcode 0x{:02X}", opcode);
    }

    #[test]
    fn prop_unknown_opcodes_advance_one_byte(state in arb_state()) {
        let undocumented: Vec<u8> = OPCODE_TABLE
            .iter()
            .filter(|op| !op.is_documented())
            .map(|op| op.code)
            .collect();

        for opcode in undocumented {
            let mut memory = setup_memory(opcode, [0, 0], &[]);
            let mut cpu = Cpu::with_state(state);

            cpu.step(&mut memory).unwrap();

            let mut expected = state;
            expected.pc = 0x8001;
            prop_assert_eq!(cpu.state(), &expected);
        }
    }

    // ========== Robustness ==========

    #[test]
    fn prop_random_programs_never_panic(
        program in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut image = ProgramImage::new(&program).unwrap();
        let mut cpu = Cpu::new();

        for _ in 0..1000 {
            match cpu.step(&mut image) {
                Ok(Step::Continue) => {}
                Ok(Step::Halt) => break,
                Err(ExecutionError::OutOfBounds { .. }) => break,
                Err(other) => {
                    prop_assert!(false, "unexpected error {:?}", other);
                }
            }
        }
    }

    #[test]
    fn prop_reset_always_restores_power_on(state in arb_state()) {
        let mut cpu = Cpu::with_state(state);
        cpu.reset();
        prop_assert_eq!(cpu.state(), &ProcessorState::new());
    }
}
