//! Fuzz target for single-instruction execution.
//!
//! This target creates arbitrary register files and memory contents, then
//! executes one instruction on a flat 64KB bus to find panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes_cpu::{Cpu, CpuConfig, FlatMemory, Flags, ProcessorState, UnknownOpcodePolicy};

/// Arbitrary register file for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    pc: u16,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    state: FuzzState,
    memory: FuzzMemory,
    strict: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(input.state.pc, &input.memory.instruction_bytes);

    let state = ProcessorState {
        a: input.state.a,
        x: input.state.x,
        y: input.state.y,
        status: Flags::from_bits_retain(input.state.status),
        sp: input.state.sp,
        pc: input.state.pc,
    };
    let mut cpu = Cpu::with_state(state);
    if input.strict {
        cpu.set_config(CpuConfig::default().with_unknown_opcodes(UnknownOpcodePolicy::Error));
    }

    // A flat bus maps every address, so only the strict policy can fail.
    let result = cpu.step(&mut memory);
    assert!(result.is_ok() || input.strict);
});
