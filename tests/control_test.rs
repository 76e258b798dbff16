//! Tests for the control flow instructions.
//!
//! Tests cover:
//! - JMP absolute and indirect, including the indirect page-wrap bug
//! - JSR / RTS return address handling
//! - RTI restoring status and PC
//! - NOP and BRK

use nes_cpu::{Cpu, FlatMemory, Flags, MemoryBus, Step};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut cpu = Cpu::new();
    cpu.set_pc(0x8000);
    cpu.set_sp(0xFD);
    (cpu, FlatMemory::new())
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step(&mut memory), Ok(Step::Continue));

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x6C, 0x00, 0x02]);
    memory.write(0x0200, 0xCD);
    memory.write(0x0201, 0xAB);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0xABCD);
}

#[test]
fn test_jmp_indirect_page_boundary_bug() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x6C, 0xFF, 0x02]);
    memory.write(0x02FF, 0x34);
    memory.write(0x0200, 0x12);
    memory.write(0x0300, 0x56);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_then_continue_at_target() {
    let (mut cpu, mut memory) = setup_cpu();
    // JMP $9000 skips the LDA at 0x8003.
    memory.load(0x8000, &[0x4C, 0x00, 0x90, 0xA9, 0xFF, 0x00]);
    memory.load(0x9000, &[0xA9, 0x01, 0x00]);

    cpu.run(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.pc(), 0x9003);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x20, 0x00, 0x90]);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(memory.read(0x01FD), 0x80);
    assert_eq!(memory.read(0x01FC), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let (mut cpu, mut memory) = setup_cpu();
    // JSR $9000; LDX #$02; BRK
    memory.load(0x8000, &[0x20, 0x00, 0x90, 0xA2, 0x02, 0x00]);
    // LDA #$01; RTS
    memory.load(0x9000, &[0xA9, 0x01, 0x60]);

    cpu.run(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.x(), 0x02);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_nested_subroutines() {
    let (mut cpu, mut memory) = setup_cpu();
    // JSR $9000; BRK
    memory.load(0x8000, &[0x20, 0x00, 0x90, 0x00]);
    // INX; JSR $A000; INX; RTS
    memory.load(0x9000, &[0xE8, 0x20, 0x00, 0xA0, 0xE8, 0x60]);
    // INY; RTS
    memory.load(0xA000, &[0xC8, 0x60]);

    cpu.run(&mut memory).unwrap();

    assert_eq!(cpu.x(), 0x02);
    assert_eq!(cpu.y(), 0x01);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x8004);
}

// ========== RTI ==========

#[test]
fn test_rti_restores_status_and_pc() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_sp(0xFA);
    memory.write(0x01FB, 0b1001_0001); // N, B, C
    memory.write(0x01FC, 0x34);
    memory.write(0x01FD, 0x12);
    memory.load(0x8000, &[0x40]);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(
        cpu.status(),
        Flags::NEGATIVE | Flags::UNUSED | Flags::CARRY
    );
}

// ========== NOP / BRK ==========

#[test]
fn test_nop_changes_only_pc() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_a(0x12);
    cpu.set_status(Flags::CARRY | Flags::UNUSED);
    let before = *cpu.state();
    memory.load(0x8000, &[0xEA]);

    cpu.step(&mut memory).unwrap();

    let mut expected = before;
    expected.pc = 0x8001;
    assert_eq!(cpu.state(), &expected);
}

#[test]
fn test_brk_halts_without_pushing() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_status(Flags::UNUSED);
    memory.load(0x8000, &[0x00]);

    assert_eq!(cpu.step(&mut memory), Ok(Step::Halt));

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), Flags::UNUSED);
    assert_eq!(memory.read(0x01FD), 0x00);
}
