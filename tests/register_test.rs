//! Tests for register transfers, increments/decrements and flag instructions.
//!
//! Tests cover:
//! - TAX / TAY / TXA / TYA / TSX setting N and Z
//! - TXS leaving flags alone
//! - INX / INY / DEX / DEY and INC / DEC wrap-around
//! - CLC / SEC / CLI / SEI / CLD / SED / CLV

use nes_cpu::{Cpu, FlatMemory, Flags, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut cpu = Cpu::new();
    cpu.set_pc(0x8000);
    cpu.set_sp(0xFD);
    (cpu, FlatMemory::new())
}

fn run(cpu: &mut Cpu, memory: &mut FlatMemory, program: &[u8]) {
    memory.load(0x8000, program);
    cpu.run(memory).unwrap();
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_a(0x80);

    run(&mut cpu, &mut memory, &[0xAA, 0xA8, 0x00]);

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.status().contains(Flags::NEGATIVE));
}

#[test]
fn test_txa_tya() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x11);
    cpu.set_y(0x00);

    run(&mut cpu, &mut memory, &[0x8A, 0x00]);
    assert_eq!(cpu.a(), 0x11);
    assert!(!cpu.status().contains(Flags::ZERO));

    cpu.set_pc(0x8000);
    run(&mut cpu, &mut memory, &[0x98, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Flags::ZERO));
}

#[test]
fn test_tsx_sets_flags_and_txs_does_not() {
    let (mut cpu, mut memory) = setup_cpu();

    // TSX
    run(&mut cpu, &mut memory, &[0xBA, 0x00]);
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.status().contains(Flags::NEGATIVE));

    // LDX #$00; TXS
    cpu.set_pc(0x8000);
    cpu.set_status(Flags::UNUSED);
    memory.load(0x8000, &[0xA2, 0x00, 0x9A, 0x00]);
    cpu.step(&mut memory).unwrap();
    let after_ldx = cpu.status();
    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), after_ldx);
}

// ========== Increments / Decrements ==========

#[test]
fn test_inx_wraps_to_zero() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);

    run(&mut cpu, &mut memory, &[0xE8, 0x00]);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().contains(Flags::ZERO));
}

#[test]
fn test_dey_wraps_to_ff() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(0x00);

    run(&mut cpu, &mut memory, &[0x88, 0x00]);

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.status().contains(Flags::NEGATIVE));
}

#[test]
fn test_iny_and_dex() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x01);
    cpu.set_y(0x7F);

    run(&mut cpu, &mut memory, &[0xC8, 0xCA, 0x00]);

    assert_eq!(cpu.y(), 0x80);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().contains(Flags::ZERO));
    assert!(!cpu.status().contains(Flags::NEGATIVE));
}

#[test]
fn test_inc_dec_memory() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x0010, 0xFF);
    memory.write(0x1234, 0x01);

    // INC $10; DEC $1234
    run(&mut cpu, &mut memory, &[0xE6, 0x10, 0xCE, 0x34, 0x12, 0x00]);

    assert_eq!(memory.read(0x0010), 0x00);
    assert_eq!(memory.read(0x1234), 0x00);
    assert!(cpu.status().contains(Flags::ZERO));
}

#[test]
fn test_inc_zero_page_x_and_dec_absolute_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0x02);
    memory.write(0x0012, 0x7F);
    memory.write(0x2002, 0x00);

    // INC $10,X
    run(&mut cpu, &mut memory, &[0xF6, 0x10, 0x00]);
    assert_eq!(memory.read(0x0012), 0x80);
    assert!(cpu.status().contains(Flags::NEGATIVE));

    // DEC $2000,X
    cpu.set_pc(0x8000);
    run(&mut cpu, &mut memory, &[0xDE, 0x00, 0x20, 0x00]);
    assert_eq!(memory.read(0x2002), 0xFF);
}

// ========== Flag Instructions ==========

#[test]
fn test_set_and_clear_each_flag() {
    let cases = [
        (0x38, 0x18, Flags::CARRY),             // SEC / CLC
        (0x78, 0x58, Flags::INTERRUPT_DISABLE), // SEI / CLI
        (0xF8, 0xD8, Flags::DECIMAL),           // SED / CLD
    ];

    for (set, clear, flag) in cases {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_status(Flags::UNUSED);

        run(&mut cpu, &mut memory, &[set, 0x00]);
        assert_eq!(cpu.status(), Flags::UNUSED | flag);

        cpu.set_pc(0x8000);
        run(&mut cpu, &mut memory, &[clear, 0x00]);
        assert_eq!(cpu.status(), Flags::UNUSED);
    }
}

#[test]
fn test_clv_clears_overflow_only() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_status(Flags::all());

    run(&mut cpu, &mut memory, &[0xB8, 0x00]);

    assert_eq!(cpu.status(), Flags::all() - Flags::OVERFLOW);
}
