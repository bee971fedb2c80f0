//! Tests for the JMP instruction.
//!
//! Covers absolute and indirect modes, including the NMOS page-wrap quirk:
//! an indirect pointer ending in 0xFF fetches its high byte from the start
//! of the same page rather than the next one.

use sim6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x0200
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x02);
    CPU::new(memory)
}

// ========== JMP Absolute ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x4C, 0x34, 0x12]); // JMP $1234

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.instructions(), 1);
}

#[test]
fn test_jmp_does_not_touch_flags_or_registers() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x4C, 0x00, 0x80]);
    cpu.set_a(0x11);
    cpu.set_flag_c(true);
    let status_before = cpu.status();

    cpu.step();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.status(), status_before);
}

// ========== JMP Indirect ==========

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x6C, 0x00, 0x20]); // JMP ($2000)
    cpu.memory_mut().write(0x2000, 0x56);
    cpu.memory_mut().write(0x2001, 0x34);

    cpu.step();

    assert_eq!(cpu.pc(), 0x3456);
}

#[test]
fn test_jmp_indirect_page_wrap_quirk() {
    // Pointer $02FF: low byte from $02FF, high byte from $0200 (same page),
    // NOT from $0300. The program lives at 0x1000 so the quirk bytes in page
    // 0x02 are unambiguous.
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x10);
    memory.load(0x1000, &[0x6C, 0xFF, 0x02]); // JMP ($02FF)
    memory.write(0x02FF, 0x00);
    memory.write(0x0200, 0x80); // high byte source under the quirk
    memory.write(0x0300, 0x40); // would-be source without the quirk
    let mut cpu = CPU::new(memory);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_jmp_indirect_without_page_boundary() {
    let mut cpu = setup_cpu();

    // A pointer not ending in 0xFF reads its word normally
    cpu.memory_mut().load(0x0200, &[0x6C, 0xFE, 0x02]); // JMP ($02FE)
    cpu.memory_mut().write(0x02FE, 0x78);
    cpu.memory_mut().write(0x02FF, 0x56);

    cpu.step();

    assert_eq!(cpu.pc(), 0x5678);
}
