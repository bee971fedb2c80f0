//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! Carry works as an inverted borrow: C set means "no borrow pending", and
//! C clear after the operation means the subtraction underflowed.

use sim6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x0200
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x02);
    CPU::new(memory)
}

// ========== Binary Mode ==========

#[test]
fn test_sbc_immediate_basic() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.set_flag_c(true); // no borrow pending

    cpu.step();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn test_sbc_consumes_borrow() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.set_flag_c(false); // borrow pending

    cpu.step();

    assert_eq!(cpu.a(), 0x3F);
}

#[test]
fn test_sbc_underflow_clears_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0xE9, 0x60]); // SBC #$60
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c()); // borrow occurred
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_result_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();

    // 0x50 - 0xB0: positive minus negative overflowing to negative
    cpu.memory_mut().load(0x0200, &[0xE9, 0xB0]);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

// ========== Decimal Mode ==========

#[test]
fn test_sbc_decimal_basic() {
    let mut cpu = setup_cpu();

    // BCD 46 - 12 = 34
    cpu.memory_mut().load(0x0200, &[0xE9, 0x12]);
    cpu.set_a(0x46);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow_across_digits() {
    let mut cpu = setup_cpu();

    // BCD 40 - 13 = 27: the low digit borrows from the high digit
    cpu.memory_mut().load(0x0200, &[0xE9, 0x13]);
    cpu.set_a(0x40);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x27);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_underflow_wraps_and_clears_carry() {
    let mut cpu = setup_cpu();

    // BCD 12 - 21 wraps to 91 with a borrow out
    cpu.memory_mut().load(0x0200, &[0xE9, 0x21]);
    cpu.set_a(0x12);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x91);
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_decimal_consumes_borrow() {
    let mut cpu = setup_cpu();

    // BCD 46 - 12 - 1 (borrow) = 33
    cpu.memory_mut().load(0x0200, &[0xE9, 0x12]);
    cpu.set_a(0x46);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x33);
    assert!(cpu.flag_c());
}
