//! Tests for the ADC (Add with Carry) instruction.
//!
//! Covers:
//! - Binary addition with carry-in and carry-out
//! - Signed overflow detection in both directions
//! - Decimal (BCD) mode, including the documented 58 + 46 = 104 case
//! - Flag behavior on zero and negative results

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
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn test_adc_consumes_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x69, 0xFF]); // ADC #$FF
    cpu.set_a(0x01);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x00); // 0x01 + 0xFF = 0x100
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_overflow_positive_operands() {
    let mut cpu = setup_cpu();

    // 0x50 + 0x50 = 0xA0: two positives yielding a negative
    cpu.memory_mut().load(0x0200, &[0x69, 0x50]);
    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative_operands() {
    let mut cpu = setup_cpu();

    // 0x90 + 0x90 = 0x120: two negatives yielding a positive
    cpu.memory_mut().load(0x0200, &[0x69, 0x90]);
    cpu.set_a(0x90);

    cpu.step();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_no_overflow_on_mixed_signs() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x0200, &[0x69, 0x90]); // ADC #$90 (negative)
    cpu.set_a(0x50); // positive

    cpu.step();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_from_memory_modes() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0080, 0x11);
    cpu.memory_mut().write(0x3000, 0x22);
    cpu.memory_mut().load(0x0200, &[0x65, 0x80]); // ADC $80
    cpu.memory_mut().load(0x0202, &[0x6D, 0x00, 0x30]); // ADC $3000

    cpu.step();
    assert_eq!(cpu.a(), 0x11);

    cpu.step();
    assert_eq!(cpu.a(), 0x33);
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_58_plus_46() {
    let mut cpu = setup_cpu();

    // BCD 58 + 46 = 104 -> accumulator 0x04 with carry out
    cpu.memory_mut().load(0x0200, &[0x69, 0x46]); // ADC #$46
    cpu.set_a(0x58);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x04);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_simple_no_carry() {
    let mut cpu = setup_cpu();

    // BCD 12 + 34 = 46
    cpu.memory_mut().load(0x0200, &[0x69, 0x34]);
    cpu.set_a(0x12);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x46);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_consumes_carry_in() {
    let mut cpu = setup_cpu();

    // BCD 99 + 00 + carry = 100 -> 0x00 with carry out
    cpu.memory_mut().load(0x0200, &[0x69, 0x00]);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_digit_carry_propagates() {
    let mut cpu = setup_cpu();

    // BCD 19 + 01 = 20: the low digit's adjust carries into the high digit
    cpu.memory_mut().load(0x0200, &[0x69, 0x01]);
    cpu.set_a(0x19);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x20);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_binary_when_decimal_clear() {
    let mut cpu = setup_cpu();

    // Same operands as the BCD 58+46 case, but D clear: plain binary sum
    cpu.memory_mut().load(0x0200, &[0x69, 0x46]);
    cpu.set_a(0x58);
    cpu.set_flag_d(false);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x9E);
    assert!(!cpu.flag_c());
}
