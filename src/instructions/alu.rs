//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic, logic, and compare operations:
//! - ADC: Add with Carry (binary and decimal modes)
//! - SBC: Subtract with Carry (binary and decimal modes)
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - BIT: bit test
//! - CMP, CPX, CPY: compares against A, X, Y
//!
//! Decimal mode replicates NMOS 6502 behavior: the BCD digit-carry adjusts
//! feed the Carry flag, while Z comes from the binary intermediate result and
//! N/V from the pre-adjust high nibble and binary overflow check. These are
//! hardware quirks, reproduced deliberately.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes ADC (Add with Carry).
///
/// Adds the operand plus carry-in to the accumulator. Flags: N, V, Z, C.
/// With the D flag set the addition is binary-coded decimal.
pub(crate) fn execute_adc<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    if cpu.flag_d {
        adc_decimal(cpu, value);
    } else {
        adc_binary(cpu, value);
    }

    cpu.advance_pc(metadata.size_bytes);
}

fn adc_binary<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, value: u8) {
    let a = cpu.a;
    let carry_in = u16::from(cpu.flag_c);

    let sum = u16::from(a) + u16::from(value) + carry_in;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    // Signed overflow: both operands share a sign the result doesn't
    cpu.flag_v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.set_zn(result);
    cpu.a = result;
}

fn adc_decimal<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, value: u8) {
    let a = u16::from(cpu.a);
    let v = u16::from(value);
    let carry_in = u16::from(cpu.flag_c);

    let mut low = (a & 0x0F) + (v & 0x0F) + carry_in;
    if low > 9 {
        low += 6;
    }

    let mut high = (a >> 4) + (v >> 4) + u16::from(low > 0x0F);

    // NMOS: Z from the binary sum, N from the pre-adjust high nibble,
    // V from the binary overflow check
    let binary = (a + v + carry_in) as u8;
    cpu.flag_z = binary == 0;
    cpu.flag_n = high & 0x08 != 0;
    cpu.flag_v = (a as u8 ^ binary) & (value ^ binary) & 0x80 != 0;

    if high > 9 {
        high += 6;
    }

    cpu.flag_c = high > 0x0F;
    cpu.a = ((high << 4) | (low & 0x0F)) as u8;
}

/// Executes SBC (Subtract with Carry).
///
/// Subtracts the operand and the borrow (inverted carry) from the
/// accumulator. Flags: N, V, Z, C; carry-out means "no borrow". With the D
/// flag set the subtraction is binary-coded decimal.
pub(crate) fn execute_sbc<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    if cpu.flag_d {
        sbc_decimal(cpu, value);
    } else {
        sbc_binary(cpu, value);
    }

    cpu.advance_pc(metadata.size_bytes);
}

fn sbc_binary<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, value: u8) {
    let a = cpu.a;
    let borrow = u16::from(!cpu.flag_c);

    let diff = u16::from(a)
        .wrapping_sub(u16::from(value))
        .wrapping_sub(borrow);
    let result = diff as u8;

    cpu.flag_c = diff < 0x100;
    cpu.flag_v = (a ^ value) & (a ^ result) & 0x80 != 0;
    cpu.set_zn(result);
    cpu.a = result;
}

fn sbc_decimal<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, value: u8) {
    let a = i16::from(cpu.a);
    let v = i16::from(value);
    let borrow = i16::from(!cpu.flag_c);

    let mut low = (a & 0x0F) - (v & 0x0F) - borrow;
    if low < 0 {
        low = ((low - 6) & 0x0F) - 0x10;
    }

    let mut high = (a >> 4) - (v >> 4) + if low < 0 { -1 } else { 0 };
    if high < 0 {
        high = (high - 6) & 0x0F;
    }

    // N, V, Z, C all come from the binary intermediate on NMOS
    let binary = a.wrapping_sub(v).wrapping_sub(borrow);
    cpu.flag_c = binary >= 0;
    cpu.flag_z = binary as u8 == 0;
    cpu.flag_n = binary & 0x80 != 0;
    cpu.flag_v = (a ^ binary) & (!v ^ binary) & 0x80 != 0;

    cpu.a = ((high << 4) | (low & 0x0F)) as u8;
}

/// Executes AND (Logical AND with accumulator). Flags: N, Z.
pub(crate) fn execute_and<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = cpu.a & cpu.operand_value(metadata.addressing_mode);
    cpu.a = result;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes ORA (Logical Inclusive OR with accumulator). Flags: N, Z.
pub(crate) fn execute_ora<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = cpu.a | cpu.operand_value(metadata.addressing_mode);
    cpu.a = result;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes EOR (Exclusive OR with accumulator). Flags: N, Z.
pub(crate) fn execute_eor<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = cpu.a ^ cpu.operand_value(metadata.addressing_mode);
    cpu.a = result;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes BIT (Bit Test).
///
/// Z is set from `A AND operand`; N and V copy operand bits 7 and 6. The
/// accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0x80 != 0;
    cpu.flag_v = value & 0x40 != 0;

    cpu.advance_pc(metadata.size_bytes);
}

/// Compare helper shared by CMP/CPX/CPY: sets C if `register >= operand`,
/// and N/Z from the difference, without mutating any register.
fn compare<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, register: u8, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes CMP (Compare Accumulator). Flags: N, Z, C.
pub(crate) fn execute_cmp<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let register = cpu.a;
    compare(cpu, register, opcode);
}

/// Executes CPX (Compare X Register). Flags: N, Z, C.
pub(crate) fn execute_cpx<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let register = cpu.x;
    compare(cpu, register, opcode);
}

/// Executes CPY (Compare Y Register). Flags: N, Z, C.
pub(crate) fn execute_cpy<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let register = cpu.y;
    compare(cpu, register, opcode);
}
