//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! All four are read-modify-write on either the accumulator or a memory
//! location, and set N, Z, and C; the rotates additionally consume carry-in.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes ASL: shift left one bit, bit 7 into carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    let result = value << 1;
    cpu.flag_c = value & 0x80 != 0;
    cpu.set_zn(result);
    cpu.write_operand(metadata.addressing_mode, result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes LSR: shift right one bit, bit 0 into carry, bit 7 becomes 0
/// (so N is always cleared).
pub(crate) fn execute_lsr<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    let result = value >> 1;
    cpu.flag_c = value & 0x01 != 0;
    cpu.set_zn(result);
    cpu.write_operand(metadata.addressing_mode, result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes ROL: rotate left through carry, old bit 7 becomes carry-out and
/// carry-in becomes bit 0.
pub(crate) fn execute_rol<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    let carry_in = u8::from(cpu.flag_c);
    let result = (value << 1) | carry_in;
    cpu.flag_c = value & 0x80 != 0;
    cpu.set_zn(result);
    cpu.write_operand(metadata.addressing_mode, result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes ROR: rotate right through carry, old bit 0 becomes carry-out and
/// carry-in becomes bit 7.
pub(crate) fn execute_ror<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    let carry_in = if cpu.flag_c { 0x80 } else { 0x00 };
    let result = (value >> 1) | carry_in;
    cpu.flag_c = value & 0x01 != 0;
    cpu.set_zn(result);
    cpu.write_operand(metadata.addressing_mode, result);

    cpu.advance_pc(metadata.size_bytes);
}
