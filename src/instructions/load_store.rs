//! # Load and Store Instructions
//!
//! - LDA/LDX/LDY: load a register from the operand, setting N and Z
//! - STA/STX/STY: store a register to the effective address, touching no
//!   flags

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes LDA (Load Accumulator). Flags: N, Z.
pub(crate) fn execute_lda<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    cpu.a = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes LDX (Load X Register). Flags: N, Z.
pub(crate) fn execute_ldx<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    cpu.x = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes LDY (Load Y Register). Flags: N, Z.
pub(crate) fn execute_ldy<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_value(metadata.addressing_mode);
    cpu.y = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes STA (Store Accumulator). No flags affected.
pub(crate) fn execute_sta<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.memory_operand_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.a);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes STX (Store X Register). No flags affected.
pub(crate) fn execute_stx<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.memory_operand_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.x);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes STY (Store Y Register). No flags affected.
pub(crate) fn execute_sty<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.memory_operand_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.y);

    cpu.advance_pc(metadata.size_bytes);
}
