//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Single-byte implied-mode instructions
//! that set or clear exactly one flag and touch nothing else. There is no
//! "set overflow" instruction; V is only set by ADC/SBC/BIT or PLP/RTI.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes CLC (Clear Carry Flag).
pub(crate) fn execute_clc<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_c = false;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn execute_sec<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_c = true;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes CLI (Clear Interrupt Disable). A pending IRQ becomes servable at
/// the end of the next step.
pub(crate) fn execute_cli<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_i = false;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_i = true;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_d = false;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes SED (Set Decimal Mode). ADC/SBC switch to BCD arithmetic.
pub(crate) fn execute_sed<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_d = true;
    cpu.advance_pc(metadata.size_bytes);
}

/// Executes CLV (Clear Overflow Flag).
pub(crate) fn execute_clv<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.flag_v = false;
    cpu.advance_pc(metadata.size_bytes);
}
