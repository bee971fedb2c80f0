//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All are implied-mode single-byte
//! instructions; every transfer except TXS sets N and Z from the copied
//! value.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes TAX (Transfer A to X). Flags: N, Z.
pub(crate) fn execute_tax<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.a;
    let result = cpu.x;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes TAY (Transfer A to Y). Flags: N, Z.
pub(crate) fn execute_tay<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.a;
    let result = cpu.y;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes TXA (Transfer X to A). Flags: N, Z.
pub(crate) fn execute_txa<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.a = cpu.x;
    let result = cpu.a;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes TYA (Transfer Y to A). Flags: N, Z.
pub(crate) fn execute_tya<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.a = cpu.y;
    let result = cpu.a;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes TSX (Transfer SP to X). Flags: N, Z.
pub(crate) fn execute_tsx<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.sp;
    let result = cpu.x;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes TXS (Transfer X to SP). No flags affected.
pub(crate) fn execute_txs<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.sp = cpu.x;

    cpu.advance_pc(metadata.size_bytes);
}
