//! # Stack Instructions
//!
//! PHA, PLA, PHP, PLP. The stack lives at `0x0100-0x01FF`; pushes decrement
//! SP and pulls increment it, both with 8-bit wraparound, so the stack is a
//! fixed ring.
//!
//! PHP pushes the status byte with the B bit and bit 5 set, the way BRK
//! does; PLP ignores the B bit of the pulled byte.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// Executes PHA (Push Accumulator). No flags affected.
pub(crate) fn execute_pha<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.a;
    cpu.push(value);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes PLA (Pull Accumulator). Flags: N, Z.
pub(crate) fn execute_pla<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull();
    cpu.a = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes PHP (Push Processor Status). No flags affected; the pushed byte
/// has B and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.status_for_push(true);
    cpu.push(status);

    cpu.advance_pc(metadata.size_bytes);
}

/// Executes PLP (Pull Processor Status). Restores N, V, D, I, Z, C from the
/// pulled byte; the pulled B bit is ignored.
pub(crate) fn execute_plp<M: MemoryBus, D: DiagnosticSink>(cpu: &mut CPU<M, D>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull();
    cpu.set_flags_from_pull(value);

    cpu.advance_pc(metadata.size_bytes);
}
