//! Fuzz target for CPU step execution.
//!
//! Builds arbitrary CPU state and memory contents, then steps the CPU. No
//! byte sequence may panic, and every step must advance the instruction
//! counter - the core's "nothing is fatal" contract.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{FlatMemory, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    flag_c: bool,
    flag_z: bool,
    flag_i: bool,
    flag_d: bool,
    flag_v: bool,
    flag_n: bool,
}

/// Memory regions the fuzzer controls
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents (pointers for indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Vector contents at 0xFFFA-0xFFFF
    vectors: [u8; 6],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFA, &input.memory.vectors);
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let mut cpu = CPU::new(memory);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_flag_c(input.cpu_state.flag_c);
    cpu.set_flag_z(input.cpu_state.flag_z);
    cpu.set_flag_i(input.cpu_state.flag_i);
    cpu.set_flag_d(input.cpu_state.flag_d);
    cpu.set_flag_v(input.cpu_state.flag_v);
    cpu.set_flag_n(input.cpu_state.flag_n);

    // Bounded number of steps; every one must complete and count
    let steps = u64::from(input.steps % 32);
    for expected in 1..=steps {
        cpu.step();
        assert_eq!(cpu.instructions(), expected);
    }
});
