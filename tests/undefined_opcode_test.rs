//! Tests for the undefined-opcode fallback.
//!
//! An undocumented opcode value reports through the diagnostics channel with
//! Exception severity and the opcode byte, then executes as a single-byte
//! no-op: PC advances by 1, the instruction counter increments, and no
//! register or flag changes.

use sim6502::{FlatMemory, FnSink, MemoryBus, Operation, Severity, CPU, OPCODE_TABLE};
use std::cell::RefCell;
use std::rc::Rc;

type Reports = Rc<RefCell<Vec<(Severity, String, u8)>>>;

/// Helper that builds a CPU whose diagnostics land in a shared vector.
fn setup_cpu_with_reports() -> (
    CPU<FlatMemory, FnSink<impl FnMut(Severity, &str, u8)>>,
    Reports,
) {
    let reports: Reports = Rc::default();
    let sink_reports = Rc::clone(&reports);

    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x02);

    let sink = FnSink(move |severity, message: &str, opcode| {
        sink_reports
            .borrow_mut()
            .push((severity, message.to_string(), opcode));
    });
    (CPU::with_diagnostics(memory, sink), reports)
}

#[test]
fn test_undefined_opcode_reports_and_advances_one_byte() {
    let (mut cpu, reports) = setup_cpu_with_reports();

    cpu.memory_mut().write(0x0200, 0xFF); // unmapped opcode
    let a = cpu.a();
    let x = cpu.x();
    let y = cpu.y();
    let sp = cpu.sp();
    let status = cpu.status();

    cpu.step();

    // Diagnostics invoked with exception classification and the opcode byte
    let seen = reports.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, Severity::Exception);
    assert_eq!(seen[0].1, "undefined instruction");
    assert_eq!(seen[0].2, 0xFF);

    // One-byte no-effect step
    assert_eq!(cpu.pc(), 0x0201);
    assert_eq!(cpu.instructions(), 1);
    assert_eq!(cpu.a(), a);
    assert_eq!(cpu.x(), x);
    assert_eq!(cpu.y(), y);
    assert_eq!(cpu.sp(), sp);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_execution_continues_after_undefined_opcode() {
    let (mut cpu, reports) = setup_cpu_with_reports();

    cpu.memory_mut().write(0x0200, 0x02); // undocumented
    cpu.memory_mut().load(0x0201, &[0xA9, 0x42]); // LDA #$42

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.instructions(), 2);
    assert_eq!(reports.borrow().len(), 1);
}

#[test]
fn test_every_undefined_opcode_advances_exactly_one() {
    let undocumented: Vec<u8> = OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.operation == Operation::Undefined)
        .map(|(i, _)| i as u8)
        .collect();
    assert_eq!(undocumented.len(), 105);

    for opcode in undocumented {
        let (mut cpu, reports) = setup_cpu_with_reports();
        cpu.memory_mut().write(0x0200, opcode);

        cpu.step();

        assert_eq!(cpu.pc(), 0x0201, "opcode 0x{opcode:02X}");
        assert_eq!(reports.borrow().last().map(|r| r.2), Some(opcode));
    }
}

#[test]
fn test_default_sink_discards_silently() {
    // CPU::new uses NullSink: undefined opcodes still execute as no-ops
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x02);
    memory.write(0x0200, 0xFF);
    let mut cpu = CPU::new(memory);

    cpu.step();

    assert_eq!(cpu.pc(), 0x0201);
    assert_eq!(cpu.instructions(), 1);
}
