//! # Disassembler
//!
//! Formats a single instruction as assembler text, driven by
//! [`OPCODE_TABLE`]. This backs the CPU's debug-trace output and gives hosts
//! a readable rendering of whatever PC points at. Undocumented opcode values
//! render as a `.byte` directive.

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::{Operation, OPCODE_TABLE};

/// Disassembles the single instruction starting at `addr`.
///
/// Operand bytes are read with 16-bit wraparound, exactly as the CPU would
/// fetch them. Branch operands render as their resolved target address
/// rather than the raw offset.
///
/// # Examples
///
/// ```
/// use sim6502::{disassemble_at, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0200, &[0xA9, 0xFF]); // LDA #$FF
/// assert_eq!(disassemble_at(&mem, 0x0200), "LDA #$FF");
///
/// mem.load(0x0202, &[0x6C, 0xFF, 0x02]); // JMP ($02FF)
/// assert_eq!(disassemble_at(&mem, 0x0202), "JMP ($02FF)");
/// ```
pub fn disassemble_at<M: MemoryBus>(memory: &M, addr: u16) -> String {
    let opcode = memory.read(addr);
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.operation == Operation::Undefined {
        return format!(".byte ${opcode:02X}");
    }

    let mnemonic = metadata.mnemonic();
    let byte1 = memory.read(addr.wrapping_add(1));
    let word = u16::from_le_bytes([byte1, memory.read(addr.wrapping_add(2))]);

    match metadata.addressing_mode {
        AddressingMode::Implicit => mnemonic.to_string(),
        AddressingMode::Accumulator => format!("{mnemonic} A"),
        AddressingMode::Immediate => format!("{mnemonic} #${byte1:02X}"),
        AddressingMode::ZeroPage => format!("{mnemonic} ${byte1:02X}"),
        AddressingMode::ZeroPageX => format!("{mnemonic} ${byte1:02X},X"),
        AddressingMode::ZeroPageY => format!("{mnemonic} ${byte1:02X},Y"),
        AddressingMode::Relative => {
            let target = addr.wrapping_add(2).wrapping_add_signed(i16::from(byte1 as i8));
            format!("{mnemonic} ${target:04X}")
        }
        AddressingMode::Absolute => format!("{mnemonic} ${word:04X}"),
        AddressingMode::AbsoluteX => format!("{mnemonic} ${word:04X},X"),
        AddressingMode::AbsoluteY => format!("{mnemonic} ${word:04X},Y"),
        AddressingMode::Indirect => format!("{mnemonic} (${word:04X})"),
        AddressingMode::IndirectX => format!("{mnemonic} (${byte1:02X},X)"),
        AddressingMode::IndirectY => format!("{mnemonic} (${byte1:02X}),Y"),
    }
}
