//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the NMOS 6502 and the
//! resolver that turns a mode plus the bytes at PC into an effective address,
//! an operand value, and the instruction's total byte length.
//!
//! All effective-address arithmetic uses hardware-authentic wraparound: zero
//! page indexing wraps within page zero, absolute indexing and relative
//! targets wrap at 16 bits, and the indirect-JMP pointer reproduces the NMOS
//! page-boundary quirk.

use crate::cpu::CPU;
use crate::diagnostics::DiagnosticSink;
use crate::memory::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant operand in the instruction itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X; wraps within page zero.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; wraps within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X, wrapping at 16 bits.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y, wrapping at 16 bits.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer; JMP only. The pointer read
    /// reproduces the NMOS page-wrap quirk: if the pointer's low byte is
    /// 0xFF, the high byte comes from the start of the *same* page.
    ///
    /// Example: JMP ($02FF) reads the target from $02FF and $0200.
    Indirect,

    /// Indexed indirect: the operand plus X (wrapping in zero page) names a
    /// zero-page pointer holding the effective address.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand names a zero-page pointer; Y is added to
    /// the pointed-to base address, wrapping at 16 bits.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode for this mode.
    ///
    /// The instruction's total length is `1 + operand_bytes()`; this is the
    /// only source of PC advancement, so the opcode table cannot disagree
    /// with the resolver about instruction size.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

impl<M: MemoryBus, D: DiagnosticSink> CPU<M, D> {
    /// Resolves the effective address for `mode` with PC at the opcode byte.
    ///
    /// Returns `None` for Implicit and Accumulator, which have no memory
    /// operand. For Immediate the "address" is the operand byte's own
    /// location, so reads through it behave uniformly. For Relative the
    /// result is the branch target: next-instruction address plus the signed
    /// offset, wrapping at 16 bits.
    pub(crate) fn effective_address(&self, mode: AddressingMode) -> Option<u16> {
        let operand_at = self.pc().wrapping_add(1);
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => None,
            AddressingMode::Immediate => Some(operand_at),
            AddressingMode::ZeroPage => Some(u16::from(self.memory().read(operand_at))),
            AddressingMode::ZeroPageX => {
                Some(u16::from(self.memory().read(operand_at).wrapping_add(self.x())))
            }
            AddressingMode::ZeroPageY => {
                Some(u16::from(self.memory().read(operand_at).wrapping_add(self.y())))
            }
            AddressingMode::Relative => {
                let offset = self.memory().read(operand_at) as i8;
                let next = self.pc().wrapping_add(2);
                Some(next.wrapping_add_signed(i16::from(offset)))
            }
            AddressingMode::Absolute => Some(self.read_word(operand_at)),
            AddressingMode::AbsoluteX => {
                Some(self.read_word(operand_at).wrapping_add(u16::from(self.x())))
            }
            AddressingMode::AbsoluteY => {
                Some(self.read_word(operand_at).wrapping_add(u16::from(self.y())))
            }
            AddressingMode::Indirect => {
                let pointer = self.read_word(operand_at);
                Some(self.read_word_page_wrapped(pointer))
            }
            AddressingMode::IndirectX => {
                let pointer = self.memory().read(operand_at).wrapping_add(self.x());
                Some(self.read_word_zero_page(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.memory().read(operand_at);
                let base = self.read_word_zero_page(pointer);
                Some(base.wrapping_add(u16::from(self.y())))
            }
        }
    }

    /// Like [`Self::effective_address`] but for modes that always have a
    /// memory operand. The opcode table only pairs such modes with the
    /// instructions that call this.
    pub(crate) fn memory_operand_address(&self, mode: AddressingMode) -> u16 {
        match self.effective_address(mode) {
            Some(addr) => addr,
            None => unreachable!("addressing mode {mode:?} has no memory operand"),
        }
    }

    /// Reads the operand value for `mode`: the accumulator for Accumulator
    /// mode, memory at the effective address otherwise.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Accumulator => self.a(),
            _ => self.memory().read(self.memory_operand_address(mode)),
        }
    }

    /// Writes `value` to the operand location for `mode`: the accumulator for
    /// Accumulator mode, memory at the effective address otherwise. Used by
    /// the read-modify-write instructions (shifts, rotates, INC/DEC).
    pub(crate) fn write_operand(&mut self, mode: AddressingMode, value: u8) {
        match mode {
            AddressingMode::Accumulator => self.set_a(value),
            _ => {
                let addr = self.memory_operand_address(mode);
                self.memory_mut().write(addr, value);
            }
        }
    }

    /// Reads a 16-bit little-endian word, the second byte wrapping at the top
    /// of the address space.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory().read(addr);
        let high = self.memory().read(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Reads a 16-bit word whose bytes both live in zero page: the high byte
    /// comes from `pointer + 1` wrapped within page zero, never from 0x0100.
    pub(crate) fn read_word_zero_page(&self, pointer: u8) -> u16 {
        let low = self.memory().read(u16::from(pointer));
        let high = self.memory().read(u16::from(pointer.wrapping_add(1)));
        u16::from_le_bytes([low, high])
    }

    /// Reads a 16-bit word with the NMOS indirect-JMP quirk: if `addr` ends
    /// in 0xFF the high byte is fetched from the start of the same page
    /// rather than the next one.
    pub(crate) fn read_word_page_wrapped(&self, addr: u16) -> u16 {
        let low = self.memory().read(addr);
        let high_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let high = self.memory().read(high_addr);
        u16::from_le_bytes([low, high])
    }
}
