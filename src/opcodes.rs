//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table, the single source of truth for
//! instruction decoding:
//!
//! - **151 documented instructions** - the official NMOS 6502 opcode set
//! - **105 undocumented values** - mapped to [`Operation::Undefined`], which
//!   the dispatcher executes as a reported one-byte no-op
//!
//! Each entry pairs an [`Operation`] with an
//! [`AddressingMode`](crate::AddressingMode); the instruction's byte length
//! follows from the mode. Dispatching on the `Operation` enum keeps the
//! mapping total: adding an operation without handling it is a compile error,
//! not a runtime fallback.

use crate::addressing::AddressingMode;

/// The operation a 6502 opcode performs, independent of addressing mode.
///
/// All 56 documented operations plus [`Operation::Undefined`] for the 105
/// byte values the NMOS 6502 does not document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    /// An opcode value with no documented NMOS behavior.
    Undefined,
}

impl Operation {
    /// Standard three-letter assembler mnemonic; `"???"` for undocumented
    /// opcode values.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Undefined => "???",
        }
    }
}

/// Static metadata for a single opcode byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// What the instruction does.
    pub operation: Operation,

    /// How the instruction locates its operand.
    pub addressing_mode: AddressingMode,

    /// Total instruction length in bytes (1-3), derived from the addressing
    /// mode. PC advances by exactly this amount for every non-control-flow
    /// instruction.
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// The instruction's assembler mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }
}

const fn op(operation: Operation, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        operation,
        addressing_mode,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

const fn undefined() -> OpcodeMetadata {
    op(Operation::Undefined, AddressingMode::Implicit)
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.mnemonic(), "LDA");
///
/// // Undocumented values decode to a defined fallback
/// assert_eq!(OPCODE_TABLE[0x02].operation, Operation::Undefined);
/// assert_eq!(OPCODE_TABLE[0x02].size_bytes, 1);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    use Operation::*;
    [
        op(Brk, Implicit),    // 0x00
        op(Ora, IndirectX),   // 0x01
        undefined(),          // 0x02
        undefined(),          // 0x03
        undefined(),          // 0x04
        op(Ora, ZeroPage),    // 0x05
        op(Asl, ZeroPage),    // 0x06
        undefined(),          // 0x07
        op(Php, Implicit),    // 0x08
        op(Ora, Immediate),   // 0x09
        op(Asl, Accumulator), // 0x0A
        undefined(),          // 0x0B
        undefined(),          // 0x0C
        op(Ora, Absolute),    // 0x0D
        op(Asl, Absolute),    // 0x0E
        undefined(),          // 0x0F
        op(Bpl, Relative),    // 0x10
        op(Ora, IndirectY),   // 0x11
        undefined(),          // 0x12
        undefined(),          // 0x13
        undefined(),          // 0x14
        op(Ora, ZeroPageX),   // 0x15
        op(Asl, ZeroPageX),   // 0x16
        undefined(),          // 0x17
        op(Clc, Implicit),    // 0x18
        op(Ora, AbsoluteY),   // 0x19
        undefined(),          // 0x1A
        undefined(),          // 0x1B
        undefined(),          // 0x1C
        op(Ora, AbsoluteX),   // 0x1D
        op(Asl, AbsoluteX),   // 0x1E
        undefined(),          // 0x1F
        op(Jsr, Absolute),    // 0x20
        op(And, IndirectX),   // 0x21
        undefined(),          // 0x22
        undefined(),          // 0x23
        op(Bit, ZeroPage),    // 0x24
        op(And, ZeroPage),    // 0x25
        op(Rol, ZeroPage),    // 0x26
        undefined(),          // 0x27
        op(Plp, Implicit),    // 0x28
        op(And, Immediate),   // 0x29
        op(Rol, Accumulator), // 0x2A
        undefined(),          // 0x2B
        op(Bit, Absolute),    // 0x2C
        op(And, Absolute),    // 0x2D
        op(Rol, Absolute),    // 0x2E
        undefined(),          // 0x2F
        op(Bmi, Relative),    // 0x30
        op(And, IndirectY),   // 0x31
        undefined(),          // 0x32
        undefined(),          // 0x33
        undefined(),          // 0x34
        op(And, ZeroPageX),   // 0x35
        op(Rol, ZeroPageX),   // 0x36
        undefined(),          // 0x37
        op(Sec, Implicit),    // 0x38
        op(And, AbsoluteY),   // 0x39
        undefined(),          // 0x3A
        undefined(),          // 0x3B
        undefined(),          // 0x3C
        op(And, AbsoluteX),   // 0x3D
        op(Rol, AbsoluteX),   // 0x3E
        undefined(),          // 0x3F
        op(Rti, Implicit),    // 0x40
        op(Eor, IndirectX),   // 0x41
        undefined(),          // 0x42
        undefined(),          // 0x43
        undefined(),          // 0x44
        op(Eor, ZeroPage),    // 0x45
        op(Lsr, ZeroPage),    // 0x46
        undefined(),          // 0x47
        op(Pha, Implicit),    // 0x48
        op(Eor, Immediate),   // 0x49
        op(Lsr, Accumulator), // 0x4A
        undefined(),          // 0x4B
        op(Jmp, Absolute),    // 0x4C
        op(Eor, Absolute),    // 0x4D
        op(Lsr, Absolute),    // 0x4E
        undefined(),          // 0x4F
        op(Bvc, Relative),    // 0x50
        op(Eor, IndirectY),   // 0x51
        undefined(),          // 0x52
        undefined(),          // 0x53
        undefined(),          // 0x54
        op(Eor, ZeroPageX),   // 0x55
        op(Lsr, ZeroPageX),   // 0x56
        undefined(),          // 0x57
        op(Cli, Implicit),    // 0x58
        op(Eor, AbsoluteY),   // 0x59
        undefined(),          // 0x5A
        undefined(),          // 0x5B
        undefined(),          // 0x5C
        op(Eor, AbsoluteX),   // 0x5D
        op(Lsr, AbsoluteX),   // 0x5E
        undefined(),          // 0x5F
        op(Rts, Implicit),    // 0x60
        op(Adc, IndirectX),   // 0x61
        undefined(),          // 0x62
        undefined(),          // 0x63
        undefined(),          // 0x64
        op(Adc, ZeroPage),    // 0x65
        op(Ror, ZeroPage),    // 0x66
        undefined(),          // 0x67
        op(Pla, Implicit),    // 0x68
        op(Adc, Immediate),   // 0x69
        op(Ror, Accumulator), // 0x6A
        undefined(),          // 0x6B
        op(Jmp, Indirect),    // 0x6C
        op(Adc, Absolute),    // 0x6D
        op(Ror, Absolute),    // 0x6E
        undefined(),          // 0x6F
        op(Bvs, Relative),    // 0x70
        op(Adc, IndirectY),   // 0x71
        undefined(),          // 0x72
        undefined(),          // 0x73
        undefined(),          // 0x74
        op(Adc, ZeroPageX),   // 0x75
        op(Ror, ZeroPageX),   // 0x76
        undefined(),          // 0x77
        op(Sei, Implicit),    // 0x78
        op(Adc, AbsoluteY),   // 0x79
        undefined(),          // 0x7A
        undefined(),          // 0x7B
        undefined(),          // 0x7C
        op(Adc, AbsoluteX),   // 0x7D
        op(Ror, AbsoluteX),   // 0x7E
        undefined(),          // 0x7F
        undefined(),          // 0x80
        op(Sta, IndirectX),   // 0x81
        undefined(),          // 0x82
        undefined(),          // 0x83
        op(Sty, ZeroPage),    // 0x84
        op(Sta, ZeroPage),    // 0x85
        op(Stx, ZeroPage),    // 0x86
        undefined(),          // 0x87
        op(Dey, Implicit),    // 0x88
        undefined(),          // 0x89
        op(Txa, Implicit),    // 0x8A
        undefined(),          // 0x8B
        op(Sty, Absolute),    // 0x8C
        op(Sta, Absolute),    // 0x8D
        op(Stx, Absolute),    // 0x8E
        undefined(),          // 0x8F
        op(Bcc, Relative),    // 0x90
        op(Sta, IndirectY),   // 0x91
        undefined(),          // 0x92
        undefined(),          // 0x93
        op(Sty, ZeroPageX),   // 0x94
        op(Sta, ZeroPageX),   // 0x95
        op(Stx, ZeroPageY),   // 0x96
        undefined(),          // 0x97
        op(Tya, Implicit),    // 0x98
        op(Sta, AbsoluteY),   // 0x99
        op(Txs, Implicit),    // 0x9A
        undefined(),          // 0x9B
        undefined(),          // 0x9C
        op(Sta, AbsoluteX),   // 0x9D
        undefined(),          // 0x9E
        undefined(),          // 0x9F
        op(Ldy, Immediate),   // 0xA0
        op(Lda, IndirectX),   // 0xA1
        op(Ldx, Immediate),   // 0xA2
        undefined(),          // 0xA3
        op(Ldy, ZeroPage),    // 0xA4
        op(Lda, ZeroPage),    // 0xA5
        op(Ldx, ZeroPage),    // 0xA6
        undefined(),          // 0xA7
        op(Tay, Implicit),    // 0xA8
        op(Lda, Immediate),   // 0xA9
        op(Tax, Implicit),    // 0xAA
        undefined(),          // 0xAB
        op(Ldy, Absolute),    // 0xAC
        op(Lda, Absolute),    // 0xAD
        op(Ldx, Absolute),    // 0xAE
        undefined(),          // 0xAF
        op(Bcs, Relative),    // 0xB0
        op(Lda, IndirectY),   // 0xB1
        undefined(),          // 0xB2
        undefined(),          // 0xB3
        op(Ldy, ZeroPageX),   // 0xB4
        op(Lda, ZeroPageX),   // 0xB5
        op(Ldx, ZeroPageY),   // 0xB6
        undefined(),          // 0xB7
        op(Clv, Implicit),    // 0xB8
        op(Lda, AbsoluteY),   // 0xB9
        op(Tsx, Implicit),    // 0xBA
        undefined(),          // 0xBB
        op(Ldy, AbsoluteX),   // 0xBC
        op(Lda, AbsoluteX),   // 0xBD
        op(Ldx, AbsoluteY),   // 0xBE
        undefined(),          // 0xBF
        op(Cpy, Immediate),   // 0xC0
        op(Cmp, IndirectX),   // 0xC1
        undefined(),          // 0xC2
        undefined(),          // 0xC3
        op(Cpy, ZeroPage),    // 0xC4
        op(Cmp, ZeroPage),    // 0xC5
        op(Dec, ZeroPage),    // 0xC6
        undefined(),          // 0xC7
        op(Iny, Implicit),    // 0xC8
        op(Cmp, Immediate),   // 0xC9
        op(Dex, Implicit),    // 0xCA
        undefined(),          // 0xCB
        op(Cpy, Absolute),    // 0xCC
        op(Cmp, Absolute),    // 0xCD
        op(Dec, Absolute),    // 0xCE
        undefined(),          // 0xCF
        op(Bne, Relative),    // 0xD0
        op(Cmp, IndirectY),   // 0xD1
        undefined(),          // 0xD2
        undefined(),          // 0xD3
        undefined(),          // 0xD4
        op(Cmp, ZeroPageX),   // 0xD5
        op(Dec, ZeroPageX),   // 0xD6
        undefined(),          // 0xD7
        op(Cld, Implicit),    // 0xD8
        op(Cmp, AbsoluteY),   // 0xD9
        undefined(),          // 0xDA
        undefined(),          // 0xDB
        undefined(),          // 0xDC
        op(Cmp, AbsoluteX),   // 0xDD
        op(Dec, AbsoluteX),   // 0xDE
        undefined(),          // 0xDF
        op(Cpx, Immediate),   // 0xE0
        op(Sbc, IndirectX),   // 0xE1
        undefined(),          // 0xE2
        undefined(),          // 0xE3
        op(Cpx, ZeroPage),    // 0xE4
        op(Sbc, ZeroPage),    // 0xE5
        op(Inc, ZeroPage),    // 0xE6
        undefined(),          // 0xE7
        op(Inx, Implicit),    // 0xE8
        op(Sbc, Immediate),   // 0xE9
        op(Nop, Implicit),    // 0xEA
        undefined(),          // 0xEB
        op(Cpx, Absolute),    // 0xEC
        op(Sbc, Absolute),    // 0xED
        op(Inc, Absolute),    // 0xEE
        undefined(),          // 0xEF
        op(Beq, Relative),    // 0xF0
        op(Sbc, IndirectY),   // 0xF1
        undefined(),          // 0xF2
        undefined(),          // 0xF3
        undefined(),          // 0xF4
        op(Sbc, ZeroPageX),   // 0xF5
        op(Inc, ZeroPageX),   // 0xF6
        undefined(),          // 0xF7
        op(Sed, Implicit),    // 0xF8
        op(Sbc, AbsoluteY),   // 0xF9
        undefined(),          // 0xFA
        undefined(),          // 0xFB
        undefined(),          // 0xFC
        op(Sbc, AbsoluteX),   // 0xFD
        op(Inc, AbsoluteX),   // 0xFE
        undefined(),          // 0xFF
    ]
};
