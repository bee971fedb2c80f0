//! # 6502 Instruction Implementations
//!
//! Implementations of all documented 6502 instructions, organized by
//! category. Each instruction is a standalone function taking a mutable
//! reference to the CPU and the opcode byte; the opcode's table entry
//! supplies the addressing mode and byte length.
//!
//! ## Categories
//!
//! - **alu**: arithmetic, logic, and compares (ADC, SBC, AND, ORA, EOR, BIT,
//!   CMP, CPX, CPY)
//! - **branches**: conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC,
//!   BVS)
//! - **control**: control flow and interrupts (JMP, JSR, RTS, RTI, BRK, NOP)
//!   plus the undefined-opcode fallback
//! - **flags**: status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **inc_dec**: increments and decrements (INC, DEC, INX, INY, DEX, DEY)
//! - **load_store**: loads and stores (LDA, LDX, LDY, STA, STX, STY)
//! - **shifts**: shifts and rotates (ASL, LSR, ROL, ROR)
//! - **stack**: stack pushes and pulls (PHA, PHP, PLA, PLP)
//! - **transfer**: register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
