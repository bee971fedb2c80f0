//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the 6502 processor state and drives the
//! fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page
//!   (`0x0100-0x01FF`); pushes decrement, pulls increment, both with 8-bit
//!   wraparound
//! - **Status flags**: N, V, B, D, I, Z, C as individual bool fields, packed
//!   on demand by [`CPU::status`]
//! - **Instruction counter**: monotonically increasing count of steps
//!   executed, set to zero only at construction
//!
//! ## Execution Model
//!
//! [`CPU::step`] executes exactly one instruction: fetch the opcode at PC,
//! decode through [`OPCODE_TABLE`], execute the operation's semantics, and
//! advance PC by the instruction's true byte length (control-flow
//! instructions set PC themselves). A pending NMI, or a pending IRQ while the
//! I flag is clear, is serviced after the instruction completes, before the
//! next fetch.
//!
//! Nothing here is fatal: undefined opcodes are reported through the
//! diagnostics sink and executed as one-byte no-ops, so stepping can always
//! continue.

use crate::diagnostics::{DiagnosticSink, NullSink, Severity};
use crate::disassembler;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::MemoryBus;
use crate::opcodes::{Operation, OPCODE_TABLE};

/// Reset vector location; the 16-bit little-endian word here becomes PC.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// NMI vector location, used when a non-maskable interrupt is serviced.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via [`MemoryBus`] and the
/// host-supplied diagnostics capability via [`DiagnosticSink`]; the latter
/// defaults to [`NullSink`] for hosts that don't care.
///
/// A `CPU` is driven from exactly one thread at a time; independent emulated
/// CPUs are independent `CPU` values.
///
/// # Examples
///
/// ```
/// use sim6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x10); // Reset vector high byte
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x1000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.instructions(), 0);
/// ```
pub struct CPU<M: MemoryBus, D: DiagnosticSink = NullSink> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer; the full stack address is 0x0100 + sp
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow on ADC/SBC, bit 6 on BIT)
    pub(crate) flag_v: bool,

    /// Break flag; has no backing storage on the real part, so PLP/RTI leave
    /// it untouched. BRK/PHP push it set, IRQ/NMI push it clear.
    pub(crate) flag_b: bool,

    /// Decimal mode flag (BCD arithmetic for ADC/SBC)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (masks IRQ while set)
    pub(crate) flag_i: bool,

    /// Zero flag (last result was zero)
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Total instructions executed since construction
    pub(crate) instructions: u64,

    /// Latched non-maskable interrupt request
    nmi_pending: bool,

    /// Latched maskable interrupt request
    irq_pending: bool,

    /// When set, every step reports a Debug-severity disassembly line
    trace: bool,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Diagnostics capability
    pub(crate) diagnostics: D,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over `memory` with diagnostics discarded.
    ///
    /// The memory image must already contain whatever the host wants to run,
    /// including the reset vector at `0xFFFC`/`0xFFFD`; construction performs
    /// the initial [`reset`](CPU::reset).
    pub fn new(memory: M) -> Self {
        Self::with_diagnostics(memory, NullSink)
    }
}

impl<M: MemoryBus, D: DiagnosticSink> CPU<M, D> {
    /// Creates a CPU over `memory` reporting through `diagnostics`.
    ///
    /// The sink is injected before the first step and invoked synchronously;
    /// wrap a closure in [`crate::FnSink`] to use a plain callback.
    pub fn with_diagnostics(memory: M, diagnostics: D) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            flag_n: false,
            flag_v: false,
            flag_b: true,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            instructions: 0,
            nmi_pending: false,
            irq_pending: false,
            trace: false,
            memory,
            diagnostics,
        };
        cpu.reset();
        cpu
    }

    /// Re-establishes the post-reset state from memory and constants without
    /// executing anything.
    ///
    /// - PC is loaded from the reset vector at `0xFFFC`/`0xFFFD`
    ///   (little-endian)
    /// - SP becomes `0xFF`, so the first push lands at `0x01FF`
    /// - Status becomes `0x34`: I set, B set, bit 5 set. NMOS hardware leaves
    ///   D undefined after reset; this core clears it.
    /// - Pending interrupt latches are cleared
    ///
    /// A, X, Y and the instruction counter are left alone, so `reset` is
    /// idempotent given the same memory contents and callable again to pick
    /// up a rewritten vector.
    pub fn reset(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        self.sp = 0xFF;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = true;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.nmi_pending = false;
        self.irq_pending = false;
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode at PC, decodes it through [`OPCODE_TABLE`],
    /// executes its semantics, advances PC by the instruction's byte length,
    /// and increments the instruction counter. Undefined opcodes report
    /// through the diagnostics sink and advance one byte with no register or
    /// flag effect. A pending interrupt is serviced after the instruction,
    /// riding the same step.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0xFFFC, 0x00);
    /// memory.write(0xFFFD, 0x02);
    /// memory.load(0x0200, &[0xA9, 0xFF]); // LDA #$FF
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.step();
    ///
    /// assert_eq!(cpu.a(), 0xFF);
    /// assert!(cpu.flag_n());
    /// assert_eq!(cpu.pc(), 0x0202);
    /// ```
    pub fn step(&mut self) {
        let opcode = self.memory.read(self.pc);

        if self.trace {
            let line = format!(
                "{:04X}  {}",
                self.pc,
                disassembler::disassemble_at(&self.memory, self.pc)
            );
            self.diagnostics.report(Severity::Debug, &line, opcode);
        }

        let metadata = &OPCODE_TABLE[opcode as usize];
        match metadata.operation {
            Operation::Adc => alu::execute_adc(self, opcode),
            Operation::And => alu::execute_and(self, opcode),
            Operation::Asl => shifts::execute_asl(self, opcode),
            Operation::Bcc => branches::execute_bcc(self, opcode),
            Operation::Bcs => branches::execute_bcs(self, opcode),
            Operation::Beq => branches::execute_beq(self, opcode),
            Operation::Bit => alu::execute_bit(self, opcode),
            Operation::Bmi => branches::execute_bmi(self, opcode),
            Operation::Bne => branches::execute_bne(self, opcode),
            Operation::Bpl => branches::execute_bpl(self, opcode),
            Operation::Brk => control::execute_brk(self, opcode),
            Operation::Bvc => branches::execute_bvc(self, opcode),
            Operation::Bvs => branches::execute_bvs(self, opcode),
            Operation::Clc => flags::execute_clc(self, opcode),
            Operation::Cld => flags::execute_cld(self, opcode),
            Operation::Cli => flags::execute_cli(self, opcode),
            Operation::Clv => flags::execute_clv(self, opcode),
            Operation::Cmp => alu::execute_cmp(self, opcode),
            Operation::Cpx => alu::execute_cpx(self, opcode),
            Operation::Cpy => alu::execute_cpy(self, opcode),
            Operation::Dec => inc_dec::execute_dec(self, opcode),
            Operation::Dex => inc_dec::execute_dex(self, opcode),
            Operation::Dey => inc_dec::execute_dey(self, opcode),
            Operation::Eor => alu::execute_eor(self, opcode),
            Operation::Inc => inc_dec::execute_inc(self, opcode),
            Operation::Inx => inc_dec::execute_inx(self, opcode),
            Operation::Iny => inc_dec::execute_iny(self, opcode),
            Operation::Jmp => control::execute_jmp(self, opcode),
            Operation::Jsr => control::execute_jsr(self, opcode),
            Operation::Lda => load_store::execute_lda(self, opcode),
            Operation::Ldx => load_store::execute_ldx(self, opcode),
            Operation::Ldy => load_store::execute_ldy(self, opcode),
            Operation::Lsr => shifts::execute_lsr(self, opcode),
            Operation::Nop => control::execute_nop(self, opcode),
            Operation::Ora => alu::execute_ora(self, opcode),
            Operation::Pha => stack::execute_pha(self, opcode),
            Operation::Php => stack::execute_php(self, opcode),
            Operation::Pla => stack::execute_pla(self, opcode),
            Operation::Plp => stack::execute_plp(self, opcode),
            Operation::Rol => shifts::execute_rol(self, opcode),
            Operation::Ror => shifts::execute_ror(self, opcode),
            Operation::Rti => control::execute_rti(self, opcode),
            Operation::Rts => control::execute_rts(self, opcode),
            Operation::Sbc => alu::execute_sbc(self, opcode),
            Operation::Sec => flags::execute_sec(self, opcode),
            Operation::Sed => flags::execute_sed(self, opcode),
            Operation::Sei => flags::execute_sei(self, opcode),
            Operation::Sta => load_store::execute_sta(self, opcode),
            Operation::Stx => load_store::execute_stx(self, opcode),
            Operation::Sty => load_store::execute_sty(self, opcode),
            Operation::Tax => transfer::execute_tax(self, opcode),
            Operation::Tay => transfer::execute_tay(self, opcode),
            Operation::Tsx => transfer::execute_tsx(self, opcode),
            Operation::Txa => transfer::execute_txa(self, opcode),
            Operation::Txs => transfer::execute_txs(self, opcode),
            Operation::Tya => transfer::execute_tya(self, opcode),
            Operation::Undefined => control::execute_undefined(self, opcode),
        }

        self.instructions += 1;
        self.service_interrupts();
    }

    /// Latches a maskable interrupt request.
    ///
    /// The request is serviced after the current instruction once the I flag
    /// is clear; while I is set it stays pending, matching the
    /// level-sensitive IRQ line.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Latches a non-maskable interrupt request, serviced after the current
    /// instruction regardless of the I flag.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Enables or disables per-step debug tracing through the diagnostics
    /// sink. Off by default.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    fn service_interrupts(&mut self) {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.enter_interrupt(NMI_VECTOR);
        } else if (self.irq_pending || self.memory.irq_active()) && !self.flag_i {
            self.irq_pending = false;
            self.enter_interrupt(IRQ_VECTOR);
        }
    }

    /// Hardware interrupt entry: push PC and status (B clear), set I, vector.
    fn enter_interrupt(&mut self, vector: u16) {
        let return_address = self.pc;
        self.push_word(return_address);
        let status = self.status_for_push(false);
        self.push(status);
        self.flag_i = true;
        self.pc = self.read_word(vector);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value. The full stack address is
    /// `0x0100 + SP`; the stack grows downward from `0x01FF`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the number of instructions executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the status register packed as a byte.
    ///
    /// Bit layout (`NV-BDIZC`): N=7, V=6, bit 5 always 1, B=4, D=3, I=2,
    /// Z=1, C=0.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register/Flag Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Memory Access ==========

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus, e.g. to load a program between steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Internal Helpers ==========

    /// Advances PC by an instruction length, wrapping at 16 bits.
    pub(crate) fn advance_pc(&mut self, bytes: u8) {
        self.pc = self.pc.wrapping_add(u16::from(bytes));
    }

    /// Sets the Zero and Negative flags from a result value.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Pushes a byte; SP wraps 0x00 -> 0xFF.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte; SP wraps 0xFF -> 0x00.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | u16::from(self.sp))
    }

    /// Pushes a 16-bit word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a 16-bit word, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        u16::from_le_bytes([low, high])
    }

    /// Status byte as it appears on the stack: bit 5 always set, B set for
    /// BRK/PHP pushes and clear for IRQ/NMI pushes.
    pub(crate) fn status_for_push(&self, brk: bool) -> u8 {
        let base = (self.status() & !0b0001_0000) | 0b0010_0000;
        if brk {
            base | 0b0001_0000
        } else {
            base
        }
    }

    /// Restores flags from a byte pulled off the stack. The B bit of the
    /// pulled byte is ignored; B has no backing storage on the real part.
    pub(crate) fn set_flags_from_pull(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x02);
        CPU::new(memory)
    }

    #[test]
    fn test_post_reset_state() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x0200);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.instructions(), 0);

        // I set, B set, bit 5 set, everything else clear
        assert_eq!(cpu.status(), 0x34);
        assert!(cpu.flag_i());
        assert!(cpu.flag_b());
        assert!(!cpu.flag_d());
    }

    #[test]
    fn test_status_packing_tracks_individual_flags() {
        let mut cpu = setup_cpu();

        cpu.set_flag_n(true);
        cpu.set_flag_c(true);
        assert_eq!(cpu.status() & 0b1000_0001, 0b1000_0001);

        cpu.set_flag_n(false);
        assert_eq!(cpu.status() & 0b1000_0000, 0);
    }

    #[test]
    fn test_step_counts_instructions() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x0200, 0xEA); // NOP
        cpu.memory_mut().write(0x0201, 0xEA); // NOP

        cpu.step();
        cpu.step();

        assert_eq!(cpu.instructions(), 2);
        assert_eq!(cpu.pc(), 0x0202);
    }

    #[test]
    fn test_push_pull_round_trip_with_wraparound() {
        let mut cpu = setup_cpu();

        cpu.set_sp(0x00); // next push wraps the pointer to 0xFF
        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_status_for_push_controls_b_bit() {
        let mut cpu = setup_cpu();
        cpu.set_flag_b(false);

        assert_eq!(cpu.status_for_push(true) & 0b0011_0000, 0b0011_0000);
        assert_eq!(cpu.status_for_push(false) & 0b0011_0000, 0b0010_0000);
    }
}
