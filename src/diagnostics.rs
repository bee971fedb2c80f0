//! # Diagnostics Channel
//!
//! The CPU surfaces anomalies to its host through an injected capability
//! rather than a return value: undefined opcodes and optional per-step debug
//! traces are reported as a (severity, message, opcode) triple. The core
//! invokes the sink synchronously, never stores a report, and always continues
//! stepping after the call returns - the host decides whether an anomaly means
//! anything.

use std::fmt;

/// Classification of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An exceptional condition the host should know about, such as an
    /// undefined opcode being executed.
    Exception,
    /// Informational tracing, emitted only when tracing is enabled via
    /// [`crate::CPU::set_trace`].
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Exception => write!(f, "exception"),
            Severity::Debug => write!(f, "debug"),
        }
    }
}

/// Receiver for diagnostic reports from the CPU.
///
/// The sink is supplied at construction via
/// [`crate::CPU::with_diagnostics`] and is invoked synchronously from
/// [`crate::CPU::step`]. It must not re-enter the CPU; the core continues
/// executing regardless of what the sink does.
pub trait DiagnosticSink {
    /// Reports one diagnostic: a severity classification, a human-readable
    /// message, and the opcode byte the report is associated with.
    fn report(&mut self, severity: Severity, message: &str, opcode: u8);
}

/// Adapter turning any `FnMut(Severity, &str, u8)` closure into a
/// [`DiagnosticSink`], so a host can inject a callback that borrows its own
/// state - the moral equivalent of a C function pointer plus context.
///
/// # Examples
///
/// ```
/// use sim6502::{FlatMemory, FnSink, MemoryBus, Severity, CPU};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let reports: Rc<RefCell<Vec<(Severity, u8)>>> = Rc::default();
/// let sink_reports = Rc::clone(&reports);
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x02);
/// memory.write(0x0200, 0xFF); // undocumented opcode
///
/// let sink = FnSink(move |severity, _msg: &str, opcode| {
///     sink_reports.borrow_mut().push((severity, opcode));
/// });
/// let mut cpu = CPU::with_diagnostics(memory, sink);
/// cpu.step();
///
/// assert_eq!(reports.borrow().as_slice(), &[(Severity::Exception, 0xFF)]);
/// ```
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: FnMut(Severity, &str, u8),
{
    fn report(&mut self, severity: Severity, message: &str, opcode: u8) {
        (self.0)(severity, message, opcode);
    }
}

/// Sink that discards every report. This is the default when a CPU is built
/// with [`crate::CPU::new`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _severity: Severity, _message: &str, _opcode: u8) {}
}

/// Sink that forwards reports to the [`log`] facade: exceptions at `warn`
/// level, debug traces at `trace` level. Formatting and destination stay with
/// whatever logger the host installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, severity: Severity, message: &str, opcode: u8) {
        match severity {
            Severity::Exception => log::warn!("{message} (opcode ${opcode:02X})"),
            Severity::Debug => log::trace!("{message} (opcode ${opcode:02X})"),
        }
    }
}
