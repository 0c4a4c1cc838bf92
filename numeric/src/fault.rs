//! The fault reporter collaborator.

use std::cell::Cell;

use object::Value;

/// A fatal numeric fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// An `i64` result wrapped, or a reduced ratio component left signed
    /// 32-bit range.
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    /// An integer-only operation received the given non-integer word.
    #[error("operand is not integer-like: {0:?}")]
    NotIntLike(Value),
}

/// Receives fatal faults. `fault` never returns: implementations abort,
/// unwind, or transfer control back into the host runtime.
pub trait FaultReporter {
    fn fault(&self, fault: Fault) -> !;
}

/// Production reporter: logs the fault and aborts the process.
#[derive(Debug, Default)]
pub struct AbortReporter;

impl FaultReporter for AbortReporter {
    fn fault(&self, fault: Fault) -> ! {
        tracing::error!(target: "numeric", %fault, "fatal numeric fault");
        std::process::abort()
    }
}

/// Reporter that records the fault and unwinds, for tests and hosts that
/// trap faults at an operation boundary.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    seen: Cell<Option<Fault>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently reported fault, if any.
    pub fn last(&self) -> Option<Fault> {
        self.seen.get()
    }
}

impl FaultReporter for RecordingReporter {
    fn fault(&self, fault: Fault) -> ! {
        self.seen.set(Some(fault));
        panic!("numeric fault: {fault}")
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;

    #[test]
    fn recording_reporter_records_and_unwinds() {
        let reporter = RecordingReporter::new();
        assert_eq!(reporter.last(), None);
        let result = catch_unwind(AssertUnwindSafe(|| {
            reporter.fault(Fault::Overflow)
        }));
        assert!(result.is_err());
        assert_eq!(reporter.last(), Some(Fault::Overflow));
    }

    #[test]
    fn fault_display() {
        assert_eq!(Fault::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(Fault::DivisionByZero.to_string(), "division by zero");
        let w = Value::from_i32(7);
        assert_eq!(
            Fault::NotIntLike(w).to_string(),
            "operand is not integer-like: Fixnum(7)"
        );
    }
}
