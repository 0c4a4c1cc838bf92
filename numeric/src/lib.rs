//! The polymorphic numeric runtime.
//!
//! A `Number` is a tagged word: a fixnum carried inline, or a reference to
//! an immutable heap cell holding an `i32`, `i64`, `f32`, `f64`, or a
//! reduced ratio. Operations decode both operand words once, dispatch on
//! the pair of representations, and produce results in canonical form:
//! integers in the smallest category that holds them, ratios with positive
//! denominator and coprime components, floats only where a float operand
//! (or float-producing operator) introduced them.
//!
//! Allocation and fault signalling are capabilities of the [`Machine`];
//! the runtime holds no global state, performs no locking, and never
//! mutates a cell after publishing it.

pub mod canon;
pub mod coerce;
pub mod fault;
pub mod literal;
pub mod ops;
mod repr;

pub use fault::{AbortReporter, Fault, FaultReporter, RecordingReporter};
pub use object::Value;
pub use repr::Num;

use heap::Heap;

/// The runtime capabilities threaded through every public operation:
/// the allocator for boxed results and the fault reporter for fatal
/// conditions.
pub struct Machine<H: Heap, F: FaultReporter> {
    pub heap: H,
    pub faults: F,
}

impl<H: Heap, F: FaultReporter> Machine<H, F> {
    pub fn new(heap: H, faults: F) -> Self {
        Self { heap, faults }
    }

    /// Signal a fatal fault. Never returns.
    pub(crate) fn fault(&self, fault: Fault) -> ! {
        tracing::debug!(target: "numeric", %fault, "fault");
        self.faults.fault(fault)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use heap::{Arena, ArenaSettings};

    use crate::fault::RecordingReporter;
    use crate::Machine;

    pub fn machine() -> Machine<Arena, RecordingReporter> {
        Machine::new(
            Arena::new(ArenaSettings::default()),
            RecordingReporter::new(),
        )
    }
}
