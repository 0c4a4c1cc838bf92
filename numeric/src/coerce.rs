//! Widening coercions for the inexact paths (comparisons, float
//! promotion) and the integer-only operators.

use heap::Heap;
use object::Value;

use crate::fault::{Fault, FaultReporter};
use crate::repr::Num;
use crate::Machine;

impl<H: Heap, F: FaultReporter> Machine<H, F> {
    /// Widen any number to `f64`. Ratios divide in `f64` on both
    /// components.
    pub fn to_f64(&self, w: Value) -> f64 {
        match self.expect_num(w) {
            Num::Fixnum(v) | Num::Int32(v) => v as f64,
            Num::Int64(v) => v as f64,
            Num::Float32(v) => v as f64,
            Num::Float64(v) => v,
            Num::Ratio { num, den } => num as f64 / den as f64,
        }
    }

    /// Narrow any number to `f32`. Ratios divide in `f32` on both
    /// components; large components lose precision here, which is why the
    /// comparison operators go through [`to_f64`](Machine::to_f64).
    pub fn to_f32(&self, w: Value) -> f32 {
        match self.expect_num(w) {
            Num::Fixnum(v) | Num::Int32(v) => v as f32,
            Num::Int64(v) => v as f32,
            Num::Float32(v) => v,
            Num::Float64(v) => v as f32,
            Num::Ratio { num, den } => num as f32 / den as f32,
        }
    }

    /// Widen an integer-represented number to `i64`; floats and ratios
    /// fault with the offending word.
    pub fn to_i64(&self, w: Value) -> i64 {
        match self.expect_num(w) {
            Num::Fixnum(v) | Num::Int32(v) => v as i64,
            Num::Int64(v) => v,
            Num::Float32(_) | Num::Float64(_) | Num::Ratio { .. } => {
                self.fault(Fault::NotIntLike(w))
            }
        }
    }
}
