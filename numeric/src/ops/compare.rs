//! Ordering comparisons.
//!
//! The strict orders coerce both sides to `f64`; the precision loss on
//! large `i64` values is accepted. The inclusive orders fall back to
//! exact equality when the strict comparison fails, so two ratios that
//! round to the same double still order correctly.

use heap::Heap;
use object::Value;

use super::eq::eq;
use crate::fault::FaultReporter;
use crate::Machine;

pub fn lt<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    m.to_f64(x) < m.to_f64(y)
}

pub fn gt<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    m.to_f64(x) > m.to_f64(y)
}

pub fn le<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    if m.to_f64(x) < m.to_f64(y) {
        return true;
    }
    eq(m, x, y)
}

pub fn ge<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    if m.to_f64(x) > m.to_f64(y) {
        return true;
    }
    eq(m, x, y)
}
