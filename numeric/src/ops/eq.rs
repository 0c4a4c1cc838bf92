//! Cross-representation numeric equality.
//!
//! Word-identical operands are equal before anything else is inspected.
//! After that, both operands must be numbers; the canonical-form
//! invariant then carries the interesting shortcuts: an integer never
//! equals a ratio (the ratio would have collapsed), and ratio/ratio
//! equality is component-wise.

use heap::Heap;
use object::Value;

use super::Operand;
use crate::fault::FaultReporter;
use crate::Machine;

/// Largest double whose neighbourhood still represents every integer:
/// 2^53.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The integer a float stands for, if it is a safe integer: finite,
/// within the 53-bit contiguous range, and unchanged by a round trip
/// through `i64`.
fn safe_integer(f: f64) -> Option<i64> {
    if !f.is_finite() || f.abs() > MAX_SAFE_INTEGER {
        return None;
    }
    let n = f as i64;
    (n as f64 == f).then_some(n)
}

pub fn eq<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    if x == y {
        return true;
    }
    match (m.decode(x), m.decode(y)) {
        (Some(a), Some(b)) => {
            operand_eq(Operand::from_num(a), Operand::from_num(b))
        }
        // Non-numbers compare unequal.
        _ => false,
    }
}

pub fn ne<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> bool {
    !eq(m, x, y)
}

fn operand_eq(a: Operand, b: Operand) -> bool {
    use Operand::*;
    match (a, b) {
        (Int(p), Int(q)) => p == q,
        // Canonical form: an integer value is never stored as a ratio.
        (Int(_), Ratio { .. }) | (Ratio { .. }, Int(_)) => false,
        (Int(p), F32(f)) | (F32(f), Int(p)) => {
            safe_integer(f as f64) == Some(p)
        }
        (Int(p), F64(f)) | (F64(f), Int(p)) => safe_integer(f) == Some(p),
        (Ratio { num: n1, den: d1 }, Ratio { num: n2, den: d2 }) => {
            n1 == n2 && d1 == d2
        }
        // Exact quotient against the float, no tolerance.
        (Ratio { num, den }, F32(f)) | (F32(f), Ratio { num, den }) => {
            num as f64 / den as f64 == f as f64
        }
        (Ratio { num, den }, F64(f)) | (F64(f), Ratio { num, den }) => {
            num as f64 / den as f64 == f
        }
        (F32(p), F32(q)) => p as f64 == q as f64,
        (F32(p), F64(q)) | (F64(q), F32(p)) => p as f64 == q,
        (F64(p), F64(q)) => p == q,
    }
}
