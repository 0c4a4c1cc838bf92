//! Additive and multiplicative arithmetic.
//!
//! Integer work widens to `i64` and faults on wrap. Ratio work expands
//! over the common denominator with the safe multiply and funnels through
//! [`reduce_fraction`](crate::Machine::reduce_fraction), so exact results
//! stay exact. A float on either side promotes the whole operation to
//! IEEE arithmetic in the wider float width, which never faults.

use heap::Heap;
use object::Value;

use super::{float_pair, FloatPair, Operand};
use crate::fault::{Fault, FaultReporter};
use crate::Machine;

/// `a * b` in `i64`, or the overflow fault.
fn safe_mul_i64<H: Heap, F: FaultReporter>(
    m: &Machine<H, F>,
    a: i64,
    b: i64,
) -> i64 {
    match a.checked_mul(b) {
        Some(v) => v,
        None => m.fault(Fault::Overflow),
    }
}

fn checked<H: Heap, F: FaultReporter>(
    m: &Machine<H, F>,
    v: Option<i64>,
) -> i64 {
    match v {
        Some(v) => v,
        None => m.fault(Fault::Overflow),
    }
}

pub fn plus<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    use Operand::*;
    match (m.operand(x), m.operand(y)) {
        (Int(a), Int(b)) => {
            let sum = checked(m, a.checked_add(b));
            m.reduce_to_integer(sum)
        }
        // x + n/d = (x*d + n) / d, and addition commutes.
        (Int(a), Ratio { num, den }) | (Ratio { num, den }, Int(a)) => {
            let expanded = safe_mul_i64(m, a, den as i64);
            let n = checked(m, expanded.checked_add(num as i64));
            m.reduce_fraction(n, den as i64)
        }
        (Ratio { num: n1, den: d1 }, Ratio { num: n2, den: d2 }) => {
            if d1 == d2 {
                m.reduce_fraction(n1 as i64 + n2 as i64, d1 as i64)
            } else {
                let l = safe_mul_i64(m, n1 as i64, d2 as i64);
                let r = safe_mul_i64(m, n2 as i64, d1 as i64);
                let n = checked(m, l.checked_add(r));
                let d = safe_mul_i64(m, d1 as i64, d2 as i64);
                m.reduce_fraction(n, d)
            }
        }
        (a, b) => match float_pair(a, b) {
            FloatPair::Single(p, q) => m.new_f32(p + q),
            FloatPair::Double(p, q) => m.new_f64(p + q),
        },
    }
}

pub fn minus<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    use Operand::*;
    match (m.operand(x), m.operand(y)) {
        (Int(a), Int(b)) => {
            let diff = checked(m, a.checked_sub(b));
            m.reduce_to_integer(diff)
        }
        // x - n/d = (x*d - n) / d
        (Int(a), Ratio { num, den }) => {
            let expanded = safe_mul_i64(m, a, den as i64);
            let n = checked(m, expanded.checked_sub(num as i64));
            m.reduce_fraction(n, den as i64)
        }
        // n/d - y = (n - y*d) / d
        (Ratio { num, den }, Int(b)) => {
            let expanded = safe_mul_i64(m, b, den as i64);
            let n = checked(m, (num as i64).checked_sub(expanded));
            m.reduce_fraction(n, den as i64)
        }
        (Ratio { num: n1, den: d1 }, Ratio { num: n2, den: d2 }) => {
            if d1 == d2 {
                m.reduce_fraction(n1 as i64 - n2 as i64, d1 as i64)
            } else {
                let l = safe_mul_i64(m, n1 as i64, d2 as i64);
                let r = safe_mul_i64(m, n2 as i64, d1 as i64);
                let n = checked(m, l.checked_sub(r));
                let d = safe_mul_i64(m, d1 as i64, d2 as i64);
                m.reduce_fraction(n, d)
            }
        }
        (a, b) => match float_pair(a, b) {
            FloatPair::Single(p, q) => m.new_f32(p - q),
            FloatPair::Double(p, q) => m.new_f64(p - q),
        },
    }
}

pub fn times<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    use Operand::*;
    match (m.operand(x), m.operand(y)) {
        (Int(a), Int(b)) => {
            let product = safe_mul_i64(m, a, b);
            m.reduce_to_integer(product)
        }
        (Int(a), Ratio { num, den }) | (Ratio { num, den }, Int(a)) => {
            let n = safe_mul_i64(m, a, num as i64);
            m.reduce_fraction(n, den as i64)
        }
        (Ratio { num: n1, den: d1 }, Ratio { num: n2, den: d2 }) => {
            let n = safe_mul_i64(m, n1 as i64, n2 as i64);
            let d = safe_mul_i64(m, d1 as i64, d2 as i64);
            m.reduce_fraction(n, d)
        }
        (a, b) => match float_pair(a, b) {
            FloatPair::Single(p, q) => m.new_f32(p * q),
            FloatPair::Double(p, q) => m.new_f64(p * q),
        },
    }
}

pub fn divide<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    use Operand::*;
    match (m.operand(x), m.operand(y)) {
        (Int(a), Int(b)) => {
            if b == 0 {
                m.fault(Fault::DivisionByZero)
            }
            match a.checked_rem(b) {
                // Divides evenly: an integer result.
                Some(0) => {
                    let quotient = checked(m, a.checked_div(b));
                    m.reduce_to_integer(quotient)
                }
                // Otherwise the quotient is kept exact.
                Some(_) => m.reduce_fraction(a, b),
                // i64::MIN / -1
                None => m.fault(Fault::Overflow),
            }
        }
        // x / (n/d) = x*d / n
        (Int(a), Ratio { num, den }) => {
            let n = safe_mul_i64(m, a, den as i64);
            m.reduce_fraction(n, num as i64)
        }
        // (n/d) / y = n / (d*y); y = 0 faults in reduce_fraction.
        (Ratio { num, den }, Int(b)) => {
            let d = safe_mul_i64(m, den as i64, b);
            m.reduce_fraction(num as i64, d)
        }
        (Ratio { num: n1, den: d1 }, Ratio { num: n2, den: d2 }) => {
            let n = safe_mul_i64(m, n1 as i64, d2 as i64);
            let d = safe_mul_i64(m, d1 as i64, n2 as i64);
            m.reduce_fraction(n, d)
        }
        // IEEE division: zero divisors yield infinities or NaN, no fault.
        (a, b) => match float_pair(a, b) {
            FloatPair::Single(p, q) => m.new_f32(p / q),
            FloatPair::Double(p, q) => m.new_f64(p / q),
        },
    }
}

// ── Unary operators ────────────────────────────────────────────────

pub fn neg<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
) -> Value {
    match m.operand(x) {
        Operand::Int(a) => {
            let v = checked(m, a.checked_neg());
            m.reduce_to_integer(v)
        }
        Operand::Ratio { num, den } => {
            m.reduce_fraction(-(num as i64), den as i64)
        }
        Operand::F32(v) => m.new_f32(-v),
        Operand::F64(v) => m.new_f64(-v),
    }
}

pub fn abs<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
) -> Value {
    match m.operand(x) {
        Operand::Int(a) => {
            let v = checked(m, a.checked_abs());
            m.reduce_to_integer(v)
        }
        Operand::Ratio { num, den } => {
            m.reduce_fraction((num as i64).abs(), den as i64)
        }
        Operand::F32(v) => m.new_f32(v.abs()),
        Operand::F64(v) => m.new_f64(v.abs()),
    }
}

/// Numerator of an exact number: the integer itself, or the ratio's
/// numerator. Floats are not exact and fault.
pub fn numerator<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
) -> Value {
    match m.operand(x) {
        Operand::Int(a) => m.reduce_to_integer(a),
        Operand::Ratio { num, .. } => m.reduce_to_integer(num as i64),
        Operand::F32(_) | Operand::F64(_) => {
            m.fault(Fault::NotIntLike(x))
        }
    }
}

/// Denominator of an exact number: 1 for integers. Floats fault.
pub fn denominator<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
) -> Value {
    match m.operand(x) {
        Operand::Int(_) => Value::from_i32(1),
        Operand::Ratio { den, .. } => m.reduce_to_integer(den as i64),
        Operand::F32(_) | Operand::F64(_) => {
            m.fault(Fault::NotIntLike(x))
        }
    }
}
