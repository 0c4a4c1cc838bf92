//! Modulus, shifts and bitwise operators.
//!
//! All of these are integer-only: both operands go through the `i64`
//! coercion, which faults `NotIntLike` on floats and ratios. Shift
//! counts are taken modulo 64.

use heap::Heap;
use object::Value;

use crate::fault::{Fault, FaultReporter};
use crate::Machine;

pub fn modulo<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let a = m.to_i64(x);
    let b = m.to_i64(y);
    if b == 0 {
        m.fault(Fault::DivisionByZero)
    }
    // Truncated remainder; i64::MIN % -1 is 0, which the checked operator
    // would reject as an overflowing division.
    m.reduce_to_integer(a.wrapping_rem(b))
}

pub fn shl<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let a = m.to_i64(x);
    let count = (m.to_i64(y) & 63) as u32;
    m.reduce_to_integer(a.wrapping_shl(count))
}

pub fn shr_logical<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let a = m.to_i64(x) as u64;
    let count = (m.to_i64(y) & 63) as u32;
    m.reduce_to_integer((a >> count) as i64)
}

pub fn shr_arith<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let a = m.to_i64(x);
    let count = (m.to_i64(y) & 63) as u32;
    m.reduce_to_integer(a >> count)
}

pub fn bit_and<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let v = m.to_i64(x) & m.to_i64(y);
    m.reduce_to_integer(v)
}

pub fn bit_or<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let v = m.to_i64(x) | m.to_i64(y);
    m.reduce_to_integer(v)
}

pub fn bit_xor<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    x: Value,
    y: Value,
) -> Value {
    let v = m.to_i64(x) ^ m.to_i64(y);
    m.reduce_to_integer(v)
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::testutil::machine;
    use crate::Num;

    #[test]
    fn modulo_is_truncated() {
        let mut m = machine();
        let r = modulo(&mut m, Value::from_i32(7), Value::from_i32(5));
        assert_eq!(r.to_i32(), 2);
        // Truncated semantics: the sign follows the dividend.
        let r = modulo(&mut m, Value::from_i32(-7), Value::from_i32(5));
        assert_eq!(r.to_i32(), -2);
        let r = modulo(&mut m, Value::from_i32(7), Value::from_i32(-5));
        assert_eq!(r.to_i32(), 2);
    }

    #[test]
    fn modulo_min_by_minus_one() {
        let mut m = machine();
        let min = m.new_i64(i64::MIN);
        let r = modulo(&mut m, min, Value::from_i32(-1));
        assert_eq!(r.to_i32(), 0);
    }

    #[test]
    fn modulo_by_zero_faults() {
        let mut m = machine();
        let result = catch_unwind(AssertUnwindSafe(|| {
            modulo(&mut m, Value::from_i32(7), Value::from_i32(0))
        }));
        assert!(result.is_err());
        assert_eq!(m.faults.last(), Some(Fault::DivisionByZero));
    }

    #[test]
    fn float_modulo_faults_not_int_like() {
        let mut m = machine();
        let f = m.new_f64(7.5);
        let result = catch_unwind(AssertUnwindSafe(|| {
            modulo(&mut m, f, Value::from_i32(2))
        }));
        assert!(result.is_err());
        assert_eq!(m.faults.last(), Some(Fault::NotIntLike(f)));
    }

    #[test]
    fn ratio_shift_faults_not_int_like() {
        let mut m = machine();
        let half = m.reduce_fraction(1, 2);
        let result = catch_unwind(AssertUnwindSafe(|| {
            shl(&mut m, half, Value::from_i32(1))
        }));
        assert!(result.is_err());
        assert_eq!(m.faults.last(), Some(Fault::NotIntLike(half)));
    }

    #[test]
    fn shifts() {
        let mut m = machine();
        let r = shl(&mut m, Value::from_i32(1), Value::from_i32(40));
        assert_eq!(m.decode(r), Some(Num::Int64(1 << 40)));

        let r =
            shr_arith(&mut m, Value::from_i32(-8), Value::from_i32(1));
        assert_eq!(r.to_i32(), -4);

        let neg = Value::from_i32(-8);
        let r = shr_logical(&mut m, neg, Value::from_i32(1));
        assert_eq!(m.decode(r), Some(Num::Int64(((-8i64) as u64 >> 1) as i64)));
    }

    #[test]
    fn shift_count_wraps_at_64() {
        let mut m = machine();
        let r = shl(&mut m, Value::from_i32(1), Value::from_i32(64));
        assert_eq!(r.to_i32(), 1);
        let r = shl(&mut m, Value::from_i32(1), Value::from_i32(65));
        assert_eq!(r.to_i32(), 2);
    }

    #[test]
    fn shl_discards_high_bits_silently() {
        let mut m = machine();
        let top = m.new_i64(1 << 62);
        let r = shl(&mut m, top, Value::from_i32(2));
        assert_eq!(r.to_i32(), 0);
        assert_eq!(m.faults.last(), None);
    }

    #[test]
    fn bitwise_ops() {
        let mut m = machine();
        let r =
            bit_and(&mut m, Value::from_i32(0b1100), Value::from_i32(0b1010));
        assert_eq!(r.to_i32(), 0b1000);
        let r =
            bit_or(&mut m, Value::from_i32(0b1100), Value::from_i32(0b1010));
        assert_eq!(r.to_i32(), 0b1110);
        let r =
            bit_xor(&mut m, Value::from_i32(0b1100), Value::from_i32(0b1010));
        assert_eq!(r.to_i32(), 0b0110);

        // Results re-canonicalise: a wide AND can come back to a fixnum.
        let wide = m.new_i64((1 << 40) | 5);
        let r = bit_and(&mut m, wide, Value::from_i32(0xFF));
        assert!(r.is_fixnum());
        assert_eq!(r.to_i32(), 5);
    }
}
