//! Heap accessors and the decoded representation.

use heap::Heap;
use object::{
    NumberTag, Value, KIND_OFFSET, NUMBER_KIND, PAYLOAD0_OFFSET,
    PAYLOAD1_OFFSET, TAG_OFFSET,
};

use crate::fault::{Fault, FaultReporter};
use crate::Machine;

/// A number decoded from its tagged word: the single decode step every
/// public operation performs before dispatching by `match`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Fixnum(i32),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    /// Canonical: `den >= 2`, `num != 0`, components coprime.
    Ratio { num: i32, den: u32 },
}

impl<H: Heap, F: FaultReporter> Machine<H, F> {
    // ── Accessors ──────────────────────────────────────────────────

    /// Whether `w` references a boxed-number cell.
    #[inline]
    pub fn is_boxed_number(&self, w: Value) -> bool {
        w.is_ref() && self.heap.word(w.addr(), KIND_OFFSET) == NUMBER_KIND
    }

    /// Representation tag of the number cell at `addr`.
    #[inline]
    pub fn boxed_tag(&self, addr: u32) -> Option<NumberTag> {
        NumberTag::from_raw(self.heap.word(addr, TAG_OFFSET))
    }

    #[inline]
    pub fn i32_of(&self, addr: u32) -> i32 {
        self.heap.word(addr, PAYLOAD0_OFFSET) as i32
    }

    #[inline]
    pub fn i64_of(&self, addr: u32) -> i64 {
        let lo = self.heap.word(addr, PAYLOAD0_OFFSET) as u64;
        let hi = self.heap.word(addr, PAYLOAD1_OFFSET) as u64;
        (hi << 32 | lo) as i64
    }

    #[inline]
    pub fn f32_of(&self, addr: u32) -> f32 {
        f32::from_bits(self.heap.word(addr, PAYLOAD0_OFFSET))
    }

    #[inline]
    pub fn f64_of(&self, addr: u32) -> f64 {
        let lo = self.heap.word(addr, PAYLOAD0_OFFSET) as u64;
        let hi = self.heap.word(addr, PAYLOAD1_OFFSET) as u64;
        f64::from_bits(hi << 32 | lo)
    }

    #[inline]
    pub fn ratio_num(&self, addr: u32) -> i32 {
        self.heap.word(addr, PAYLOAD0_OFFSET) as i32
    }

    #[inline]
    pub fn ratio_den(&self, addr: u32) -> u32 {
        self.heap.word(addr, PAYLOAD1_OFFSET)
    }

    // ── Constructors ───────────────────────────────────────────────

    pub fn new_i32(&mut self, v: i32) -> Value {
        let addr = self
            .heap
            .alloc(&[NUMBER_KIND, NumberTag::Int32 as u32, v as u32]);
        Value::from_addr(addr)
    }

    pub fn new_i64(&mut self, v: i64) -> Value {
        let bits = v as u64;
        let addr = self.heap.alloc(&[
            NUMBER_KIND,
            NumberTag::Int64 as u32,
            bits as u32,
            (bits >> 32) as u32,
        ]);
        Value::from_addr(addr)
    }

    pub fn new_f32(&mut self, v: f32) -> Value {
        let addr = self
            .heap
            .alloc(&[NUMBER_KIND, NumberTag::Float32 as u32, v.to_bits()]);
        Value::from_addr(addr)
    }

    pub fn new_f64(&mut self, v: f64) -> Value {
        let bits = v.to_bits();
        let addr = self.heap.alloc(&[
            NUMBER_KIND,
            NumberTag::Float64 as u32,
            bits as u32,
            (bits >> 32) as u32,
        ]);
        Value::from_addr(addr)
    }

    /// Allocate a ratio cell. Callers go through
    /// [`reduce_fraction`](Machine::reduce_fraction), which establishes
    /// the canonical-form invariant asserted here.
    pub fn new_ratio(&mut self, num: i32, den: u32) -> Value {
        debug_assert!(den >= 2, "ratio denominator must be >= 2: {den}");
        debug_assert!(num != 0, "ratio numerator must be non-zero");
        debug_assert_eq!(
            crate::canon::gcd(num.unsigned_abs() as u64, den as u64),
            1,
            "ratio components must be coprime: {num}/{den}"
        );
        let addr = self.heap.alloc(&[
            NUMBER_KIND,
            NumberTag::Ratio as u32,
            num as u32,
            den,
        ]);
        Value::from_addr(addr)
    }

    // ── Decode ─────────────────────────────────────────────────────

    /// Decode a word into its representation, or `None` for non-numbers.
    pub fn decode(&self, w: Value) -> Option<Num> {
        if w.is_fixnum() {
            return Some(Num::Fixnum(w.to_i32()));
        }
        if !w.is_ref() || self.heap.word(w.addr(), KIND_OFFSET) != NUMBER_KIND
        {
            return None;
        }
        let addr = w.addr();
        let tag = self.boxed_tag(addr)?;
        Some(match tag {
            NumberTag::Int32 => Num::Int32(self.i32_of(addr)),
            NumberTag::Int64 => Num::Int64(self.i64_of(addr)),
            NumberTag::Float32 => Num::Float32(self.f32_of(addr)),
            NumberTag::Float64 => Num::Float64(self.f64_of(addr)),
            NumberTag::Ratio => Num::Ratio {
                num: self.ratio_num(addr),
                den: self.ratio_den(addr),
            },
        })
    }

    /// Decode a word that is required to be a number; faults with the
    /// offending word otherwise.
    pub(crate) fn expect_num(&self, w: Value) -> Num {
        match self.decode(w) {
            Some(n) => n,
            None => self.fault(Fault::NotIntLike(w)),
        }
    }
}
