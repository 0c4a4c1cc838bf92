//! The constant-construction interface consumed by the front-end.
//!
//! The front-end resolves literal syntax into a [`Literal`]: an integer
//! or float of a declared width, or a sign-magnitude rational in 32-bit
//! limbs, always keeping the original text for diagnostics.
//! [`Literal::classify`] names the minimal runtime representation so the
//! type checker can annotate the literal; [`fold`] builds the canonical
//! runtime value for the constant-folding pass.

use heap::Heap;
use object::Value;

use crate::fault::FaultReporter;
use crate::Machine;

/// Declared integer width of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W32,
    W64,
}

/// Declared float width of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    W32,
    W64,
}

/// A numeric literal as resolved by the front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Original source text, for diagnostics.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    Int {
        width: IntWidth,
        value: i64,
    },
    Float {
        width: FloatWidth,
        value: f64,
    },
    /// Sign-magnitude rational; limbs are little-endian 32-bit words with
    /// no high zero limbs.
    Ratio {
        negative: bool,
        numerator: Vec<u32>,
        denominator: Vec<u32>,
    },
}

/// The minimal runtime representation of a literal. Declared widths are
/// diagnostic; runtime values are canonical, so a 64-bit-suffixed `7` is
/// still a fixnum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralClass {
    Fixnum,
    Int32,
    Int64,
    Float32,
    Float64,
    Ratio,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// A rational component did not fit 64 bits.
    // TODO: arbitrary-length limbs need bignum cells; until those exist
    // the folder rejects anything wider than two limbs per component.
    #[error("rational component wider than 64 bits in `{text}`")]
    LimbsUnsupported { text: String },
    #[error("zero denominator in `{text}`")]
    ZeroDenominator { text: String },
}

impl Literal {
    pub fn classify(&self) -> LiteralClass {
        match &self.kind {
            LiteralKind::Int { value, .. } => {
                if Value::fits_fixnum(*value) {
                    LiteralClass::Fixnum
                } else if i32::try_from(*value).is_ok() {
                    LiteralClass::Int32
                } else {
                    LiteralClass::Int64
                }
            }
            LiteralKind::Float { width: FloatWidth::W32, .. } => {
                LiteralClass::Float32
            }
            LiteralKind::Float { width: FloatWidth::W64, .. } => {
                LiteralClass::Float64
            }
            LiteralKind::Ratio { .. } => LiteralClass::Ratio,
        }
    }
}

/// Fold a literal into its canonical runtime value.
///
/// Ratio components that fit 64 bits but whose reduced form still
/// overflows the 32-bit cell go through the machine's overflow fault,
/// like any other runtime rational.
pub fn fold<H: Heap, F: FaultReporter>(
    m: &mut Machine<H, F>,
    literal: &Literal,
) -> Result<Value, LiteralError> {
    match &literal.kind {
        LiteralKind::Int { value, .. } => Ok(m.reduce_to_integer(*value)),
        LiteralKind::Float { width: FloatWidth::W32, value } => {
            Ok(m.new_f32(*value as f32))
        }
        LiteralKind::Float { width: FloatWidth::W64, value } => {
            Ok(m.new_f64(*value))
        }
        LiteralKind::Ratio { negative, numerator, denominator } => {
            let too_wide = || LiteralError::LimbsUnsupported {
                text: literal.text.clone(),
            };
            let n = limbs_to_u64(numerator).ok_or_else(too_wide)?;
            let d = limbs_to_u64(denominator).ok_or_else(too_wide)?;
            if n > i64::MAX as u64 || d > i64::MAX as u64 {
                return Err(too_wide());
            }
            if d == 0 {
                return Err(LiteralError::ZeroDenominator {
                    text: literal.text.clone(),
                });
            }
            let n = if *negative { -(n as i64) } else { n as i64 };
            Ok(m.reduce_fraction(n, d as i64))
        }
    }
}

fn limbs_to_u64(limbs: &[u32]) -> Option<u64> {
    match *limbs {
        [] => Some(0),
        [lo] => Some(lo as u64),
        [lo, hi] => Some((hi as u64) << 32 | lo as u64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::machine;
    use crate::Num;

    fn int(value: i64) -> Literal {
        Literal {
            kind: LiteralKind::Int { width: IntWidth::W64, value },
            text: value.to_string(),
        }
    }

    #[test]
    fn classification_is_value_based() {
        assert_eq!(int(7).classify(), LiteralClass::Fixnum);
        assert_eq!(int(-7).classify(), LiteralClass::Fixnum);
        assert_eq!(int(2_000_000_000).classify(), LiteralClass::Int32);
        assert_eq!(int(1 << 40).classify(), LiteralClass::Int64);

        let f = Literal {
            kind: LiteralKind::Float {
                width: FloatWidth::W32,
                value: 1.5,
            },
            text: "1.5f".into(),
        };
        assert_eq!(f.classify(), LiteralClass::Float32);

        let r = Literal {
            kind: LiteralKind::Ratio {
                negative: false,
                numerator: vec![1],
                denominator: vec![3],
            },
            text: "1/3".into(),
        };
        assert_eq!(r.classify(), LiteralClass::Ratio);
    }

    #[test]
    fn folding_integers_canonicalises() {
        let mut m = machine();
        let v = fold(&mut m, &int(7)).expect("fold");
        assert!(v.is_fixnum());
        assert_eq!(v.to_i32(), 7);

        let v = fold(&mut m, &int(1 << 40)).expect("fold");
        assert_eq!(m.decode(v), Some(Num::Int64(1 << 40)));
    }

    #[test]
    fn folding_ratios_reduces() {
        let mut m = machine();
        let lit = Literal {
            kind: LiteralKind::Ratio {
                negative: true,
                numerator: vec![2],
                denominator: vec![6],
            },
            text: "-2/6".into(),
        };
        let v = fold(&mut m, &lit).expect("fold");
        assert_eq!(m.decode(v), Some(Num::Ratio { num: -1, den: 3 }));
    }

    #[test]
    fn folding_two_limb_components() {
        let mut m = machine();
        // (2^33) / (2^34) reduces to 1/2.
        let lit = Literal {
            kind: LiteralKind::Ratio {
                negative: false,
                numerator: vec![0, 2],
                denominator: vec![0, 4],
            },
            text: "8589934592/17179869184".into(),
        };
        let v = fold(&mut m, &lit).expect("fold");
        assert_eq!(m.decode(v), Some(Num::Ratio { num: 1, den: 2 }));
    }

    #[test]
    fn wide_limbs_are_rejected() {
        let mut m = machine();
        let lit = Literal {
            kind: LiteralKind::Ratio {
                negative: false,
                numerator: vec![1, 2, 3],
                denominator: vec![3],
            },
            text: "big/3".into(),
        };
        assert!(matches!(
            fold(&mut m, &lit),
            Err(LiteralError::LimbsUnsupported { .. })
        ));
    }

    #[test]
    fn zero_denominator_is_a_front_end_error() {
        let mut m = machine();
        let lit = Literal {
            kind: LiteralKind::Ratio {
                negative: false,
                numerator: vec![1],
                denominator: vec![],
            },
            text: "1/0".into(),
        };
        assert!(matches!(
            fold(&mut m, &lit),
            Err(LiteralError::ZeroDenominator { .. })
        ));
        assert_eq!(m.faults.last(), None);
    }

    #[test]
    fn float_folding_respects_width() {
        let mut m = machine();
        let lit = Literal {
            kind: LiteralKind::Float {
                width: FloatWidth::W32,
                value: 0.1,
            },
            text: "0.1f".into(),
        };
        let v = fold(&mut m, &lit).expect("fold");
        assert_eq!(m.decode(v), Some(Num::Float32(0.1f32)));
    }
}
