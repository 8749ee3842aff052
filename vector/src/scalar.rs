use core::{
    fmt,
    iter::Sum,
    ops::{Add, Mul},
};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A single numeric component, either an integer or a real.
///
/// Integer arithmetic stays integral until it would overflow, at which point
/// the result is promoted to a real. Mixing an integer with a real always
/// yields a real.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Real(f64),
}

impl Scalar {
    pub const ZERO: Scalar = Scalar::Int(0);

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Real(r) => r,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;
    #[inline]
    fn add(self, rhs: Scalar) -> Self::Output {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Scalar::Real(a as f64 + b as f64), Scalar::Int),
            (a, b) => Scalar::Real(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Scalar::Real(a as f64 * b as f64), Scalar::Int),
            (a, b) => Scalar::Real(a.as_f64() * b.as_f64()),
        }
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::ZERO, |acc, x| acc + x)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Real(a), Scalar::Real(b)) => a == b,
            (Scalar::Int(i), Scalar::Real(r)) | (Scalar::Real(r), Scalar::Int(i)) => {
                int_eq_real(i, r)
            }
        }
    }
}

// Exact: the real must be whole and inside the i64 range, so nothing is
// rounded through f64 on the way.
fn int_eq_real(i: i64, r: f64) -> bool {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    r.fract() == 0.0 && r >= -LIMIT && r < LIMIT && r as i64 == i
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing `.0` on whole reals
            Scalar::Real(r) => write!(f, "{:?}", r),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(v: $t) -> Self {
                    Scalar::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| Scalar::Real(v as f64), Scalar::Int)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Scalar {
    #[inline]
    fn from(v: f32) -> Self {
        Scalar::Real(v as f64)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Self {
        Scalar::Real(v)
    }
}
