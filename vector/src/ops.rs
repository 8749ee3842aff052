use crate::{
    error::{Result, VectorError},
    operand::{Element, Operand},
    scalar::Scalar,
    vector::Vector,
};
use core::ops::{Add, Mul, Range};
use tracing::{debug, trace};

/// Result of an operator hook: either a value, or a signal that this
/// operand doesn't know how to combine with the other one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    NotImplemented,
}

/// Dot product. Rust has no `@`, so both sides implement this instead.
pub trait Dot<Rhs = Self> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

type Hook<T> = fn(&dyn Operand, &dyn Operand) -> Result<Outcome<T>>;

fn dispatch<T>(
    op: &'static str,
    lhs: &dyn Operand,
    rhs: &dyn Operand,
    forward: Hook<T>,
    reflected: Hook<T>,
) -> Result<T> {
    if let Outcome::Value(value) = forward(lhs, rhs)? {
        return Ok(value);
    }
    trace!(
        op = op,
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "forward operator declined, trying reflected"
    );
    if let Outcome::Value(value) = reflected(lhs, rhs)? {
        return Ok(value);
    }
    debug!(
        op = op,
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "both operands declined"
    );
    Err(VectorError::UnsupportedOperands {
        op,
        lhs: lhs.type_name(),
        rhs: rhs.type_name(),
    })
}

/// `lhs + rhs`: the left operand's hook first, then the right operand's
/// reflected hook.
pub fn add(lhs: &dyn Operand, rhs: &dyn Operand) -> Result<Vector> {
    dispatch("+", lhs, rhs, |l, r| l.try_add(r), |l, r| r.try_radd(l))
}

pub fn dot(lhs: &dyn Operand, rhs: &dyn Operand) -> Result<Scalar> {
    dispatch("@", lhs, rhs, |l, r| l.try_dot(r), |l, r| r.try_rdot(l))
}

pub fn scale(v: &dyn Operand, k: Scalar) -> Result<Vector> {
    match v.try_scale(k)? {
        Outcome::Value(value) => Ok(value),
        Outcome::NotImplemented => Err(VectorError::UnsupportedOperands {
            op: "*",
            lhs: v.type_name(),
            rhs: "Scalar",
        }),
    }
}

impl<S: Operand, R: Operand> Add<R> for Vector<S> {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: R) -> Self::Output {
        crate::ops::add(&self, &rhs)
    }
}

impl<'a, S: Operand, R: Operand> Add<R> for &'a Vector<S> {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: R) -> Self::Output {
        crate::ops::add(self, &rhs)
    }
}

impl<S: Operand, K: Into<Scalar>> Mul<K> for Vector<S> {
    type Output = Result<Vector>;
    #[inline]
    fn mul(self, rhs: K) -> Self::Output {
        scale(&self, rhs.into())
    }
}

impl<'a, S: Operand, K: Into<Scalar>> Mul<K> for &'a Vector<S> {
    type Output = Result<Vector>;
    #[inline]
    fn mul(self, rhs: K) -> Self::Output {
        scale(self, rhs.into())
    }
}

impl<S: Operand, R: Operand> Dot<R> for Vector<S> {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: R) -> Self::Output {
        crate::ops::dot(&self, &rhs)
    }
}

impl<'a, S: Operand, R: Operand> Dot<R> for &'a Vector<S> {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: R) -> Self::Output {
        crate::ops::dot(self, &rhs)
    }
}

/// Lets a foreign operand appear on the left of `+` and `dot` with a
/// `Vector` on the right.
macro_rules! impl_reflected {
    ($([$($gen:tt)*] $lhs:ty),* $(,)?) => {
        $(
            impl<S: $crate::operand::Operand, $($gen)*> core::ops::Add<$crate::vector::Vector<S>> for $lhs {
                type Output = $crate::error::Result<$crate::vector::Vector>;
                #[inline]
                fn add(self, rhs: $crate::vector::Vector<S>) -> Self::Output {
                    $crate::ops::add(&self, &rhs)
                }
            }

            impl<'v, S: $crate::operand::Operand, $($gen)*> core::ops::Add<&'v $crate::vector::Vector<S>> for $lhs {
                type Output = $crate::error::Result<$crate::vector::Vector>;
                #[inline]
                fn add(self, rhs: &'v $crate::vector::Vector<S>) -> Self::Output {
                    $crate::ops::add(&self, rhs)
                }
            }

            impl<S: $crate::operand::Operand, $($gen)*> $crate::ops::Dot<$crate::vector::Vector<S>> for $lhs {
                type Output = $crate::error::Result<$crate::scalar::Scalar>;
                #[inline]
                fn dot(self, rhs: $crate::vector::Vector<S>) -> Self::Output {
                    $crate::ops::dot(&self, &rhs)
                }
            }

            impl<'v, S: $crate::operand::Operand, $($gen)*> $crate::ops::Dot<&'v $crate::vector::Vector<S>> for $lhs {
                type Output = $crate::error::Result<$crate::scalar::Scalar>;
                #[inline]
                fn dot(self, rhs: &'v $crate::vector::Vector<S>) -> Self::Output {
                    $crate::ops::dot(&self, rhs)
                }
            }
        )*
    };
}

pub(crate) use impl_reflected;

impl_reflected!(
    [T: Element] Vec<T>,
    [T: Element, const N: usize] [T; N],
    [] Range<i32>,
    [] Range<i64>,
    [] Range<u32>,
    [] Range<usize>,
);

impl<'a, S: Operand, T: Element> Add<Vector<S>> for &'a [T] {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: Vector<S>) -> Self::Output {
        crate::ops::add(&self, &rhs)
    }
}

impl<'a, 'v, S: Operand, T: Element> Add<&'v Vector<S>> for &'a [T] {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: &'v Vector<S>) -> Self::Output {
        crate::ops::add(&self, rhs)
    }
}

impl<'a, S: Operand, T: Element> Dot<Vector<S>> for &'a [T] {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: Vector<S>) -> Self::Output {
        crate::ops::dot(&self, &rhs)
    }
}

impl<'a, 'v, S: Operand, T: Element> Dot<&'v Vector<S>> for &'a [T] {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: &'v Vector<S>) -> Self::Output {
        crate::ops::dot(&self, rhs)
    }
}

impl<'a, S: Operand, T: Element> Add<Vector<S>> for &'a Vec<T> {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: Vector<S>) -> Self::Output {
        self.as_slice() + rhs
    }
}

impl<'a, 'v, S: Operand, T: Element> Add<&'v Vector<S>> for &'a Vec<T> {
    type Output = Result<Vector>;
    #[inline]
    fn add(self, rhs: &'v Vector<S>) -> Self::Output {
        self.as_slice() + rhs
    }
}

impl<'a, S: Operand, T: Element> Dot<Vector<S>> for &'a Vec<T> {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: Vector<S>) -> Self::Output {
        self.as_slice().dot(rhs)
    }
}

impl<'a, 'v, S: Operand, T: Element> Dot<&'v Vector<S>> for &'a Vec<T> {
    type Output = Result<Scalar>;
    #[inline]
    fn dot(self, rhs: &'v Vector<S>) -> Self::Output {
        self.as_slice().dot(rhs)
    }
}

macro_rules! impl_reflected_scale {
    ($($t:ty),*) => {
        $(
            impl<S: Operand> Mul<Vector<S>> for $t {
                type Output = Result<Vector>;
                #[inline]
                fn mul(self, rhs: Vector<S>) -> Self::Output {
                    scale(&rhs, Scalar::from(self))
                }
            }

            impl<'v, S: Operand> Mul<&'v Vector<S>> for $t {
                type Output = Result<Vector>;
                #[inline]
                fn mul(self, rhs: &'v Vector<S>) -> Self::Output {
                    scale(rhs, Scalar::from(self))
                }
            }
        )*
    };
}

// One integer type only, so an unsuffixed literal on the left still infers.
impl_reflected_scale!(i64, f32, f64, Scalar);

#[cfg(test)]
mod test {
    use super::{add, dot, Dot};
    use crate::{
        error::{ComponentError, VectorError},
        operand::Operand,
        scalar::Scalar,
        vector::Vector,
    };
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn v(components: &[i64]) -> Vector {
        Vector::new(components.iter().map(|&c| Scalar::Int(c)).collect())
    }

    #[test]
    fn test_add_vectors() {
        let v1 = Vector::new([4, 2, 7]);
        let v2 = Vector::new([1, -1, 3]);
        assert_eq!((&v1 + &v2).unwrap(), v(&[5, 1, 10]));
    }

    #[test]
    fn test_add_foreign_sequences() {
        let v1 = Vector::new([4, 2, 7]);
        assert_eq!((&v1 + vec![-1i64, -1, 3]).unwrap(), v(&[3, 1, 10]));
        assert_eq!((vec![-1i64, -1, 3] + &v1).unwrap(), v(&[3, 1, 10]));
        assert_eq!((&v1 + (0i64..3)).unwrap(), v(&[4, 3, 9]));
        assert_eq!((&v1 + (0i64..2)).unwrap(), v(&[4, 3, 7]));
        assert_eq!(((0i64..2) + &v1).unwrap(), v(&[4, 3, 7]));
        assert_eq!(([10i64, 20] + v1).unwrap(), v(&[14, 22, 7]));
    }

    #[test]
    fn test_borrowed_sequences_on_the_left() {
        let v1 = Vector::new([4, 2, 7]);
        let data = vec![-1i64, -1, 3];
        assert_eq!((&data[..] + &v1).unwrap(), v(&[3, 1, 10]));
        assert_eq!((&data + &v1).unwrap(), v(&[3, 1, 10]));
        assert_eq!((&data[..]).dot(&v1), Ok(Scalar::Int(15)));
        assert_eq!((&data).dot(&v1), Ok(Scalar::Int(15)));
        assert_eq!((&data[..2] + v1.clone()).unwrap(), v(&[3, 1, 7]));
        assert_eq!((&data).dot(v1), Ok(Scalar::Int(15)));
        assert_eq!(data, vec![-1, -1, 3]);
    }

    #[test]
    fn test_add_pads_with_zero() {
        let short = Vector::new([1, 2, 3]);
        let long = Vector::new([10, 20, 30, 40, 50]);
        assert_eq!((&short + &long).unwrap(), v(&[11, 22, 33, 40, 50]));
        assert_eq!((&long + &short).unwrap(), v(&[11, 22, 33, 40, 50]));
    }

    #[test]
    fn test_add_empty_is_identity() {
        let v1 = Vector::new([4, 2, 7]);
        assert_eq!((&v1 + Vec::<i64>::new()).unwrap(), v1);
        assert_eq!((Vec::<i64>::new() + &v1).unwrap(), v1);
        let empty: Vector = Vector::default();
        assert!((&empty + &empty).unwrap().is_empty());
    }

    #[test]
    fn test_add_mixed_numeric_types() {
        let ints = Vector::new([1, 2]);
        let reals = Vector::new([0.5, 0.25, 1.0]);
        let sum = (&ints + &reals).unwrap();
        assert_eq!(sum, Vector::new([1.5, 2.25, 1.0]));
        assert!(!sum.get(0).unwrap().is_int());
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let data = vec![4, 2, 7];
        let v1 = Vector::new(&data[..]);
        let other = vec![1, 1, 1, 1];
        let sum = (&v1 + &other).unwrap();
        assert_eq!(sum, v(&[5, 3, 8, 1]));
        assert_eq!(data, vec![4, 2, 7]);
        assert_eq!(other, vec![1, 1, 1, 1]);
        assert_eq!(v1.len(), 3);
    }

    #[test]
    fn test_add_non_numeric_is_unsupported() {
        let v1 = Vector::new([1, 2, 3]);
        assert_eq!(
            &v1 + "not-a-sequence-of-numbers",
            Err(VectorError::UnsupportedOperands {
                op: "+",
                lhs: "Vector",
                rhs: "str"
            })
        );
        assert_eq!(
            add(&"abc", &v1),
            Err(VectorError::UnsupportedOperands {
                op: "+",
                lhs: "str",
                rhs: "Vector"
            })
        );
        assert!(matches!(
            &v1 + vec![String::from("a")],
            Err(VectorError::UnsupportedOperands { op: "+", .. })
        ));
    }

    #[test]
    fn test_add_without_vector_is_unsupported() {
        assert_eq!(
            add(&vec![1i64], &[2i64]),
            Err(VectorError::UnsupportedOperands {
                op: "+",
                lhs: "Vec",
                rhs: "array"
            })
        );
    }

    struct ShortStorage;

    impl Operand for ShortStorage {
        fn len(&self) -> usize {
            3
        }

        fn component(&self, index: usize) -> Result<Scalar, ComponentError> {
            if index < 2 {
                Ok(Scalar::Int(1))
            } else {
                Err(ComponentError::OutOfRange { index, len: 2 })
            }
        }
    }

    #[test]
    fn test_index_error_propagates() {
        let v1 = Vector::new([1, 2, 3]);
        assert_eq!(
            &v1 + ShortStorage,
            Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            (&v1).dot(ShortStorage),
            Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_scale() {
        let v1 = Vector::new([4, 2, 7]);
        assert_eq!((&v1 * 3).unwrap(), v(&[12, 6, 21]));
        assert_eq!((3 * &v1).unwrap(), v(&[12, 6, 21]));
        assert_eq!((&v1 * 0.5).unwrap(), Vector::new([2.0, 1.0, 3.5]));
        assert_eq!((Scalar::Int(-1) * v1).unwrap(), v(&[-4, -2, -7]));
    }

    #[test]
    fn test_scale_non_numeric_fails() {
        let words = Vector::new(["a", "b"]);
        assert_eq!(
            &words * 2,
            Err(VectorError::UnsupportedOperands {
                op: "*",
                lhs: "Vector",
                rhs: "Scalar"
            })
        );
    }

    #[test]
    fn test_dot() {
        let v1 = Vector::new([4, 2, 7]);
        let v2 = Vector::new([1, -1, 3]);
        assert_eq!((&v1).dot(&v2), Ok(Scalar::Int(23)));
        assert_eq!((&v2).dot(&v1), Ok(Scalar::Int(23)));
        assert_eq!((&v1).dot(vec![-1i64, -1, 3]), Ok(Scalar::Int(15)));
        assert_eq!(vec![-1i64, -1, 3].dot(&v1), Ok(Scalar::Int(15)));
        assert_eq!([-1i64, -1, 3].dot(v1), Ok(Scalar::Int(15)));
    }

    #[test]
    fn test_dot_pads_with_zero() {
        let v1 = Vector::new([1, 2, 3]);
        assert_eq!((&v1).dot(0i64..2), Ok(Scalar::Int(2)));
        assert_eq!((0i64..10).dot(&v1), Ok(Scalar::Int(8)));
        let empty: Vector = Vector::default();
        assert_eq!((&empty).dot(&empty), Ok(Scalar::Int(0)));
    }

    #[test]
    fn test_dot_non_numeric_is_unsupported() {
        let v1 = Vector::new([1, 2, 3]);
        assert_eq!(
            dot(&"xyz", &v1),
            Err(VectorError::UnsupportedOperands {
                op: "@",
                lhs: "str",
                rhs: "Vector"
            })
        );
    }

    #[test]
    fn test_random_operands_commute() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let a_len = rng.gen_range(0..8);
            let b_len = rng.gen_range(0..8);
            let a: Vec<i64> = (0..a_len).map(|_| rng.gen_range(-100..100)).collect();
            let b: Vec<i64> = (0..b_len).map(|_| rng.gen_range(-100..100)).collect();
            let va = Vector::new(a.clone());

            let forward = (&va + &b).unwrap();
            let reflected = (b.clone() + &va).unwrap();
            assert_eq!(forward, reflected);
            assert_eq!(forward.len(), a_len.max(b_len));

            let vb = Vector::new(b.clone());
            assert_eq!((&va + &vb).unwrap(), (&vb + &va).unwrap());

            assert_eq!((&va).dot(&b).unwrap(), b.clone().dot(&va).unwrap());
            assert_eq!((&va).dot(&vb).unwrap(), (&vb).dot(&va).unwrap());

            let k = rng.gen_range(-10..10i64);
            assert_eq!((&va * k).unwrap(), (k * &va).unwrap());
        }
    }
}
