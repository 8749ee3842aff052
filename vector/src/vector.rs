use crate::{
    error::{ComponentError, Result},
    operand::Operand,
    ops::Outcome,
    pad::{pad, reserve},
    repr::{bounded_components, ReprLimits},
    scalar::Scalar,
};
use core::fmt;
use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

/// A mathematical vector over any ordered numeric sequence.
///
/// The storage is wrapped as given and never copied, so a `Vector` can sit
/// on top of a borrowed slice, an `Rc`/`Arc` shared with the caller, a lazy
/// range or an owned `Vec`. Arithmetic never touches the operands and always
/// returns a new owned `Vector`.
#[derive(Clone)]
pub struct Vector<S = Vec<Scalar>> {
    storage: S,
}

impl<S> Vector<S> {
    /// Wraps `storage` without copying or validating it.
    #[inline]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: Operand> Vector<S> {
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<Scalar> {
        Ok(self.storage.component(index)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = Result<Scalar>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Result<Vec<Scalar>> {
        self.iter().collect()
    }

    pub fn repr_with(&self, limits: &ReprLimits) -> String {
        format!("Vector({})", bounded_components(&self.storage, limits))
    }
}

impl Vector {
    /// Copying alternative to `new`, for callers that don't want the vector
    /// to alias their storage.
    pub fn copied<O: Operand + ?Sized>(operand: &O) -> Result<Self> {
        let mut components = reserve(operand.len())?;
        for i in 0..operand.len() {
            components.push(operand.component(i)?);
        }
        Ok(Self::new(components))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.storage
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn declined<T>(err: ComponentError) -> Result<Outcome<T>> {
    match err {
        ComponentError::NotNumeric { .. } => Ok(Outcome::NotImplemented),
        ComponentError::OutOfRange { .. } | ComponentError::TooLong { .. } => Err(err.into()),
    }
}

fn add_padded<L: Operand + ?Sized>(lhs: &L, rhs: &dyn Operand) -> Result<Outcome<Vector>> {
    match pad(lhs, rhs) {
        Ok((left, right)) => Ok(Outcome::Value(Vector::new(
            left.into_iter().zip(right).map(|(a, b)| a + b).collect(),
        ))),
        Err(err) => declined(err),
    }
}

fn dot_padded<L: Operand + ?Sized>(lhs: &L, rhs: &dyn Operand) -> Result<Outcome<Scalar>> {
    match pad(lhs, rhs) {
        Ok((left, right)) => Ok(Outcome::Value(
            left.into_iter().zip(right).map(|(a, b)| a * b).sum(),
        )),
        Err(err) => declined(err),
    }
}

impl<S: Operand> Operand for Vector<S> {
    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        self.storage.component(index)
    }

    fn type_name(&self) -> &'static str {
        "Vector"
    }

    fn try_add(&self, rhs: &dyn Operand) -> Result<Outcome<Vector>> {
        add_padded(self, rhs)
    }

    // addition commutes, so `lhs + self` is computed as `self + lhs`
    fn try_radd(&self, lhs: &dyn Operand) -> Result<Outcome<Vector>> {
        add_padded(self, lhs)
    }

    fn try_dot(&self, rhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        dot_padded(self, rhs)
    }

    fn try_rdot(&self, lhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        dot_padded(self, lhs)
    }

    fn try_scale(&self, k: Scalar) -> Result<Outcome<Vector>> {
        let mut components = reserve(self.len())?;
        for i in 0..self.len() {
            match self.storage.component(i) {
                Ok(c) => components.push(c * k),
                Err(err) => return declined(err),
            }
        }
        Ok(Outcome::Value(Vector::new(components)))
    }
}

impl<S: Operand, T: Operand> PartialEq<Vector<T>> for Vector<S> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.len() == other.len()
            && (0..self.len()).all(|i| match (self.get(i), other.get(i)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            })
    }
}

impl<S: Operand> fmt::Display for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr_with(&ReprLimits::default()))
    }
}

impl<S: Operand> fmt::Debug for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<S: Operand> Serialize for Vector<S> {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> core::result::Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for i in 0..self.len() {
            let c = self
                .storage
                .component(i)
                .map_err(<Ser::Error as serde::ser::Error>::custom)?;
            seq.serialize_element(&c)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        Vec::<Scalar>::deserialize(deserializer).map(Vector::new)
    }
}
