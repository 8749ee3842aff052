use crate::{
    error::{ComponentError, Result},
    ops::Outcome,
    scalar::Scalar,
    vector::Vector,
};
use core::ops::Range;
use serde_json::Value;
use std::{rc::Rc, sync::Arc};

/// A stored item that may be read as a number.
pub trait Element {
    fn to_scalar(&self) -> Option<Scalar>;

    /// Short name used in error messages when the item is not numeric.
    fn kind(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

macro_rules! impl_numeric_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_scalar(&self) -> Option<Scalar> {
                    Some(Scalar::from(*self))
                }
            }
        )*
    };
}

impl_numeric_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Element for Scalar {
    #[inline]
    fn to_scalar(&self) -> Option<Scalar> {
        Some(*self)
    }
}

impl Element for Value {
    fn to_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Int)
                .or_else(|| n.as_f64().map(Scalar::Real)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Element for str {
    fn to_scalar(&self) -> Option<Scalar> {
        None
    }

    fn kind(&self) -> &'static str {
        "str"
    }
}

impl Element for String {
    fn to_scalar(&self) -> Option<Scalar> {
        None
    }

    fn kind(&self) -> &'static str {
        "str"
    }
}

impl Element for bool {
    fn to_scalar(&self) -> Option<Scalar> {
        None
    }

    fn kind(&self) -> &'static str {
        "bool"
    }
}

impl Element for char {
    fn to_scalar(&self) -> Option<Scalar> {
        None
    }

    fn kind(&self) -> &'static str {
        "char"
    }
}

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn to_scalar(&self) -> Option<Scalar> {
        (**self).to_scalar()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// Anything with a length and indexed numeric read.
///
/// The `try_*` hooks implement the operators. An operand that does not know
/// how to combine with the other side returns `Outcome::NotImplemented` and
/// the dispatch in `ops` gives the other operand a chance. Plain sequences
/// keep the defaults; `Vector` overrides them.
pub trait Operand {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError>;

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    fn try_add(&self, _rhs: &dyn Operand) -> Result<Outcome<Vector>> {
        Ok(Outcome::NotImplemented)
    }

    fn try_radd(&self, _lhs: &dyn Operand) -> Result<Outcome<Vector>> {
        Ok(Outcome::NotImplemented)
    }

    fn try_dot(&self, _rhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        Ok(Outcome::NotImplemented)
    }

    fn try_rdot(&self, _lhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        Ok(Outcome::NotImplemented)
    }

    fn try_scale(&self, _k: Scalar) -> Result<Outcome<Vector>> {
        Ok(Outcome::NotImplemented)
    }
}

fn read<T: Element>(items: &[T], index: usize) -> core::result::Result<Scalar, ComponentError> {
    let item = items.get(index).ok_or(ComponentError::OutOfRange {
        index,
        len: items.len(),
    })?;
    item.to_scalar().ok_or_else(|| ComponentError::NotNumeric {
        index,
        type_name: item.kind(),
    })
}

impl<T: Element> Operand for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        read(self, index)
    }

    fn type_name(&self) -> &'static str {
        "slice"
    }
}

impl<T: Element> Operand for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        read(self.as_slice(), index)
    }

    fn type_name(&self) -> &'static str {
        "Vec"
    }
}

impl<T: Element, const N: usize> Operand for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        read(&self[..], index)
    }

    fn type_name(&self) -> &'static str {
        "array"
    }
}

macro_rules! impl_range_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for Range<$t> {
                fn len(&self) -> usize {
                    if self.end > self.start {
                        (self.end as i128 - self.start as i128) as usize
                    } else {
                        0
                    }
                }

                fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
                    let len = Operand::len(self);
                    if index >= len {
                        return Err(ComponentError::OutOfRange { index, len });
                    }
                    Ok(Scalar::from(self.start as i128 + index as i128))
                }

                fn type_name(&self) -> &'static str {
                    "Range"
                }
            }
        )*
    };
}

impl_range_operand!(i32, i64, u32, usize);

/// Strings have a length but no numeric components, so every arithmetic
/// operator involving one is unsupported.
impl Operand for str {
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        let len = Operand::len(self);
        if index >= len {
            return Err(ComponentError::OutOfRange { index, len });
        }
        Err(ComponentError::NotNumeric {
            index,
            type_name: "str",
        })
    }

    fn type_name(&self) -> &'static str {
        "str"
    }
}

impl Operand for String {
    fn len(&self) -> usize {
        Operand::len(self.as_str())
    }

    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        self.as_str().component(index)
    }

    fn type_name(&self) -> &'static str {
        "str"
    }
}

// Pointer-like wrappers forward everything, including the operator hooks, so
// a borrowed or shared `Vector` still takes part in reflected dispatch.
macro_rules! impl_forward_operand {
    ($($ptr:ident),*) => {
        $(
            impl<T: Operand + ?Sized> Operand for $ptr<T> {
                #[inline]
                fn len(&self) -> usize {
                    (**self).len()
                }

                #[inline]
                fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
                    (**self).component(index)
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn try_add(&self, rhs: &dyn Operand) -> Result<Outcome<Vector>> {
                    (**self).try_add(rhs)
                }

                fn try_radd(&self, lhs: &dyn Operand) -> Result<Outcome<Vector>> {
                    (**self).try_radd(lhs)
                }

                fn try_dot(&self, rhs: &dyn Operand) -> Result<Outcome<Scalar>> {
                    (**self).try_dot(rhs)
                }

                fn try_rdot(&self, lhs: &dyn Operand) -> Result<Outcome<Scalar>> {
                    (**self).try_rdot(lhs)
                }

                fn try_scale(&self, k: Scalar) -> Result<Outcome<Vector>> {
                    (**self).try_scale(k)
                }
            }
        )*
    };
}

impl_forward_operand!(Box, Rc, Arc);

impl<T: Operand + ?Sized> Operand for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn component(&self, index: usize) -> core::result::Result<Scalar, ComponentError> {
        (**self).component(index)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn try_add(&self, rhs: &dyn Operand) -> Result<Outcome<Vector>> {
        (**self).try_add(rhs)
    }

    fn try_radd(&self, lhs: &dyn Operand) -> Result<Outcome<Vector>> {
        (**self).try_radd(lhs)
    }

    fn try_dot(&self, rhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        (**self).try_dot(rhs)
    }

    fn try_rdot(&self, lhs: &dyn Operand) -> Result<Outcome<Scalar>> {
        (**self).try_rdot(lhs)
    }

    fn try_scale(&self, k: Scalar) -> Result<Outcome<Vector>> {
        (**self).try_scale(k)
    }
}

#[cfg(test)]
mod test {
    use super::Operand;
    use crate::{error::ComponentError, scalar::Scalar};
    use serde_json::json;

    #[test]
    fn test_slice_read() {
        let data = [4, 2, 7];
        let s: &[i32] = &data;
        assert_eq!(Operand::len(s), 3);
        assert_eq!(s.component(2), Ok(Scalar::Int(7)));
        assert_eq!(
            s.component(3),
            Err(ComponentError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_range_read() {
        let r = 5i64..10;
        assert_eq!(Operand::len(&r), 5);
        assert_eq!(r.component(0), Ok(Scalar::Int(5)));
        assert_eq!(r.component(4), Ok(Scalar::Int(9)));
        assert!(r.component(5).is_err());

        let empty = 3usize..1;
        assert!(Operand::is_empty(&empty));
    }

    #[test]
    fn test_json_values() {
        let v = vec![json!(1), json!(2.5), json!("x")];
        assert_eq!(v.component(0), Ok(Scalar::Int(1)));
        assert_eq!(v.component(1), Ok(Scalar::Real(2.5)));
        assert_eq!(
            v.component(2),
            Err(ComponentError::NotNumeric {
                index: 2,
                type_name: "string"
            })
        );
    }

    #[test]
    fn test_str_is_not_numeric() {
        let s = "abc";
        assert_eq!(Operand::len(s), 3);
        assert_eq!(
            s.component(0),
            Err(ComponentError::NotNumeric {
                index: 0,
                type_name: "str"
            })
        );
        assert_eq!(
            s.component(3),
            Err(ComponentError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_strings_in_vec() {
        let v = vec![String::from("a")];
        assert_eq!(
            v.component(0),
            Err(ComponentError::NotNumeric {
                index: 0,
                type_name: "str"
            })
        );
    }
}
