use crate::{error::ComponentError, operand::Operand, scalar::Scalar};

/// Copies both operands into sequences of the longer operand's length,
/// zero-extending the shorter one on the right.
pub fn pad<L, R>(left: &L, right: &R) -> Result<(Vec<Scalar>, Vec<Scalar>), ComponentError>
where
    L: Operand + ?Sized,
    R: Operand + ?Sized,
{
    let left_len = left.len();
    let right_len = right.len();
    let maxlen = left_len.max(right_len);
    let mut out_left = reserve(maxlen)?;
    let mut out_right = reserve(maxlen)?;
    for i in 0..maxlen {
        out_left.push(if i < left_len {
            left.component(i)?
        } else {
            Scalar::ZERO
        });
        out_right.push(if i < right_len {
            right.component(i)?
        } else {
            Scalar::ZERO
        });
    }
    Ok((out_left, out_right))
}

/// An empty buffer with room for `len` components, or `TooLong` when the
/// allocation can't be made.
pub(crate) fn reserve(len: usize) -> Result<Vec<Scalar>, ComponentError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| ComponentError::TooLong { len })?;
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::pad;
    use crate::{error::ComponentError, scalar::Scalar};

    fn ints(v: &[i64]) -> Vec<Scalar> {
        v.iter().map(|&i| Scalar::Int(i)).collect()
    }

    #[test]
    fn test_pad_shorter_left() {
        let (l, r) = pad(&(0i64..2), &(5i64..10)).unwrap();
        assert_eq!(l, ints(&[0, 1, 0, 0, 0]));
        assert_eq!(r, ints(&[5, 6, 7, 8, 9]));
    }

    #[test]
    fn test_pad_shorter_right() {
        let (l, r) = pad(&vec![1, 2, 3], &(0i64..10)).unwrap();
        assert_eq!(l, ints(&[1, 2, 3, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(r, ints(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
    }

    #[test]
    fn test_pad_equal_lengths_is_copy() {
        let (l, r) = pad(&[4, 2, 7], &[1, -1, 3]).unwrap();
        assert_eq!(l, ints(&[4, 2, 7]));
        assert_eq!(r, ints(&[1, -1, 3]));
    }

    #[test]
    fn test_pad_empty() {
        let empty: [i64; 0] = [];
        let (l, r) = pad(&empty, &empty).unwrap();
        assert!(l.is_empty());
        assert!(r.is_empty());
    }

    #[test]
    fn test_pad_surfaces_first_bad_component() {
        let err = pad(&[1, 2], "ab").unwrap_err();
        assert_eq!(
            err,
            ComponentError::NotNumeric {
                index: 0,
                type_name: "str"
            }
        );
    }

    #[test]
    fn test_pad_unallocatable_length() {
        let err = pad(&[1, 2, 3], &(0usize..usize::MAX)).unwrap_err();
        assert_eq!(err, ComponentError::TooLong { len: usize::MAX });
    }
}
