//! A small vector value type over arbitrary numeric sequences.
//!
//! Operands of different lengths are zero-padded on the right before `+` and
//! dot product, and any ordered numeric sequence may sit on either side of an
//! operator with a `Vector`.
//!
//! ```
//! use vector::{Dot, Scalar, Vector};
//!
//! let v1 = Vector::new([4, 2, 7]);
//! assert_eq!((&v1 + vec![-1, -1, 3]).unwrap(), Vector::new([3, 1, 10]));
//! assert_eq!((&v1 + (0i64..2)).unwrap(), Vector::new([4, 3, 7]));
//! assert_eq!((&v1 * 3).unwrap(), Vector::new([12, 6, 21]));
//! assert_eq!((&v1).dot(vec![-1, -1, 3]).unwrap(), Scalar::Int(15));
//! ```
pub mod error;
mod glam_ext;
pub mod operand;
pub mod ops;
pub mod pad;
pub mod repr;
pub mod scalar;
pub mod vector;

pub use error::{ComponentError, Result, VectorError};
pub use operand::{Element, Operand};
pub use ops::{Dot, Outcome};
pub use pad::pad;
pub use repr::ReprLimits;
pub use scalar::Scalar;
pub use vector::Vector;
