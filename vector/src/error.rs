use thiserror::Error;

/// Failure reading a single component out of an operand.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("component {index} of type '{type_name}' is not a number")]
    NotNumeric {
        index: usize,
        type_name: &'static str,
    },

    #[error("cannot allocate {len} components")]
    TooLong { len: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("component {index} of type '{type_name}' is not a number")]
    NonNumericComponent {
        index: usize,
        type_name: &'static str,
    },

    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("cannot allocate {len} components")]
    TooLong { len: usize },
}

impl From<ComponentError> for VectorError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::OutOfRange { index, len } => VectorError::IndexOutOfRange { index, len },
            ComponentError::NotNumeric { index, type_name } => {
                VectorError::NonNumericComponent { index, type_name }
            }
            ComponentError::TooLong { len } => VectorError::TooLong { len },
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
