//! Error types for the benchset core library.
//!
//! Defines the error enum exposed by the public API, stable machine-readable
//! error codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when constructing, regenerating, or indexing a
/// [`crate::Sequence`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SequenceError {
    /// The requested generation range was inverted.
    #[error("invalid bounds: upper {upper} is less than lower {lower}")]
    InvalidBounds {
        /// Rendered lower limit supplied by the caller.
        lower: String,
        /// Rendered upper limit supplied by the caller.
        upper: String,
    },
    /// The requested sequence length was zero.
    #[error("sequence length must be at least 1")]
    ZeroLength,
    /// A checked element access fell outside the sequence.
    #[error("index {index} is out of bounds for length {length}")]
    IndexOutOfBounds {
        /// Requested element position.
        index: usize,
        /// Length of the sequence that rejected the access.
        length: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SequenceError`] variants.
    enum SequenceErrorCode for SequenceError {
        /// The requested generation range was inverted.
        InvalidBounds => InvalidBounds { .. } => "SEQUENCE_INVALID_BOUNDS",
        /// The requested sequence length was zero.
        ZeroLength => ZeroLength => "SEQUENCE_ZERO_LENGTH",
        /// A checked element access fell outside the sequence.
        IndexOutOfBounds => IndexOutOfBounds { .. } => "SEQUENCE_INDEX_OUT_OF_BOUNDS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::{SequenceError, SequenceErrorCode};

    #[test]
    fn codes_are_stable() {
        let err = SequenceError::InvalidBounds {
            lower: "10".to_owned(),
            upper: "5".to_owned(),
        };
        assert_eq!(err.code(), SequenceErrorCode::InvalidBounds);
        assert_eq!(err.code().as_str(), "SEQUENCE_INVALID_BOUNDS");
        assert_eq!(
            SequenceError::ZeroLength.code().to_string(),
            "SEQUENCE_ZERO_LENGTH"
        );
    }
}
