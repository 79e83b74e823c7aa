// MIT/Apache2 License

use std::fmt;

/// Error type for shape and transform operations.
pub struct Error {
    kind: Kind,
}

enum Kind {
    InvalidArgument(InvalidArgument),
}

/// An argument that was rejected before any computation happened.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidArgument {
    /// A coordinate, length, factor or angle was NaN or infinite.
    NotFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was passed in.
        value: f64,
    },
    /// Every argument was finite, but together they put a point out of range.
    Overflow {
        /// The shape that was being generated.
        shape: &'static str,
    },
}

impl Error {
    #[inline]
    pub(crate) fn not_finite(name: &'static str, value: f64) -> Self {
        Error {
            kind: Kind::InvalidArgument(InvalidArgument::NotFinite { name, value }),
        }
    }

    #[inline]
    pub(crate) fn overflow(shape: &'static str) -> Self {
        Error {
            kind: Kind::InvalidArgument(InvalidArgument::Overflow { shape }),
        }
    }

    /// Is this error an invalid argument error?
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, Kind::InvalidArgument(_))
    }

    /// Get the rejected argument, if this error was caused by one.
    #[inline]
    pub fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match self.kind {
            Kind::InvalidArgument(ref arg) => Some(arg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct KindFmt<'a>(&'a Kind);

        impl<'a> fmt::Debug for KindFmt<'a> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Kind::InvalidArgument(arg) => fmt::Debug::fmt(arg, f),
                }
            }
        }

        f.debug_tuple("Error").field(&KindFmt(&self.kind)).finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::InvalidArgument(InvalidArgument::NotFinite { name, value }) => {
                write!(f, "Argument \"{}\" must be finite, got {}", name, value)
            }
            Kind::InvalidArgument(InvalidArgument::Overflow { shape }) => {
                write!(f, "Arguments to {} produce coordinates out of range", shape)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience result type.
pub type Result<T = ()> = core::result::Result<T, Error>;
