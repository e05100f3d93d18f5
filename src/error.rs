//! Errors raised while constructing or converting colors.

use num_traits::ToPrimitive;
use thiserror::Error;

use crate::color::{Component, Space};

/// A specialized [`Result`](std::result::Result) for color operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong constructing or converting a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token could not be read as the kind of number the component needs.
    #[error("{token:?} is not a valid {expected} for the {component} of {space}")]
    Parse {
        /// The space being constructed.
        space: Space,
        /// The component the token was meant for.
        component: &'static str,
        /// The offending token.
        token: String,
        /// The kind of number that was expected.
        expected: &'static str,
    },

    /// A component was a number, but outside the legal range of its space.
    #[error("the {component} of {space} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The space being constructed.
        space: Space,
        /// The component that is out of range.
        component: &'static str,
        /// The rejected value.
        value: Component,
        /// The smallest legal value.
        min: Component,
        /// The largest legal value.
        max: Component,
    },

    /// A hexadecimal color token did not have the shape `#RRGGBB`.
    #[error("expected 6 hexadecimal digits with an optional leading '#', got {0:?}")]
    MalformedHex(String),

    /// The wrong number of tokens were given for a space.
    #[error("{space} takes {expected} values, got {actual}")]
    Arity {
        /// The space being constructed.
        space: Space,
        /// The number of tokens the space needs.
        expected: usize,
        /// The number of tokens given.
        actual: usize,
    },

    /// A space name or flag was not recognized.
    #[error("unknown color space {0:?}")]
    UnknownSpace(String),

    /// A conversion formula was asked to work outside its validity range.
    #[error("cannot convert {value} from {space}: {reason}")]
    Unsupported {
        /// The space being converted from.
        space: Space,
        /// The value that could not be converted.
        value: Component,
        /// Why the conversion is not possible.
        reason: &'static str,
    },

    /// No chain of conversions connects two spaces.
    #[error("no conversion from {from} to {to}")]
    NoRoute {
        /// The source space.
        from: Space,
        /// The destination space.
        to: Space,
    },

    /// A conversion step was handed a color in the wrong space.
    #[error("expected a color in {expected}, got one in {actual}")]
    Mismatch {
        /// The space the step converts from.
        expected: Space,
        /// The space of the color it was handed.
        actual: Space,
    },
}

/// The broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token is not a number of the expected kind, or names nothing.
    Parse,
    /// A number lies outside the domain of its space or formula.
    Range,
    /// The tokens have the wrong shape or count.
    Malformed,
    /// The conversion engine was misused.
    Internal,
}

impl Error {
    /// Collapse the error into its broad class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } | Error::UnknownSpace(_) => ErrorKind::Parse,
            Error::OutOfRange { .. } | Error::Unsupported { .. } => ErrorKind::Range,
            Error::MalformedHex(_) | Error::Arity { .. } => ErrorKind::Malformed,
            Error::NoRoute { .. } | Error::Mismatch { .. } => ErrorKind::Internal,
        }
    }
}

/// Return `value` if it is finite and within `min..=max`, otherwise an
/// [`Error::OutOfRange`] for the given component.
pub(crate) fn check_range<T>(
    space: Space,
    component: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<T>
where
    T: PartialOrd + ToPrimitive + Copy,
{
    let as_component = value.to_f64().unwrap_or(Component::NAN);
    if as_component.is_finite() && value >= min && value <= max {
        return Ok(value);
    }

    Err(Error::OutOfRange {
        space,
        component,
        value: as_component,
        min: min.to_f64().unwrap_or(Component::NAN),
        max: max.to_f64().unwrap_or(Component::NAN),
    })
}
