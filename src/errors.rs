//! Errors which may be returned from the `arcball` crate.

use std::{error::Error as StdError, fmt};

/// Represents an error which occurred when attempting to resize the viewport
/// of an `Arcball`.
///
/// The arcball needs a strictly positive, finite surface to normalise pointer
/// coordinates against. Anything else is a programming error on the caller's
/// side, which is why [`Arcball::set_viewport_size`][`Arcball::set_viewport_size`]
/// panics with this value, while [`Arcball::try_set_viewport_size`]
/// [`Arcball::try_set_viewport_size`] hands it back.
///
/// [`Arcball::set_viewport_size`]: ../struct.Arcball.html#method.set_viewport_size
/// [`Arcball::try_set_viewport_size`]: ../struct.Arcball.html#method.try_set_viewport_size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// At least one of the dimensions was `0` or less.
    ZeroOrNegative {
        /// The rejected width.
        width: f32,
        /// The rejected height.
        height: f32,
    },
    /// At least one of the dimensions was `NaN` or infinite.
    NonFinite {
        /// The rejected width.
        width: f32,
        /// The rejected height.
        height: f32,
    },
}

impl ViewportError {
    /// Check `width` and `height`, returning the matching error if they cannot
    /// describe a viewport.
    #[inline]
    pub(crate) fn check(width: f32, height: f32) -> Result<(), Self> {
        if !width.is_finite() || !height.is_finite() {
            Err(ViewportError::NonFinite { width, height })
        } else if width <= 0.0 || height <= 0.0 {
            Err(ViewportError::ZeroOrNegative { width, height })
        } else {
            Ok(())
        }
    }

    /// Returns the `(width, height)` pair which was rejected.
    #[inline]
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            ViewportError::ZeroOrNegative { width, height }
            | ViewportError::NonFinite { width, height } => (width, height),
        }
    }

    #[inline]
    fn reason(&self) -> &'static str {
        match *self {
            ViewportError::ZeroOrNegative { .. } => "viewport dimensions must be greater than 0",
            ViewportError::NonFinite { .. } => "viewport dimensions must be finite",
        }
    }
}

impl fmt::Display for ViewportError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{}: got {}x{}", self.reason(), width, height)
    }
}

impl StdError for ViewportError {}

#[cfg(test)]
mod tests {
    use super::ViewportError;

    #[test]
    fn check_accepts_positive_dimensions() {
        assert_eq!(ViewportError::check(800.0, 600.0), Ok(()));
        assert_eq!(ViewportError::check(0.5, 1e6), Ok(()));
    }

    #[test]
    fn check_rejects_degenerate_dimensions() {
        assert_eq!(
            ViewportError::check(0.0, 600.0),
            Err(ViewportError::ZeroOrNegative {
                width: 0.0,
                height: 600.0
            })
        );
        assert_eq!(
            ViewportError::check(800.0, -1.0),
            Err(ViewportError::ZeroOrNegative {
                width: 800.0,
                height: -1.0
            })
        );

        let err = ViewportError::check(std::f32::INFINITY, 600.0).unwrap_err();
        assert_eq!(err.dimensions(), (std::f32::INFINITY, 600.0));
        assert!(ViewportError::check(std::f32::NAN, 600.0).is_err());
    }

    #[test]
    fn display_mentions_dimensions() {
        let err = ViewportError::ZeroOrNegative {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(
            err.to_string(),
            "viewport dimensions must be greater than 0: got 0x600"
        );
    }
}
