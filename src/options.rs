//! Contains the tunable parameters of an `Arcball`.

/// The default rotation axis epsilon. See [`ArcballOptions::axis_epsilon`]
/// [`ArcballOptions::axis_epsilon`].
///
/// [`ArcballOptions::axis_epsilon`]: struct.ArcballOptions.html#structfield.axis_epsilon
pub const DEFAULT_AXIS_EPSILON: f32 = 1e-5;

/// The default drag sensitivity. See [`ArcballOptions::sensitivity`]
/// [`ArcballOptions::sensitivity`].
///
/// [`ArcballOptions::sensitivity`]: struct.ArcballOptions.html#structfield.sensitivity
pub const DEFAULT_SENSITIVITY: f32 = 1.0;

/// Specify how an `Arcball` turns pointer drags into rotations.
///
/// # Example
///
/// ```
/// # use arcball::{Arcball, ArcballOptions};
/// let options = ArcballOptions::new()
///     .with_sensitivity(2.0)
///     .with_renormalize(false);
///
/// let arcball = Arcball::with_options(options);
/// assert_eq!(arcball.options().sensitivity, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcballOptions {
    /// Factor applied to the angle between the anchor point and the current
    /// point. A value of `1.0` makes a drag across the whole ball turn the
    /// object by the arc swept on the ball; larger values make small pointer
    /// movements produce large rotations.
    pub sensitivity: f32,
    /// Minimum squared length of the cross product of the anchor and the
    /// current point (the unnormalised rotation axis) for a move to produce a
    /// rotation. Moves at or below this value are ignored.
    pub axis_epsilon: f32,
    /// Whether the committed rotation is renormalised each time a drag
    /// starts or ends.
    pub renormalize: bool,
    #[doc(hidden)]
    _nonexhaustive: (),
}

impl Default for ArcballOptions {
    #[inline]
    fn default() -> Self {
        ArcballOptions {
            sensitivity: DEFAULT_SENSITIVITY,
            axis_epsilon: DEFAULT_AXIS_EPSILON,
            renormalize: true,
            _nonexhaustive: (),
        }
    }
}

impl ArcballOptions {
    /// Create a new `ArcballOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets `sensitivity` on `self` to the new `sensitivity`.
    #[inline]
    pub const fn with_sensitivity(self, sensitivity: f32) -> Self {
        ArcballOptions {
            sensitivity,
            ..self
        }
    }

    /// Sets `axis_epsilon` on `self` to the new `axis_epsilon`.
    #[inline]
    pub const fn with_axis_epsilon(self, axis_epsilon: f32) -> Self {
        ArcballOptions {
            axis_epsilon,
            ..self
        }
    }

    /// Sets `renormalize` on `self` to the new `renormalize`.
    #[inline]
    pub const fn with_renormalize(self, renormalize: bool) -> Self {
        ArcballOptions {
            renormalize,
            ..self
        }
    }
}
