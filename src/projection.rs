//! Mapping from viewport pixels onto the surface of the arcball.
//!
//! Pointer coordinates go through two stages:
//!
//! 1. [`Viewport::normalize`][`Viewport::normalize`] maps a pixel position
//!    with a top-left origin into the square `[-1, 1] x [-1, 1]`, with `+y`
//!    pointing up the screen.
//! 2. [`project_to_sphere`][`project_to_sphere`] lifts the normalised point
//!    onto the front hemisphere of the unit sphere. Points which fall outside
//!    of the unit disk are pulled back onto its rim in the `z = 0` plane, so
//!    that dragging around the edge of the viewport rolls the object about the
//!    view axis.
//!
//! [`Viewport::normalize`]: struct.Viewport.html#method.normalize
//! [`project_to_sphere`]: fn.project_to_sphere.html

use crate::errors::ViewportError;
use nalgebra::{Vector2, Vector3};

/// The pixel dimensions of the surface on which the arcball receives pointer
/// events, along with their reciprocals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    inv_width: f32,
    inv_height: f32,
}

impl Default for Viewport {
    /// A `1x1` viewport, used until the host reports a real size.
    #[inline]
    fn default() -> Self {
        Viewport {
            width: 1.0,
            height: 1.0,
            inv_width: 1.0,
            inv_height: 1.0,
        }
    }
}

impl Viewport {
    /// Create a new `Viewport` of `width` by `height` pixels.
    ///
    /// Returns `Err` if either dimension is not a positive, finite number.
    #[inline]
    pub fn new(width: f32, height: f32) -> Result<Self, ViewportError> {
        ViewportError::check(width, height)?;
        Ok(Viewport {
            width,
            height,
            inv_width: width.recip(),
            inv_height: height.recip(),
        })
    }

    /// The width of the viewport in pixels.
    #[inline]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// The height of the viewport in pixels.
    #[inline]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Map the pixel position `(x, y)` into normalised coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use arcball::projection::Viewport;
    /// let viewport = Viewport::new(512.0, 256.0).unwrap();
    ///
    /// assert_eq!(viewport.normalize(256.0, 128.0), [0.0, 0.0].into());
    /// assert_eq!(viewport.normalize(0.0, 0.0), [-1.0, 1.0].into());
    /// assert_eq!(viewport.normalize(512.0, 256.0), [1.0, -1.0].into());
    /// ```
    #[inline]
    pub fn normalize(&self, x: f32, y: f32) -> mint::Point2<f32> {
        let p = self.normalize_na(x, y);
        [p.x, p.y].into()
    }

    #[inline]
    pub(crate) fn normalize_na(&self, x: f32, y: f32) -> Vector2<f32> {
        Vector2::new(
            2.0 * x * self.inv_width - 1.0,
            1.0 - 2.0 * y * self.inv_height,
        )
    }
}

/// Project the normalised point `p` onto the arcball.
///
/// Points inside the unit disk land on the front hemisphere of the unit
/// sphere; points outside of it are clamped onto the unit circle in the
/// `z = 0` plane. Both branches agree on the rim of the disk.
///
/// # Example
///
/// ```
/// # use arcball::projection::project_to_sphere;
/// assert_eq!(project_to_sphere([0.0, 0.0]), [0.0, 0.0, 1.0].into());
/// assert_eq!(project_to_sphere([2.0, 0.0]), [1.0, 0.0, 0.0].into());
/// ```
#[inline]
pub fn project_to_sphere<P: Into<mint::Vector2<f32>>>(p: P) -> mint::Vector3<f32> {
    let p = p.into();
    let v = sphere_point(Vector2::new(p.x, p.y));
    [v.x, v.y, v.z].into()
}

pub(crate) fn sphere_point(p: Vector2<f32>) -> Vector3<f32> {
    // Normalising a far off-screen pixel can overflow; keep only its direction.
    let p = if p.iter().any(|v| v.is_infinite()) {
        p.map(|v| if v.is_infinite() { v.signum() } else { 0.0 })
    } else {
        p
    };

    let len_sq = p.norm_squared();
    if len_sq <= 1.0 {
        Vector3::new(p.x, p.y, (1.0 - len_sq).sqrt())
    } else {
        // Scale by the largest component first so squaring cannot overflow.
        let rim = (p / p.amax()).normalize();
        Vector3::new(rim.x, rim.y, 0.0)
    }
}

/// Move the unit vector `point` onto the great circle of the sphere which is
/// perpendicular to the unit vector `axis`, keeping it on the front
/// hemisphere.
///
/// If `point` is parallel to `axis` there is no closest point on the circle,
/// so an arbitrary point on it is returned instead.
pub(crate) fn constrain_to_axis(point: Vector3<f32>, axis: Vector3<f32>) -> Vector3<f32> {
    let on_plane = point - axis * axis.dot(&point);
    let len_sq = on_plane.norm_squared();

    if len_sq > 0.0 {
        let on_circle = on_plane / len_sq.sqrt();
        if on_circle.z < 0.0 {
            -on_circle
        } else {
            on_circle
        }
    } else if axis.z == 1.0 {
        Vector3::x()
    } else {
        Vector3::new(-axis.y, axis.x, 0.0).normalize()
    }
}
