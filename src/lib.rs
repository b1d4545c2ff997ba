// Copyright © 2019 George Burton
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of this software
// and associated documentation files (the "Software"), to deal in the Software without restriction,
// including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all copies or substantial
// portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT
// LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN
// NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
// WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

#![warn(unused_imports, missing_docs)]
#![deny(bare_trait_objects)]

//! # About this library
//!
//! An [`Arcball`][`Arcball`] turns pointer drags over a viewport into a 3D rotation,
//! following Ken Shoemake's arcball from *Graphics Gems IV*.
//!
//! ## How the arcball works
//!
//! Imagine a glass ball filling the viewport. When the user presses the pointer
//! button, the point under the cursor is lifted onto the surface of the ball and
//! becomes the *anchor*. As the pointer moves, the point under the cursor is
//! lifted onto the ball again, and the object turns by the rotation which carries
//! the anchor onto that point.
//!
//! ```text
//!   (0, 0)                              (width, 0)
//!     +--------------------------------------+
//!     |             .-~~~~~~~-.              |
//!     |          .'     +y     '.            |
//!     |         /        |       \           |
//!     |        |   -x ---+--- +x  |          |
//!     |         \        |       /           |
//!     |          '.     -y     .'            |
//!     |             '-.......-'              |
//!     +--------------------------------------+
//!   (0, height)                    (width, height)
//! ```
//!
//! Pointer positions are given in pixels with a top-left origin, and are
//! normalised so that the centre of the viewport is `(0, 0)` and `+y` points up.
//! Positions outside of the unit disk are clamped onto its rim, so dragging
//! around the edge of the viewport spins the object about the view axis.
//!
//! Each drag computes its rotation from the anchor and the latest pointer
//! position only, and composes it onto the rotation which was committed when
//! the drag started. Many small move events therefore never accumulate error
//! within a single drag.
//!
//! ## Using this library
//!
//! Forward the host's input events into the arcball, and read the rotation
//! back out once per frame:
//!
//! ```
//! # use arcball::Arcball;
//! let mut arcball = Arcball::new();
//! arcball.set_viewport_size(800.0, 600.0);
//!
//! arcball.on_pointer_down(400.0, 300.0);
//! arcball.on_pointer_move(600.0, 300.0);
//! arcball.on_pointer_up();
//!
//! let model_matrix: mint::ColumnMatrix4<f32> = arcball.rotation_matrix();
//! # let _ = model_matrix;
//! ```
//!
//! * The tunables of the arcball live in [`ArcballOptions`][`ArcballOptions`].
//! * Drags can be restricted to rotations about a single [`Axis`][`Axis`] with
//!   [`Arcball::set_constraint`][`Arcball::set_constraint`].
//! * The [`projection`][`projection`] module exposes the pixel-to-sphere mapping
//!   on its own.
//! * With the `ffi` feature enabled, the [`ffi`][`ffi`] module exposes the
//!   arcball to C.
//!
//! The arcball is a plain value with no interior mutability. Hosts which feed it
//! from one thread and render from another should either guard it with a lock
//! or copy the result of [`Arcball::rotation_matrix`][`Arcball::rotation_matrix`]
//! across once per frame.
//!
//! [`Arcball`]: struct.Arcball.html
//! [`ArcballOptions`]: options/struct.ArcballOptions.html
//! [`Axis`]: enum.Axis.html
//! [`Arcball::set_constraint`]: struct.Arcball.html#method.set_constraint
//! [`Arcball::rotation_matrix`]: struct.Arcball.html#method.rotation_matrix
//! [`projection`]: projection/index.html
//! [`ffi`]: ffi/index.html

pub mod errors;
pub mod options;
pub mod projection;

#[cfg(feature = "ffi")]
pub mod ffi;

use log::{debug, trace};
use nalgebra::{Matrix4, Unit, UnitQuaternion, Vector3};
use num_traits::{one, zero, One, Zero};
use std::fmt;

pub use errors::ViewportError;
pub use options::ArcballOptions;

use projection::{constrain_to_axis, sphere_point, Viewport};

/// An arcball rotation controller, as defined by Ken Shoemake.
/// See http://www.talisman.org/~erlkonig/misc/shoemake92-arcball.pdf
#[derive(Clone, Debug, PartialEq)]
pub struct Arcball {
    viewport: Viewport,
    options: ArcballOptions,
    constraint: Option<Axis>,
    dragging: bool,
    /// Point on the ball where the current drag started.
    anchor: Vector3<f32>,
    /// Point on the ball under the latest pointer position of the drag.
    current_point: Vector3<f32>,
    /// Rotation at the start of the current drag.
    committed: UnitQuaternion<f32>,
    current: UnitQuaternion<f32>,
}

impl Default for Arcball {
    #[inline]
    fn default() -> Self {
        Arcball::with_options(Default::default())
    }
}

impl Arcball {
    /// Create a new `Arcball` with the default options and no rotation.
    ///
    /// The viewport starts as a `1x1` surface, so the host should call
    /// [`set_viewport_size`][`set_viewport_size`] before forwarding any
    /// pointer events.
    ///
    /// [`set_viewport_size`]: #method.set_viewport_size
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a new `Arcball` with the given `options`.
    #[inline]
    pub fn with_options(options: ArcballOptions) -> Self {
        Arcball {
            viewport: Viewport::default(),
            options,
            constraint: None,
            dragging: false,
            anchor: Vector3::zeros(),
            current_point: Vector3::zeros(),
            committed: UnitQuaternion::identity(),
            current: UnitQuaternion::identity(),
        }
    }

    /// Sets the size of the surface which receives pointer events to
    /// `width` by `height` pixels.
    ///
    /// Resizing during a drag changes how later pointer positions are mapped,
    /// but leaves the anchor of the drag where it is.
    ///
    /// # Panics
    ///
    /// This method will panic if either dimension is `0` or less, or is not finite.
    /// Use [`try_set_viewport_size`][`try_set_viewport_size`] to handle this case.
    ///
    /// [`try_set_viewport_size`]: #method.try_set_viewport_size
    #[inline]
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if let Err(e) = self.try_set_viewport_size(width, height) {
            panic!("{}", e);
        }
    }

    /// Sets the size of the surface which receives pointer events to
    /// `width` by `height` pixels.
    ///
    /// # Notes
    ///
    /// Returns `Ok(())` if the size was updated, and `Err` if either dimension
    /// cannot describe a viewport, in which case the previous size is kept.
    pub fn try_set_viewport_size(&mut self, width: f32, height: f32) -> Result<(), ViewportError> {
        self.viewport = Viewport::new(width, height)?;
        debug!("arcball viewport resized to {}x{}", width, height);
        Ok(())
    }

    /// Returns the `Viewport` which pointer positions are normalised against.
    #[inline]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the options of the `Arcball`.
    #[inline]
    pub const fn options(&self) -> &ArcballOptions {
        &self.options
    }

    /// Replace the options of the `Arcball` with `options`.
    ///
    /// A new sensitivity takes effect from the next pointer move, including
    /// during a drag.
    #[inline]
    pub fn set_options(&mut self, options: ArcballOptions) {
        self.options = options;
    }

    /// Returns the axis which drags are constrained to, if any.
    #[inline]
    pub const fn constraint(&self) -> Option<Axis> {
        self.constraint
    }

    /// Restrict drags to rotations about `axis` in view space, or lift the
    /// restriction with `None`.
    ///
    /// When constrained, points on the ball are moved onto the great circle
    /// perpendicular to the axis. Changing the constraint during a drag only
    /// affects pointer moves which happen afterwards.
    #[inline]
    pub fn set_constraint(&mut self, axis: Option<Axis>) {
        match axis {
            Some(axis) => debug!("arcball constrained to the {} axis", axis),
            None => debug!("arcball constraint cleared"),
        }
        self.constraint = axis;
    }

    /// Stop any drag in progress and clear the rotation back to the identity.
    ///
    /// The viewport, options and constraint are kept.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.anchor = Vector3::zeros();
        self.current_point = Vector3::zeros();
        self.committed = UnitQuaternion::identity();
        self.current = UnitQuaternion::identity();
        debug!("arcball reset");
    }

    /// Returns `true` between a call to [`on_pointer_down`][`on_pointer_down`]
    /// and the matching [`on_pointer_up`][`on_pointer_up`].
    ///
    /// [`on_pointer_down`]: #method.on_pointer_down
    /// [`on_pointer_up`]: #method.on_pointer_up
    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag at the pixel position `(x, y)`.
    ///
    /// Positions outside of the viewport are accepted, and map onto the rim
    /// of the ball. Calling this during a drag commits the rotation so far and
    /// starts a new drag from `(x, y)`. A `NaN` or infinite position is ignored.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            trace!("arcball ignored pointer down at ({}, {})", x, y);
            return;
        }

        self.commit();
        self.anchor = self.surface_point(x, y);
        self.current_point = self.anchor;
        self.dragging = true;
        debug!("arcball drag started at ({}, {}), anchor {:?}", x, y, self.anchor);
    }

    /// Continue the drag at the pixel position `(x, y)`.
    ///
    /// Does nothing if no drag is in progress. If the pointer is back over the
    /// anchor (or exactly opposite it) there is no rotation axis, and the
    /// rotation is left as it was. A `NaN` or infinite position is ignored.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }

        if !x.is_finite() || !y.is_finite() {
            trace!("arcball ignored pointer move to ({}, {})", x, y);
            return;
        }

        self.current_point = self.surface_point(x, y);
        match self.drag_rotation() {
            Some(incremental) => {
                self.current = incremental * self.committed;
                trace!("arcball moved to ({}, {})", x, y);
            }
            None => trace!("arcball move to ({}, {}) has no rotation axis", x, y),
        }
    }

    /// Finish the current drag, keeping the rotation it produced.
    ///
    /// Does nothing if no drag is in progress.
    pub fn on_pointer_up(&mut self) {
        if !self.dragging {
            return;
        }

        self.dragging = false;
        self.commit();
        debug!("arcball drag finished, rotation {:?}", self.current);
    }

    /// Returns the current rotation as a unit quaternion.
    ///
    /// # Example
    ///
    /// ```
    /// # use arcball::Arcball;
    /// let arcball = Arcball::new();
    /// let rotation = arcball.rotation();
    ///
    /// assert_eq!(rotation.s, 1.0);
    /// assert_eq!(rotation.v, [0.0, 0.0, 0.0].into());
    /// ```
    #[inline]
    pub fn rotation(&self) -> mint::Quaternion<f32> {
        to_mint_quaternion(&self.current)
    }

    /// Returns the current rotation as a `nalgebra` unit quaternion.
    #[inline]
    pub const fn rotation_quaternion(&self) -> &UnitQuaternion<f32> {
        &self.current
    }

    /// Returns the current rotation as a column-major, homogeneous 4x4 matrix,
    /// ready to be used as a model or view transform.
    #[inline]
    pub fn rotation_matrix(&self) -> mint::ColumnMatrix4<f32> {
        to_mint_matrix(&self.current.to_homogeneous())
    }

    /// Returns the rotation which the current drag is composed onto. When no
    /// drag is in progress, this is the same as [`rotation`][`rotation`].
    ///
    /// [`rotation`]: #method.rotation
    #[inline]
    pub fn committed_rotation(&self) -> mint::Quaternion<f32> {
        to_mint_quaternion(&self.committed)
    }

    /// Returns the point on the ball where the current drag started.
    ///
    /// This is the zero vector if no drag has started since the last reset.
    #[inline]
    pub fn anchor(&self) -> mint::Vector3<f32> {
        to_mint_vector(&self.anchor)
    }

    /// Returns the point on the ball under the latest pointer position.
    #[inline]
    pub fn current_point(&self) -> mint::Vector3<f32> {
        to_mint_vector(&self.current_point)
    }

    fn commit(&mut self) {
        if self.options.renormalize {
            self.current.renormalize();
        }
        self.committed = self.current;
    }

    fn surface_point(&self, x: f32, y: f32) -> Vector3<f32> {
        let point = sphere_point(self.viewport.normalize_na(x, y));
        match self.constraint {
            Some(axis) => constrain_to_axis(point, axis.unit_vector()),
            None => point,
        }
    }

    /// The rotation carrying the anchor onto the current point, or `None` if
    /// the two points are (anti)parallel.
    fn drag_rotation(&self) -> Option<UnitQuaternion<f32>> {
        let perp = self.anchor.cross(&self.current_point);
        // Also rejects a NaN axis.
        if !(perp.norm_squared() > self.options.axis_epsilon) {
            return None;
        }

        let cos_angle = self.anchor.dot(&self.current_point).max(-1.0).min(1.0);
        let angle = cos_angle.acos() * self.options.sensitivity;
        let axis = Unit::new_normalize(-perp);

        Some(UnitQuaternion::from_axis_angle(&axis, angle))
    }
}

#[inline]
fn to_mint_quaternion(q: &UnitQuaternion<f32>) -> mint::Quaternion<f32> {
    mint::Quaternion {
        v: [q.i, q.j, q.k].into(),
        s: q.w,
    }
}

#[inline]
fn to_mint_vector(v: &Vector3<f32>) -> mint::Vector3<f32> {
    [v.x, v.y, v.z].into()
}

fn to_mint_matrix(m: &Matrix4<f32>) -> mint::ColumnMatrix4<f32> {
    let column = |c: usize| mint::Vector4 {
        x: m[(0, c)],
        y: m[(1, c)],
        z: m[(2, c)],
        w: m[(3, c)],
    };

    mint::ColumnMatrix4 {
        x: column(0),
        y: column(1),
        z: column(2),
        w: column(3),
    }
}

/// An enum which represents an axis along a direction in 3D space.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Axis {
    /// `x` axis.
    X,
    /// `y` axis.
    Y,
    /// `z` axis.
    Z,
}

impl Axis {
    /// Returns the `Vector3` which represents the axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arcball::Axis;
    ///
    /// assert_eq!(Axis::X.vector(), [1.0, 0.0, 0.0].into());
    /// assert_eq!(Axis::Y.vector(), [0.0, 1.0, 0.0].into());
    /// assert_eq!(Axis::Z.vector(), [0.0, 0.0, 1.0].into());
    /// ```
    #[inline]
    pub fn vector<T: Clone + One + Zero>(&self) -> mint::Vector3<T> {
        let (_1, _0) = (one, zero);
        match *self {
            Axis::X => [_1(), _0(), _0()].into(),
            Axis::Y => [_0(), _1(), _0()].into(),
            Axis::Z => [_0(), _0(), _1()].into(),
        }
    }

    #[inline]
    fn unit_vector(&self) -> Vector3<f32> {
        let v = self.vector::<f32>();
        Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Axis {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;

    fn arcball() -> Arcball {
        let mut arcball = Arcball::new();
        arcball.set_viewport_size(800.0, 600.0);
        arcball
    }

    fn assert_rotation_eq(a: &UnitQuaternion<f32>, b: &UnitQuaternion<f32>) {
        assert!(a.angle_to(b) < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn drag_from_centre_turns_about_y() {
        let mut arcball = arcball();
        arcball.on_pointer_down(400.0, 300.0);
        arcball.on_pointer_move(600.0, 300.0);

        let (axis, angle) = arcball.current.axis_angle().unwrap();
        let expected_angle = 0.75f32.sqrt().acos();

        assert!((axis.into_inner() - -Vector3::y()).norm() < EPSILON);
        assert!((angle - expected_angle).abs() < EPSILON);
    }

    #[test]
    fn sensitivity_scales_angle() {
        let mut arcball = arcball();
        arcball.set_options(ArcballOptions::new().with_sensitivity(3.0));
        arcball.on_pointer_down(400.0, 300.0);
        arcball.on_pointer_move(600.0, 300.0);

        let expected_angle = 3.0 * 0.75f32.sqrt().acos();
        assert!((arcball.current.angle() - expected_angle).abs() < EPSILON);
    }

    #[test]
    fn moves_within_a_drag_do_not_accumulate() {
        let mut direct = arcball();
        direct.on_pointer_down(400.0, 300.0);
        direct.on_pointer_move(500.0, 200.0);

        let mut wandering = arcball();
        wandering.on_pointer_down(400.0, 300.0);
        for i in 0..200 {
            let t = i as f32;
            wandering.on_pointer_move(400.0 + t, 300.0 + (t * 0.1).sin() * 50.0);
        }
        wandering.on_pointer_move(500.0, 200.0);

        assert_rotation_eq(&direct.current, &wandering.current);
    }

    #[test]
    fn degenerate_move_keeps_previous_rotation() {
        let mut arcball = arcball();
        arcball.on_pointer_down(400.0, 300.0);
        arcball.on_pointer_move(600.0, 300.0);
        let before = arcball.current;

        arcball.on_pointer_move(400.0, 300.0);
        assert_eq!(arcball.current, before);
        assert!(arcball.is_dragging());
    }

    #[test]
    fn rim_drag_rolls_about_view_axis() {
        let mut arcball = arcball();
        // Both points are far outside the unit disk, so they land on the rim.
        arcball.on_pointer_down(4000.0, 300.0);
        arcball.on_pointer_move(400.0, -3000.0);

        let (axis, angle) = arcball.current.axis_angle().unwrap();
        assert!(axis.z.abs() > 1.0 - EPSILON);
        assert!((angle - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn constraint_removes_off_axis_motion() {
        let mut arcball = arcball();
        arcball.set_constraint(Some(Axis::Y));
        arcball.on_pointer_down(400.0, 300.0);
        arcball.on_pointer_move(400.0, 150.0);

        assert_eq!(arcball.current, UnitQuaternion::identity());

        arcball.on_pointer_move(550.0, 150.0);
        let (axis, _) = arcball.current.axis_angle().unwrap();
        assert!(axis.y.abs() > 1.0 - EPSILON);
    }

    #[test]
    fn renormalize_on_commit() {
        let mut arcball = arcball();
        arcball.current = UnitQuaternion::new_unchecked(nalgebra::Quaternion::new(1.01, 0.0, 0.0, 0.0));
        arcball.on_pointer_down(400.0, 300.0);

        assert!((arcball.committed.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn renormalize_can_be_disabled() {
        let mut arcball = arcball();
        arcball.set_options(ArcballOptions::new().with_renormalize(false));
        arcball.current = UnitQuaternion::new_unchecked(nalgebra::Quaternion::new(1.01, 0.0, 0.0, 0.0));
        arcball.on_pointer_down(400.0, 300.0);

        assert!((arcball.committed.norm() - 1.01).abs() < 1e-6);
    }

    #[test]
    fn axis_epsilon_bounds_unnormalised_cross_product() {
        let mut arcball = arcball();
        arcball.set_options(ArcballOptions::new().with_axis_epsilon(0.25));
        arcball.on_pointer_down(400.0, 300.0);

        // |anchor x current|^2 is 0.0625 here, then 0.5625.
        arcball.on_pointer_move(500.0, 300.0);
        assert_eq!(arcball.current, UnitQuaternion::identity());

        arcball.on_pointer_move(700.0, 300.0);
        assert!(arcball.current.angle() > 0.5);
    }

    #[test]
    fn nan_point_on_ball_has_no_rotation() {
        let mut arcball = arcball();
        arcball.on_pointer_down(400.0, 300.0);
        arcball.current_point = Vector3::new(std::f32::NAN, 0.0, 1.0);

        assert_eq!(arcball.drag_rotation(), None);
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let mut arcball = arcball();
        arcball.on_pointer_down(std::f32::NAN, 300.0);
        assert!(!arcball.is_dragging());

        arcball.on_pointer_down(400.0, 300.0);
        let before = arcball.clone();
        arcball.on_pointer_move(std::f32::NAN, 300.0);
        arcball.on_pointer_move(600.0, std::f32::INFINITY);
        assert_eq!(arcball, before);
    }

    #[test]
    #[should_panic]
    fn zero_viewport_panics() {
        arcball().set_viewport_size(0.0, 600.0);
    }

    #[test]
    fn failed_resize_keeps_viewport() {
        let mut arcball = arcball();
        assert!(arcball.try_set_viewport_size(-1.0, 600.0).is_err());
        assert_eq!(arcball.viewport().width(), 800.0);
        assert_eq!(arcball.viewport().height(), 600.0);
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
