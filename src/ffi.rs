#![allow(nonstandard_style)]

//! The ffi interface to the `arcball` crate. You must enable the `ffi` feature
//! to access this module.
//!
//! # Features
//!
//! The `ffi` module defines a C-compatible interface to an [`Arcball`][`Arcball`],
//! which is handed out to C as an opaque pointer. Every function accepts a `NULL`
//! arcball and does nothing with it, so hosts do not need to guard each call.
//!
//! ```text
//! Arcball *arcball = arcball_new();
//! arcball_set_viewport_size(arcball, 800.0f, 600.0f);
//!
//! arcball_pointer_down(arcball, x0, y0);
//! arcball_pointer_move(arcball, x1, y1);
//! arcball_pointer_up(arcball);
//!
//! arcball_Matrix4 model;
//! arcball_get_rotation_matrix(arcball, &model);
//! glUniformMatrix4fv(location, 1, GL_FALSE, model.m);
//!
//! arcball_destroy(arcball);
//! ```
//!
//! [`Arcball`]: ../struct.Arcball.html

use crate::Arcball;
use libc::{c_char, c_float, c_int};
use static_assertions::{assert_eq_align, assert_eq_size};
use std::{fmt, ptr};

/// A column-major 4x4 matrix, laid out the way OpenGL expects it.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct arcball_Matrix4 {
    /// The 16 elements of the matrix, column by column.
    pub m: [c_float; 16],
}

assert_eq_size!(arcball_Matrix4, [c_float; 16]);
assert_eq_align!(arcball_Matrix4, c_float);

impl fmt::Debug for arcball_Matrix4 {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = [
            &self.m[0..4],
            &self.m[4..8],
            &self.m[8..12],
            &self.m[12..16],
        ];
        fmtr.debug_struct("arcball_Matrix4")
            .field("columns", &columns)
            .finish()
    }
}

/// A unit quaternion representing a rotation.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct arcball_Quaternion {
    /// The `i` component of the quaternion.
    pub quat_x: c_float,
    /// The `j` component of the quaternion.
    pub quat_y: c_float,
    /// The `k` component of the quaternion.
    pub quat_z: c_float,
    /// The scalar component of the quaternion.
    pub quat_w: c_float,
}

assert_eq_size!(arcball_Quaternion, [c_float; 4]);

impl From<mint::Quaternion<f32>> for arcball_Quaternion {
    #[inline]
    fn from(q: mint::Quaternion<f32>) -> Self {
        arcball_Quaternion {
            quat_x: q.v.x,
            quat_y: q.v.y,
            quat_z: q.v.z,
            quat_w: q.s,
        }
    }
}

impl From<arcball_Quaternion> for mint::Quaternion<f32> {
    #[inline]
    fn from(q: arcball_Quaternion) -> Self {
        mint::Quaternion {
            v: [q.quat_x, q.quat_y, q.quat_z].into(),
            s: q.quat_w,
        }
    }
}

impl From<mint::ColumnMatrix4<f32>> for arcball_Matrix4 {
    #[inline]
    fn from(m: mint::ColumnMatrix4<f32>) -> Self {
        let mut out = arcball_Matrix4::default();
        for (dst, column) in out.m.chunks_mut(4).zip(&[m.x, m.y, m.z, m.w]) {
            dst.copy_from_slice(&[column.x, column.y, column.z, column.w]);
        }
        out
    }
}

/// Returns the version of the `arcball` library as a `NUL`-terminated string.
///
/// The returned string is static, and must not be freed.
#[no_mangle]
pub extern "C" fn arcball_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Create a new arcball with the default options and no rotation.
///
/// The returned arcball must be destroyed with `arcball_destroy`.
#[no_mangle]
pub extern "C" fn arcball_new() -> *mut Arcball {
    Box::into_raw(Box::new(Arcball::new()))
}

/// Destroy the `arcball`, cleaning up all memory.
///
/// It is a use after free error to pass the `arcball` to any other function
/// after this function is called on it.
///
/// This function should only be called on arcballs created with `arcball_new`.
#[no_mangle]
pub unsafe extern "C" fn arcball_destroy(arcball: *mut Arcball) {
    if arcball.is_null() {
        return;
    }

    drop(Box::from_raw(arcball));
}

/// Set the size of the surface which receives pointer events.
///
/// * On success, this function returns `0`.
///
/// * If `arcball` is `NULL`, or either dimension is not a positive, finite
///   number, this function returns a value greater than `0`, and the previous
///   size is kept.
#[no_mangle]
pub unsafe extern "C" fn arcball_set_viewport_size(
    arcball: *mut Arcball,
    width: c_float,
    height: c_float,
) -> c_int {
    let arcball = match arcball.as_mut() {
        Some(arcball) => arcball,
        None => return 1,
    };

    match arcball.try_set_viewport_size(width, height) {
        Ok(()) => 0,
        Err(_) => 2,
    }
}

/// Set the drag sensitivity of the `arcball`. The other options are kept.
#[no_mangle]
pub unsafe extern "C" fn arcball_set_sensitivity(arcball: *mut Arcball, sensitivity: c_float) {
    if let Some(arcball) = arcball.as_mut() {
        let options = arcball.options().with_sensitivity(sensitivity);
        arcball.set_options(options);
    }
}

/// Stop any drag in progress and clear the rotation of the `arcball`.
#[no_mangle]
pub unsafe extern "C" fn arcball_reset(arcball: *mut Arcball) {
    if let Some(arcball) = arcball.as_mut() {
        arcball.reset();
    }
}

/// Start a drag at the pixel position `(x, y)`.
#[no_mangle]
pub unsafe extern "C" fn arcball_pointer_down(arcball: *mut Arcball, x: c_float, y: c_float) {
    if let Some(arcball) = arcball.as_mut() {
        arcball.on_pointer_down(x, y);
    }
}

/// Continue a drag at the pixel position `(x, y)`.
#[no_mangle]
pub unsafe extern "C" fn arcball_pointer_move(arcball: *mut Arcball, x: c_float, y: c_float) {
    if let Some(arcball) = arcball.as_mut() {
        arcball.on_pointer_move(x, y);
    }
}

/// Finish the current drag.
#[no_mangle]
pub unsafe extern "C" fn arcball_pointer_up(arcball: *mut Arcball) {
    if let Some(arcball) = arcball.as_mut() {
        arcball.on_pointer_up();
    }
}

/// Write the current rotation of `arcball` into `out_rotation`.
///
/// Returns `0` on success. If either pointer is `NULL`, returns a value greater
/// than `0`, and `out_rotation` is not modified.
#[no_mangle]
pub unsafe extern "C" fn arcball_get_rotation(
    arcball: *const Arcball,
    out_rotation: *mut arcball_Quaternion,
) -> c_int {
    match (arcball.as_ref(), out_rotation.is_null()) {
        (Some(arcball), false) => {
            ptr::write(out_rotation, arcball.rotation().into());
            0
        }
        _ => 1,
    }
}

/// Write the current rotation of `arcball` into `out_matrix`, as a column-major
/// homogeneous matrix.
///
/// Returns `0` on success. If either pointer is `NULL`, returns a value greater
/// than `0`, and `out_matrix` is not modified.
#[no_mangle]
pub unsafe extern "C" fn arcball_get_rotation_matrix(
    arcball: *const Arcball,
    out_matrix: *mut arcball_Matrix4,
) -> c_int {
    match (arcball.as_ref(), out_matrix.is_null()) {
        (Some(arcball), false) => {
            ptr::write(out_matrix, arcball.rotation_matrix().into());
            0
        }
        _ => 1,
    }
}
