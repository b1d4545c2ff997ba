#![cfg(feature = "ffi")]

use arcball::{
    ffi::{
        arcball_Matrix4, arcball_Quaternion, arcball_destroy, arcball_get_rotation,
        arcball_get_rotation_matrix, arcball_new, arcball_pointer_down, arcball_pointer_move,
        arcball_pointer_up, arcball_set_sensitivity, arcball_set_viewport_size,
    },
    Arcball,
};
use pretty_assertions::assert_eq;

#[test]
fn ffi_matches_rust_api() {
    let mut arcball = Arcball::new();
    arcball.set_viewport_size(1024.0, 768.0);
    arcball.set_options(arcball.options().with_sensitivity(4.0));
    arcball.on_pointer_down(200.0, 600.0);
    arcball.on_pointer_move(700.0, 100.0);
    arcball.on_pointer_up();

    let (matrix, rotation) = unsafe {
        let ffi = arcball_new();
        assert_eq!(arcball_set_viewport_size(ffi, 1024.0, 768.0), 0);
        arcball_set_sensitivity(ffi, 4.0);
        arcball_pointer_down(ffi, 200.0, 600.0);
        arcball_pointer_move(ffi, 700.0, 100.0);
        arcball_pointer_up(ffi);

        let mut matrix = arcball_Matrix4::default();
        let mut rotation = arcball_Quaternion::default();
        assert_eq!(arcball_get_rotation_matrix(ffi, &mut matrix), 0);
        assert_eq!(arcball_get_rotation(ffi, &mut rotation), 0);

        arcball_destroy(ffi);
        (matrix, rotation)
    };

    assert_eq!(matrix, arcball_Matrix4::from(arcball.rotation_matrix()));
    assert_eq!(mint::Quaternion::from(rotation), arcball.rotation());
}
