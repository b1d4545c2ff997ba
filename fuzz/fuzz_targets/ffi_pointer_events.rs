#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate arcball;

use arcball::ffi::{
    arcball_Matrix4, arcball_destroy, arcball_get_rotation_matrix, arcball_new,
    arcball_pointer_down, arcball_pointer_move, arcball_pointer_up, arcball_set_viewport_size,
};

fuzz_target!(|data: &[u8]| {
    unsafe {
        let arcball = arcball_new();
        let _ = arcball_set_viewport_size(arcball, 320.0, 240.0);

        for pair in data.chunks(2) {
            let x = f32::from(pair[0]) * 1.5;
            let y = f32::from(*pair.get(1).unwrap_or(&0));
            match pair[0] % 3 {
                0 => arcball_pointer_down(arcball, x, y),
                1 => arcball_pointer_move(arcball, x, y),
                _ => arcball_pointer_up(arcball),
            }
        }

        let mut matrix = arcball_Matrix4::default();
        let _ = arcball_get_rotation_matrix(arcball, &mut matrix);
        assert!(matrix.m.iter().all(|v| v.is_finite()));

        arcball_destroy(arcball);
    }
});
