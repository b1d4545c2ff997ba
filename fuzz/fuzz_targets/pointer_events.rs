#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate arcball;

use arcball::{Arcball, Axis};

fn read_f32(bytes: &[u8]) -> f32 {
    let mut raw = [0u8; 4];
    raw[..bytes.len()].copy_from_slice(bytes);
    f32::from_bits(u32::from_le_bytes(raw))
}

fuzz_target!(|data: &[u8]| {
    let mut arcball = Arcball::new();
    arcball.set_viewport_size(640.0, 480.0);

    // Each event is a tag byte followed by two raw `f32`s, so NaN, infinities
    // and huge coordinates all reach the arcball.
    for event in data.chunks(9) {
        let x = read_f32(event.get(1..5.min(event.len())).unwrap_or(&[]));
        let y = read_f32(event.get(5.min(event.len())..).unwrap_or(&[]));

        match event[0] % 8 {
            0 => arcball.on_pointer_down(x, y),
            1 => arcball.on_pointer_up(),
            2 => arcball.reset(),
            3 => arcball.set_constraint(Some(Axis::Y)),
            4 => arcball.set_constraint(None),
            _ => arcball.on_pointer_move(x, y),
        }

        let anchor = arcball.anchor();
        let anchor_sq = anchor.x * anchor.x + anchor.y * anchor.y + anchor.z * anchor.z;
        assert!(!arcball.is_dragging() || (anchor_sq - 1.0).abs() < 1e-3, "{:?}", anchor);

        let q = arcball.rotation();
        let norm_sq = q.s * q.s + q.v.x * q.v.x + q.v.y * q.v.y + q.v.z * q.v.z;
        assert!(norm_sq.is_finite());
        assert!((norm_sq - 1.0).abs() < 1e-2, "{:?}", q);
    }
});
