// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite geometry basics.
//!
//! Build a trimmed sprite, drive one frame, query bounds, and hit-test.
//!
//! Run:
//! - `cargo run -p bracken_examples --example sprite_basics`

use bracken_sprite::{Anchor, Frame, SpriteGeometry, StaticTransform};
use kurbo::{Affine, Point, Rect, Size, Vec2};

fn main() {
    // A 10×10 sprite whose atlas entry was alpha-trimmed to a 4×5 region at
    // offset (2, 3) inside the logical box.
    let frame = Frame::with_trim(Size::new(10.0, 10.0), Rect::new(2.0, 3.0, 6.0, 8.0));
    let mut sprite = SpriteGeometry::new(frame);
    sprite.set_anchor(Anchor::TOP_LEFT);

    // Drive one frame.
    let mut tf = StaticTransform::new(Affine::translate(Vec2::new(100.0, 50.0)));
    sprite.sync(&mut tf);

    // The render quad wraps only the opaque region; the bounds quad spans
    // the full logical box.
    println!("render quad: {:?}", sprite.buffer().render_quad());
    println!("bounds quad: {:?}", sprite.buffer().bounds_quad());

    let bounds = sprite.bounds(None);
    println!("bounds rect: {bounds:?}");
    assert_eq!(bounds, Rect::new(100.0, 50.0, 110.0, 60.0));

    // Hit-testing uses the full logical box, not the trim, and excludes the
    // boundary.
    assert!(sprite.contains_point(&tf, Point::new(101.0, 51.0)));
    assert!(!sprite.contains_point(&tf, Point::new(100.0, 50.0)));

    // Move the node; the next sync recomputes, later syncs are free.
    tf.set(Affine::translate(Vec2::new(0.0, 0.0)));
    sprite.sync(&mut tf);
    assert!(sprite.take_recomputed());
    sprite.sync(&mut tf);
    assert!(!sprite.take_recomputed());
    println!("bounds after move: {:?}", sprite.bounds(None));
}
