// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred sizing across texture readiness.
//!
//! Assign a texture before its dimensions are known, request an on-screen
//! size, then deliver the real extents and watch scale re-derive.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p bracken_examples --example texture_readiness`

use bracken_sprite::SpriteGeometry;
use bracken_texture::{Texture, TextureCache, adapter};
use kurbo::{Affine, Size};

fn main() {
    tracing_subscriber::fmt::init();

    let mut cache = TextureCache::new();
    cache.insert("hero.png", Texture::pending());

    // Assign while the decoder is still working.
    let mut sprite = SpriteGeometry::pending();
    adapter::attach(&mut sprite, cache.get("hero.png").unwrap());

    // The caller already knows how big it should appear on screen.
    sprite.set_width(128.0);
    sprite.set_height(128.0);
    println!(
        "pending: width={} scale={:?}",
        sprite.width(),
        sprite.scale()
    );

    // Nothing to pump yet.
    assert!(!adapter::pump(&mut sprite, cache.get_mut("hero.png").unwrap()));

    // The decoder reports 64×32; the remembered size reapplies.
    cache
        .get_mut("hero.png")
        .unwrap()
        .resolve(bracken_sprite::Frame::new(Size::new(64.0, 32.0)));
    assert!(adapter::pump(&mut sprite, cache.get_mut("hero.png").unwrap()));
    println!(
        "resolved: width={} height={} scale={:?}",
        sprite.width(),
        sprite.height(),
        sprite.scale()
    );
    assert_eq!(sprite.scale().x, 2.0);
    assert_eq!(sprite.scale().y, 4.0);

    sprite.update(Affine::IDENTITY, true);
    println!("render quad: {:?}", sprite.buffer().render_quad());

    // Lookups by unknown identifier fail loudly.
    let err = cache.get("villain.png").unwrap_err();
    println!("lookup error: {err}");
}
