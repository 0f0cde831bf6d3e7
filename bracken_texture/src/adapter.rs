// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers wiring textures to sprite geometry.
//!
//! ## Notes
//!
//! These helpers push texture extents into a [`SpriteGeometry`] node at the
//! two points the contract cares about: assignment and readiness. They do
//! not retain references; the sprite owns a copy of the frame metadata and
//! the texture keeps its own.

use bracken_sprite::SpriteGeometry;
use tracing::debug;

use crate::texture::Texture;

/// Assign a texture to a sprite node.
///
/// If the texture's dimensions are already known the frame is applied
/// immediately (reapplying any remembered desired size); otherwise the
/// sprite enters the deferred state and waits for [`pump`] to deliver the
/// readiness payload.
pub fn attach(sprite: &mut SpriteGeometry, texture: &Texture) {
    if texture.dimensions_known() {
        sprite.set_frame(texture.frame());
    } else {
        debug!("texture dimensions pending, deferring sprite frame");
        sprite.defer_frame();
    }
}

/// Drain a texture's one-shot readiness signal into a sprite node.
///
/// Call once per frame (or whenever the loader reports progress) for
/// sprites whose frame is pending. Returns `true` when the signal fired and
/// the sprite's frame was resolved; at most one call ever returns `true`
/// for a given texture.
pub fn pump(sprite: &mut SpriteGeometry, texture: &mut Texture) -> bool {
    match texture.take_ready() {
        Some(frame) => {
            debug!("texture dimensions ready, resolving sprite frame");
            sprite.set_frame(frame);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracken_sprite::Frame;
    use kurbo::Size;

    #[test]
    fn attach_applies_known_dimensions_immediately() {
        let mut sprite = SpriteGeometry::pending();
        let texture = Texture::sized(Size::new(64.0, 32.0));
        attach(&mut sprite, &texture);
        assert!(!sprite.frame_pending());
        assert_eq!(sprite.frame().orig, Size::new(64.0, 32.0));
    }

    #[test]
    fn attach_defers_until_pumped() {
        let mut sprite = SpriteGeometry::pending();
        let mut texture = Texture::pending();
        attach(&mut sprite, &texture);
        sprite.set_width(128.0);
        assert!(sprite.frame_pending());
        assert!(!pump(&mut sprite, &mut texture));

        texture.resolve(Frame::new(Size::new(64.0, 64.0)));
        assert!(pump(&mut sprite, &mut texture));
        assert!(!sprite.frame_pending());
        // Remembered width reapplied against the resolved frame.
        assert_eq!(sprite.scale().x, 2.0);
        assert_eq!(sprite.width(), 128.0);
        // The signal is spent.
        assert!(!pump(&mut sprite, &mut texture));
    }

    #[test]
    fn reattach_replaces_frame_wholesale() {
        let mut sprite = SpriteGeometry::new(Frame::new(Size::new(10.0, 10.0)));
        let texture = Texture::sized(Size::new(20.0, 5.0));
        attach(&mut sprite, &texture);
        assert_eq!(sprite.frame(), Frame::new(Size::new(20.0, 5.0)));
    }
}
