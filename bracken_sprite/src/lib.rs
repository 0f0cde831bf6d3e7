// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_sprite --heading-base-level=0

//! Bracken Sprite: Kurbo-native textured-quad geometry for 2D scene graphs.
//!
//! This crate is the geometry core of a sprite node: given the node's
//! accumulated world transform, its texture's logical and trimmed extents,
//! and an anchor, it derives the world-space corners used for rendering, a
//! separate bounds quad that always reflects the full logical extent, an
//! aggregated axis-aligned bounding rectangle, and inverse-transform hit
//! testing.
//!
//! It is a building block, not an engine: the scene-graph tree, transform
//! composition, rendering backends, and texture decoding all live upstream
//! and talk to this crate through narrow contracts.
//!
//! ## Where this fits
//!
//! - Scene graph: owns the node hierarchy and the accumulated transforms,
//!   exposed here via the [`WorldTransform`] provider trait.
//! - Sprite geometry (this crate): per-node corner math, bounds
//!   aggregation, hit testing, and sizing.
//! - Rendering backend: consumes the [`QuadBuffer`], tint, and blend mode
//!   to issue draw calls; this crate never draws.
//!
//! Texture handles, readiness signaling, and the texture cache live in the
//! companion `bracken_texture` crate.
//!
//! ## API overview
//!
//! - [`SpriteGeometry`]: the per-node geometry engine.
//! - [`Frame`]: a texture's logical box and optional trim rectangle.
//! - [`Anchor`]: fractional origin offset within the logical box.
//! - [`QuadBuffer`]: the fixed 16-slot corner store (render + bounds quads).
//! - [`WorldTransform`] / [`StaticTransform`]: the transform-provider seam.
//! - [`Renderable`]: capability trait for scene nodes that hold geometry by
//!   composition.
//!
//! Key operations:
//! - [`SpriteGeometry::update`] / [`SpriteGeometry::sync`] — per-frame
//!   recompute, skipped when nothing changed.
//! - [`SpriteGeometry::bounds`] — memoized world-space AABB merged with the
//!   child aggregate.
//! - [`SpriteGeometry::contains_point`] — strict-boundary hit testing.
//! - [`SpriteGeometry::set_width`] / [`SpriteGeometry::set_height`] —
//!   sign-preserving sizing, deferred while texture dimensions are pending.
//!
//! ## Minimal usage
//!
//! ```
//! use bracken_sprite::{Anchor, Frame, SpriteGeometry, StaticTransform};
//! use kurbo::{Affine, Point, Rect, Size, Vec2};
//!
//! // A 10×10 sprite anchored at its center.
//! let mut sprite = SpriteGeometry::new(Frame::new(Size::new(10.0, 10.0)));
//! sprite.set_anchor(Anchor::CENTER);
//!
//! // Drive one frame from a transform provider.
//! let mut tf = StaticTransform::new(Affine::translate(Vec2::new(20.0, 20.0)));
//! sprite.sync(&mut tf);
//!
//! assert_eq!(sprite.bounds(None), Rect::new(15.0, 15.0, 25.0, 25.0));
//! assert!(sprite.contains_point(&tf, Point::new(20.0, 20.0)));
//! assert!(!sprite.contains_point(&tf, Point::new(25.0, 20.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod buffer;
mod sprite;
mod transform;
mod types;
mod util;

pub use buffer::{BOUNDS_QUAD, QuadBuffer, RENDER_QUAD};
pub use sprite::{Renderable, SpriteGeometry};
pub use transform::{StaticTransform, WorldTransform};
pub use types::{Anchor, BlendMode, Frame};
