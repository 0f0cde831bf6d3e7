// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core sprite geometry: quad calculators, bounds aggregation, hit testing, sizing.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::buffer::{BOUNDS_QUAD, QuadBuffer, RENDER_QUAD};
use crate::transform::WorldTransform;
use crate::types::{Anchor, BlendMode, Frame};
use crate::util;

bitflags::bitflags! {
    /// Recompute/consumption state of the geometry buffer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct GeomFlags: u8 {
        /// The buffer no longer reflects the current inputs and must be
        /// recomputed before the next read.
        const STALE      = 0b0000_0001;
        /// The buffer was recomputed since the backend last consumed it.
        const RECOMPUTED = 0b0000_0010;
    }
}

/// Capability interface a generic scene node uses to hold quad geometry.
///
/// Scene nodes own an optional renderable by composition instead of
/// subclassing a node base type. [`SpriteGeometry`] is the textured-quad
/// implementation; meshes or nine-slice planes would be others.
pub trait Renderable {
    /// Refresh the world-space corner data for this frame.
    fn compute_vertices(&mut self, world: Affine, world_changed: bool);

    /// The world-space axis-aligned bounds, merged with the child aggregate.
    fn compute_bounds(&mut self, children: Option<Rect>) -> Rect;

    /// Whether a local-space point falls inside the renderable.
    fn hit_test(&self, local: Point) -> bool;
}

/// The geometry core of a textured quad node.
///
/// Owns the node's [`QuadBuffer`] plus the inputs that shape it: the
/// texture's [`Frame`], the [`Anchor`], and the local scale the sizing
/// adapter manipulates. The accumulated world transform is *not* owned here;
/// it is read from the scene graph each frame via [`update`](Self::update)
/// or [`sync`](Self::sync).
///
/// ## Per-frame protocol
///
/// 1. Call [`update`](Self::update) (or [`sync`](Self::sync)) once, on the
///    render-loop thread. The quad calculators run only when the transform
///    moved or a local input changed; otherwise the buffer is left as-is.
/// 2. The backend reads [`buffer`](Self::buffer), [`tint`](Self::tint), and
///    [`blend_mode`](Self::blend_mode), and may consume the recompute signal
///    with [`take_recomputed`](Self::take_recomputed).
/// 3. [`bounds`](Self::bounds) may be queried any number of times after the
///    update; the aggregate is memoized against a generation counter and
///    recomputed only when some input actually changed.
///
/// Invalidation is conservative: every setter marks the geometry stale even
/// when the new value equals the old one. Stale geometry silently corrupts
/// rendering and hit testing; a spurious recompute only costs arithmetic.
#[derive(Clone, Debug)]
pub struct SpriteGeometry {
    frame: Frame,
    frame_pending: bool,
    anchor: Anchor,
    scale: Vec2,
    desired_width: Option<f64>,
    desired_height: Option<f64>,
    tint: u32,
    blend: BlendMode,
    buffer: QuadBuffer,
    flags: GeomFlags,
    generation: u64,
    bounds_generation: u64,
    cached_bounds: Rect,
}

impl SpriteGeometry {
    /// Create sprite geometry for a texture whose dimensions are known.
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            frame_pending: false,
            anchor: Anchor::TOP_LEFT,
            scale: Vec2::new(1.0, 1.0),
            desired_width: None,
            desired_height: None,
            tint: 0xFF_FF_FF,
            blend: BlendMode::Normal,
            buffer: QuadBuffer::new(),
            flags: GeomFlags::STALE,
            generation: 1,
            bounds_generation: 0,
            cached_bounds: Rect::ZERO,
        }
    }

    /// Create sprite geometry for a texture whose dimensions are not yet
    /// known.
    ///
    /// The frame is [`Frame::EMPTY`] until [`set_frame`](Self::set_frame)
    /// delivers the real extents; until then sizing writes only record the
    /// desired value (see [`set_width`](Self::set_width)).
    pub fn pending() -> Self {
        let mut sprite = Self::new(Frame::EMPTY);
        sprite.frame_pending = true;
        sprite
    }

    // --- texture frame ---

    /// The current logical frame and trim.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Whether the frame is a placeholder awaiting texture dimensions.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Replace the frame wholesale, as happens when the node's texture
    /// reference changes or a pending texture's dimensions arrive.
    ///
    /// Any remembered desired width/height is reapplied against the new
    /// logical frame, re-deriving scale with the same sign-preserving
    /// formula as [`set_width`](Self::set_width).
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
        self.frame_pending = false;
        if let Some(w) = self.desired_width {
            self.apply_width(w);
        }
        if let Some(h) = self.desired_height {
            self.apply_height(h);
        }
        self.invalidate();
    }

    /// Switch to a texture whose dimensions are not yet available.
    ///
    /// The old frame is dropped and replaced with [`Frame::EMPTY`]; geometry
    /// stays well-defined (degenerate) until [`set_frame`](Self::set_frame)
    /// resolves the real extents.
    pub fn defer_frame(&mut self) {
        self.frame = Frame::EMPTY;
        self.frame_pending = true;
        self.invalidate();
    }

    // --- anchor and scale ---

    /// The current anchor.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Set the anchor and mark geometry stale.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
        self.invalidate();
    }

    /// The local scale pair the sizing adapter reads and writes.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the local scale directly.
    ///
    /// The embedding scene graph composes this into the world transform, so
    /// the change reaches the buffer via the transform's changed signal; the
    /// local invalidation here is the conservative belt-and-braces path.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.invalidate();
    }

    // --- sizing adapter ---

    /// Current on-screen width: `|scale.x| · W`.
    pub fn width(&self) -> f64 {
        util::abs(self.scale.x) * self.frame.orig.width
    }

    /// Request an on-screen width, preserving the sign of the current scale.
    ///
    /// Zero scale counts as positive. The value is remembered; if the frame
    /// is pending, scale is left untouched and the remembered value is
    /// applied when the texture's dimensions arrive.
    pub fn set_width(&mut self, value: f64) {
        self.desired_width = Some(value);
        if !self.frame_pending {
            self.apply_width(value);
            self.invalidate();
        }
    }

    /// Current on-screen height: `|scale.y| · H`.
    pub fn height(&self) -> f64 {
        util::abs(self.scale.y) * self.frame.orig.height
    }

    /// Request an on-screen height. Symmetric to [`set_width`](Self::set_width).
    pub fn set_height(&mut self, value: f64) {
        self.desired_height = Some(value);
        if !self.frame_pending {
            self.apply_height(value);
            self.invalidate();
        }
    }

    fn apply_width(&mut self, value: f64) {
        let sign = util::sign_or_one(self.scale.x);
        self.scale.x = sign * value / self.frame.orig.width;
    }

    fn apply_height(&mut self, value: f64) {
        let sign = util::sign_or_one(self.scale.y);
        self.scale.y = sign * value / self.frame.orig.height;
    }

    // --- backend-facing state ---

    /// Tint color as `0xRRGGBB`, read by the backend alongside the buffer.
    pub fn tint(&self) -> u32 {
        self.tint
    }

    /// Set the tint color.
    pub fn set_tint(&mut self, tint: u32) {
        self.tint = tint;
    }

    /// Blend mode the backend applies when drawing the quad.
    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    /// Set the blend mode.
    pub fn set_blend_mode(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Read-only view of the node's geometry buffer.
    ///
    /// Contents are valid until the next recomputation; copy out anything
    /// that must survive across frames.
    pub fn buffer(&self) -> &QuadBuffer {
        &self.buffer
    }

    /// Whether the buffer was recomputed since this was last called.
    ///
    /// Take-style: reading clears the signal. Backends use this to skip
    /// re-uploading unchanged vertex data.
    pub fn take_recomputed(&mut self) -> bool {
        let recomputed = self.flags.contains(GeomFlags::RECOMPUTED);
        self.flags.remove(GeomFlags::RECOMPUTED);
        recomputed
    }

    // --- invalidation ---

    /// Mark the buffer stale and bump the bounds generation.
    ///
    /// Called by every setter; exposed for hosts that mutate collaborating
    /// state this node cannot observe. When in doubt, invalidate.
    pub fn invalidate(&mut self) {
        self.flags.insert(GeomFlags::STALE);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Record that the node's child set (or a child's bounds) may have
    /// changed, invalidating the memoized aggregate without touching the
    /// quad buffer.
    pub fn mark_children_changed(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // --- per-frame recompute ---

    /// Recompute the render and bounds quads if anything changed.
    ///
    /// `world` is the node's accumulated world transform for this frame and
    /// `world_changed` its provider's take-style changed signal. When
    /// neither the transform nor any local input moved, the buffer is left
    /// untouched and the call is cheap.
    pub fn update(&mut self, world: Affine, world_changed: bool) {
        if world_changed {
            self.invalidate();
        }
        if !self.flags.contains(GeomFlags::STALE) {
            return;
        }
        self.compute_render_quad(world);
        self.compute_bounds_quad(world);
        self.flags.remove(GeomFlags::STALE);
        self.flags.insert(GeomFlags::RECOMPUTED);
    }

    /// Convenience for [`update`](Self::update) driven by a
    /// [`WorldTransform`] provider.
    pub fn sync<T: WorldTransform>(&mut self, transform: &mut T) {
        self.update(transform.world_affine(), transform.take_changed());
    }

    /// Render quad: slots 0–7.
    ///
    /// With a trim, the local corners wrap the opaque sub-region only, so a
    /// trimmed texture renders a cropped, correctly offset quad instead of
    /// stretching the remaining pixels over the logical box.
    fn compute_render_quad(&mut self, world: Affine) {
        let w = self.frame.orig.width;
        let h = self.frame.orig.height;
        let (w0, w1, h0, h1) = match self.frame.trim {
            Some(trim) => {
                let w1 = trim.x0 - self.anchor.x * w;
                let w0 = w1 + trim.width();
                let h1 = trim.y0 - self.anchor.y * h;
                let h0 = h1 + trim.height();
                (w0, w1, h0, h1)
            }
            None => untrimmed_extents(w, h, self.anchor),
        };
        write_quad(self.buffer.slots_mut(), RENDER_QUAD, world, w0, w1, h0, h1);
    }

    /// Bounds quad: slots 8–15, always the full logical extent.
    ///
    /// Layout and hit-testing must not depend on how a texture happens to be
    /// trimmed in an atlas, so a cropping trim forces an independent pass
    /// with the untrimmed extents; otherwise the render quad is reused.
    fn compute_bounds_quad(&mut self, world: Affine) {
        if !self.frame.is_cropped() {
            self.buffer.copy_render_to_bounds();
            return;
        }
        let (w0, w1, h0, h1) =
            untrimmed_extents(self.frame.orig.width, self.frame.orig.height, self.anchor);
        write_quad(self.buffer.slots_mut(), BOUNDS_QUAD, world, w0, w1, h0, h1);
    }

    // --- bounds ---

    /// The world-space axis-aligned bounds, merged with the child aggregate.
    ///
    /// `children` is the union of the child nodes' aggregated bounds,
    /// computed recursively by the scene graph; `None` when the node has no
    /// children. The result is memoized: it is recomputed only when the
    /// generation counter moved since the last query, which every input
    /// mutation (including [`mark_children_changed`](Self::mark_children_changed))
    /// guarantees. Callers whose child aggregate may have changed must mark
    /// that before querying, or they get the memo back.
    ///
    /// [`update`](Self::update) must have run since the last change; bounds
    /// are reduced from the buffer, not derived from the transform directly.
    pub fn bounds(&mut self, children: Option<Rect>) -> Rect {
        debug_assert!(
            !self.flags.contains(GeomFlags::STALE),
            "update() must run before bounds() after a change"
        );
        if self.bounds_generation != self.generation {
            let (min_x, min_y, max_x, max_y) = util::quad_min_max(self.buffer.slots(), BOUNDS_QUAD);
            let mut rect = Rect::new(min_x, min_y, max_x, max_y);
            if let Some(child) = children {
                rect = rect.union(child);
            }
            self.cached_bounds = rect;
            self.bounds_generation = self.generation;
        }
        self.cached_bounds
    }

    /// The full logical box in local (untransformed) space:
    /// `(-W·ax, -H·ay, W, H)`.
    ///
    /// Independent of trim and of the world transform; cheap enough to
    /// recompute fresh on every call.
    pub fn local_bounds(&self) -> Rect {
        let x = -self.frame.orig.width * self.anchor.x;
        let y = -self.frame.orig.height * self.anchor.y;
        Rect::new(x, y, x + self.frame.orig.width, y + self.frame.orig.height)
    }

    // --- hit testing ---

    /// Whether a local-space point falls inside the full logical box.
    ///
    /// Both axis tests use strict inequalities: points exactly on the
    /// boundary are not contained. Compatibility depends on this edge policy
    /// bit-for-bit, surprising as it may read.
    pub fn hit_test_local(&self, local: Point) -> bool {
        let w = self.frame.orig.width;
        let x1 = -w * self.anchor.x;
        if local.x > x1 && local.x < x1 + w {
            let h = self.frame.orig.height;
            let y1 = -h * self.anchor.y;
            if local.y > y1 && local.y < y1 + h {
                return true;
            }
        }
        false
    }

    /// Whether a world-space point falls inside the full logical box,
    /// mapping through the provider's inverse transform.
    pub fn contains_point<T: WorldTransform>(&self, transform: &T, world_pt: Point) -> bool {
        self.hit_test_local(transform.inverse_point(world_pt))
    }
}

impl Renderable for SpriteGeometry {
    fn compute_vertices(&mut self, world: Affine, world_changed: bool) {
        self.update(world, world_changed);
    }

    fn compute_bounds(&mut self, children: Option<Rect>) -> Rect {
        self.bounds(children)
    }

    fn hit_test(&self, local: Point) -> bool {
        self.hit_test_local(local)
    }
}

/// Local half-extents of the full logical box around the anchor.
fn untrimmed_extents(w: f64, h: f64, anchor: Anchor) -> (f64, f64, f64, f64) {
    let w0 = w * (1.0 - anchor.x);
    let w1 = -w * anchor.x;
    let h0 = h * (1.0 - anchor.y);
    let h1 = -h * anchor.y;
    (w0, w1, h0, h1)
}

/// Push four local corners through the affine map into the buffer.
///
/// Corner order is fixed: `(w1,h1), (w0,h1), (w0,h0), (w1,h0)`. Backends
/// index the buffer by that order, so it must never vary.
fn write_quad(
    slots: &mut [f64; 16],
    offset: usize,
    world: Affine,
    w0: f64,
    w1: f64,
    h0: f64,
    h1: f64,
) {
    let [a, b, c, d, tx, ty] = world.as_coeffs();
    slots[offset] = a * w1 + c * h1 + tx;
    slots[offset + 1] = d * h1 + b * w1 + ty;
    slots[offset + 2] = a * w0 + c * h1 + tx;
    slots[offset + 3] = d * h1 + b * w0 + ty;
    slots[offset + 4] = a * w0 + c * h0 + tx;
    slots[offset + 5] = d * h0 + b * w0 + ty;
    slots[offset + 6] = a * w1 + c * h0 + tx;
    slots[offset + 7] = d * h0 + b * w1 + ty;
}
