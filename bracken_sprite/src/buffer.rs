// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed 16-slot geometry buffer backing a sprite node.

use kurbo::Point;

/// Offset of the render quad within the buffer (slots 0–7).
pub const RENDER_QUAD: usize = 0;

/// Offset of the bounds quad within the buffer (slots 8–15).
pub const BOUNDS_QUAD: usize = 8;

/// Fixed numeric store for one sprite node's world-space corners.
///
/// Slots 0–7 hold the render quad and slots 8–15 the bounds quad, each as
/// four corners × two coordinates in the calculator's fixed corner order.
/// The buffer is owned exclusively by its node, mutated in place by the quad
/// calculators, and never resized.
///
/// References obtained from [`as_array`](Self::as_array) (or the typed corner
/// accessors' source data) are only valid until the next recomputation;
/// callers that need values across frames must copy them out.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadBuffer {
    slots: [f64; 16],
}

impl QuadBuffer {
    /// Number of slots in the buffer.
    pub const LEN: usize = 16;

    /// Create a zeroed buffer.
    pub const fn new() -> Self {
        Self { slots: [0.0; 16] }
    }

    /// Read-only view of all 16 slots, render quad first.
    pub fn as_array(&self) -> &[f64; 16] {
        &self.slots
    }

    /// The render quad's four corners, in calculator order.
    pub fn render_quad(&self) -> [Point; 4] {
        self.quad_at(RENDER_QUAD)
    }

    /// The bounds quad's four corners, in calculator order.
    pub fn bounds_quad(&self) -> [Point; 4] {
        self.quad_at(BOUNDS_QUAD)
    }

    fn quad_at(&self, offset: usize) -> [Point; 4] {
        let v = &self.slots;
        [
            Point::new(v[offset], v[offset + 1]),
            Point::new(v[offset + 2], v[offset + 3]),
            Point::new(v[offset + 4], v[offset + 5]),
            Point::new(v[offset + 6], v[offset + 7]),
        ]
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [f64; 16] {
        &mut self.slots
    }

    pub(crate) fn slots(&self) -> &[f64; 16] {
        &self.slots
    }

    /// Copy the render quad into the bounds quad slots.
    pub(crate) fn copy_render_to_bounds(&mut self) {
        let (render, bounds) = self.slots.split_at_mut(BOUNDS_QUAD);
        bounds.copy_from_slice(render);
    }
}

impl Default for QuadBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = QuadBuffer::new();
        assert_eq!(buf.as_array(), &[0.0; 16]);
    }

    #[test]
    fn copy_render_to_bounds_mirrors_slots() {
        let mut buf = QuadBuffer::new();
        for (i, slot) in buf.slots_mut().iter_mut().enumerate().take(BOUNDS_QUAD) {
            *slot = i as f64;
        }
        buf.copy_render_to_bounds();
        assert_eq!(buf.render_quad(), buf.bounds_quad());
        assert_eq!(buf.as_array()[BOUNDS_QUAD], 0.0);
        assert_eq!(buf.as_array()[BOUNDS_QUAD + 7], 7.0);
    }

    #[test]
    fn quads_read_in_corner_order() {
        let mut buf = QuadBuffer::new();
        buf.slots_mut()[..4].copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let quad = buf.render_quad();
        assert_eq!(quad[0], Point::new(1.0, 2.0));
        assert_eq!(quad[1], Point::new(3.0, 4.0));
    }
}
