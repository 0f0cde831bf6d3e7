// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The world-transform provider contract consumed by sprite geometry.

use kurbo::{Affine, Point};

/// Source of a node's accumulated world transform.
///
/// The transform is owned by the ancestor chain of the scene graph; sprite
/// geometry only reads it. Implementations expose the current affine
/// coefficients, a take-style "changed since last read" signal, and an
/// inverse mapping used by hit testing.
///
/// The changed signal must be conservative: when in doubt whether the
/// transform moved since the last read, report `true`. A missed invalidation
/// silently corrupts rendering and hit testing; a spurious one only costs a
/// recompute.
pub trait WorldTransform {
    /// The current local→world affine map.
    fn world_affine(&self) -> Affine;

    /// Whether the transform changed since this was last called.
    ///
    /// Reading clears the signal.
    fn take_changed(&mut self) -> bool;

    /// Map a world-space point into this node's local space.
    ///
    /// The default implementation inverts [`world_affine`](Self::world_affine);
    /// providers that track the inverse incrementally can override it.
    fn inverse_point(&self, pt: Point) -> Point {
        self.world_affine().inverse() * pt
    }
}

/// A free-standing transform provider holding an explicit affine.
///
/// Useful in tests, demos, and hosts without a retained transform hierarchy.
/// Setting a new affine raises the changed signal; the signal is also raised
/// on construction so the first frame always recomputes.
#[derive(Copy, Clone, Debug)]
pub struct StaticTransform {
    affine: Affine,
    changed: bool,
}

impl StaticTransform {
    /// Create a provider for the given affine, with the changed signal set.
    pub const fn new(affine: Affine) -> Self {
        Self {
            affine,
            changed: true,
        }
    }

    /// Replace the affine and raise the changed signal.
    pub fn set(&mut self, affine: Affine) {
        self.affine = affine;
        self.changed = true;
    }
}

impl Default for StaticTransform {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl WorldTransform for StaticTransform {
    fn world_affine(&self) -> Affine {
        self.affine
    }

    fn take_changed(&mut self) -> bool {
        let changed = self.changed;
        self.changed = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn changed_signal_is_take_style() {
        let mut tf = StaticTransform::new(Affine::IDENTITY);
        assert!(tf.take_changed());
        assert!(!tf.take_changed());
        tf.set(Affine::translate(Vec2::new(3.0, 0.0)));
        assert!(tf.take_changed());
        assert!(!tf.take_changed());
    }

    #[test]
    fn inverse_point_round_trips() {
        let tf = StaticTransform::new(Affine::translate(Vec2::new(10.0, -4.0)));
        let local = tf.inverse_point(Point::new(10.0, -4.0));
        assert_eq!(local, Point::new(0.0, 0.0));
    }
}
