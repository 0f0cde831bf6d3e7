// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture handles and the one-shot dimensions-ready signal.

use bracken_sprite::Frame;
use kurbo::Size;

/// One-shot notification that a texture's dimensions became known.
///
/// This is not a queue or a stream: it either fires once or never, and its
/// payload is consumed at most once. The state machine is
/// `Empty → Completed → Delivered`; completing again after either of the
/// latter two states is a no-op. No cancellation exists — the texture is
/// simply dropped if the node goes away first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadySignal {
    value: Option<Frame>,
    delivered: bool,
}

impl ReadySignal {
    /// Create an empty, unfired signal.
    pub const fn new() -> Self {
        Self {
            value: None,
            delivered: false,
        }
    }

    /// Fire the signal with the resolved frame.
    ///
    /// Only the first completion counts; later calls are ignored.
    pub fn complete(&mut self, frame: Frame) {
        if !self.delivered && self.value.is_none() {
            self.value = Some(frame);
        }
    }

    /// Consume the payload, if the signal fired and was not consumed yet.
    pub fn take(&mut self) -> Option<Frame> {
        let value = self.value.take();
        if value.is_some() {
            self.delivered = true;
        }
        value
    }

    /// Whether the payload was already handed out.
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }
}

/// A texture as the sprite geometry sees it: extents plus readiness.
///
/// Loading and decoding pixel data is someone else's job; this type carries
/// only the metadata contract — the logical frame with its optional trim,
/// whether those dimensions are real yet, and the one-shot [`ReadySignal`]
/// that fires when a lazily loaded texture learns its size.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    frame: Frame,
    dimensions_known: bool,
    ready: ReadySignal,
}

impl Texture {
    /// A texture whose dimensions are known up front.
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            dimensions_known: true,
            ready: ReadySignal::new(),
        }
    }

    /// An untrimmed texture of the given size.
    pub fn sized(size: Size) -> Self {
        Self::new(Frame::new(size))
    }

    /// A texture still waiting to learn its dimensions.
    pub fn pending() -> Self {
        Self {
            frame: Frame::EMPTY,
            dimensions_known: false,
            ready: ReadySignal::new(),
        }
    }

    /// The logical frame and trim. [`Frame::EMPTY`] while pending.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Whether the logical frame holds real dimensions.
    pub fn dimensions_known(&self) -> bool {
        self.dimensions_known
    }

    /// Deliver the real extents of a pending texture, firing the one-shot
    /// readiness signal.
    ///
    /// Resolving an already resolved texture replaces the frame but does not
    /// re-fire the signal; readiness is delivered at most once per texture.
    pub fn resolve(&mut self, frame: Frame) {
        self.frame = frame;
        if !self.dimensions_known {
            self.dimensions_known = true;
            self.ready.complete(frame);
        }
    }

    /// Consume the readiness payload, if it fired and was not consumed yet.
    pub fn take_ready(&mut self) -> Option<Frame> {
        self.ready.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn ready_signal_delivers_at_most_once() {
        let mut signal = ReadySignal::new();
        assert_eq!(signal.take(), None);
        let frame = Frame::new(Size::new(8.0, 8.0));
        signal.complete(frame);
        assert_eq!(signal.take(), Some(frame));
        assert!(signal.is_delivered());
        assert_eq!(signal.take(), None);
        // A late completion after delivery is dropped.
        signal.complete(Frame::new(Size::new(2.0, 2.0)));
        assert_eq!(signal.take(), None);
    }

    #[test]
    fn ready_signal_keeps_first_completion() {
        let mut signal = ReadySignal::new();
        let first = Frame::new(Size::new(8.0, 8.0));
        signal.complete(first);
        signal.complete(Frame::new(Size::new(2.0, 2.0)));
        assert_eq!(signal.take(), Some(first));
    }

    #[test]
    fn pending_texture_resolves_once() {
        let mut texture = Texture::pending();
        assert!(!texture.dimensions_known());
        assert_eq!(texture.frame(), Frame::EMPTY);
        assert_eq!(texture.take_ready(), None);

        let frame = Frame::with_trim(Size::new(10.0, 10.0), Rect::new(2.0, 3.0, 6.0, 8.0));
        texture.resolve(frame);
        assert!(texture.dimensions_known());
        assert_eq!(texture.take_ready(), Some(frame));
        assert_eq!(texture.take_ready(), None);
    }

    #[test]
    fn eager_texture_never_fires_readiness() {
        let mut texture = Texture::sized(Size::new(4.0, 4.0));
        assert!(texture.dimensions_known());
        assert_eq!(texture.take_ready(), None);
        // Frame replacement on a resolved texture is ordinary mutation, not
        // a readiness event.
        texture.resolve(Frame::new(Size::new(6.0, 6.0)));
        assert_eq!(texture.take_ready(), None);
        assert_eq!(texture.frame(), Frame::new(Size::new(6.0, 6.0)));
    }
}
