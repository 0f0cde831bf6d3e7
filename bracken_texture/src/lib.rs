// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_texture --heading-base-level=0

//! Bracken Texture: texture metadata, readiness signaling, and caching for
//! Bracken sprites.
//!
//! ## Overview
//!
//! Sprite geometry needs three things from a texture: the logical frame
//! (with its optional trim), a way to know whether those dimensions are
//! real yet, and a one-shot notification when a lazily loaded texture
//! learns its size. This crate carries exactly that contract — pixel data,
//! decoding, and GPU upload are out of scope.
//!
//! - [`Texture`]: frame metadata plus the dimensions-known state.
//! - [`ReadySignal`]: the one-shot, at-most-once readiness notification.
//! - [`TextureCache`]: string-keyed registry with explicit
//!   [`NotFound`](CacheError::NotFound) lookup failure.
//! - [`adapter`]: helpers pushing texture extents into a sprite node at
//!   assignment ([`adapter::attach`]) and readiness ([`adapter::pump`]).
//!
//! Cache traffic and readiness hand-offs are logged at debug level via
//! [`tracing`].
//!
//! ## Deferred sizing flow
//!
//! ```
//! use bracken_sprite::{Frame, SpriteGeometry};
//! use bracken_texture::{Texture, TextureCache, adapter};
//! use kurbo::Size;
//!
//! let mut cache = TextureCache::new();
//! cache.insert("hero.png", Texture::pending());
//!
//! // Assign before the decoder knows the size; request an on-screen width.
//! let mut sprite = SpriteGeometry::pending();
//! adapter::attach(&mut sprite, cache.get("hero.png").unwrap());
//! sprite.set_width(128.0);
//! assert_eq!(sprite.width(), 0.0); // still pending
//!
//! // Decoder reports the real extents.
//! cache
//!     .get_mut("hero.png")
//!     .unwrap()
//!     .resolve(Frame::new(Size::new(64.0, 64.0)));
//! assert!(adapter::pump(&mut sprite, cache.get_mut("hero.png").unwrap()));
//! assert_eq!(sprite.width(), 128.0);
//! ```

pub mod adapter;
mod cache;
mod texture;

pub use cache::{CacheError, TextureCache};
pub use texture::{ReadySignal, Texture};
