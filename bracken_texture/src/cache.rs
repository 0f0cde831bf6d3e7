// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-keyed texture cache with explicit lookup failure.

use std::collections::HashMap;

use tracing::debug;

use crate::texture::Texture;

/// Errors from texture cache lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// No texture is registered under the requested identifier.
    ///
    /// Surfaced immediately to the caller; the cache never retries or
    /// synthesizes a placeholder.
    #[error("no texture registered under `{0}`")]
    NotFound(String),
}

/// Registry of textures by identifier.
///
/// The cache owns its entries; assigning a texture to a sprite copies the
/// frame metadata out, it does not hand out ownership. Loading pipelines
/// typically [`insert`](Self::insert) a pending texture as soon as the
/// identifier is known and [`resolve`](Texture::resolve) it through
/// [`get_mut`](Self::get_mut) once decoding reports the real extents.
#[derive(Debug, Default)]
pub struct TextureCache {
    entries: HashMap<String, Texture>,
}

impl TextureCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a texture, returning the entry it displaced, if any.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture) -> Option<Texture> {
        let id = id.into();
        debug!(%id, "registering texture");
        self.entries.insert(id, texture)
    }

    /// Drop a texture from the cache.
    pub fn remove(&mut self, id: &str) -> Option<Texture> {
        let removed = self.entries.remove(id);
        if removed.is_some() {
            debug!(%id, "dropped texture");
        }
        removed
    }

    /// Look up a texture by identifier.
    pub fn get(&self, id: &str) -> Result<&Texture, CacheError> {
        self.entries.get(id).ok_or_else(|| {
            debug!(%id, "texture cache miss");
            CacheError::NotFound(id.to_owned())
        })
    }

    /// Look up a texture mutably, e.g. to resolve pending dimensions.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Texture, CacheError> {
        match self.entries.get_mut(id) {
            Some(texture) => Ok(texture),
            None => {
                debug!(%id, "texture cache miss");
                Err(CacheError::NotFound(id.to_owned()))
            }
        }
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no textures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn missing_id_is_not_found() {
        let cache = TextureCache::new();
        assert_eq!(
            cache.get("hero.png"),
            Err(CacheError::NotFound("hero.png".to_owned()))
        );
    }

    #[test]
    fn insert_then_get() {
        let mut cache = TextureCache::new();
        cache.insert("hero.png", Texture::sized(Size::new(32.0, 48.0)));
        let texture = cache.get("hero.png").unwrap();
        assert_eq!(texture.frame().orig, Size::new(32.0, 48.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_displaces_previous_entry() {
        let mut cache = TextureCache::new();
        assert!(cache.insert("a", Texture::pending()).is_none());
        let displaced = cache.insert("a", Texture::sized(Size::new(2.0, 2.0)));
        assert_eq!(displaced, Some(Texture::pending()));
    }

    #[test]
    fn remove_forgets_the_entry() {
        let mut cache = TextureCache::new();
        cache.insert("a", Texture::pending());
        assert!(cache.remove("a").is_some());
        assert!(cache.remove("a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn resolve_through_get_mut() {
        let mut cache = TextureCache::new();
        cache.insert("lazy.png", Texture::pending());
        cache
            .get_mut("lazy.png")
            .unwrap()
            .resolve(bracken_sprite::Frame::new(Size::new(16.0, 16.0)));
        assert!(cache.get("lazy.png").unwrap().dimensions_known());
    }

    #[test]
    fn not_found_error_names_the_id() {
        let cache = TextureCache::new();
        let err = cache.get("missing").unwrap_err();
        assert_eq!(err.to_string(), "no texture registered under `missing`");
    }
}
