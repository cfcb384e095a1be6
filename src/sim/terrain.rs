//! Static platforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityId, EntityKind, SpriteKey};
use crate::config::PlatformSpec;

/// Immovable collision geometry, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    platforms: Vec<Entity>,
}

impl Terrain {
    /// Build platforms from specs; `base_size` is the unscaled ground sprite
    pub fn new(specs: &[PlatformSpec], base_size: Vec2) -> Self {
        let platforms = specs
            .iter()
            .enumerate()
            .map(|(slot, spec)| {
                let body = Body::fixed(Vec2::new(spec.x, spec.y), base_size * spec.scale);
                Entity::new(EntityId::new(EntityKind::Platform, slot), SpriteKey::Ground, body)
            })
            .collect();
        Self { platforms }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.platforms.iter()
    }

    /// Mutable view for the physics step (static bodies are never moved)
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;

    #[test]
    fn test_default_layout() {
        let tuning = Tuning::default();
        let terrain = Terrain::new(&tuning.platforms, Vec2::new(400.0, 32.0));
        assert_eq!(terrain.len(), 4);

        let ground = terrain.iter().next().unwrap();
        assert_eq!(ground.body.size(), Vec2::new(800.0, 64.0));
        assert_eq!(ground.body.min(), Vec2::new(0.0, 536.0));
        assert!(terrain.iter().all(|p| p.body.is_static && p.active));
    }
}
