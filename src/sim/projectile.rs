//! Player-fired projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind, take_indices};
use super::sprite::SpriteSheet;
use crate::consts::{PROJECTILE_SCALE, PROJECTILE_SPEED};
use crate::error::SimError;

/// Active projectiles in firing order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Projectiles {
    active: Vec<Entity>,
}

impl Projectiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a projectile centered on `origin`, just above its top edge
    pub fn fire(
        &mut self,
        origin: &Entity,
        sprite: SpriteSheet,
        id: EntityId,
    ) -> Result<&Entity, SimError> {
        let size = (sprite.frame_size() * PROJECTILE_SCALE).floor();
        let pos = Vec2::new(
            (origin.center_x() - size.x / 2.0).floor(),
            origin.pos.y - size.y,
        );
        let projectile = Entity::new(
            id,
            EntityKind::Projectile,
            pos,
            size,
            Vec2::new(0.0, PROJECTILE_SPEED),
            sprite,
        )?;
        self.active.push(projectile);
        Ok(&self.active[self.active.len() - 1])
    }

    /// Move every projectile up one step
    ///
    /// Projectiles whose bottom edge is at or above the top of the play area
    /// are removed instead and returned.
    pub fn advance(&mut self) -> Vec<Entity> {
        let mut expired = Vec::new();
        self.active.retain_mut(|projectile| {
            if projectile.rect().bottom() > 0.0 {
                projectile.next_frame();
                projectile.move_up();
                true
            } else {
                expired.push(projectile.clone());
                false
            }
        });
        expired
    }

    /// Remove projectiles by index; returns the removed entities
    pub fn remove(&mut self, indices: &[usize]) -> Vec<Entity> {
        take_indices(&mut self.active, indices)
    }

    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
