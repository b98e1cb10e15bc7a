//! Entities and their geometry
//!
//! The ship, enemies and projectiles share one data type. What differs
//! between them (how they move, which collision group they belong to) is
//! carried by [`EntityKind`].

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::SpriteSheet;
use crate::error::SimError;

/// Stable entity identifier, unique within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Hands out entity IDs in increasing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Enemy => "enemy",
            EntityKind::Projectile => "projectile",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle covering [min.x, min.x + size.x) x [min.y, min.y + size.y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// True when the two half-open rectangles share at least one point
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A positioned, animated rectangle
///
/// Size and speed are fixed at creation; position and animation frame
/// change every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner in play-area coordinates
    pub pos: Vec2,
    size: Vec2,
    /// Per-step displacement magnitudes (x for sideways moves, y for vertical)
    speed: Vec2,
    sprite: SpriteSheet,
    frame: u32,
}

impl Entity {
    pub fn new(
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
        size: Vec2,
        speed: Vec2,
        sprite: SpriteSheet,
    ) -> Result<Self, SimError> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(SimError::InvalidSize {
                kind,
                width: size.x,
                height: size.y,
            });
        }
        for component in [speed.x, speed.y] {
            if !component.is_finite() || component < 0.0 {
                return Err(SimError::InvalidSpeed {
                    kind,
                    speed: component,
                });
            }
        }
        Ok(Self {
            id,
            kind,
            pos,
            size,
            speed,
            sprite,
            frame: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn speed(&self) -> Vec2 {
        self.speed
    }

    #[inline]
    pub fn sprite(&self) -> &SpriteSheet {
        &self.sprite
    }

    /// Current animation frame
    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Source offset of the current frame on the sprite sheet
    pub fn frame_offset(&self) -> Vec2 {
        self.sprite.frame_offset(self.frame)
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn overlaps(&self, other: &Entity) -> bool {
        self.rect().overlaps(&other.rect())
    }

    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % self.sprite.frames();
    }

    pub fn move_left(&mut self) {
        self.pos.x -= self.speed.x;
    }

    pub fn move_right(&mut self) {
        self.pos.x += self.speed.x;
    }

    pub fn move_up(&mut self) {
        self.pos.y -= self.speed.y;
    }

    pub fn move_down(&mut self) {
        self.pos.y += self.speed.y;
    }
}

/// Remove the entities at `indices` from `items`, keeping the order of the rest
///
/// Indices may arrive in any order; duplicates and out-of-range values are ignored.
pub fn take_indices(items: &mut Vec<Entity>, indices: &[usize]) -> Vec<Entity> {
    if indices.is_empty() {
        return Vec::new();
    }
    let mut marked = vec![false; items.len()];
    for &i in indices {
        if let Some(slot) = marked.get_mut(i) {
            *slot = true;
        }
    }

    let mut taken = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for (entity, remove) in items.drain(..).zip(marked) {
        if remove {
            taken.push(entity);
        } else {
            kept.push(entity);
        }
    }
    *items = kept;
    taken
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::{AssetProvider, BuiltinAssets};

    fn enemy(id: u32, x: f32, y: f32) -> Entity {
        Entity::new(
            EntityId(id),
            EntityKind::Enemy,
            Vec2::new(x, y),
            Vec2::new(20.0, 20.0),
            Vec2::new(10.0, 30.0),
            BuiltinAssets.sprite(EntityKind::Enemy),
        )
        .unwrap()
    }

    #[test]
    fn test_entity_rejects_bad_size() {
        let sprite = BuiltinAssets.sprite(EntityKind::Enemy);
        let result = Entity::new(
            EntityId(1),
            EntityKind::Enemy,
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            Vec2::ZERO,
            sprite,
        );
        assert!(matches!(result, Err(SimError::InvalidSize { .. })));
    }

    #[test]
    fn test_entity_rejects_negative_speed() {
        let sprite = BuiltinAssets.sprite(EntityKind::Projectile);
        let result = Entity::new(
            EntityId(1),
            EntityKind::Projectile,
            Vec2::ZERO,
            Vec2::new(7.0, 14.0),
            Vec2::new(0.0, -5.0),
            sprite,
        );
        assert_eq!(
            result,
            Err(SimError::InvalidSpeed {
                kind: EntityKind::Projectile,
                speed: -5.0
            })
        );
    }

    #[test]
    fn test_moves_use_speed() {
        let mut e = enemy(1, 100.0, 100.0);
        e.move_right();
        assert_eq!(e.pos, Vec2::new(110.0, 100.0));
        e.move_down();
        assert_eq!(e.pos, Vec2::new(110.0, 130.0));
        e.move_left();
        e.move_up();
        assert_eq!(e.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_frame_wraps() {
        let mut e = enemy(1, 0.0, 0.0);
        e.next_frame();
        assert_eq!(e.frame(), 1);
        assert_eq!(e.frame_offset(), Vec2::new(20.0, 0.0));
        e.next_frame();
        assert_eq!(e.frame(), 0);
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_take_indices_keeps_order() {
        let mut items: Vec<Entity> = (1..=5).map(|i| enemy(i, i as f32, 0.0)).collect();
        let taken = take_indices(&mut items, &[3, 0, 3, 42]);
        let taken_ids: Vec<u32> = taken.iter().map(|e| e.id.0).collect();
        let kept_ids: Vec<u32> = items.iter().map(|e| e.id.0).collect();
        assert_eq!(taken_ids, vec![1, 4]);
        assert_eq!(kept_ids, vec![2, 3, 5]);
    }

    #[test]
    fn test_ids_increase() {
        let mut ids = EntityIds::default();
        assert_eq!(ids.next_id(), EntityId(1));
        assert_eq!(ids.next_id(), EntityId(2));
    }
}
