//! Collision detection between projectiles, enemies and the player
//!
//! Everything is axis-aligned rectangle overlap. Resolution only reports
//! indices; the round controller applies removals afterwards so no list is
//! mutated while it is being scanned.

use super::entity::Entity;

/// One projectile striking one enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: usize,
    pub enemy: usize,
}

/// Result of a projectile-vs-enemy pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletHits {
    /// In projectile order
    pub hits: Vec<Hit>,
}

impl BulletHits {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Indices of projectiles to remove
    pub fn projectiles(&self) -> Vec<usize> {
        self.hits.iter().map(|h| h.projectile).collect()
    }

    /// Indices of enemies to remove
    pub fn enemies(&self) -> Vec<usize> {
        self.hits.iter().map(|h| h.enemy).collect()
    }
}

/// Rectangle overlap between two entities
#[inline]
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.rect().overlaps(&b.rect())
}

/// Match projectiles against enemies
///
/// Projectiles are taken in ascending order; for each one the enemies are
/// scanned from the last index down and the first overlap wins. A projectile
/// destroys at most one enemy and an enemy is destroyed by at most one
/// projectile.
pub fn resolve_bullets_vs_enemies(projectiles: &[Entity], enemies: &[Entity]) -> BulletHits {
    let mut result = BulletHits::default();
    if projectiles.is_empty() || enemies.is_empty() {
        return result;
    }

    let mut enemy_hit = vec![false; enemies.len()];
    for (pi, projectile) in projectiles.iter().enumerate() {
        for ei in (0..enemies.len()).rev() {
            if enemy_hit[ei] {
                continue;
            }
            if overlaps(projectile, &enemies[ei]) {
                enemy_hit[ei] = true;
                result.hits.push(Hit {
                    projectile: pi,
                    enemy: ei,
                });
                break;
            }
        }
    }
    result
}

/// Indices of every enemy touching the player
pub fn colliding_enemies(player: &Entity, enemies: &[Entity]) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| overlaps(player, enemy))
        .map(|(i, _)| i)
        .collect()
}

/// True if any enemy touches the player
pub fn resolve_player_vs_enemies(player: &Entity, enemies: &[Entity]) -> bool {
    enemies.iter().any(|enemy| overlaps(player, enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{EntityId, EntityKind, Rect};
    use crate::sim::sprite::{AssetProvider, BuiltinAssets};
    use glam::Vec2;
    use proptest::prelude::*;

    fn entity(id: u32, kind: EntityKind, x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(
            EntityId(id),
            kind,
            Vec2::new(x, y),
            Vec2::new(w, h),
            Vec2::ZERO,
            BuiltinAssets.sprite(kind),
        )
        .unwrap()
    }

    fn enemy(id: u32, x: f32, y: f32) -> Entity {
        entity(id, EntityKind::Enemy, x, y, 20.0, 20.0)
    }

    fn bullet(id: u32, x: f32, y: f32) -> Entity {
        entity(id, EntityKind::Projectile, x, y, 7.0, 14.0)
    }

    #[test]
    fn test_empty_sets_are_noops() {
        let enemies = vec![enemy(1, 0.0, 0.0)];
        let bullets = vec![bullet(2, 0.0, 0.0)];
        assert!(resolve_bullets_vs_enemies(&[], &enemies).is_empty());
        assert!(resolve_bullets_vs_enemies(&bullets, &[]).is_empty());
        assert!(!resolve_player_vs_enemies(&enemies[0], &[]));
    }

    #[test]
    fn test_highest_enemy_index_wins() {
        // Both enemies overlap the projectile
        let enemies = vec![enemy(1, 0.0, 0.0), enemy(2, 10.0, 0.0)];
        let bullets = vec![bullet(3, 12.0, 5.0)];

        let result = resolve_bullets_vs_enemies(&bullets, &enemies);
        assert_eq!(
            result.hits,
            vec![Hit {
                projectile: 0,
                enemy: 1
            }]
        );
    }

    #[test]
    fn test_enemy_destroyed_by_one_projectile() {
        let enemies = vec![enemy(1, 0.0, 0.0)];
        let bullets = vec![bullet(2, 5.0, 5.0), bullet(3, 6.0, 6.0)];

        let result = resolve_bullets_vs_enemies(&bullets, &enemies);
        assert_eq!(result.projectiles(), vec![0]);
        assert_eq!(result.enemies(), vec![0]);
    }

    #[test]
    fn test_second_projectile_falls_through_to_next_enemy() {
        let enemies = vec![enemy(1, 0.0, 0.0), enemy(2, 10.0, 0.0)];
        let bullets = vec![bullet(3, 12.0, 5.0), bullet(4, 12.0, 5.0)];

        let result = resolve_bullets_vs_enemies(&bullets, &enemies);
        assert_eq!(result.enemies(), vec![1, 0]);
        assert_eq!(result.projectiles(), vec![0, 1]);
    }

    #[test]
    fn test_miss() {
        let enemies = vec![enemy(1, 0.0, 0.0)];
        let bullets = vec![bullet(2, 100.0, 100.0)];
        assert!(resolve_bullets_vs_enemies(&bullets, &enemies).is_empty());
    }

    #[test]
    fn test_player_collision() {
        let player = entity(1, EntityKind::Player, 295.0, 650.0, 60.0, 50.0);
        let far = enemy(2, 0.0, 0.0);
        let touching = enemy(3, 300.0, 640.0);

        assert!(!resolve_player_vs_enemies(&player, &[far.clone()]));
        assert!(resolve_player_vs_enemies(&player, &[far.clone(), touching.clone()]));
        assert_eq!(colliding_enemies(&player, &[far, touching]), vec![1]);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -100.0f32..800.0,
            -100.0f32..800.0,
            0.5f32..200.0,
            0.5f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in rect_strategy()) {
            prop_assert!(a.overlaps(&a));
        }
    }
}
