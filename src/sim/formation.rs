//! Enemy formation
//!
//! The formation moves as one rigid block: it sweeps sideways, steps down
//! when it reaches the right edge, sweeps back, steps down again at the left
//! edge, and so on. Direction and descent state live here and are only
//! changed by [`Formation::advance`] and [`Formation::create_wave`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::WaveParams;
use super::entity::{Entity, EntityIds, EntityKind, take_indices};
use super::sprite::SpriteSheet;
use crate::consts::TILE_GAP;
use crate::error::SimError;

/// Horizontal sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// How wave parameters map to grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GridLayout {
    /// One extra row and column beyond the named counts (classic layout)
    #[default]
    Inclusive,
    /// Exactly `columns` x `rows`
    Exact,
}

impl GridLayout {
    /// (columns, rows) actually spawned
    pub fn dimensions(&self, params: &WaveParams) -> (u32, u32) {
        match self {
            GridLayout::Inclusive => (params.columns + 1, params.rows + 1),
            GridLayout::Exact => (params.columns, params.rows),
        }
    }
}

/// Which edge rule fired during a formation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeRule {
    /// Right edge reached: descend, head left
    DescendLeft,
    /// Left edge reached after a descent: descend, head right
    DescendRight,
    /// Already past the left edge: head right without descending
    BounceRight,
}

/// The enemies of the current wave and their shared motion state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    /// Stable iteration order (spawn order, row-major)
    enemies: Vec<Entity>,
    direction: Direction,
    /// Set by the right-edge descent, cleared when a wave is created
    has_descended: bool,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formation {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            direction: Direction::Right,
            has_descended: false,
        }
    }

    /// Build a formation from pre-placed enemies (sweeping right, no descent yet)
    pub fn with_enemies(enemies: Vec<Entity>) -> Self {
        Self {
            enemies,
            ..Self::new()
        }
    }

    /// Replace the current enemies with a fresh grid at the top-left origin
    ///
    /// Returns the number of enemies spawned. The sweep direction carries
    /// over from the previous wave.
    pub fn create_wave(
        &mut self,
        params: &WaveParams,
        layout: GridLayout,
        sprite: SpriteSheet,
        ids: &mut EntityIds,
    ) -> Result<usize, SimError> {
        let (columns, rows) = layout.dimensions(params);
        if columns == 0 || rows == 0 {
            return Err(SimError::InvalidWave {
                columns: params.columns,
                rows: params.rows,
            });
        }

        let size = sprite.frame_size();
        // Descent step is one row of the spawn grid
        let speed = Vec2::new(params.speed, size.y + TILE_GAP);

        let mut enemies = Vec::with_capacity((columns * rows) as usize);
        let mut y = 0.0;
        for _ in 0..rows {
            let mut x = 0.0;
            let mut row_height: f32 = 0.0;
            for _ in 0..columns {
                let enemy = Entity::new(
                    ids.next_id(),
                    EntityKind::Enemy,
                    Vec2::new(x, y),
                    size,
                    speed,
                    sprite,
                )?;
                x += enemy.size().x + TILE_GAP;
                row_height = row_height.max(enemy.size().y);
                enemies.push(enemy);
            }
            y += row_height + TILE_GAP;
        }

        self.enemies = enemies;
        self.has_descended = false;
        log::info!(
            "Spawned wave: {}x{} enemies at speed {}",
            columns,
            rows,
            params.speed
        );
        Ok(self.enemies.len())
    }

    /// Move the whole formation one step and return the resolved direction
    pub fn advance(&mut self, play_width: f32) -> Direction {
        if let Some(rule) = self.edge_rule(play_width) {
            match rule {
                EdgeRule::DescendLeft => {
                    self.descend();
                    self.has_descended = true;
                    self.direction = Direction::Left;
                }
                EdgeRule::DescendRight => {
                    self.descend();
                    self.direction = Direction::Right;
                }
                EdgeRule::BounceRight => {
                    self.direction = Direction::Right;
                }
            }
            log::debug!("Formation edge rule {:?} -> {:?}", rule, self.direction);
        }

        for enemy in &mut self.enemies {
            enemy.next_frame();
            match self.direction {
                Direction::Right => enemy.move_right(),
                Direction::Left => enemy.move_left(),
            }
        }

        self.direction
    }

    fn edge_rule(&self, play_width: f32) -> Option<EdgeRule> {
        let rects = self.enemies.iter().map(Entity::rect);
        if rects.clone().any(|r| r.right() >= play_width) {
            Some(EdgeRule::DescendLeft)
        } else if self.has_descended && rects.clone().any(|r| r.left() <= 0.0) {
            Some(EdgeRule::DescendRight)
        } else if rects.clone().any(|r| r.left() < 0.0) {
            Some(EdgeRule::BounceRight)
        } else {
            None
        }
    }

    fn descend(&mut self) {
        for enemy in &mut self.enemies {
            enemy.move_down();
        }
    }

    /// Remove enemies by index; returns the removed entities
    pub fn remove(&mut self, indices: &[usize]) -> Vec<Entity> {
        take_indices(&mut self.enemies, indices)
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Wave cleared when no enemy is left
    pub fn is_cleared(&self) -> bool {
        self.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_descended(&self) -> bool {
        self.has_descended
    }
}
