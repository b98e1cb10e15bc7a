//! In-memory drawing surface
//!
//! Keeps the last painted state of every entity instead of pixels. Used for
//! headless sessions and for checking what ended up on screen.

use std::collections::BTreeMap;

use glam::Vec2;

use super::Renderer;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{Entity, EntityId, EntityKind, Rect};

/// What is currently painted for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct Painted {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Source offset of the frame on the sprite sheet
    pub frame_offset: Vec2,
}

#[derive(Debug, Clone)]
pub struct Surface {
    size: Vec2,
    painted: BTreeMap<EntityId, Painted>,
    draw_calls: u64,
    clear_calls: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            painted: BTreeMap::new(),
            draw_calls: 0,
            clear_calls: 0,
        }
    }

    pub fn is_painted(&self, id: EntityId) -> bool {
        self.painted.contains_key(&id)
    }

    pub fn painted(&self, id: EntityId) -> Option<&Painted> {
        self.painted.get(&id)
    }

    /// Number of painted entities of `kind`
    pub fn count(&self, kind: EntityKind) -> usize {
        self.painted.values().filter(|p| p.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.painted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.painted.is_empty()
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn clear_calls(&self) -> u64 {
        self.clear_calls
    }

    /// Coarse text picture of the surface, one character per `cell` units
    pub fn to_ascii(&self, cell: f32) -> String {
        let cols = (self.size.x / cell).ceil() as usize;
        let rows = (self.size.y / cell).ceil() as usize;
        let mut grid = vec![vec!['.'; cols]; rows];

        for painted in self.painted.values() {
            let glyph = match painted.kind {
                EntityKind::Player => 'A',
                EntityKind::Enemy => 'W',
                EntityKind::Projectile => '|',
            };
            let rect = painted.rect;
            let x0 = (rect.left() / cell).floor().max(0.0) as usize;
            let y0 = (rect.top() / cell).floor().max(0.0) as usize;
            let x1 = ((rect.right() / cell).ceil().max(0.0) as usize).min(cols);
            let y1 = ((rect.bottom() / cell).ceil().max(0.0) as usize).min(rows);
            for row in grid.iter_mut().take(y1).skip(y0) {
                for c in row.iter_mut().take(x1).skip(x0) {
                    *c = glyph;
                }
            }
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Renderer for Surface {
    fn dimensions(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, entity: &Entity) {
        log::trace!("draw {} {:?} at {:?}", entity.kind, entity.id, entity.pos);
        self.draw_calls += 1;
        self.painted.insert(
            entity.id,
            Painted {
                kind: entity.kind,
                rect: entity.rect(),
                frame_offset: entity.frame_offset(),
            },
        );
    }

    fn clear(&mut self, entity: &Entity) {
        log::trace!("clear {} {:?}", entity.kind, entity.id);
        self.clear_calls += 1;
        self.painted.remove(&entity.id);
    }
}
