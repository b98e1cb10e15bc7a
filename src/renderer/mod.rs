//! Rendering abstraction
//!
//! The simulation paints and erases whole entities. Anything that can do
//! that on a fixed-size surface can host the game.

pub mod surface;

pub use surface::{Painted, Surface};

use glam::Vec2;

use crate::sim::Entity;

/// Drawing surface the round paints onto
pub trait Renderer {
    /// Play-area size in logical units
    fn dimensions(&self) -> Vec2;

    /// Paint `entity` at its position using its current animation frame
    fn draw(&mut self, entity: &Entity);

    /// Erase the region `entity` occupies
    fn clear(&mut self, entity: &Entity);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn dimensions(&self) -> Vec2 {
        (**self).dimensions()
    }

    fn draw(&mut self, entity: &Entity) {
        (**self).draw(entity)
    }

    fn clear(&mut self, entity: &Entity) {
        (**self).clear(entity)
    }
}
