//! Sprite sheet metadata
//!
//! The core never touches pixels. It only needs to know how many frames a
//! sheet holds and how large one frame is, so it can size entities and tell
//! the renderer which slice of the sheet to paint.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use crate::consts::*;
use crate::error::SimError;

/// Direction in which frames are laid out on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strip {
    Horizontal,
    Vertical,
}

/// Frame layout of one sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    frames: u32,
    frame_size: Vec2,
    strip: Strip,
}

impl SpriteSheet {
    pub fn new(frames: u32, frame_size: Vec2, strip: Strip) -> Result<Self, SimError> {
        let valid_size = frame_size.is_finite() && frame_size.x > 0.0 && frame_size.y > 0.0;
        if frames == 0 || !valid_size {
            return Err(SimError::InvalidSprite { frames });
        }
        Ok(Self {
            frames,
            frame_size,
            strip,
        })
    }

    /// Number of animation frames
    #[inline]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Size of a single frame
    #[inline]
    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    #[inline]
    pub fn strip(&self) -> Strip {
        self.strip
    }

    /// Source offset of `frame` within the sheet (wraps past the last frame)
    pub fn frame_offset(&self, frame: u32) -> Vec2 {
        let index = (frame % self.frames) as f32;
        match self.strip {
            Strip::Horizontal => Vec2::new(index * self.frame_size.x, 0.0),
            Strip::Vertical => Vec2::new(0.0, index * self.frame_size.y),
        }
    }
}

/// Supplies sprite metadata per entity kind
pub trait AssetProvider {
    fn sprite(&self, kind: EntityKind) -> SpriteSheet;
}

/// Sprite metrics compiled into the game
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl AssetProvider for BuiltinAssets {
    fn sprite(&self, kind: EntityKind) -> SpriteSheet {
        let (frames, (w, h), strip) = match kind {
            EntityKind::Player => (PLAYER_FRAMES, PLAYER_FRAME, Strip::Horizontal),
            EntityKind::Enemy => (ENEMY_FRAMES, ENEMY_FRAME, Strip::Horizontal),
            EntityKind::Projectile => (PROJECTILE_FRAMES, PROJECTILE_FRAME, Strip::Vertical),
        };
        SpriteSheet {
            frames,
            frame_size: Vec2::new(w, h),
            strip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_rejects_empty() {
        assert_eq!(
            SpriteSheet::new(0, Vec2::new(10.0, 10.0), Strip::Horizontal),
            Err(SimError::InvalidSprite { frames: 0 })
        );
        assert!(SpriteSheet::new(2, Vec2::new(0.0, 10.0), Strip::Horizontal).is_err());
        assert!(SpriteSheet::new(2, Vec2::new(10.0, f32::NAN), Strip::Vertical).is_err());
    }

    #[test]
    fn test_frame_offset_follows_strip() {
        let horizontal = SpriteSheet::new(2, Vec2::new(20.0, 16.0), Strip::Horizontal).unwrap();
        assert_eq!(horizontal.frame_offset(1), Vec2::new(20.0, 0.0));
        // Wraps back to the first frame
        assert_eq!(horizontal.frame_offset(2), Vec2::ZERO);

        let vertical = SpriteSheet::new(4, Vec2::new(10.0, 20.0), Strip::Vertical).unwrap();
        assert_eq!(vertical.frame_offset(3), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn test_builtin_assets_are_valid() {
        for kind in [EntityKind::Player, EntityKind::Enemy, EntityKind::Projectile] {
            let sheet = BuiltinAssets.sprite(kind);
            assert!(SpriteSheet::new(sheet.frames(), sheet.frame_size(), sheet.strip()).is_ok());
        }
    }
}
