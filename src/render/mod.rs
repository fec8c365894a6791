//! Frame rendering
//!
//! Draws a read-only view of the session onto a [`Surface`]. Any missing
//! sprite is replaced by a solid rectangle.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::assets::Sprites;
use crate::config::GameConfig;
use crate::sim::{GameSession, Platform, Player};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Fallback colours
pub const BACKGROUND_COLOR: &str = "#141428";
pub const PLATFORM_COLOR: &str = "#8B5A2B";
pub const PLAYER_COLOR: &str = "#fff";
pub const FIRE_COLOR: &str = "#ff0000";

/// Fire band sprite: starts this far above the bottom and is this tall
pub const FIRE_OFFSET: f32 = 100.0;
pub const FIRE_HEIGHT: f32 = 150.0;
/// Solid fire band used when the sprite is missing
pub const FIRE_FALLBACK_HEIGHT: f32 = 50.0;

/// A 2D drawing target (a canvas context in the browser)
pub trait Surface {
    type Image;

    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn draw_image(&mut self, image: &Self::Image, pos: Vec2, size: Vec2);
    /// Start a transformed scope: translate to `origin`, then rotate (radians)
    fn push_transform(&mut self, origin: Vec2, rotation: f32);
    fn pop_transform(&mut self);
}

/// Draw an image, or a solid rect if it is missing
fn image_or_fill<S: Surface>(
    surface: &mut S,
    image: Option<&S::Image>,
    pos: Vec2,
    size: Vec2,
    color: &str,
) {
    match image {
        Some(image) => surface.draw_image(image, pos, size),
        None => surface.fill_rect(pos, size, color),
    }
}

/// Draw one frame. `session` is `None` before the first start.
pub fn draw<S: Surface>(
    surface: &mut S,
    sprites: &Sprites<S::Image>,
    config: &GameConfig,
    session: Option<&GameSession>,
) {
    let view = Vec2::new(config.width, config.height);
    surface.clear(view.x, view.y);

    image_or_fill(
        surface,
        sprites.background.get(),
        Vec2::ZERO,
        view,
        BACKGROUND_COLOR,
    );

    if let Some(session) = session {
        for platform in &session.platforms {
            draw_platform(surface, sprites, platform);
        }
        draw_player(surface, sprites, &session.player);
    }

    draw_fire(surface, sprites, view);
}

fn draw_platform<S: Surface>(surface: &mut S, sprites: &Sprites<S::Image>, platform: &Platform) {
    image_or_fill(
        surface,
        sprites.platform.get(),
        platform.pos,
        platform.size,
        PLATFORM_COLOR,
    );
}

/// Player is drawn centred on the origin of a rotated scope
fn draw_player<S: Surface>(surface: &mut S, sprites: &Sprites<S::Image>, player: &Player) {
    surface.push_transform(player.center(), player.tilt.to_radians());
    image_or_fill(
        surface,
        sprites.player.get(),
        -player.size / 2.0,
        player.size,
        PLAYER_COLOR,
    );
    surface.pop_transform();
}

fn draw_fire<S: Surface>(surface: &mut S, sprites: &Sprites<S::Image>, view: Vec2) {
    match sprites.fire.get() {
        Some(fire) => surface.draw_image(
            fire,
            Vec2::new(0.0, view.y - FIRE_OFFSET),
            Vec2::new(view.x, FIRE_HEIGHT),
        ),
        None => surface.fill_rect(
            Vec2::new(0.0, view.y - FIRE_FALLBACK_HEIGHT),
            Vec2::new(view.x, FIRE_FALLBACK_HEIGHT),
            FIRE_COLOR,
        ),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assets::Asset;

    /// Drawing commands captured by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(f32, f32),
        Fill(Vec2, Vec2, String),
        Image(&'static str, Vec2, Vec2),
        Push(Vec2, f32),
        Pop,
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        type Image = &'static str;

        fn clear(&mut self, width: f32, height: f32) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.ops.push(Op::Fill(pos, size, color.to_string()));
        }

        fn draw_image(&mut self, image: &Self::Image, pos: Vec2, size: Vec2) {
            self.ops.push(Op::Image(*image, pos, size));
        }

        fn push_transform(&mut self, origin: Vec2, rotation: f32) {
            self.ops.push(Op::Push(origin, rotation));
        }

        fn pop_transform(&mut self) {
            self.ops.push(Op::Pop);
        }
    }

    fn all_sprites() -> Sprites<&'static str> {
        Sprites {
            player: Asset::Loaded("player"),
            platform: Asset::Loaded("platform"),
            fire: Asset::Loaded("fire"),
            background: Asset::Loaded("background"),
            game_over: Asset::Loaded("game_over"),
        }
    }

    #[test]
    fn test_pre_start_frame() {
        let config = GameConfig::default();
        let mut surface = RecordingSurface::default();
        draw(&mut surface, &Sprites::default(), &config, None);

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(800.0, 600.0),
                Op::Fill(Vec2::ZERO, Vec2::new(800.0, 600.0), BACKGROUND_COLOR.into()),
                Op::Fill(
                    Vec2::new(0.0, 550.0),
                    Vec2::new(800.0, 50.0),
                    FIRE_COLOR.into()
                ),
            ]
        );
    }

    #[test]
    fn test_draw_order_with_sprites() {
        let config = GameConfig::default();
        let session = GameSession::new(config.clone(), 1);
        let mut surface = RecordingSurface::default();
        draw(&mut surface, &all_sprites(), &config, Some(&session));

        let ops = &surface.ops;
        assert_eq!(ops[0], Op::Clear(800.0, 600.0));
        assert_eq!(
            ops[1],
            Op::Image("background", Vec2::ZERO, Vec2::new(800.0, 600.0))
        );
        // One image per platform, in sequence order
        for (i, platform) in session.platforms.iter().enumerate() {
            assert_eq!(
                ops[2 + i],
                Op::Image("platform", platform.pos, platform.size)
            );
        }
        let n = 2 + session.platforms.len();
        assert_eq!(ops[n], Op::Push(Vec2::new(190.0, 340.0), 0.0));
        assert_eq!(
            ops[n + 1],
            Op::Image("player", Vec2::new(-40.0, -40.0), Vec2::new(80.0, 80.0))
        );
        assert_eq!(ops[n + 2], Op::Pop);
        assert_eq!(
            ops[n + 3],
            Op::Image("fire", Vec2::new(0.0, 500.0), Vec2::new(800.0, 150.0))
        );
        assert_eq!(ops.len(), n + 4);
    }

    #[test]
    fn test_missing_sprites_use_fills() {
        let config = GameConfig::default();
        let mut session = GameSession::new(config.clone(), 1);
        session.player.tilt = 15.0;
        let mut surface = RecordingSurface::default();
        draw(&mut surface, &Sprites::default(), &config, Some(&session));

        assert!(
            !surface
                .ops
                .iter()
                .any(|op| matches!(op, Op::Image(..)))
        );
        let platform_fills = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Fill(_, _, c) if c == PLATFORM_COLOR))
            .count();
        assert_eq!(platform_fills, session.platforms.len());
        let rotation = surface.ops.iter().find_map(|op| match op {
            Op::Push(_, r) => Some(*r),
            _ => None,
        });
        assert!((rotation.unwrap() - 15f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_draw_does_not_mutate_session() {
        let config = GameConfig::default();
        let session = GameSession::new(config.clone(), 4);
        let before = (session.score, session.player.clone(), session.platforms.clone());
        let mut surface = RecordingSurface::default();
        draw(&mut surface, &all_sprites(), &config, Some(&session));
        assert_eq!(
            before,
            (session.score, session.player.clone(), session.platforms.clone())
        );
    }
}
