//! Bridge planks the runner lands on

use glam::Vec2;

/// A horizontal platform segment scrolling right to left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Scroll left by `speed`; platforms never move vertically
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Edge facing the direction of travel (the left edge)
    pub fn leading_edge(&self) -> f32 {
        self.left()
    }

    /// Edge the next platform is appended after (the right edge)
    pub fn trailing_edge(&self) -> f32 {
        self.right()
    }

    /// Still (partly) on screen or ahead of it
    pub fn is_visible(&self) -> bool {
        self.trailing_edge() > 0.0
    }
}

/// Rightmost trailing edge of the stream, 0 when empty
pub fn rightmost_edge(platforms: &[Platform]) -> f32 {
    platforms
        .iter()
        .map(Platform::trailing_edge)
        .fold(0.0, f32::max)
}

/// Scroll every platform and drop those that left the view, keeping order
pub fn advance_all(platforms: &mut Vec<Platform>, speed: f32) {
    for platform in platforms.iter_mut() {
        platform.advance(speed);
    }
    remove_offscreen(platforms);
}

/// Drop platforms whose right edge is at or past the left of the view
pub fn remove_offscreen(platforms: &mut Vec<Platform>) {
    platforms.retain(Platform::is_visible);
}
