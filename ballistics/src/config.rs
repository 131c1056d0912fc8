use crate::pacing::Pacing;
use crate::surface::Color;
use std::time::Duration;

pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 600;
pub const PROJECTILE_RADIUS: i32 = 10;
/// Simulated seconds per rendered frame
pub const TIME_STEP: f32 = 0.05;
/// ~60 FPS
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const WINDOW_TITLE: &str = "Projectile Simulation";

/// Which scene decorations are drawn around the projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    /// White background and the projectile only
    #[default]
    Plain,
    /// Adds a textured ground band and a border
    Textured,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundStyle {
    /// Height of the ground band at the bottom of the viewport, in pixels
    pub band_height: u32,
    pub fill: Color,
    pub speck: Color,
    /// Number of texture segments
    pub specks: usize,
    /// Longest texture segment, in pixels
    pub max_speck_len: i32,
}

impl Default for GroundStyle {
    fn default() -> Self {
        Self {
            band_height: 50,
            fill: Color::GRASS,
            speck: Color::SOIL,
            specks: 200,
            max_speck_len: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub radius: i32,
    pub time_step: f32,
    pub frame_interval: Duration,
    pub pacing: Pacing,
    pub variant: Variant,
    pub background: Color,
    pub projectile: Color,
    pub ground: GroundStyle,
    pub border: Color,
    pub border_thickness: i32,
    /// Stop after this much simulated time even if the shot is still on screen
    pub time_limit: Option<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            radius: PROJECTILE_RADIUS,
            time_step: TIME_STEP,
            frame_interval: FRAME_INTERVAL,
            pacing: Pacing::Fixed,
            variant: Variant::Plain,
            background: Color::WHITE,
            projectile: Color::RED,
            ground: GroundStyle::default(),
            border: Color::BLACK,
            border_thickness: 5,
            time_limit: None,
        }
    }
}

impl SceneConfig {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_time_limit(mut self, limit: f32) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Screen pixel for a physics position; screen rows grow downward.
    ///
    /// The flip happens in float so far-away positions saturate instead of overflowing.
    pub fn to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        (x as i32, (self.height as f32 - y) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene() {
        let cfg = SceneConfig::default();
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.radius, 10);
        assert_eq!(cfg.time_step, 0.05);
        assert_eq!(cfg.frame_interval, Duration::from_millis(16));
        assert_eq!(cfg.pacing, Pacing::Fixed);
        assert_eq!(cfg.variant, Variant::Plain);
        assert_eq!(cfg.time_limit, None);
    }

    #[test]
    fn test_vertical_flip() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.to_screen(0.0, 0.0), (0, 600));
        assert_eq!(cfg.to_screen(0.0, 600.0), (0, 0));
        assert_eq!(cfg.to_screen(120.7, 250.0), (120, 350));
    }

    #[test]
    fn test_flip_saturates_far_off_screen() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.to_screen(-1.0e12, -1.0e12), (i32::MIN, i32::MAX));
        assert_eq!(cfg.to_screen(1.0e12, 1.0e12), (i32::MAX, i32::MIN));
    }
}
