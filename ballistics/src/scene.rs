//! Static decorations of the textured scene: ground band and border.

use crate::config::{GroundStyle, SceneConfig};
use crate::surface::RenderSurface;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock, different on every run.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Ground band plus the random segments drawn over it.
///
/// Generated once per run so every frame shows the same texture.
#[derive(Debug, Clone)]
pub struct GroundTexture {
    style: GroundStyle,
    width: i32,
    top: i32,
    bottom: i32,
    segments: Vec<Segment>,
}

impl GroundTexture {
    pub fn generate(width: u32, height: u32, style: GroundStyle, seed: u64) -> Self {
        let width = width as i32;
        let bottom = height as i32 - 1;
        let top = (height as i32 - style.band_height as i32).max(0);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut segments = Vec::with_capacity(style.specks);
        if width > 0 && bottom >= top {
            for _ in 0..style.specks {
                let x1 = rng.random_range(0..width);
                let y1 = rng.random_range(top..=bottom);
                let len = rng.random_range(1..=style.max_speck_len.max(1));
                let x2 = (x1 + len).min(width - 1);
                let y2 = (y1 + rng.random_range(-1..=1)).clamp(top, bottom);
                segments.push(Segment { x1, y1, x2, y2 });
            }
        }
        log::debug!(
            "ground texture: {} segments in rows {top}..={bottom}, seed {seed}",
            segments.len()
        );

        Self {
            style,
            width,
            top,
            bottom,
            segments,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First screen row covered by the band
    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn draw<S: RenderSurface>(&self, surface: &mut S) {
        surface.set_draw_color(self.style.fill);
        for row in self.top..=self.bottom {
            surface.draw_line(0, row, self.width - 1, row);
        }
        surface.set_draw_color(self.style.speck);
        for s in &self.segments {
            surface.draw_line(s.x1, s.y1, s.x2, s.y2);
        }
    }
}

/// Rectangular frame along the viewport edges.
pub fn draw_border<S: RenderSurface>(surface: &mut S, config: &SceneConfig) {
    let right = config.width as i32 - 1;
    let bottom = config.height as i32 - 1;
    surface.set_draw_color(config.border);
    for i in 0..config.border_thickness {
        surface.draw_line(0, i, right, i);
        surface.draw_line(0, bottom - i, right, bottom - i);
        surface.draw_line(i, 0, i, bottom);
        surface.draw_line(right - i, 0, right - i, bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, DrawOp, Recorder};

    #[test]
    fn test_same_seed_same_texture() {
        let style = GroundStyle::default();
        let a = GroundTexture::generate(800, 600, style, 42);
        let b = GroundTexture::generate(800, 600, style, 42);
        assert_eq!(a.segments(), b.segments());

        let c = GroundTexture::generate(800, 600, style, 43);
        assert_ne!(a.segments(), c.segments());
    }

    #[test]
    fn test_segments_stay_in_band() {
        let style = GroundStyle::default();
        let ground = GroundTexture::generate(800, 600, style, 7);
        assert_eq!(ground.segments().len(), style.specks);
        assert_eq!(ground.top(), 550);
        for s in ground.segments() {
            assert!((0..800).contains(&s.x1) && (0..800).contains(&s.x2));
            assert!((550..600).contains(&s.y1) && (550..600).contains(&s.y2));
            assert!(s.x2 - s.x1 <= style.max_speck_len);
        }
    }

    #[test]
    fn test_band_taller_than_viewport() {
        let style = GroundStyle {
            band_height: 1000,
            ..GroundStyle::default()
        };
        let ground = GroundTexture::generate(100, 60, style, 1);
        assert_eq!(ground.top(), 0);
    }

    #[test]
    fn test_draw_fills_band_then_specks() {
        let style = GroundStyle::default();
        let ground = GroundTexture::generate(800, 600, style, 3);
        let mut rec = Recorder::new(800, 600);
        ground.draw(&mut rec);
        rec.present();
        assert_eq!(rec.lines_in(style.fill), 50);
        assert_eq!(rec.lines_in(style.speck), style.specks);
        assert_eq!(
            rec.last_frame().first(),
            Some(&DrawOp::Line(0, 550, 799, 550, Color::GRASS))
        );
    }

    #[test]
    fn test_border_lines() {
        let config = SceneConfig::default();
        let mut rec = Recorder::new(800, 600);
        draw_border(&mut rec, &config);
        rec.present();
        assert_eq!(rec.lines_in(Color::BLACK), 4 * 5);
        assert!(rec
            .last_frame()
            .contains(&DrawOp::Line(795, 0, 795, 599, Color::BLACK)));
    }
}
