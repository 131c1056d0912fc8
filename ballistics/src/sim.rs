//! Frame loop: advance the clock, position the projectile, draw, present, pace.

use crate::config::{SceneConfig, Variant};
use crate::pacing::Pacer;
use crate::raster::draw_disc;
use crate::scene::{draw_border, GroundTexture};
use crate::surface::RenderSurface;
use crate::trajectory::{LaunchParams, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CloseRequested,
    /// Horizontal displacement went past the viewport width
    LeftViewport,
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped(StopReason),
}

/// Loop state threaded through every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimState {
    pub phase: Phase,
    /// Simulated seconds
    pub elapsed: f32,
    /// Frames presented so far
    pub frames: u64,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Running,
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.phase {
            Phase::Running => None,
            Phase::Stopped(reason) => Some(reason),
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Simulation {
    params: LaunchParams,
    config: SceneConfig,
    ground: Option<GroundTexture>,
}

impl Simulation {
    /// `seed` only matters for the textured variant.
    pub fn new(params: LaunchParams, config: SceneConfig, seed: u64) -> Self {
        let ground = match config.variant {
            Variant::Plain => None,
            Variant::Textured => Some(GroundTexture::generate(
                config.width,
                config.height,
                config.ground,
                seed,
            )),
        };
        Self {
            params,
            config,
            ground,
        }
    }

    pub fn params(&self) -> &LaunchParams {
        &self.params
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn ground(&self) -> Option<&GroundTexture> {
        self.ground.as_ref()
    }

    /// Run one iteration. Returns the position drawn, or `None` when the loop
    /// stopped in this iteration (nothing is drawn then).
    pub fn step<S: RenderSurface>(
        &self,
        state: &mut SimState,
        surface: &mut S,
    ) -> Option<Position> {
        if !state.is_running() {
            return None;
        }
        if surface.poll_close_request() {
            state.phase = Phase::Stopped(StopReason::CloseRequested);
            return None;
        }

        let pos = self.params.position_at(state.elapsed);
        if pos.x > self.config.width as f32 {
            state.phase = Phase::Stopped(StopReason::LeftViewport);
            return None;
        }
        if let Some(limit) = self.config.time_limit {
            if state.elapsed > limit {
                state.phase = Phase::Stopped(StopReason::TimeLimit);
                return None;
            }
        }

        self.render(surface, pos);
        state.frames += 1;
        state.elapsed += self.config.time_step;
        log::trace!(
            "frame {} t={:.2} x={:.1} y={:.1}",
            state.frames,
            state.elapsed,
            pos.x,
            pos.y
        );
        Some(pos)
    }

    fn render<S: RenderSurface>(&self, surface: &mut S, pos: Position) {
        surface.set_draw_color(self.config.background);
        surface.clear();

        if let Some(ground) = &self.ground {
            ground.draw(surface);
        }

        let (cx, cy) = self.config.to_screen(pos.x, pos.y);
        surface.set_draw_color(self.config.projectile);
        draw_disc(surface, cx, cy, self.config.radius);

        if self.config.variant == Variant::Textured {
            draw_border(surface, &self.config);
        }

        surface.present();
    }

    /// Loop until a stop condition is met; returns the final state.
    pub fn run<S: RenderSurface, P: Pacer>(&self, surface: &mut S, pacer: &mut P) -> SimState {
        log::info!(
            "launch: v={} m/s angle={:.1} deg, viewport {}x{}, {:?} scene",
            self.params.velocity,
            self.params.angle_degrees(),
            self.config.width,
            self.config.height,
            self.config.variant
        );
        let mut state = SimState::new();
        while self.step(&mut state, surface).is_some() {
            pacer.pace();
        }
        log::info!(
            "simulation stopped: {:?} after {} frames, t={:.2}s",
            state.stop_reason(),
            state.frames,
            state.elapsed
        );
        state
    }
}
