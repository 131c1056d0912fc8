//! Closed-form projectile kinematics (no drag).

/// Gravitational acceleration, m/s^2
pub const GRAVITY: f32 = 9.8;

/// Launch velocity and angle, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// m/s
    pub velocity: f32,
    /// radians
    pub angle: f32,
}

/// Displacement from the launch point in physics coordinates (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl LaunchParams {
    pub fn new(velocity: f32, angle: f32) -> Self {
        Self { velocity, angle }
    }

    pub fn from_degrees(velocity: f32, angle_deg: f32) -> Self {
        Self::new(velocity, angle_deg.to_radians())
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    /// Horizontal and vertical launch velocity components
    pub fn components(&self) -> (f32, f32) {
        (
            self.velocity * self.angle.cos(),
            self.velocity * self.angle.sin(),
        )
    }

    /// Position at elapsed time `t` (seconds, non-negative).
    #[inline]
    pub fn position_at(&self, t: f32) -> Position {
        let x = self.velocity * self.angle.cos() * t;
        let y = self.velocity * self.angle.sin() * t - 0.5 * GRAVITY * t * t;
        Position { x, y }
    }

    /// Time until the shot comes back down to launch height.
    pub fn flight_time(&self) -> f32 {
        let (_, vy) = self.components();
        if vy <= 0.0 {
            return 0.0;
        }
        2.0 * vy / GRAVITY
    }

    /// Horizontal distance covered by the time the shot lands.
    pub fn range(&self) -> f32 {
        self.position_at(self.flight_time()).x
    }

    /// Maximum height above the launch point.
    pub fn apex(&self) -> f32 {
        let (_, vy) = self.components();
        if vy <= 0.0 {
            return 0.0;
        }
        vy * vy / (2.0 * GRAVITY)
    }

    /// Time at which the shot crosses `width` horizontally, if it ever does.
    pub fn exit_time(&self, width: f32) -> Option<f32> {
        let (vx, _) = self.components();
        if vx <= 0.0 {
            return None;
        }
        Some(width / vx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_origin_at_time_zero() {
        for (v, deg) in [(50.0, 45.0), (10.0, 0.0), (120.0, 89.0), (3.0, -30.0)] {
            let p = LaunchParams::from_degrees(v, deg).position_at(0.0);
            assert_eq!(p.x, 0.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_horizontal_shot_only_falls() {
        let params = LaunchParams::from_degrees(20.0, 0.0);
        let p = params.position_at(2.0);
        assert!((p.x - 40.0).abs() < EPS);
        assert!((p.y + 4.9 * 4.0).abs() < EPS);
    }

    #[test]
    fn test_analytic_helpers_45_degrees() {
        let params = LaunchParams::from_degrees(50.0, 45.0);
        // 2 * 50 * sin(45) / 9.8
        assert!((params.flight_time() - 7.2154).abs() < EPS);
        // 50^2 / 9.8
        assert!((params.range() - 255.102).abs() < 0.05);
        assert!((params.apex() - 63.775).abs() < 0.05);
        let exit = params.exit_time(800.0).unwrap();
        assert!((exit - 22.627).abs() < EPS);
    }

    #[test]
    fn test_vertical_shot_never_exits() {
        let params = LaunchParams::from_degrees(30.0, 90.0);
        // cos(90deg) in f32 is a tiny positive number, exit lies far away
        let exit = params.exit_time(800.0).unwrap_or(f32::INFINITY);
        assert!(exit > 1.0e6);
        assert_eq!(LaunchParams::from_degrees(30.0, 180.0).exit_time(800.0), None);
    }

    #[test]
    fn test_downward_shot_has_no_flight() {
        let params = LaunchParams::from_degrees(30.0, -10.0);
        assert_eq!(params.flight_time(), 0.0);
        assert_eq!(params.apex(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_matches_kinematic_equations(
            v in 0.0f32..500.0,
            theta in -3.2f32..3.2,
            t in 0.0f32..60.0,
        ) {
            let p = LaunchParams::new(v, theta).position_at(t);
            let x = v * theta.cos() * t;
            let y = v * theta.sin() * t - 4.9 * t * t;
            let tol = 1e-4 * (1.0 + x.abs().max(y.abs()));
            prop_assert!((p.x - x).abs() <= tol);
            prop_assert!((p.y - y).abs() <= tol);
        }

        #[test]
        fn prop_evaluation_is_bit_identical(
            v in 0.0f32..500.0,
            theta in -3.2f32..3.2,
            t in 0.0f32..60.0,
        ) {
            let params = LaunchParams::new(v, theta);
            let a = params.position_at(t);
            let b = params.position_at(t);
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}
