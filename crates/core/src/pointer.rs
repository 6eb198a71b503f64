use glam::Vec2;

/// Fraction of the remaining offset closed per tick.
pub const SMOOTHING: f32 = 0.1;

/// Pointer tracker: the latest raw input sample plus a lagged copy.
///
/// `raw` is overwritten on every input event; `smoothed` is mutated only
/// during the tick, so input can arrive at any rate without jitter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Most recent normalized input sample.
    pub raw: Vec2,
    /// Lagged sample, moved toward `raw` once per tick.
    pub smoothed: Vec2,
}

impl PointerState {
    /// Map window-pixel coordinates to [-1, 1] with the origin at the
    /// surface center and +y up.
    pub fn normalize(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            (x / width - 0.5) * 2.0,
            (1.0 - y / height - 0.5) * 2.0,
        )
    }

    /// Map window-pixel coordinates to clip space (+y up), the convention
    /// the picking ray expects.
    pub fn to_clip(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        Vec2::new(x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0))
    }

    /// Move `smoothed` one step toward `raw`, independently per axis.
    pub fn smooth_step(&mut self) {
        self.smoothed += SMOOTHING * (self.raw - self.smoothed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hits_boundaries_exactly() {
        let (w, h) = (800.0, 600.0);
        assert_eq!(PointerState::normalize(0.0, 0.0, w, h), Vec2::new(-1.0, 1.0));
        assert_eq!(PointerState::normalize(w, h, w, h), Vec2::new(1.0, -1.0));
        assert_eq!(
            PointerState::normalize(w / 2.0, h / 2.0, w, h),
            Vec2::ZERO
        );
    }

    #[test]
    fn normalize_stays_in_range_inside_bounds() {
        let (w, h) = (1280.0, 720.0);
        for (x, y) in [(1.0, 1.0), (640.0, 100.0), (1279.0, 719.0)] {
            let n = PointerState::normalize(x, y, w, h);
            assert!((-1.0..=1.0).contains(&n.x));
            assert!((-1.0..=1.0).contains(&n.y));
        }
    }

    #[test]
    fn clip_matches_centered_convention_on_one_surface() {
        // With a single surface both conventions resolve to the same point.
        let (w, h) = (640.0, 480.0);
        let n = PointerState::normalize(123.0, 456.0, w, h);
        let c = PointerState::to_clip(123.0, 456.0, w, h);
        assert!((n.x - c.x).abs() < 1e-6);
        assert!((n.y - c.y).abs() < 1e-6);
    }

    #[test]
    fn smoothing_is_idempotent_at_equilibrium() {
        let mut p = PointerState {
            raw: Vec2::new(0.3, -0.7),
            smoothed: Vec2::new(0.3, -0.7),
        };
        p.smooth_step();
        assert_eq!(p.smoothed, p.raw);
    }

    #[test]
    fn smoothing_converges_geometrically() {
        let mut p = PointerState {
            raw: Vec2::new(1.0, -1.0),
            smoothed: Vec2::ZERO,
        };
        let initial = (p.raw - p.smoothed).length();
        for n in 1..=20 {
            p.smooth_step();
            let expected = initial * 0.9_f32.powi(n);
            let actual = (p.raw - p.smoothed).length();
            assert!((actual - expected).abs() < 1e-4, "tick {n}");
        }
    }
}
