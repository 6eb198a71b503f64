use std::f32::consts::PI;
use std::ops::RangeInclusive;

/// Live-tunable shading parameters.
///
/// The debug panel holds a non-owning read/write binding into this record;
/// the tick reads it once per frame when filling the frame uniforms. The
/// panel's slider ranges are the only validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Stripe rotation in radians.
    pub rotation: f32,
    /// Stripe repeat count across the surface.
    pub repeat: f32,
    /// Stripe fill width as a fraction of one repeat.
    pub line_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotation: PI / 4.0,
            repeat: 10.0,
            line_width: 0.3,
        }
    }
}

/// Slider range for [`Settings::rotation`].
pub const ROTATION_RANGE: RangeInclusive<f32> = 0.0..=PI;
/// Slider range for [`Settings::repeat`].
pub const REPEAT_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Slider range for [`Settings::line_width`].
pub const LINE_WIDTH_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Step applied by all three sliders.
pub const SLIDER_STEP: f64 = 0.01;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_ranges() {
        let s = Settings::default();
        assert!(ROTATION_RANGE.contains(&s.rotation));
        assert!(REPEAT_RANGE.contains(&s.repeat));
        assert!(LINE_WIDTH_RANGE.contains(&s.line_width));
    }

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.rotation, PI / 4.0);
        assert_eq!(s.repeat, 10.0);
        assert_eq!(s.line_width, 0.3);
    }
}
