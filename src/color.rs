use eframe::egui::{self, Color32, Stroke};
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Neon palette
// ---------------------------------------------------------------------------

pub const NEON_CYAN: Color32 = Color32::from_rgb(0, 255, 255);
pub const NEON_MAGENTA: Color32 = Color32::from_rgb(255, 0, 255);
/// `rgba(0, 255, 255, 0.8)`, premultiplied.
pub const HIGHLIGHT_FILL: Color32 = Color32::from_rgba_premultiplied(0, 204, 204, 204);

const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 10);
const PANEL: Color32 = Color32::from_rgb(27, 27, 64);
const DEEP_PURPLE: Color32 = Color32::from_rgb(42, 10, 94);

// ---------------------------------------------------------------------------
// Plasma sequential scale
// ---------------------------------------------------------------------------

/// Evenly spaced stops of the Plasma colormap, dark purple to yellow.
const PLASMA_STOPS: [(u8, u8, u8); 10] = [
    (0x0d, 0x08, 0x87),
    (0x46, 0x03, 0x9f),
    (0x72, 0x01, 0xa8),
    (0x9c, 0x17, 0x9e),
    (0xbd, 0x37, 0x86),
    (0xd8, 0x57, 0x6b),
    (0xed, 0x79, 0x53),
    (0xfb, 0x9f, 0x3a),
    (0xfd, 0xca, 0x26),
    (0xf0, 0xf9, 0x21),
];

fn stop(i: usize) -> Srgb {
    let (r, g, b) = PLASMA_STOPS[i];
    Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Colour for `t` in `[0, 1]` on the Plasma scale. Out-of-range and NaN
/// inputs are clamped to the ends.
pub fn plasma(t: f64) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
    let segments = (PLASMA_STOPS.len() - 1) as f32;
    let pos = t * segments;
    let lo = (pos.floor() as usize).min(PLASMA_STOPS.len() - 2);
    let rgb = stop(lo).mix(stop(lo + 1), pos - lo as f32);
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Maps values onto the Plasma scale using the range of the values given.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    min: f64,
    max: f64,
}

impl SequentialScale {
    /// Scale spanning the finite values in `values`. `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        (min <= max).then_some(SequentialScale { min, max })
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return plasma(0.5);
        }
        plasma((value - self.min) / range)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Dark background with cyan/magenta accents.
pub fn apply_neon_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PANEL;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.faint_bg_color = DEEP_PURPLE;
    visuals.override_text_color = Some(Color32::WHITE);
    visuals.hyperlink_color = NEON_CYAN;
    visuals.window_stroke = Stroke::new(1.0, NEON_CYAN);
    visuals.selection.bg_fill = NEON_MAGENTA.gamma_multiply(0.6);
    visuals.selection.stroke = Stroke::new(1.0, NEON_CYAN);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, NEON_CYAN.gamma_multiply(0.5));
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, NEON_CYAN);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, NEON_MAGENTA);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plasma_endpoints() {
        assert_eq!(plasma(0.0), Color32::from_rgb(0x0d, 0x08, 0x87));
        assert_eq!(plasma(1.0), Color32::from_rgb(0xf0, 0xf9, 0x21));
        assert_eq!(plasma(-4.0), plasma(0.0));
        assert_eq!(plasma(f64::NAN), plasma(0.0));
    }

    #[test]
    fn test_scale_uses_value_range() {
        let scale = SequentialScale::from_values([2.0, 4.0, 3.0]).unwrap();
        assert_eq!(scale.color_for(2.0), plasma(0.0));
        assert_eq!(scale.color_for(4.0), plasma(1.0));
        assert_eq!(scale.color_for(3.0), plasma(0.5));
    }

    #[test]
    fn test_flat_scale_uses_midpoint() {
        let scale = SequentialScale::from_values([4.9, 4.9]).unwrap();
        assert_eq!(scale.color_for(4.9), plasma(0.5));
        assert!(SequentialScale::from_values(std::iter::empty()).is_none());
    }
}
