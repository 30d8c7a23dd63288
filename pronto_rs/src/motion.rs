//! Animation math for the gallery cards and page heroes.
//!
//! The site only calls these when the visitor has not asked for reduced
//! motion.

/// Default maximum tilt, in degrees.
pub const TILT_MAX_DEG: f64 = 8.0;
/// Stagger between consecutive cards fading in.
pub const FADE_STAGGER_MS: u32 = 60;

/// Card rotation for a pointer at fractional position (`px`, `py`) inside
/// the card. Returns `(rotate_x, rotate_y)` in degrees.
pub fn tilt_angles(px: f64, py: f64, max_deg: f64) -> (f64, f64) {
    let px = px.clamp(0.0, 1.0);
    let py = py.clamp(0.0, 1.0);
    ((py - 0.5) * max_deg, (px - 0.5) * -max_deg)
}

/// Pointer position to CSS transform. A zero-sized card yields the rest
/// transform.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, max_deg: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return rest_transform();
    }
    let (rx, ry) = tilt_angles(x / width, y / height, max_deg);
    format!("rotateX({rx:.2}deg) rotateY({ry:.2}deg)")
}

pub fn rest_transform() -> String {
    "rotateX(0deg) rotateY(0deg)".to_string()
}

/// How far the hero has scrolled out of view, 0 (top) to 1 (gone).
pub fn scroll_progress(scroll_y: f64, hero_top: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    ((scroll_y - hero_top) / hero_height).clamp(0.0, 1.0)
}

/// Hero background offset for a scroll progress, in viewport heights.
pub fn parallax_offset(progress: f64, max_vh: f64) -> f64 {
    progress.clamp(0.0, 1.0) * max_vh
}

/// CSS `animation-delay` for the card at `index`.
pub fn fade_delay(index: usize) -> String {
    format!("{}ms", index as u32 * FADE_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_is_flat_at_center() {
        assert_eq!(tilt_angles(0.5, 0.5, TILT_MAX_DEG), (0.0, 0.0));
    }

    #[test]
    fn tilt_extremes() {
        assert_eq!(tilt_angles(0.0, 0.0, 8.0), (-4.0, 4.0));
        assert_eq!(tilt_angles(1.0, 1.0, 8.0), (4.0, -4.0));
        // Pointer outside the card is clamped to its edge.
        assert_eq!(tilt_angles(3.0, -2.0, 8.0), (-4.0, -4.0));
    }

    #[test]
    fn tilt_transform_formats_degrees() {
        assert_eq!(
            tilt_transform(0.0, 100.0, 200.0, 100.0, 8.0),
            "rotateX(4.00deg) rotateY(4.00deg)"
        );
        assert_eq!(tilt_transform(1.0, 1.0, 0.0, 10.0, 8.0), rest_transform());
    }

    #[test]
    fn parallax() {
        assert_eq!(scroll_progress(0.0, 0.0, 600.0), 0.0);
        assert_eq!(scroll_progress(300.0, 0.0, 600.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 0.0, 600.0), 1.0);
        assert_eq!(scroll_progress(10.0, 0.0, 0.0), 0.0);
        assert_eq!(parallax_offset(0.5, 20.0), 10.0);
        assert_eq!(parallax_offset(2.0, 25.0), 25.0);
    }

    #[test]
    fn fade_delays_stagger() {
        assert_eq!(fade_delay(0), "0ms");
        assert_eq!(fade_delay(3), "180ms");
    }
}
