//! Scroll and pointer maths for the animated sections.

use crate::config::{PARALLAX_RANGE, PARALLAX_SHIFT};

/// Vertical offset of a hero background for the given window scroll, clamped
/// to the configured range.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    let progress = (scroll_y / PARALLAX_RANGE).clamp(0.0, 1.0);
    progress * PARALLAX_SHIFT
}

const TILT_FACTOR: f64 = 6.0;

/// Rotation (x, y) in degrees for a card when the pointer is at (x, y) inside a
/// box of the given size. The centre is flat; edges tilt by half TILT_FACTOR.
pub fn magnetic_tilt(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = (x - width / 2.0) / width;
    let dy = (y - height / 2.0) / height;
    (-dy * TILT_FACTOR, dx * TILT_FACTOR)
}

pub fn tilt_style(rotate: (f64, f64)) -> String {
    format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg);",
        rotate.0, rotate.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_range() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(250.0), -60.0);
        assert_eq!(parallax_offset(500.0), -120.0);
        assert_eq!(parallax_offset(5_000.0), -120.0);
        assert_eq!(parallax_offset(-40.0), 0.0);
    }

    #[test]
    fn test_tilt_centre_and_corners() {
        assert_eq!(magnetic_tilt(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
        let (rx, ry) = magnetic_tilt(0.0, 0.0, 200.0, 100.0);
        assert_eq!((rx, ry), (3.0, -3.0));
        let (rx, ry) = magnetic_tilt(200.0, 100.0, 200.0, 100.0);
        assert_eq!((rx, ry), (-3.0, 3.0));
    }

    #[test]
    fn test_tilt_degenerate_box() {
        assert_eq!(magnetic_tilt(10.0, 10.0, 0.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_tilt_style() {
        assert_eq!(
            tilt_style((1.0, -2.5)),
            "transform: perspective(1000px) rotateX(1.00deg) rotateY(-2.50deg);"
        );
    }
}
