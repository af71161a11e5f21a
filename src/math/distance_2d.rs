use super::{Point2, TOLERANCE};

/// Returns the parameter `t` in `[0, 1]` of the point on segment `a`→`b`
/// closest to `p`.
///
/// A zero-length segment yields `t = 0`.
#[must_use]
pub fn closest_segment_param(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }

    // Project onto the infinite line, clamp to the segment.
    ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

/// Returns the point on segment `a`→`b` closest to `p`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let t = closest_segment_param(p, a, b);
    a + (b - a) * t
}

/// Returns the minimum distance from `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(p, &closest_point_on_segment(p, a, b))
}

/// Returns the distance from `p` to the line `a*x + b*y + c = 0`.
///
/// Returns `None` when both `a` and `b` vanish.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: f64, b: f64, c: f64) -> Option<f64> {
    let norm = a.hypot(b);
    if norm < TOLERANCE {
        return None;
    }
    Some((a * p.x + b * p.y + c).abs() / norm)
}
