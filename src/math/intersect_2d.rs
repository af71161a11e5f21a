use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let diff = p2 - p1;
    let t = cross_2d(&diff, d2) / cross;
    let u = cross_2d(&diff, d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel and collinear segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((a0 + da * t, t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Clips the segment `start`→`end` against the axis-aligned bounds
/// `[min, max]` (Liang–Barsky).
///
/// Returns the surviving parameter interval `(t_min, t_max)` within `[0, 1]`,
/// or `None` as soon as the interval becomes empty. Points on the boundary
/// are kept.
#[must_use]
pub fn clip_segment_to_bounds(
    min: &Point2,
    max: &Point2,
    start: &Point2,
    end: &Point2,
) -> Option<(f64, f64)> {
    let d = end - start;
    let mut t_minimum = 0.0_f64;
    let mut t_maximum = 1.0_f64;

    // Narrows the interval against one half-plane `p * t <= q`.
    let mut clip = |p: f64, q: f64| -> bool {
        if p.abs() < TOLERANCE {
            return q >= 0.0;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t_maximum {
                return false;
            }
            if r > t_minimum {
                t_minimum = r;
            }
        } else {
            if r < t_minimum {
                return false;
            }
            if r < t_maximum {
                t_maximum = r;
            }
        }
        true
    };

    let inside = clip(-d.x, start.x - min.x)
        && clip(d.x, max.x - start.x)
        && clip(-d.y, start.y - min.y)
        && clip(d.y, max.y - start.y);

    inside.then_some((t_minimum, t_maximum))
}

/// Returns whether `point` lies inside the rectangle spanned from `origin`
/// by the orthogonal edge vectors `u` and `v` (boundary included).
#[must_use]
pub fn point_in_spanned_rect(point: &Point2, origin: &Point2, u: &Vector2, v: &Vector2) -> bool {
    let m = point - origin;
    let mu = m.dot(u);
    let mv = m.dot(v);
    mu >= 0.0 && mu <= u.norm_squared() && mv >= 0.0 && mv <= v.norm_squared()
}
