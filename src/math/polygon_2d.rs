use super::{cross_2d, Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the area centroid of a closed polygon.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has zero signed area.
pub fn centroid_2d(points: &[Point2]) -> Result<Point2> {
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return Err(
            GeometryError::Degenerate("centroid of a zero-area polygon".into()).into(),
        );
    }

    let n = points.len();
    let mut c = Vector2::zeros();
    for i in 0..n {
        let a = points[i].coords;
        let b = points[(i + 1) % n].coords;
        c += (a + b) * cross_2d(&a, &b);
    }
    Ok(Point2::from(c / (6.0 * area)))
}

/// Computes the polar moment of inertia per unit mass of a closed polygon,
/// taken about its centroid.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has zero signed area.
pub fn moment_of_inertia_2d(points: &[Point2]) -> Result<f64> {
    let centroid = centroid_2d(points)?;

    let n = points.len();
    let mut numer = 0.0;
    let mut denom = 0.0;
    for i in 0..n {
        let a = points[i] - centroid;
        let b = points[(i + 1) % n] - centroid;
        let w = cross_2d(&a, &b);
        denom += w;
        numer += w * (a.dot(&a) + a.dot(&b) + b.dot(&b));
    }
    Ok(numer / (6.0 * denom))
}

/// Returns whether the closed polygon is convex (collinear runs allowed).
///
/// Fewer than three points is never convex.
#[must_use]
pub fn is_convex_2d(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0_f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = cross_2d(&(b - a), &(c - b));
        if turn.abs() < TOLERANCE {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

/// Even-odd point-in-polygon test.
///
/// Points exactly on an edge may fall on either side.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = points[i];
        let pj = points[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x = pj.x + (point.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
            if point.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
