use std::f64::consts::FRAC_PI_2;

use bitflags::bitflags;

use crate::math::{cross_2d, Point2, Vector2};

/// Angle and side tolerance used when classifying triangles.
const CLASSIFY_TOLERANCE: f64 = 1e-6;

bitflags! {
    /// Classification flags for a [`Triangle2`].
    ///
    /// A triangle carries one of `ACUTE_ANGLED`, `PERPENDICULAR` or
    /// `OBTUSE_ANGLED`, plus `ISOSCELES` and/or `EQUILATERAL` when sides
    /// match. Every equilateral triangle is also isosceles.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TriangleType: u8 {
        const EQUILATERAL = 1;
        const ISOSCELES = 1 << 1;
        const PERPENDICULAR = 1 << 2;
        const OBTUSE_ANGLED = 1 << 3;
        const ACUTE_ANGLED = 1 << 4;
    }
}

/// A triangle given by three named vertices.
///
/// `line_a`, `line_b` and `line_c` are the edges opposite the vertex of the
/// same name; `alpha`, `beta` and `gamma` are the interior angles at `a`,
/// `b` and `c`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangle2 {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle2 {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Edge opposite `a`, from `b` to `c`.
    #[must_use]
    pub fn line_a(&self) -> Vector2 {
        self.c - self.b
    }

    /// Edge opposite `b`, from `c` to `a`.
    #[must_use]
    pub fn line_b(&self) -> Vector2 {
        self.a - self.c
    }

    /// Edge opposite `c`, from `a` to `b`.
    #[must_use]
    pub fn line_c(&self) -> Vector2 {
        self.b - self.a
    }

    /// Interior angle at `a`, in radians.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        angle_between(&(self.b - self.a), &(self.c - self.a))
    }

    /// Interior angle at `b`, in radians.
    #[must_use]
    pub fn beta(&self) -> f64 {
        angle_between(&(self.c - self.b), &(self.a - self.b))
    }

    /// Interior angle at `c`, in radians.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        angle_between(&(self.a - self.c), &(self.b - self.c))
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        cross_2d(&self.line_c(), &(self.c - self.a)).abs() * 0.5
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        Point2::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Returns whether `point` lies inside or on the triangle, for either
    /// winding.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        let d1 = cross_2d(&(self.b - self.a), &(point - self.a));
        let d2 = cross_2d(&(self.c - self.b), &(point - self.b));
        let d3 = cross_2d(&(self.a - self.c), &(point - self.c));
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Classifies the triangle by its sides and angles.
    #[must_use]
    pub fn triangle_type(&self) -> TriangleType {
        let mut kind = TriangleType::empty();

        let la = self.line_a().norm();
        let lb = self.line_b().norm();
        let lc = self.line_c().norm();
        let same = |x: f64, y: f64| (x - y).abs() <= CLASSIFY_TOLERANCE * x.max(y).max(1.0);

        if same(la, lb) && same(lb, lc) {
            kind |= TriangleType::EQUILATERAL | TriangleType::ISOSCELES;
        } else if same(la, lb) || same(lb, lc) || same(la, lc) {
            kind |= TriangleType::ISOSCELES;
        }

        let largest = self.alpha().max(self.beta()).max(self.gamma());
        if (largest - FRAC_PI_2).abs() <= CLASSIFY_TOLERANCE {
            kind |= TriangleType::PERPENDICULAR;
        } else if largest > FRAC_PI_2 {
            kind |= TriangleType::OBTUSE_ANGLED;
        } else {
            kind |= TriangleType::ACUTE_ANGLED;
        }

        kind
    }
}

/// Unsigned angle between two vectors in `[0, pi]`; zero if either vanishes.
fn angle_between(u: &Vector2, v: &Vector2) -> f64 {
    cross_2d(u, v).abs().atan2(u.dot(v))
}
