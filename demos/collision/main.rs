//! Collision demo: runs a handful of shape queries and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example collision
//! RUST_LOG=atom_math=debug cargo run --example collision
//! ```

use atom_math::math::{Point2, Point3, Vector2, Vector3};
use atom_math::{
    containment, intersects, Aabb, AtomError, Circle, OrientedRectangleF, Plane, Polygon2, Ray,
    RectangleF, Sphere,
};

fn main() -> Result<(), AtomError> {
    // Default: WARN for everything, INFO for atom_math and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=atom_math=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("collision=info".parse().unwrap_or_default())
        .add_directive("atom_math=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    scene_2d()?;
    scene_3d()?;
    Ok(())
}

fn scene_2d() -> Result<(), AtomError> {
    let player = Circle::new(Point2::new(4.0, 4.0), 1.5);
    let wall = RectangleF::new(5.0, 0.0, 1.0, 10.0);
    tracing::info!(hit = intersects(&player, &wall), "circle vs wall");

    let crate_box = OrientedRectangleF::from_rectangle(&RectangleF::new(8.0, 2.0, 2.0, 1.0), 0.6);
    tracing::info!(hit = intersects(&crate_box, &wall), "rotated crate vs wall");

    let mut star = Polygon2::create_star(3.0, 1.2, 5)?;
    star.translate(&Vector2::new(12.0, 5.0));
    let bounds = RectangleF::from_polygon(&star)?;
    let triangles = star.triangulate()?;
    tracing::info!(
        area = star.area(),
        order = ?star.vertex_order(),
        triangles = triangles.len(),
        bounds = ?bounds,
        "star polygon"
    );

    let probe = Point2::new(12.0, 5.0);
    tracing::info!(
        in_polygon = star.contains_point(&probe),
        in_bounds = ?containment(&bounds, &probe),
        "probe point"
    );
    Ok(())
}

fn scene_3d() -> Result<(), AtomError> {
    let room = Aabb::new(Point3::new(-5.0, 0.0, -5.0), Point3::new(5.0, 4.0, 5.0));
    let ball = Sphere::new(Point3::new(4.5, 1.0, 0.0), 1.0)?;
    tracing::info!(result = ?containment(&room, &ball), "ball in room");

    let floor = Plane::from_point_normal(&Point3::origin(), &Vector3::y())?;
    tracing::info!(side = ?intersects(&ball, &floor), "ball vs floor");

    let cloud = [
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-2.0, 0.5, 0.0),
        Point3::new(0.0, 3.0, -1.0),
        Point3::new(0.5, -1.0, 2.0),
    ];
    let hull = Sphere::from_points(&cloud)?;
    let bounds = Aabb::from_points(&cloud)?;
    tracing::info!(
        center = %hull.center(),
        radius = hull.radius(),
        box_in_sphere = ?containment(&hull, &bounds),
        "point cloud"
    );

    let ray = Ray::new(Point3::new(0.0, 2.0, -20.0), Vector3::z());
    match intersects(&ray, &room) {
        Some(t) => tracing::info!(t, at = %ray.point_at(t), "ray enters room"),
        None => tracing::warn!("ray misses room"),
    }
    Ok(())
}
