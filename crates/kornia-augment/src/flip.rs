use rand::Rng;

use crate::{
    boxes::{Boxes3d, HEADING, VX, VY},
    error::AugmentError,
    pointcloud::PointCloud,
    velocity::VelocityIndices,
};

/// Mirror boxes and points across the x axis.
///
/// Negates the y coordinate and the heading of every box, the y coordinate of
/// every point, the box `vy` when the boxes carry velocity and the point `vy`
/// channel when it is resolved. `vx` is left unchanged.
///
/// # Arguments
///
/// * `boxes` - The boxes to mirror in place.
/// * `points` - The points to mirror in place.
/// * `velocity` - The resolved point velocity channels.
pub fn flip_along_x(boxes: &mut Boxes3d, points: &mut PointCloud, velocity: VelocityIndices) {
    let has_velocity = boxes.has_velocity();
    for b in boxes.rows_mut() {
        b[1] = -b[1];
        b[HEADING] = -b[HEADING];
        if has_velocity {
            b[VY] = -b[VY];
        }
    }

    for p in points.rows_mut() {
        p[1] = -p[1];
        if let VelocityIndices::Resolved { vy, .. } = velocity {
            p[vy] = -p[vy];
        }
    }
}

/// Mirror boxes and points across the y axis.
///
/// Negates the x coordinate of every box and point, the box `vx` when the
/// boxes carry velocity and the point `vx` channel when it is resolved. The
/// heading maps to `-(heading + π)`. `vy` is left unchanged.
///
/// # Arguments
///
/// * `boxes` - The boxes to mirror in place.
/// * `points` - The points to mirror in place.
/// * `velocity` - The resolved point velocity channels.
pub fn flip_along_y(boxes: &mut Boxes3d, points: &mut PointCloud, velocity: VelocityIndices) {
    let has_velocity = boxes.has_velocity();
    for b in boxes.rows_mut() {
        b[0] = -b[0];
        b[HEADING] = -(b[HEADING] + std::f32::consts::PI);
        if has_velocity {
            b[VX] = -b[VX];
        }
    }

    for p in points.rows_mut() {
        p[0] = -p[0];
        if let VelocityIndices::Resolved { vx, .. } = velocity {
            p[vx] = -p[vx];
        }
    }
}

/// Mirror the scene across the x axis with probability 0.5.
///
/// One coin flip decides for the whole scene. The velocity indices are
/// validated before the coin is drawn, so a malformed pair fails on every call.
///
/// # Arguments
///
/// * `boxes` - The boxes, `[x, y, z, dx, dy, dz, heading, vx?, vy?]`.
/// * `points` - The points, `[x, y, z, ...]`.
/// * `point_velocity_indices` - Optional `[vx_idx, vy_idx]` of the point velocity channels.
/// * `rng` - The random source.
///
/// # Returns
///
/// Whether the flip was applied.
///
/// # Errors
///
/// Returns [`AugmentError::Configuration`] if the velocity indices are not a pair.
///
/// Example:
///
/// ```
/// use kornia_augment::{boxes::Boxes3d, flip::random_flip_along_x, pointcloud::PointCloud};
///
/// let mut boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.0, 4.0, 2.0, 1.0, 0.3]]).unwrap();
/// let mut points = PointCloud::from_rows(&[[1.0, 2.0, 0.0]]).unwrap();
///
/// let flipped = random_flip_along_x(&mut boxes, &mut points, None, &mut rand::rng()).unwrap();
/// let expected_y = if flipped { -2.0 } else { 2.0 };
/// assert_eq!(points.point(0)[1], expected_y);
/// ```
pub fn random_flip_along_x<R: Rng + ?Sized>(
    boxes: &mut Boxes3d,
    points: &mut PointCloud,
    point_velocity_indices: Option<&[i64]>,
    rng: &mut R,
) -> Result<bool, AugmentError> {
    let velocity = VelocityIndices::resolve(points, point_velocity_indices)?;
    let enable = rng.random_bool(0.5);
    if enable {
        flip_along_x(boxes, points, velocity);
    }
    Ok(enable)
}

/// Mirror the scene across the y axis with probability 0.5.
///
/// See [`random_flip_along_x`] for the activation policy.
///
/// # Errors
///
/// Returns [`AugmentError::Configuration`] if the velocity indices are not a pair.
pub fn random_flip_along_y<R: Rng + ?Sized>(
    boxes: &mut Boxes3d,
    points: &mut PointCloud,
    point_velocity_indices: Option<&[i64]>,
    rng: &mut R,
) -> Result<bool, AugmentError> {
    let velocity = VelocityIndices::resolve(points, point_velocity_indices)?;
    let enable = rng.random_bool(0.5);
    if enable {
        flip_along_y(boxes, points, velocity);
    }
    Ok(enable)
}
