use rand::{distr::Distribution, Rng};

use crate::{
    boxes::{Boxes3d, HEADING, VX, VY},
    error::AugmentError,
    ops::{rotate_along_z, rotation_along_z, uniform_range},
    pointcloud::PointCloud,
    velocity::VelocityIndices,
};

/// Rotate boxes, points and velocities about the z axis by `angle`.
///
/// Point positions and box centers are rotated as 3D points, the heading is
/// increased by `angle` and the box and point velocities are rotated as
/// `(vx, vy, 0)` vectors. All of them share the same rotation matrix.
///
/// # Arguments
///
/// * `boxes` - The boxes to rotate in place.
/// * `points` - The points to rotate in place.
/// * `angle` - The rotation angle in radians.
/// * `velocity` - The resolved point velocity channels.
pub fn rotate_scene(
    boxes: &mut Boxes3d,
    points: &mut PointCloud,
    angle: f32,
    velocity: VelocityIndices,
) {
    let rotation = rotation_along_z(angle);

    for p in points.rows_mut() {
        let [x, y, z] = rotate_along_z(&rotation, [p[0], p[1], p[2]]);
        (p[0], p[1], p[2]) = (x, y, z);

        if let VelocityIndices::Resolved { vx, vy } = velocity {
            let [rvx, rvy, _] = rotate_along_z(&rotation, [p[vx], p[vy], 0.0]);
            (p[vx], p[vy]) = (rvx, rvy);
        }
    }

    let has_velocity = boxes.has_velocity();
    for b in boxes.rows_mut() {
        let [x, y, z] = rotate_along_z(&rotation, [b[0], b[1], b[2]]);
        (b[0], b[1], b[2]) = (x, y, z);
        b[HEADING] += angle;

        if has_velocity {
            let [rvx, rvy, _] = rotate_along_z(&rotation, [b[VX], b[VY], 0.0]);
            (b[VX], b[VY]) = (rvx, rvy);
        }
    }
}

/// Rotate the scene about the z axis by an angle drawn from `rot_range`.
///
/// The angle is sampled uniformly between `rot_range[0]` and `rot_range[1]`
/// and applied unconditionally. Swapped bounds sample the same interval.
///
/// # Arguments
///
/// * `boxes` - The boxes, `[x, y, z, dx, dy, dz, heading, vx?, vy?]`.
/// * `points` - The points, `[x, y, z, ...]`.
/// * `rot_range` - The `[min, max]` rotation range in radians.
/// * `point_velocity_indices` - Optional `[vx_idx, vy_idx]` of the point velocity channels.
/// * `rng` - The random source.
///
/// # Returns
///
/// The sampled rotation angle.
///
/// # Errors
///
/// Returns an error if a bound is not finite or the range is too wide to
/// sample, or if the velocity indices are not a pair. Nothing is mutated on
/// error.
///
/// Example:
///
/// ```
/// use kornia_augment::{boxes::Boxes3d, pointcloud::PointCloud, rotation::global_rotation};
///
/// let mut boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.0, 4.0, 2.0, 1.0, 0.0]]).unwrap();
/// let mut points = PointCloud::from_rows(&[[1.0, 2.0, 0.0]]).unwrap();
///
/// let angle = global_rotation(&mut boxes, &mut points, [-0.78, 0.78], None, &mut rand::rng()).unwrap();
/// assert!((-0.78..=0.78).contains(&angle));
/// assert_eq!(boxes.get(0)[6], angle);
/// ```
pub fn global_rotation<R: Rng + ?Sized>(
    boxes: &mut Boxes3d,
    points: &mut PointCloud,
    rot_range: [f32; 2],
    point_velocity_indices: Option<&[i64]>,
    rng: &mut R,
) -> Result<f32, AugmentError> {
    let [min, max] = rot_range;
    let sampler = uniform_range(min, max)?;
    let velocity = VelocityIndices::resolve(points, point_velocity_indices)?;

    let angle = sampler.sample(rng);
    rotate_scene(boxes, points, angle, velocity);

    Ok(angle)
}
