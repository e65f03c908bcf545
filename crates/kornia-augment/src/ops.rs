use glam::{Mat3, Vec3};
use rand::distr::Uniform;

use crate::error::AugmentError;

/// Compute the rotation matrix about the z axis.
///
/// The rotation is right-handed: `x' = x cos(angle) - y sin(angle)` and
/// `y' = x sin(angle) + y cos(angle)`, with `z` unchanged.
///
/// # Arguments
///
/// * `angle` - The angle of rotation in radians.
pub fn rotation_along_z(angle: f32) -> Mat3 {
    Mat3::from_rotation_z(angle)
}

/// Rotate an `(x, y, z)` triple with a rotation about the z axis.
///
/// Points, box centers and velocities all go through this function so one
/// angle rotates the whole scene consistently. Velocities are passed with
/// `z = 0`.
///
/// Example:
///
/// ```
/// use kornia_augment::ops::{rotate_along_z, rotation_along_z};
///
/// let rotation = rotation_along_z(std::f32::consts::FRAC_PI_2);
/// let [x, y, z] = rotate_along_z(&rotation, [1.0, 0.0, 2.0]);
/// assert!(x.abs() < 1e-6 && (y - 1.0).abs() < 1e-6 && z == 2.0);
/// ```
#[inline]
pub fn rotate_along_z(rotation: &Mat3, xyz: [f32; 3]) -> [f32; 3] {
    (*rotation * Vec3::from_array(xyz)).to_array()
}

/// Build a uniform sampler over the closed interval spanned by `a` and `b`.
///
/// The bounds may come in either order.
///
/// # Errors
///
/// Returns [`AugmentError::InvalidRange`] if a bound is not finite or the
/// width of the interval overflows `f32`.
pub fn uniform_range(a: f32, b: f32) -> Result<Uniform<f32>, AugmentError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(AugmentError::InvalidRange { min: a, max: b });
    }
    Uniform::new_inclusive(a.min(b), a.max(b))
        .map_err(|_| AugmentError::InvalidRange { min: a, max: b })
}

/// Wrap `val` into the interval `[-offset * period, (1 - offset) * period)`.
///
/// With `offset = 0.5` and `period = 2π` a heading is wrapped into `[-π, π)`.
pub fn limit_period(val: f32, offset: f32, period: f32) -> f32 {
    val - (val / period + offset).floor() * period
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_rotate_along_z_identity() {
        let rotation = rotation_along_z(0.0);
        assert_eq!(rotate_along_z(&rotation, [2.0, 3.0, 4.0]), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rotate_along_z_quarter_turn() {
        let rotation = rotation_along_z(PI / 2.0);
        let [x, y, z] = rotate_along_z(&rotation, [1.0, 2.0, 3.0]);
        assert_relative_eq!(x, -2.0, epsilon = 1e-6);
        assert_relative_eq!(y, 1.0, epsilon = 1e-6);
        assert_eq!(z, 3.0);
    }

    #[test]
    fn test_uniform_range() -> Result<(), AugmentError> {
        use rand::{distr::Distribution, rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let sampler = uniform_range(0.5, -0.5)?;
        for _ in 0..32 {
            assert!((-0.5..=0.5).contains(&sampler.sample(&mut rng)));
        }
        assert_eq!(uniform_range(0.25, 0.25)?.sample(&mut rng), 0.25);

        for (a, b) in [
            (-f32::MAX, f32::MAX),
            (0.0, f32::NAN),
            (f32::NEG_INFINITY, 0.0),
        ] {
            assert!(matches!(
                uniform_range(a, b),
                Err(AugmentError::InvalidRange { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_limit_period() {
        let period = 2.0 * PI;
        assert_relative_eq!(limit_period(0.25, 0.5, period), 0.25);
        assert_relative_eq!(limit_period(PI + 0.5, 0.5, period), -PI + 0.5, epsilon = 1e-6);
        assert_relative_eq!(limit_period(-PI - 0.5, 0.5, period), PI - 0.5, epsilon = 1e-6);
        assert_relative_eq!(limit_period(-PI, 0.5, period), -PI);
    }
}
