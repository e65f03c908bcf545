use rand::{distr::Distribution, Rng};

use crate::{boxes::Boxes3d, error::AugmentError, ops::uniform_range, pointcloud::PointCloud};

/// Minimum width of a scale range below which sampling is skipped.
pub const MIN_SCALE_RANGE_WIDTH: f32 = 1e-3;

/// Scale point positions and box centers and extents by `factor`.
///
/// Headings, velocities and any other channel are left untouched.
///
/// # Arguments
///
/// * `boxes` - The boxes to scale in place.
/// * `points` - The points to scale in place.
/// * `factor` - The isotropic scale factor.
pub fn scale_scene(boxes: &mut Boxes3d, points: &mut PointCloud, factor: f32) {
    for p in points.rows_mut() {
        p[..3].iter_mut().for_each(|v| *v *= factor);
    }
    for b in boxes.rows_mut() {
        b[..6].iter_mut().for_each(|v| *v *= factor);
    }
}

/// Scale the scene by a factor drawn from `scale_range`.
///
/// The factor is sampled uniformly from `[scale_range[0], scale_range[1]]`.
/// When the range is narrower than [`MIN_SCALE_RANGE_WIDTH`] nothing is
/// sampled and the scene is left unchanged.
///
/// # Arguments
///
/// * `boxes` - The boxes, `[x, y, z, dx, dy, dz, heading, ...]`.
/// * `points` - The points, `[x, y, z, ...]`.
/// * `scale_range` - The `[min, max]` scale range.
/// * `rng` - The random source.
///
/// # Returns
///
/// The applied scale factor, or `None` if the range is degenerate.
///
/// # Errors
///
/// Returns [`AugmentError::InvalidRange`] if a bound is not finite or the
/// range is too wide to sample.
///
/// Example:
///
/// ```
/// use kornia_augment::{boxes::Boxes3d, pointcloud::PointCloud, scaling::global_scaling};
///
/// let mut boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.0, 4.0, 2.0, 1.0, 0.0]]).unwrap();
/// let mut points = PointCloud::from_rows(&[[1.0, 2.0, 0.0]]).unwrap();
///
/// let factor = global_scaling(&mut boxes, &mut points, [1.0, 1.0], &mut rand::rng()).unwrap();
/// assert_eq!(factor, None);
/// ```
pub fn global_scaling<R: Rng + ?Sized>(
    boxes: &mut Boxes3d,
    points: &mut PointCloud,
    scale_range: [f32; 2],
    rng: &mut R,
) -> Result<Option<f32>, AugmentError> {
    let [min, max] = scale_range;
    if !min.is_finite() || !max.is_finite() {
        return Err(AugmentError::InvalidRange { min, max });
    }
    if max - min < MIN_SCALE_RANGE_WIDTH {
        return Ok(None);
    }

    let factor = uniform_range(min, max)?.sample(rng);
    scale_scene(boxes, points, factor);

    Ok(Some(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn scene() -> Result<(Boxes3d, PointCloud), AugmentError> {
        let boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.5, 4.0, 2.0, 1.0, 0.1, 3.0, -1.0]])?;
        let points =
            PointCloud::from_rows(&[[1.0, 2.0, 0.0, 3.0, -1.0], [-4.0, 0.5, 1.5, 0.0, 2.0]])?;
        Ok((boxes, points))
    }

    #[test]
    fn test_scale_scene() -> Result<(), AugmentError> {
        let (mut boxes, mut points) = scene()?;
        let (original_boxes, original_points) = scene()?;
        let factor = 1.05;
        scale_scene(&mut boxes, &mut points, factor);

        let bits = |r: &[f32]| r.iter().map(|v| v.to_bits()).collect::<Vec<_>>();

        for (b, o) in boxes.rows().zip(original_boxes.rows()) {
            for (scaled, original) in b[..6].iter().zip(&o[..6]) {
                assert_eq!(*scaled, original * factor);
            }
            // heading and velocity are bit-identical
            assert_eq!(bits(&b[6..]), bits(&o[6..]));
        }
        for (p, o) in points.rows().zip(original_points.rows()) {
            for (scaled, original) in p[..3].iter().zip(&o[..3]) {
                assert_eq!(*scaled, original * factor);
            }
            assert_eq!(bits(&p[3..]), bits(&o[3..]));
        }
        Ok(())
    }

    #[test]
    fn test_global_scaling_degenerate_range() -> Result<(), AugmentError> {
        let (mut boxes, mut points) = scene()?;
        let mut rng = StdRng::seed_from_u64(11);

        let factor = global_scaling(&mut boxes, &mut points, [1.0, 1.0 + 5e-4], &mut rng)?;
        assert_eq!(factor, None);

        // swapped bounds are treated as degenerate too
        let factor = global_scaling(&mut boxes, &mut points, [1.1, 0.9], &mut rng)?;
        assert_eq!(factor, None);

        assert_eq!((boxes, points), scene()?);
        Ok(())
    }

    #[test]
    fn test_global_scaling_samples_in_range() -> Result<(), AugmentError> {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..32 {
            let (mut boxes, mut points) = scene()?;
            let Some(factor) = global_scaling(&mut boxes, &mut points, [0.95, 1.05], &mut rng)?
            else {
                panic!("range is wide enough to sample");
            };
            assert!((0.95..=1.05).contains(&factor));

            let (mut expected_boxes, mut expected_points) = scene()?;
            scale_scene(&mut expected_boxes, &mut expected_points, factor);
            assert_eq!(boxes, expected_boxes);
            assert_eq!(points, expected_points);
        }
        Ok(())
    }

    #[test]
    fn test_global_scaling_non_finite() -> Result<(), AugmentError> {
        let (mut boxes, mut points) = scene()?;
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            global_scaling(&mut boxes, &mut points, [0.9, f32::INFINITY], &mut rng),
            Err(AugmentError::InvalidRange { .. })
        ));
        assert!(matches!(
            global_scaling(&mut boxes, &mut points, [-f32::MAX, f32::MAX], &mut rng),
            Err(AugmentError::InvalidRange { .. })
        ));
        assert_eq!((boxes, points), scene()?);
        Ok(())
    }
}
