use crate::{error::AugmentError, pointcloud::PointCloud};

/// Location of the velocity components inside the point records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityIndices {
    /// The point records carry velocity at these channel indices.
    Resolved {
        /// Channel holding the velocity along x.
        vx: usize,
        /// Channel holding the velocity along y.
        vy: usize,
    },
    /// The point records carry no velocity, or the indices do not fit them.
    NotApplicable,
}

impl VelocityIndices {
    /// Resolve an optional `[vx_idx, vy_idx]` pair against a point cloud.
    ///
    /// Indices that are negative or do not fit the point width resolve to
    /// [`VelocityIndices::NotApplicable`], so the same pair can be reused across
    /// samples whose sensors do not provide velocity.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Configuration`] if `indices` is not a pair.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_augment::pointcloud::PointCloud;
    /// use kornia_augment::velocity::VelocityIndices;
    ///
    /// let points = PointCloud::new(vec![0.0; 10], 5).unwrap();
    /// let indices = VelocityIndices::resolve(&points, Some(&[3, 4])).unwrap();
    /// assert_eq!(indices, VelocityIndices::Resolved { vx: 3, vy: 4 });
    /// ```
    pub fn resolve(points: &PointCloud, indices: Option<&[i64]>) -> Result<Self, AugmentError> {
        let Some([vx, vy]) = Self::validate(indices)? else {
            return Ok(Self::NotApplicable);
        };

        let width = points.num_channels() as i64;
        if vx < 0 || vy < 0 || vx >= width || vy >= width {
            log::debug!(
                "velocity indices [{vx}, {vy}] do not fit points with {width} channels, skipping"
            );
            return Ok(Self::NotApplicable);
        }

        Ok(Self::Resolved {
            vx: vx as usize,
            vy: vy as usize,
        })
    }

    /// Check the shape of an optional index pair without a point cloud.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Configuration`] if `indices` is not a pair.
    pub fn validate(indices: Option<&[i64]>) -> Result<Option<[i64; 2]>, AugmentError> {
        match indices {
            None => Ok(None),
            Some(&[vx, vy]) => Ok(Some([vx, vy])),
            Some(other) => Err(AugmentError::Configuration(format!(
                "point velocity indices must be a 2-element index pair [vx_idx, vy_idx], got {other:?}"
            ))),
        }
    }
}
