use crate::error::AugmentError;

/// A point cloud stored as row-major records of `num_channels` values.
///
/// The first three channels of every record are the `(x, y, z)` position. The
/// remaining channels (intensity, time, velocity, ...) are carried untouched
/// unless a transform is told where the velocity components live.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The flat point data, `len() * num_channels` values.
    data: Vec<f32>,
    // The number of values per point.
    num_channels: usize,
}

impl PointCloud {
    /// Create a new point cloud from flat row-major data.
    ///
    /// # Arguments
    ///
    /// * `data` - The point records laid out one after another.
    /// * `num_channels` - The number of values per point, at least 3.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_channels < 3` or the data length is not a
    /// multiple of `num_channels`.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_augment::pointcloud::PointCloud;
    ///
    /// let points = PointCloud::new(vec![1.0, 2.0, 0.0, 0.5, 3.0, 4.0, 1.0, 0.2], 4).unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert_eq!(points.point(1), &[3.0, 4.0, 1.0, 0.2]);
    /// ```
    pub fn new(data: Vec<f32>, num_channels: usize) -> Result<Self, AugmentError> {
        if num_channels < 3 {
            return Err(AugmentError::InvalidPointWidth(num_channels));
        }
        if data.len() % num_channels != 0 {
            return Err(AugmentError::InvalidDataLength {
                len: data.len(),
                width: num_channels,
            });
        }
        Ok(Self { data, num_channels })
    }

    /// Create a point cloud from fixed-width records.
    pub fn from_rows<const C: usize>(rows: &[[f32; C]]) -> Result<Self, AugmentError> {
        Self::new(rows.iter().flatten().copied().collect(), C)
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.num_channels
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the number of values per point.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Get the record of the point at `index`.
    ///
    /// PRECONDITION: `index < self.len()`.
    pub fn point(&self, index: usize) -> &[f32] {
        let start = index * self.num_channels;
        &self.data[start..start + self.num_channels]
    }

    /// Iterate over the point records.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.num_channels)
    }

    /// Iterate mutably over the point records.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        self.data.chunks_exact_mut(self.num_channels)
    }

    /// Get the flat point data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the point cloud and return the flat point data.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}
