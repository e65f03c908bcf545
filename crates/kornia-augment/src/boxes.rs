use crate::error::AugmentError;

/// Number of geometric fields of a box: `[x, y, z, dx, dy, dz, heading]`.
pub const BOX_GEOMETRY_FIELDS: usize = 7;

/// Field index of the box heading.
pub const HEADING: usize = 6;

/// Field index of the box velocity along x.
pub const VX: usize = 7;

/// Field index of the box velocity along y.
pub const VY: usize = 8;

/// A set of oriented 3D boxes stored as row-major records.
///
/// Each record is `[x, y, z, dx, dy, dz, heading, vx?, vy?, ...]`: the box
/// center, its extents along the box-local axes, the yaw in radians and,
/// when the record is wider than 7 fields, the box velocity `(vx, vy)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxes3d {
    data: Vec<f32>,
    num_fields: usize,
}

impl Boxes3d {
    /// Create a new set of boxes from flat row-major data.
    ///
    /// # Arguments
    ///
    /// * `data` - The box records laid out one after another.
    /// * `num_fields` - The number of values per box, 7 or at least 9.
    ///
    /// # Errors
    ///
    /// Returns an error if the record width is below 7, exactly 8 (a velocity
    /// without its `vy` component) or does not divide the data length.
    pub fn new(data: Vec<f32>, num_fields: usize) -> Result<Self, AugmentError> {
        if num_fields < BOX_GEOMETRY_FIELDS || num_fields == VY {
            return Err(AugmentError::InvalidBoxWidth(num_fields));
        }
        if data.len() % num_fields != 0 {
            return Err(AugmentError::InvalidDataLength {
                len: data.len(),
                width: num_fields,
            });
        }
        Ok(Self { data, num_fields })
    }

    /// Create a set of boxes from fixed-width records.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_augment::boxes::Boxes3d;
    ///
    /// let boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.0, 4.0, 2.0, 1.0, 0.0, 3.0, -1.0]]).unwrap();
    /// assert!(boxes.has_velocity());
    /// ```
    pub fn from_rows<const C: usize>(rows: &[[f32; C]]) -> Result<Self, AugmentError> {
        Self::new(rows.iter().flatten().copied().collect(), C)
    }

    /// Get the number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.num_fields
    }

    /// Check if there are no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the number of values per box.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.num_fields
    }

    /// Whether the records carry a box velocity `(vx, vy)`.
    #[inline]
    pub fn has_velocity(&self) -> bool {
        self.num_fields > BOX_GEOMETRY_FIELDS
    }

    /// Get the record of the box at `index`.
    ///
    /// PRECONDITION: `index < self.len()`.
    pub fn get(&self, index: usize) -> &[f32] {
        let start = index * self.num_fields;
        &self.data[start..start + self.num_fields]
    }

    /// Iterate over the box records.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.num_fields)
    }

    /// Iterate mutably over the box records.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        self.data.chunks_exact_mut(self.num_fields)
    }

    /// Get the flat box data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the boxes and return the flat data.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}
