/// An error type for the augmentation module.
#[derive(thiserror::Error, Debug)]
pub enum AugmentError {
    /// Error when an augmentation parameter is malformed.
    #[error("Invalid augmentation configuration: {0}")]
    Configuration(String),

    /// Error when a sampling range is not finite or too wide to sample.
    #[error("Invalid sampling range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound of the range.
        min: f32,
        /// Upper bound of the range.
        max: f32,
    },

    /// Error when the box record width is not supported.
    #[error("Box records must have 7 fields or at least 9 fields, got {0}")]
    InvalidBoxWidth(usize),

    /// Error when the point record width is below the xyz minimum.
    #[error("Point records must have at least 3 fields, got {0}")]
    InvalidPointWidth(usize),

    /// Error when the data length is not a multiple of the record width.
    #[error("Data length ({len}) is not a multiple of the record width ({width})")]
    InvalidDataLength {
        /// Length of the flat data buffer.
        len: usize,
        /// Expected record width.
        width: usize,
    },
}
