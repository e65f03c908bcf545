#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// World-level augmentation queue.
pub mod augmentor;

/// Oriented 3D box container.
pub mod boxes;

/// Error types for the augmentation module.
pub mod error;

/// Random axis flips.
pub mod flip;

/// Rotation and angle utilities shared by the transforms.
pub mod ops;

/// Point cloud container.
pub mod pointcloud;

/// Random global rotation.
pub mod rotation;

/// Random global scaling.
pub mod scaling;

/// Resolution of the point velocity channels.
pub mod velocity;

pub use crate::error::AugmentError;
