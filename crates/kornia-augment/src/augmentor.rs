use std::f32::consts::{FRAC_PI_4, PI};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    boxes::{Boxes3d, HEADING},
    error::AugmentError,
    flip::{random_flip_along_x, random_flip_along_y},
    ops::{limit_period, uniform_range},
    pointcloud::PointCloud,
    rotation::global_rotation,
    scaling::{global_scaling, MIN_SCALE_RANGE_WIDTH},
    velocity::VelocityIndices,
};

/// Axis a scene can be mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror across the x axis, negating y.
    #[serde(alias = "x")]
    X,
    /// Mirror across the y axis, negating x.
    #[serde(alias = "y")]
    Y,
}

/// One step of the augmentation queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum AugmentStep {
    /// Randomly flip the scene along each listed axis.
    RandomWorldFlip {
        /// Axes to flip along, each with its own coin flip.
        along_axis_list: Vec<FlipAxis>,
    },
    /// Rotate the scene about z by an angle drawn from the range.
    RandomWorldRotation {
        /// The `[min, max]` rotation range in radians.
        world_rot_angle: [f32; 2],
    },
    /// Scale the scene by a factor drawn from the range.
    RandomWorldScaling {
        /// The `[min, max]` scale range.
        world_scale_range: [f32; 2],
    },
}

/// Parameters of a [`DataAugmentor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AugmentorConfig {
    /// Steps applied in order to every sample.
    pub steps: Vec<AugmentStep>,
    /// Optional `[vx_idx, vy_idx]` of the point velocity channels.
    pub point_velocity_indices: Option<Vec<i64>>,
    /// Optional fixed seed for reproducible sampling.
    pub random_seed: Option<u64>,
}

impl Default for AugmentorConfig {
    fn default() -> Self {
        Self {
            steps: vec![
                AugmentStep::RandomWorldFlip {
                    along_axis_list: vec![FlipAxis::X],
                },
                AugmentStep::RandomWorldRotation {
                    world_rot_angle: [-FRAC_PI_4, FRAC_PI_4],
                },
                AugmentStep::RandomWorldScaling {
                    world_scale_range: [0.95, 1.05],
                },
            ],
            point_velocity_indices: None,
            random_seed: None,
        }
    }
}

impl AugmentorConfig {
    /// Parse a configuration from JSON.
    ///
    /// Fields missing from the document take their [`Default`] value.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Configuration`] if the document does not
    /// describe a valid configuration.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_augment::augmentor::AugmentorConfig;
    ///
    /// let config = AugmentorConfig::from_json(
    ///     r#"{
    ///         "steps": [
    ///             {"name": "RandomWorldFlip", "along_axis_list": ["x", "y"]},
    ///             {"name": "RandomWorldRotation", "world_rot_angle": [-0.78, 0.78]}
    ///         ],
    ///         "point_velocity_indices": [3, 4]
    ///     }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.steps.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, AugmentError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AugmentError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration without running it.
    ///
    /// # Errors
    ///
    /// Returns an error if the velocity indices are not a pair, a range bound
    /// is not finite or a sampled range is too wide to draw from.
    pub fn validate(&self) -> Result<(), AugmentError> {
        VelocityIndices::validate(self.point_velocity_indices.as_deref())?;
        for step in &self.steps {
            match step {
                AugmentStep::RandomWorldFlip { .. } => {}
                AugmentStep::RandomWorldRotation {
                    world_rot_angle: [min, max],
                } => {
                    uniform_range(*min, *max)?;
                }
                AugmentStep::RandomWorldScaling {
                    world_scale_range: [min, max],
                } => {
                    if !min.is_finite() || !max.is_finite() {
                        return Err(AugmentError::InvalidRange {
                            min: *min,
                            max: *max,
                        });
                    }
                    if max - min >= MIN_SCALE_RANGE_WIDTH {
                        uniform_range(*min, *max)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// What a call to [`DataAugmentor::forward`] applied to a sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AugmentRecord {
    /// Coin-flip outcome of every flip, in order.
    pub flips: Vec<(FlipAxis, bool)>,
    /// Sampled rotation angles, in order.
    pub rotations: Vec<f32>,
    /// Applied scale factors, in order. Degenerate ranges contribute nothing.
    pub scales: Vec<f32>,
}

/// Runs a queue of global augmentations over boxes and points.
///
/// The augmentor owns its random source, so each data-loading worker should
/// own its own augmentor.
pub struct DataAugmentor {
    config: AugmentorConfig,
    rng: StdRng,
}

impl DataAugmentor {
    /// Create a new augmentor.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, see [`AugmentorConfig::validate`].
    pub fn new(config: AugmentorConfig) -> Result<Self, AugmentError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(Self { config, rng })
    }

    /// Get the configuration of the augmentor.
    pub fn config(&self) -> &AugmentorConfig {
        &self.config
    }

    /// Apply every step to a sample, then wrap the box headings into `[-π, π)`.
    ///
    /// # Arguments
    ///
    /// * `boxes` - The boxes of the sample, modified in place.
    /// * `points` - The points of the sample, modified in place.
    ///
    /// # Returns
    ///
    /// The record of the sampled parameters.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_augment::augmentor::{AugmentorConfig, DataAugmentor};
    /// use kornia_augment::{boxes::Boxes3d, pointcloud::PointCloud};
    ///
    /// let config = AugmentorConfig {
    ///     random_seed: Some(0),
    ///     ..Default::default()
    /// };
    /// let mut augmentor = DataAugmentor::new(config).unwrap();
    ///
    /// let mut boxes = Boxes3d::from_rows(&[[1.0, 2.0, 0.0, 4.0, 2.0, 1.0, 3.0]]).unwrap();
    /// let mut points = PointCloud::from_rows(&[[1.0, 2.0, 0.0, 0.5]]).unwrap();
    ///
    /// let record = augmentor.forward(&mut boxes, &mut points).unwrap();
    /// assert_eq!(record.rotations.len(), 1);
    /// ```
    pub fn forward(
        &mut self,
        boxes: &mut Boxes3d,
        points: &mut PointCloud,
    ) -> Result<AugmentRecord, AugmentError> {
        let indices = self.config.point_velocity_indices.as_deref();
        let mut record = AugmentRecord::default();

        for step in &self.config.steps {
            match step {
                AugmentStep::RandomWorldFlip { along_axis_list } => {
                    for &axis in along_axis_list {
                        let enabled = match axis {
                            FlipAxis::X => {
                                random_flip_along_x(boxes, points, indices, &mut self.rng)?
                            }
                            FlipAxis::Y => {
                                random_flip_along_y(boxes, points, indices, &mut self.rng)?
                            }
                        };
                        log::debug!("random world flip along {axis:?}: {enabled}");
                        record.flips.push((axis, enabled));
                    }
                }
                AugmentStep::RandomWorldRotation { world_rot_angle } => {
                    let angle =
                        global_rotation(boxes, points, *world_rot_angle, indices, &mut self.rng)?;
                    log::debug!("random world rotation: {angle} rad");
                    record.rotations.push(angle);
                }
                AugmentStep::RandomWorldScaling { world_scale_range } => {
                    match global_scaling(boxes, points, *world_scale_range, &mut self.rng)? {
                        Some(factor) => {
                            log::debug!("random world scaling: {factor}");
                            record.scales.push(factor);
                        }
                        None => log::debug!(
                            "random world scaling skipped, degenerate range {world_scale_range:?}"
                        ),
                    }
                }
            }
        }

        for b in boxes.rows_mut() {
            b[HEADING] = limit_period(b[HEADING], 0.5, 2.0 * PI);
        }

        Ok(record)
    }
}
