use crate::math::geometry::GeometryHelper;
use crate::math::rounding::RoundingHelper;
use crate::prelude::{
    CoordinateSample, KinematicSummary, KinematicsError, KinematicsResult, VelocityVector,
    MIN_SAMPLES,
};
use crate::telemetry::log::LogManager;

/// Derives path distance, average speed and net velocity from a track.
///
/// Samples are ordered by timestamp before anything is measured, so the
/// caller may submit them in any order. When the sorted track spans no
/// time (`last - first <= 0`) speed and velocity are reported as zero while
/// the distance still reflects the accumulated path.
pub struct VelocityCalculator {
    logger: LogManager,
}

impl VelocityCalculator {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn execute(&self, samples: &[CoordinateSample]) -> KinematicsResult<KinematicSummary> {
        if samples.len() < MIN_SAMPLES {
            return Err(KinematicsError::insufficient_samples());
        }

        let sorted = Self::sort_by_timestamp(samples);
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(KinematicsError::insufficient_samples()),
        };

        let total_distance = GeometryHelper::path_length(&sorted);
        let time_elapsed = last.timestamp - first.timestamp;

        let (speed, velocity) = if time_elapsed > 0.0 {
            let net = GeometryHelper::displacement(first, last);
            (
                total_distance / time_elapsed,
                VelocityVector::new(
                    net.x / time_elapsed,
                    net.y / time_elapsed,
                    net.z / time_elapsed,
                ),
            )
        } else {
            (0.0, VelocityVector::default())
        };

        self.logger.trace(&format!(
            "track of {} samples spans {} time units over distance {:.4}",
            sorted.len(),
            time_elapsed,
            total_distance
        ));

        Ok(KinematicSummary {
            distance: RoundingHelper::round_to_hundredths(total_distance),
            speed: RoundingHelper::round_to_hundredths(speed),
            velocity: VelocityVector::new(
                RoundingHelper::round_to_hundredths(velocity.x),
                RoundingHelper::round_to_hundredths(velocity.y),
                RoundingHelper::round_to_hundredths(velocity.z),
            ),
        })
    }

    // Tie order for equal timestamps is unspecified.
    fn sort_by_timestamp(samples: &[CoordinateSample]) -> Vec<CoordinateSample> {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        sorted
    }
}

impl Default for VelocityCalculator {
    fn default() -> Self {
        Self::new()
    }
}
