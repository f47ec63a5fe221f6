use crate::prelude::{CoordinateSample, VelocityVector};

pub struct GeometryHelper;

impl GeometryHelper {
    /// Straight-line distance between two samples.
    pub fn segment_length(from: &CoordinateSample, to: &CoordinateSample) -> f64 {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dz = to.z - from.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Sum of segment lengths between consecutive samples, in slice order.
    pub fn path_length(samples: &[CoordinateSample]) -> f64 {
        samples
            .windows(2)
            .map(|pair| Self::segment_length(&pair[0], &pair[1]))
            .sum()
    }

    pub fn displacement(from: &CoordinateSample, to: &CoordinateSample) -> VelocityVector {
        VelocityVector::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }
}
