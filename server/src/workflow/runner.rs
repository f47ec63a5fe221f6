use kinecore::api_interface::decode_request;
use kinecore::prelude::{CoordinateSample, KinematicSummary, KinematicsError, KinematicsResult};
use kinecore::processing::VelocityCalculator;
use kinecore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};

/// Runs calculation requests and keeps per-outcome counters.
pub struct Runner {
    calculator: VelocityCalculator,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            calculator: VelocityCalculator::new(),
            metrics: MetricsRecorder::new(),
            logger: LogManager::new(),
        }
    }

    /// Decodes a raw request body and computes its summary.
    pub fn execute(&self, body: &[u8]) -> KinematicsResult<KinematicSummary> {
        let result = decode_request(body).and_then(|samples| self.calculator.execute(&samples));
        self.observe(&result);
        result
    }

    pub fn execute_samples(
        &self,
        samples: &[CoordinateSample],
    ) -> KinematicsResult<KinematicSummary> {
        let result = self.calculator.execute(samples);
        self.observe(&result);
        result
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn observe(&self, result: &KinematicsResult<KinematicSummary>) {
        match result {
            Ok(summary) => {
                self.metrics.record_processed();
                self.logger.record(&format!(
                    "summary distance={} speed={} velocity=({}, {}, {})",
                    summary.distance,
                    summary.speed,
                    summary.velocity.x,
                    summary.velocity.y,
                    summary.velocity.z
                ));
            }
            Err(KinematicsError::Validation(reason)) => {
                self.metrics.record_rejected();
                self.logger.warn(&format!("request rejected: {}", reason));
            }
            Err(KinematicsError::Internal(reason)) => {
                self.metrics.record_failed();
                self.logger.error(&format!("request failed: {}", reason));
            }
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::track::{build_track, GeneratorConfig};

    #[test]
    fn runner_executes_request_body() {
        let runner = Runner::new();
        let summary = runner
            .execute(br#"{"coordinates":[{"x":0,"y":0,"z":0,"timestamp":0},{"x":3,"y":4,"z":0,"timestamp":2}]}"#)
            .unwrap();
        assert_eq!(summary.distance, 5.0);
        assert_eq!(summary.speed, 2.5);
    }

    #[test]
    fn runner_counts_each_outcome() {
        let runner = Runner::new();
        let track = build_track(&GeneratorConfig::default()).unwrap();
        runner.execute_samples(&track).unwrap();
        assert!(runner.execute(b"{}").is_err());
        assert!(runner
            .execute(br#"{"coordinates":[{"x":0},{"y":1}]}"#)
            .is_err());

        assert_eq!(
            runner.metrics(),
            MetricsSnapshot {
                processed: 1,
                rejected: 1,
                failed: 1,
            }
        );
    }
}
