use anyhow::ensure;
use kinecore::prelude::{CoordinateSample, MIN_SAMPLES};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic helical track.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub radius: f64,
    pub climb_rate: f64,
    pub angular_rate: f64,
    pub time_step: f64,
    pub noise: f64,
    pub seed: u64,
    /// Submit the samples out of time order.
    pub shuffle: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 32,
            radius: 25.0,
            climb_rate: 1.5,
            angular_rate: 0.2,
            time_step: 0.5,
            noise: 0.05,
            seed: 0,
            shuffle: true,
        }
    }
}

impl GeneratorConfig {
    fn normalized_samples(&self) -> usize {
        self.samples.max(MIN_SAMPLES)
    }
}

pub fn build_track(config: &GeneratorConfig) -> anyhow::Result<Vec<CoordinateSample>> {
    ensure!(
        config.time_step.is_finite() && config.time_step > 0.0,
        "time step must be positive, got {}",
        config.time_step
    );
    ensure!(
        config.noise.is_finite() && config.noise >= 0.0,
        "noise must be non-negative, got {}",
        config.noise
    );

    let count = config.normalized_samples();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut track = Vec::with_capacity(count);

    for index in 0..count {
        let timestamp = index as f64 * config.time_step;
        let angle = timestamp * config.angular_rate;
        let mut jitter = || {
            if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            }
        };
        let x = config.radius * angle.cos() + jitter();
        let y = config.radius * angle.sin() + jitter();
        let z = config.climb_rate * timestamp + jitter();
        track.push(CoordinateSample::new(x, y, z, timestamp));
    }

    if config.shuffle {
        track.shuffle(&mut rng);
    }

    Ok(track)
}
