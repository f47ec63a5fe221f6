//! Kinematic summary core for the Rust velocity service.
//!
//! Turns a track of timestamped 3D samples into path distance, average
//! speed and net displacement velocity, rounded to hundredths.

pub mod api_interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{CoordinateSample, KinematicSummary, KinematicsError, VelocityVector};
pub use processing::VelocityCalculator;
