pub mod velocity;

pub use velocity::VelocityCalculator;
