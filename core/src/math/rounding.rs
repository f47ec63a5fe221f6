/// Scale used when reporting summary values (two decimal places).
pub const HUNDREDTHS: f64 = 100.0;

pub struct RoundingHelper;

impl RoundingHelper {
    /// Rounds to the nearest integer with halves going toward positive infinity,
    /// so `2.5 -> 3` and `-2.5 -> -2`.
    pub fn round_half_up(value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let floor = value.floor();
        if value - floor >= 0.5 {
            floor + 1.0
        } else {
            floor
        }
    }

    /// Multiply by 100, round, divide by 100. The representation of the
    /// scaled product decides ties, so `1.005` becomes `1`.
    pub fn round_to_hundredths(value: f64) -> f64 {
        let rounded = Self::round_half_up(value * HUNDREDTHS) / HUNDREDTHS;
        // -0.0 would otherwise serialize with its sign
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }
}
