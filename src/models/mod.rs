//! Record types exchanged between the presentation layer and the database.

pub mod consultation;
pub mod patient;

pub use consultation::*;
pub use patient::*;

/// Lower bound of the dosha/guna slider domain.
pub const SCORE_MIN: i32 = 0;
/// Upper bound of the dosha/guna slider domain.
pub const SCORE_MAX: i32 = 10;

/// Clamp a slider value into the 0–10 score domain.
pub fn clamp_score(value: i32) -> i32 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-3), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(7), 7);
        assert_eq!(clamp_score(10), 10);
        assert_eq!(clamp_score(15), 10);
    }
}
