use std::fmt;

/// Whole-number completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProgressPercent(u8);

impl ProgressPercent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Percentage of `completed` out of `total`, rounded half up.
    ///
    /// A `total` of zero yields 0%. `completed` is clamped to `total`.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let completed = completed.min(total) as u128;
        let total = total as u128;
        // floor(100k/L + 1/2) without floats
        let rounded = (200 * completed + total) / (2 * total);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    /// Rounded mean of several percentages, or `None` when there are none.
    #[must_use]
    pub fn average(values: &[ProgressPercent]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: usize = values.iter().map(|p| usize::from(p.0)).sum();
        // sum / len is itself a percentage out of 100 * len
        Some(Self::from_counts(sum, values.len() * 100))
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0 >= 100
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_of_six_is_thirty_three() {
        assert_eq!(ProgressPercent::from_counts(2, 6).value(), 33);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(ProgressPercent::from_counts(1, 8).value(), 13);
        assert_eq!(ProgressPercent::from_counts(1, 200).value(), 1);
        assert_eq!(ProgressPercent::from_counts(1, 3).value(), 33);
        assert_eq!(ProgressPercent::from_counts(2, 3).value(), 67);
    }

    #[test]
    fn matches_rounded_ratio_for_every_k() {
        for total in 1..=12_usize {
            for done in 0..=total {
                let expected = (100.0 * done as f64 / total as f64 + 0.5).floor() as u8;
                assert_eq!(
                    ProgressPercent::from_counts(done, total).value(),
                    expected,
                    "k={done} L={total}"
                );
            }
        }
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(ProgressPercent::from_counts(0, 0), ProgressPercent::ZERO);
        assert_eq!(ProgressPercent::from_counts(3, 0), ProgressPercent::ZERO);
    }

    #[test]
    fn completed_is_clamped_to_total() {
        assert_eq!(ProgressPercent::from_counts(9, 6), ProgressPercent::FULL);
        assert!(ProgressPercent::FULL.is_complete());
    }

    #[test]
    fn average_rounds_and_handles_empty() {
        let values = [
            ProgressPercent::from_counts(2, 6),
            ProgressPercent::from_counts(3, 6),
        ];
        assert_eq!(ProgressPercent::average(&values).unwrap().value(), 42);
        assert_eq!(ProgressPercent::average(&[]), None);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(ProgressPercent::from_counts(1, 2).to_string(), "50%");
        assert!(!ProgressPercent::ZERO.is_started());
    }
}
