use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the medium band.
pub const MEDIUM_MIN: f64 = 40.0;
/// Lower bound (inclusive) of the high band.
pub const HIGH_MIN: f64 = 70.0;

/// Base class every score card carries; the category class is added on top.
pub const SCORE_CARD_CLASS: &str = "score-card";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Low,
    Medium,
    High,
}

impl ScoreCategory {
    /// Half-open partition: `[.., 40)`, `[40, 70)`, `[70, ..]`.
    /// NaN fails both comparisons and lands in `High`.
    pub fn classify(score: f64) -> Self {
        if score < MEDIUM_MIN {
            ScoreCategory::Low
        } else if score < HIGH_MIN {
            ScoreCategory::Medium
        } else {
            ScoreCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Low => "low",
            ScoreCategory::Medium => "medium",
            ScoreCategory::High => "high",
        }
    }

    /// Full class list for the score card: reset to the base class, then set
    /// exactly one category class.
    pub fn card_classes(&self) -> String {
        format!("{SCORE_CARD_CLASS} {}", self.as_str())
    }
}

/// Numeric-to-string the way a browser prints a number: integral values
/// have no fractional part and negative zero prints as `0`.
///
/// Exponent forms differ: `1e21` prints as its full digit run and `1e-7` as
/// `0.0000001`, where a browser writes `1e+21` and `1e-7`.
pub fn format_score(score: f64) -> String {
    if score == 0.0 {
        return "0".to_string();
    }
    if score.is_finite() && score.fract() == 0.0 && score.abs() < 1e15 {
        return format!("{}", score as i64);
    }
    format!("{score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(ScoreCategory::classify(39.999), ScoreCategory::Low);
        assert_eq!(ScoreCategory::classify(40.0), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::classify(69.999), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::classify(70.0), ScoreCategory::High);
    }

    #[test]
    fn out_of_range_scores_still_classify() {
        assert_eq!(ScoreCategory::classify(-50.0), ScoreCategory::Low);
        assert_eq!(ScoreCategory::classify(1_000.0), ScoreCategory::High);
        assert_eq!(ScoreCategory::classify(f64::NAN), ScoreCategory::High);
    }

    #[test]
    fn every_score_has_exactly_one_category() {
        for tenths in -200..=1200 {
            let score = tenths as f64 / 10.0;
            let hits = [
                score < MEDIUM_MIN,
                (MEDIUM_MIN..HIGH_MIN).contains(&score),
                score >= HIGH_MIN,
            ];
            assert_eq!(hits.iter().filter(|h| **h).count(), 1, "score {score}");

            let expected = if hits[0] {
                ScoreCategory::Low
            } else if hits[1] {
                ScoreCategory::Medium
            } else {
                ScoreCategory::High
            };
            assert_eq!(ScoreCategory::classify(score), expected);
        }
    }

    #[test]
    fn card_classes_replace_previous_category() {
        assert_eq!(ScoreCategory::High.card_classes(), "score-card high");
        assert_eq!(ScoreCategory::Low.card_classes(), "score-card low");
        assert!(!ScoreCategory::Medium.card_classes().contains("high"));
    }

    #[test]
    fn scores_print_like_browser_numbers() {
        assert_eq!(format_score(85.0), "85");
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(format_score(-0.0), "0");
        assert_eq!(format_score(-12.0), "-12");
        assert_eq!(format_score(0.1), "0.1");
    }
}
