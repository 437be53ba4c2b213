//! Click interval computed from the four delay text fields.

use std::time::Duration;

/// Floor applied to the computed interval so the click worker never sleeps
/// for zero.
const MIN_DELAY_SECS: f64 = 0.001;

/// Raw text of the interval fields, kept exactly as the user typed it. The
/// worker re-reads these every iteration, so edits apply on the next click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub millis: String,
}

impl DelayFields {
    /// Interval in seconds. A field that is anything but pure digits counts
    /// as zero; the total is floored at [`MIN_DELAY_SECS`].
    pub fn total_seconds(&self) -> f64 {
        let h = parse_field(&self.hours) as f64;
        let m = parse_field(&self.minutes) as f64;
        let s = parse_field(&self.seconds) as f64;
        let ms = parse_field(&self.millis) as f64;

        (h * 3600.0 + m * 60.0 + s + ms / 1000.0).max(MIN_DELAY_SECS)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.total_seconds())
    }
}

fn parse_field(text: &str) -> u64 {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().unwrap_or(0)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(h: &str, m: &str, s: &str, ms: &str) -> DelayFields {
        DelayFields {
            hours: h.into(),
            minutes: m.into(),
            seconds: s.into(),
            millis: ms.into(),
        }
    }

    #[test]
    fn digit_fields_follow_the_formula() {
        assert_eq!(fields("0", "0", "2", "500").total_seconds(), 2.5);
        assert_eq!(fields("1", "0", "0", "0").total_seconds(), 3600.0);
        assert_eq!(fields("0", "2", "30", "0").total_seconds(), 150.0);
    }

    #[test]
    fn non_digit_fields_contribute_zero() {
        assert_eq!(fields("", "abc", "1", "").total_seconds(), 1.0);
        assert_eq!(fields("-1", "1.5", "2", "1e3").total_seconds(), 2.0);
        assert_eq!(fields(" 1", "1 ", "0", "").total_seconds(), MIN_DELAY_SECS);
    }

    #[test]
    fn zero_total_is_floored() {
        assert_eq!(fields("0", "0", "0", "0").total_seconds(), MIN_DELAY_SECS);
        assert_eq!(fields("", "", "", "").total_seconds(), MIN_DELAY_SECS);
        assert_eq!(
            DelayFields::default().duration(),
            Duration::from_secs_f64(MIN_DELAY_SECS)
        );
    }

    #[test]
    fn overlong_fields_do_not_panic() {
        // u64 overflow parses as zero rather than blowing up
        let d = fields("99999999999999999999999999", "0", "5", "0");
        assert_eq!(d.total_seconds(), 5.0);
    }
}
