use std::fmt;
use std::time::Duration;

/// Human-readable age (e.g. `4days 4h`), truncated to whole minutes.
pub struct PrettyAge {
    hours: f64,
}

impl PrettyAge {
    pub fn from_hours(hours: f64) -> Self {
        Self { hours }
    }
}

impl fmt::Display for PrettyAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours < 0.0 {
            return write!(f, "-");
        }

        let minutes = (self.hours * 60.0) as u64;
        let age = Duration::from_secs(minutes * 60);

        write!(f, "{}", humantime::format_duration(age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100.0, "4days 4h")]
    #[test_case(50.0, "2days 2h")]
    #[test_case(24.0, "1day")]
    #[test_case(1.5, "1h 30m")]
    #[test_case(0.01, "0s")]
    #[test_case(0.0, "0s")]
    #[test_case(-2.0, "-")]
    fn display(hours: f64, expected: &str) {
        assert_eq!(expected, PrettyAge::from_hours(hours).to_string());
    }
}
