use std::ops::RangeInclusive;

/// First hour bucket of the business day (inclusive).
pub const OPEN_HOUR: u32 = 9;

/// Last hour bucket of the business day (inclusive); it covers `[16, 17)`.
pub const LAST_HOUR: u32 = 16;

/// Length of the generated window and of the daily sales view.
pub const TRAILING_DAYS: u32 = 7;

/// Ranking length for the top menu view.
pub const TOP_N: usize = 5;

/// Shape of the generated event log and the aggregate views.
///
/// The values are fixed; settings files cannot change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub open_hour: u32,
    pub last_hour: u32,
    pub trailing_days: u32,
    pub top_n: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            open_hour: OPEN_HOUR,
            last_hour: LAST_HOUR,
            trailing_days: TRAILING_DAYS,
            top_n: TOP_N,
        }
    }
}

impl AnalyticsConfig {
    pub fn business_hours(&self) -> RangeInclusive<u32> {
        self.open_hour..=self.last_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_day_is_nine_to_five() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.business_hours(), 9..=16);
        assert_eq!(config.business_hours().count(), 8);
    }

    #[test]
    fn default_window_and_ranking() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.trailing_days, 7);
        assert_eq!(config.top_n, 5);
    }
}
