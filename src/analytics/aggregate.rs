use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::{config::AnalyticsConfig, filter::filter_by_range, range::DateRange};
use crate::models::{AgeBracket, Event, Gender};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub total_sales: u64,
    pub total_orders: u64,
    pub average_order_value: u64,
}

/// One fixed bucket of a time series. Buckets with no activity carry `sales == 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub bucket_label: String,
    pub sales: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenderCounts {
    pub male: u64,
    pub female: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgeCounts {
    pub teens: u64,
    pub twenties: u64,
    pub thirties: u64,
    pub forties: u64,
    pub fifties_plus: u64,
}

/// Visitor mix for one business hour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HourlyDemographics {
    pub bucket_label: String,
    pub gender: GenderCounts,
    pub age: AgeCounts,
}

/// Every view the dashboard and analytics pages render for one applied range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// Range these views were computed for.
    pub range: DateRange,
    pub kpi: Kpi,
    pub hourly: Vec<SeriesPoint>,
    pub demographics: Vec<HourlyDemographics>,
    /// Trailing window ending today; ignores `range`.
    pub daily: Vec<SeriesPoint>,
    pub trend: Vec<SeriesPoint>,
    pub weekday: Vec<SeriesPoint>,
    pub top_menu: Vec<CategoryCount>,
    pub gender: Vec<CategoryCount>,
    pub age: Vec<CategoryCount>,
    /// True when no event fell inside `range`; renders the "no data" state.
    pub is_empty: bool,
}

pub fn compute_kpi(events: &[Event]) -> Kpi {
    let total_sales: u64 = events.iter().map(|e| e.sales_amount).sum();
    let total_orders = events.len() as u64;
    let average_order_value = if total_orders == 0 {
        0
    } else {
        // Round half up.
        (total_sales + total_orders / 2) / total_orders
    };

    Kpi {
        total_sales,
        total_orders,
        average_order_value,
    }
}

fn hour_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, hour + 1)
}

/// Sales per business hour, ascending. Hours outside the business day are dropped.
pub fn hourly_series(events: &[Event], config: &AnalyticsConfig) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = config
        .business_hours()
        .map(|hour| SeriesPoint {
            bucket_label: hour_label(hour),
            sales: 0,
        })
        .collect();

    for event in events {
        let hour = event.hour();
        if config.business_hours().contains(&hour) {
            series[(hour - config.open_hour) as usize].sales += event.sales_amount;
        }
    }

    series
}

pub fn hourly_demographics(events: &[Event], config: &AnalyticsConfig) -> Vec<HourlyDemographics> {
    let mut rows: Vec<HourlyDemographics> = config
        .business_hours()
        .map(|hour| HourlyDemographics {
            bucket_label: hour_label(hour),
            gender: GenderCounts::default(),
            age: AgeCounts::default(),
        })
        .collect();

    for event in events {
        let hour = event.hour();
        if !config.business_hours().contains(&hour) {
            continue;
        }
        let row = &mut rows[(hour - config.open_hour) as usize];
        match event.gender {
            Gender::Male => row.gender.male += 1,
            Gender::Female => row.gender.female += 1,
        }
        match event.age_bracket {
            AgeBracket::Teens => row.age.teens += 1,
            AgeBracket::Twenties => row.age.twenties += 1,
            AgeBracket::Thirties => row.age.thirties += 1,
            AgeBracket::Forties => row.age.forties += 1,
            AgeBracket::FiftiesPlus => row.age.fifties_plus += 1,
        }
    }

    rows
}

/// Sales for each day in `range`, zero-filled. Only used for short windows.
fn day_buckets(events: &[Event], range: &DateRange, label: &str) -> Vec<SeriesPoint> {
    let days: Vec<NaiveDate> = range.days().collect();
    let mut sales = vec![0u64; days.len()];

    for event in events {
        let date = event.date();
        if range.contains(date) {
            sales[(date - range.start).num_days() as usize] += event.sales_amount;
        }
    }

    days.into_iter()
        .zip(sales)
        .map(|(day, sales)| SeriesPoint {
            bucket_label: day.format(label).to_string(),
            sales,
        })
        .collect()
}

/// Sales for the trailing window ending `today`, oldest first.
///
/// Pass the unfiltered log: this view does not follow the applied range.
pub fn daily_series(all_events: &[Event], today: NaiveDate, config: &AnalyticsConfig) -> Vec<SeriesPoint> {
    let window = DateRange::trailing(today, config.trailing_days);
    day_buckets(all_events, &window, "%m/%d")
}

/// Sales per calendar day of `range`, oldest first. Only days with sales
/// appear, so the output never outgrows the log.
pub fn date_trend(events: &[Event], range: &DateRange) -> Vec<SeriesPoint> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events.iter().filter(|e| range.contains(e.date())) {
        *per_day.entry(event.date()).or_default() += event.sales_amount;
    }

    per_day
        .into_iter()
        .map(|(day, sales)| SeriesPoint {
            bucket_label: day.format("%Y-%m-%d").to_string(),
            sales,
        })
        .collect()
}

/// Sales per weekday, Monday first; all seven are always present.
pub fn weekday_series(events: &[Event]) -> Vec<SeriesPoint> {
    let mut sales = [0u64; 7];
    for event in events {
        sales[event.date().weekday().num_days_from_monday() as usize] += event.sales_amount;
    }

    WEEKDAY_LABELS
        .iter()
        .zip(sales)
        .map(|(label, sales)| SeriesPoint {
            bucket_label: (*label).to_string(),
            sales,
        })
        .collect()
}

/// Count events per category, in the order each category is first seen.
pub fn category_breakdown<F>(events: &[Event], key: F) -> Vec<CategoryCount>
where
    F: Fn(&Event) -> &'static str,
{
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();

    for event in events {
        let category = key(event);
        match index.get(category) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(category, counts.len());
                counts.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Highest counts first, ties kept in first-seen order, at most `n` entries.
pub fn top_n(mut breakdown: Vec<CategoryCount>, n: usize) -> Vec<CategoryCount> {
    // `sort_by` is stable, which keeps first-seen order among equal counts.
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown.truncate(n);
    breakdown
}

pub fn top_menu_items(events: &[Event], n: usize) -> Vec<CategoryCount> {
    top_n(category_breakdown(events, |e| e.menu_item.name()), n)
}

pub fn gender_breakdown(events: &[Event]) -> Vec<CategoryCount> {
    category_breakdown(events, |e| e.gender.as_str())
}

pub fn age_breakdown(events: &[Event]) -> Vec<CategoryCount> {
    category_breakdown(events, |e| e.age_bracket.as_str())
}

/// Filter the full log to `range` and reduce it into every view.
pub fn build_views(
    all_events: &[Event],
    range: DateRange,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> DashboardViews {
    let filtered = filter_by_range(all_events, &range);

    DashboardViews {
        range,
        kpi: compute_kpi(&filtered),
        hourly: hourly_series(&filtered, config),
        demographics: hourly_demographics(&filtered, config),
        daily: daily_series(all_events, today, config),
        trend: date_trend(&filtered, &range),
        weekday: weekday_series(&filtered),
        top_menu: top_menu_items(&filtered, config.top_n),
        gender: gender_breakdown(&filtered),
        age: age_breakdown(&filtered),
        is_empty: filtered.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItemKind;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn event(day: u32, hour: u32, sales: u64, item: MenuItemKind) -> Event {
        Event {
            timestamp: date(12, day).and_hms_opt(hour, 0, 0).unwrap(),
            sales_amount: sales,
            gender: Gender::Male,
            age_bracket: AgeBracket::Twenties,
            menu_item: item,
        }
    }

    #[test]
    fn kpi_of_two_day_scenario() {
        let events = vec![
            event(10, 12, 4_200_000, MenuItemKind::Americano),
            event(16, 12, 6_800_000, MenuItemKind::CafeLatte),
        ];
        let kpi = compute_kpi(&events);
        assert_eq!(kpi.total_sales, 11_000_000);
        assert_eq!(kpi.total_orders, 2);
        assert_eq!(kpi.average_order_value, 5_500_000);
    }

    #[test]
    fn kpi_average_rounds_half_up() {
        let events = vec![
            event(10, 9, 1, MenuItemKind::Americano),
            event(10, 9, 2, MenuItemKind::Americano),
        ];
        assert_eq!(compute_kpi(&events).average_order_value, 2);

        let events = vec![
            event(10, 9, 1, MenuItemKind::Americano),
            event(10, 9, 1, MenuItemKind::Americano),
            event(10, 9, 2, MenuItemKind::Americano),
        ];
        assert_eq!(compute_kpi(&events).average_order_value, 1);
    }

    #[test]
    fn kpi_of_empty_input_is_zero() {
        assert_eq!(compute_kpi(&[]), Kpi::default());
    }

    #[test]
    fn hourly_series_has_every_business_hour() {
        let config = AnalyticsConfig::default();
        let series = hourly_series(&[], &config);
        let labels: Vec<&str> = series.iter().map(|p| p.bucket_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["09-10", "10-11", "11-12", "12-13", "13-14", "14-15", "15-16", "16-17"]
        );
        assert!(series.iter().all(|p| p.sales == 0));
    }

    #[test]
    fn hourly_series_ignores_hours_outside_business_day() {
        let config = AnalyticsConfig::default();
        let events = vec![
            event(10, 8, 100, MenuItemKind::Americano),
            event(10, 9, 10, MenuItemKind::Americano),
            event(10, 16, 20, MenuItemKind::Americano),
            event(10, 17, 100, MenuItemKind::Americano),
        ];
        let series = hourly_series(&events, &config);
        let total: u64 = series.iter().map(|p| p.sales).sum();

        assert_eq!(series[0].sales, 10);
        assert_eq!(series[7].sales, 20);
        assert_eq!(total, 30);
        assert!(total <= compute_kpi(&events).total_sales);
    }

    #[test]
    fn daily_series_zero_fills_trailing_window() {
        let config = AnalyticsConfig::default();
        let events = vec![
            event(1, 9, 999, MenuItemKind::Americano),
            event(12, 9, 300, MenuItemKind::Americano),
            event(12, 10, 200, MenuItemKind::Americano),
        ];
        let series = daily_series(&events, date(12, 16), &config);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].bucket_label, "12/10");
        assert_eq!(series[6].bucket_label, "12/16");
        assert_eq!(series[2].sales, 500);
        assert_eq!(series.iter().map(|p| p.sales).sum::<u64>(), 500);
    }

    #[test]
    fn date_trend_lists_days_with_sales() {
        let range = DateRange::checked(date(12, 14), date(12, 16)).unwrap();
        let events = vec![
            event(16, 9, 30, MenuItemKind::Americano),
            event(14, 9, 70, MenuItemKind::Americano),
            event(14, 15, 5, MenuItemKind::Americano),
            event(20, 9, 999, MenuItemKind::Americano),
        ];
        let trend = date_trend(&events, &range);

        let labels: Vec<&str> = trend.iter().map(|p| p.bucket_label.as_str()).collect();
        assert_eq!(labels, vec!["2025-12-14", "2025-12-16"]);
        assert_eq!(trend[0].sales, 75);
        assert_eq!(trend[1].sales, 30);
    }

    #[test]
    fn date_trend_of_widest_range_is_sized_by_data() {
        let range = DateRange::checked(NaiveDate::MIN, NaiveDate::MAX).unwrap();
        let events = vec![
            event(10, 9, 1, MenuItemKind::Americano),
            event(12, 9, 2, MenuItemKind::Americano),
        ];
        let views = build_views(&events, range, date(12, 16), &AnalyticsConfig::default());

        assert_eq!(views.trend.len(), 2);
        assert_eq!(views.daily.len(), 7);
        assert_eq!(views.kpi.total_orders, 2);
    }

    #[test]
    fn weekday_series_is_monday_first() {
        // 2025-12-15 is a Monday, 2025-12-14 a Sunday.
        let events = vec![
            event(15, 9, 5, MenuItemKind::Americano),
            event(14, 9, 7, MenuItemKind::Americano),
        ];
        let series = weekday_series(&events);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].bucket_label, "Mon");
        assert_eq!(series[0].sales, 5);
        assert_eq!(series[6].bucket_label, "Sun");
        assert_eq!(series[6].sales, 7);
        assert_eq!(weekday_series(&[]).len(), 7);
    }

    #[test]
    fn top_n_breaks_ties_by_first_seen() {
        let events = vec![
            event(10, 9, 1, MenuItemKind::LemonTea),
            event(10, 9, 1, MenuItemKind::Americano),
            event(10, 9, 1, MenuItemKind::CafeLatte),
            event(10, 9, 1, MenuItemKind::Americano),
            event(10, 9, 1, MenuItemKind::Decaf),
            event(10, 9, 1, MenuItemKind::MiniCake),
            event(10, 9, 1, MenuItemKind::IcedTea),
        ];
        let top = top_menu_items(&events, 5);
        let names: Vec<&str> = top.iter().map(|c| c.category.as_str()).collect();

        assert_eq!(
            names,
            vec!["Americano", "Lemon Tea", "Cafe Latte", "Decaf Americano", "Mini Cake"]
        );
        assert_eq!(top[0].count, 2);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn top_n_of_empty_input_is_empty() {
        assert!(top_menu_items(&[], 5).is_empty());
    }

    #[test]
    fn demographics_count_visitors_per_hour() {
        let config = AnalyticsConfig::default();
        let mut visitor = event(10, 12, 1, MenuItemKind::Americano);
        visitor.gender = Gender::Female;
        visitor.age_bracket = AgeBracket::FiftiesPlus;
        let events = vec![visitor, event(10, 12, 1, MenuItemKind::Americano)];

        let rows = hourly_demographics(&events, &config);
        let noon = &rows[3];
        assert_eq!(noon.bucket_label, "12-13");
        assert_eq!(noon.gender, GenderCounts { male: 1, female: 1 });
        assert_eq!(noon.age.fifties_plus, 1);
        assert_eq!(noon.age.twenties, 1);
    }

    #[test]
    fn build_views_of_empty_window() {
        let config = AnalyticsConfig::default();
        let events = vec![event(12, 9, 100, MenuItemKind::Americano)];
        let range = DateRange::checked(date(12, 20), date(12, 25)).unwrap();
        let views = build_views(&events, range, date(12, 16), &config);

        assert!(views.is_empty);
        assert_eq!(views.kpi, Kpi::default());
        assert!(views.top_menu.is_empty());
        assert_eq!(views.hourly.len(), 8);
        assert!(views.trend.is_empty());
        // The daily view still reflects the trailing week.
        assert_eq!(views.daily.len(), 7);
        assert_eq!(views.daily.iter().map(|p| p.sales).sum::<u64>(), 100);
    }
}
