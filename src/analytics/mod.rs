pub mod aggregate;
pub mod config;
pub mod filter;
pub mod generator;
pub mod range;

pub use aggregate::{
    build_views, compute_kpi, daily_series, date_trend, hourly_series, top_menu_items,
    weekday_series, CategoryCount, DashboardViews, Kpi, SeriesPoint,
};
pub use config::AnalyticsConfig;
pub use filter::filter_by_range;
pub use generator::generate_event_log;
pub use range::DateRange;
