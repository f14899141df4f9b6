use chrono::NaiveDate;

use crate::analytics::{config::AnalyticsConfig, range::DateRange};
use crate::models::{AgeBracket, Event, Gender, MenuItemKind};

const ENABLE_LOGS: bool = true;

/// Attributes repeat by position inside an hour bucket so a given bucket
/// always produces the same visitors.
const GENDER_PATTERN: [Gender; 5] = [
    Gender::Female,
    Gender::Male,
    Gender::Female,
    Gender::Female,
    Gender::Male,
];

const AGE_PATTERN: [AgeBracket; 8] = [
    AgeBracket::Twenties,
    AgeBracket::Thirties,
    AgeBracket::Thirties,
    AgeBracket::Twenties,
    AgeBracket::Forties,
    AgeBracket::Thirties,
    AgeBracket::Teens,
    AgeBracket::FiftiesPlus,
];

const MENU_PATTERN: [MenuItemKind; 12] = [
    MenuItemKind::Americano,
    MenuItemKind::CafeLatte,
    MenuItemKind::VanillaLatte,
    MenuItemKind::Americano,
    MenuItemKind::Cappuccino,
    MenuItemKind::LemonTea,
    MenuItemKind::CafeLatte,
    MenuItemKind::Decaf,
    MenuItemKind::Americano,
    MenuItemKind::MiniCake,
    MenuItemKind::IcedTea,
    MenuItemKind::ChocolateCake,
];

/// Lunch hours get a small price bump (larger sizes, extra shots).
const LUNCH_HOURS: [u32; 3] = [11, 12, 13];
const LUNCH_BONUS_PCT: u64 = 10;

/// Baseline visitor count for an hour of the day.
fn baseline_visits(hour: u32) -> u32 {
    match hour {
        12 => 12,
        11 => 9,
        10 => 6,
        15 => 4,
        _ => 3,
    }
}

/// Small per-day step in `0..5` so consecutive days differ.
fn day_step(day_index: u32) -> u32 {
    (day_index * 3) % 5
}

fn visits_for(hour: u32, day_index: u32) -> u32 {
    baseline_visits(hour) * (10 + day_step(day_index)) / 10
}

fn sales_amount(item: MenuItemKind, hour: u32, day_index: u32) -> u64 {
    let hour_bonus = if LUNCH_HOURS.contains(&hour) {
        LUNCH_BONUS_PCT
    } else {
        0
    };
    let day_bonus = u64::from(day_step(day_index)) * 2;
    item.base_price() * (100 + hour_bonus + day_bonus) / 100
}

fn event_at(date: NaiveDate, hour: u32, position: u32, visits: u32, day_index: u32) -> Option<Event> {
    let minute = position * 60 / visits.max(1);
    let timestamp = date.and_hms_opt(hour, minute, 0)?;
    let slot = position as usize;
    let menu_item = MENU_PATTERN[slot % MENU_PATTERN.len()];

    Some(Event {
        timestamp,
        sales_amount: sales_amount(menu_item, hour, day_index),
        gender: GENDER_PATTERN[slot % GENDER_PATTERN.len()],
        age_bracket: AGE_PATTERN[slot % AGE_PATTERN.len()],
        menu_item,
    })
}

/// Build the synthetic event log for the `trailing_days` days ending at `today`.
///
/// Events are ordered chronologically: oldest day first, then by hour, then by
/// position within the hour. Every call returns a fresh vector.
pub fn generate_event_log(today: NaiveDate, config: &AnalyticsConfig) -> Vec<Event> {
    let window = DateRange::trailing(today, config.trailing_days);
    let mut events = Vec::new();

    for (day_index, date) in window.days().enumerate() {
        let day_index = day_index as u32;
        for hour in config.business_hours() {
            let visits = visits_for(hour, day_index);
            for position in 0..visits {
                match event_at(date, hour, position, visits, day_index) {
                    Some(event) => events.push(event),
                    None => {
                        crate::log_warn!("Skipping event with invalid time {date} {hour}:xx");
                    }
                }
            }
        }
    }

    crate::log_debug!("Generated {} events for window {}", events.len(), window);

    events
}
