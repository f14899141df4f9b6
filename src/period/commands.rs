use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
    period::{DashboardController, DashboardSnapshot, PeriodSelection, PeriodState},
    AppState,
};

fn controller_from_state(state: &AppState) -> DashboardController {
    state.dashboard.clone()
}

/// Date inputs arrive as `YYYY-MM-DD`; a blank field clears the draft value.
fn parse_date_field(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD")),
    }
}

pub async fn get_dashboard(state: &AppState) -> Result<DashboardSnapshot, String> {
    let controller = controller_from_state(state);
    Ok(controller.get_snapshot().await)
}

pub async fn select_period(
    state: &AppState,
    selection: PeriodSelection,
) -> Result<DashboardSnapshot, String> {
    let controller = controller_from_state(state);
    controller.select_period(selection).await;
    Ok(controller.get_snapshot().await)
}

pub async fn set_custom_draft(
    state: &AppState,
    start: Option<String>,
    end: Option<String>,
) -> Result<PeriodState, String> {
    let start = parse_date_field(start.as_deref()).map_err(|e| e.to_string())?;
    let end = parse_date_field(end.as_deref()).map_err(|e| e.to_string())?;

    let controller = controller_from_state(state);
    controller.set_draft_start(start).await;
    Ok(controller.set_draft_end(end).await)
}

pub async fn apply_custom_range(state: &AppState) -> Result<DashboardSnapshot, String> {
    let controller = controller_from_state(state);
    controller.apply_custom().await.map_err(|e| e.to_string())?;
    Ok(controller.get_snapshot().await)
}
