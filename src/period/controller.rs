use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    analytics::{build_views, AnalyticsConfig, DashboardViews, DateRange},
    models::Event,
};

use super::{PeriodSelection, PeriodState};

const ENABLE_LOGS: bool = true;

/// Source of "today". Swappable so tests can pin the calendar.
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub state: PeriodState,
    pub hint: String,
    pub views: DashboardViews,
}

/// Owns the period state and the session's event log, and republishes the
/// aggregate views whenever the applied range changes.
#[derive(Clone)]
pub struct DashboardController {
    state: Arc<Mutex<PeriodState>>,
    events: Arc<Vec<Event>>,
    config: Arc<AnalyticsConfig>,
    clock: Clock,
    views_tx: Arc<watch::Sender<Option<DashboardViews>>>,
    /// Token of the most recent background recompute. Publication happens
    /// while holding this lock, so a cancelled recompute can never publish.
    inflight: Arc<Mutex<Option<CancellationToken>>>,
}

impl DashboardController {
    pub fn with_events(events: Vec<Event>, config: AnalyticsConfig, clock: Clock) -> Self {
        let today = clock();
        let draft_window = DateRange::trailing(today, config.trailing_days);
        let (views_tx, _) = watch::channel(None);

        crate::log_info!(
            "Dashboard controller ready with {} events, applied range {}",
            events.len(),
            DateRange::single(today)
        );

        Self {
            state: Arc::new(Mutex::new(PeriodState::new(today, draft_window))),
            events: Arc::new(events),
            config: Arc::new(config),
            clock,
            views_tx: Arc::new(views_tx),
            inflight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn events(&self) -> Arc<Vec<Event>> {
        Arc::clone(&self.events)
    }

    pub async fn get_state(&self) -> PeriodState {
        self.state.lock().await.clone()
    }

    /// Views for the current applied range, computed on the spot.
    pub async fn get_snapshot(&self) -> DashboardSnapshot {
        let state = self.get_state().await;
        let today = self.today();
        let views = build_views(&self.events, state.applied, today, &self.config);

        DashboardSnapshot {
            hint: state.hint(today),
            state,
            views,
        }
    }

    pub async fn select_period(&self, selection: PeriodSelection) -> PeriodState {
        let mut state = self.state.lock().await;
        let next = state.select(selection, self.today());
        let changed = next.applied != state.applied;
        *state = next;

        if changed {
            crate::log_info!("Period {:?} applied: {}", selection, state.applied);
            self.spawn_recompute(state.applied).await;
        }

        state.clone()
    }

    pub async fn set_draft_start(&self, start: Option<NaiveDate>) -> PeriodState {
        let mut state = self.state.lock().await;
        *state = state.with_draft_start(start);
        state.clone()
    }

    pub async fn set_draft_end(&self, end: Option<NaiveDate>) -> PeriodState {
        let mut state = self.state.lock().await;
        *state = state.with_draft_end(end);
        state.clone()
    }

    /// Commit the draft fields. On failure the applied range is left as it was.
    pub async fn apply_custom(&self) -> Result<PeriodState> {
        let mut state = self.state.lock().await;
        let next = match state.confirm_custom() {
            Ok(next) => next,
            Err(err) => {
                crate::log_warn!("Rejected custom range: {}", err);
                return Err(anyhow!(err));
            }
        };

        let changed = next.applied != state.applied;
        *state = next;

        if changed {
            crate::log_info!("Custom range applied: {}", state.applied);
            self.spawn_recompute(state.applied).await;
        }

        Ok(state.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<DashboardViews>> {
        self.views_tx.subscribe()
    }

    /// Last views published to subscribers. Not updated while nobody subscribes.
    pub fn latest_views(&self) -> Option<DashboardViews> {
        self.views_tx.borrow().clone()
    }

    /// Callers hold the state lock, so recomputes are started in the same
    /// order ranges are applied.
    async fn spawn_recompute(&self, range: DateRange) {
        let token = CancellationToken::new();
        {
            let mut inflight = self.inflight.lock().await;
            if let Some(previous) = inflight.replace(token.clone()) {
                previous.cancel();
            }
        }

        if self.views_tx.receiver_count() == 0 {
            crate::log_debug!("No subscribers; skipping background views for {}", range);
            return;
        }

        let events = Arc::clone(&self.events);
        let config = Arc::clone(&self.config);
        let views_tx = Arc::clone(&self.views_tx);
        let inflight = Arc::clone(&self.inflight);
        let today = self.today();

        tokio::spawn(async move {
            let compute =
                tokio::task::spawn_blocking(move || build_views(&events, range, today, &config));

            let views = tokio::select! {
                _ = token.cancelled() => {
                    crate::log_debug!("Recompute for {} superseded", range);
                    return;
                }
                joined = compute => match joined {
                    Ok(views) => views,
                    Err(err) => {
                        crate::log_error!("Recompute for {} failed: {}", range, err);
                        return;
                    }
                },
            };

            let _guard = inflight.lock().await;
            if token.is_cancelled() {
                crate::log_debug!("Discarding views for superseded range {}", range);
                return;
            }
            views_tx.send_replace(Some(views));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::generate_event_log;
    use std::time::Duration;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 16).unwrap()
    }

    fn controller() -> DashboardController {
        let config = AnalyticsConfig::default();
        let events = generate_event_log(fixed_today(), &config);
        DashboardController::with_events(events, config, fixed_today)
    }

    async fn wait_for_range(
        rx: &mut watch::Receiver<Option<DashboardViews>>,
        range: DateRange,
    ) -> DashboardViews {
        let views = tokio::time::timeout(
            Duration::from_secs(5),
            rx.wait_for(|views| views.as_ref().map(|v| v.range) == Some(range)),
        )
        .await
        .expect("views were not published in time")
        .expect("controller dropped");
        (*views).clone().unwrap()
    }

    #[tokio::test]
    async fn starts_on_today() {
        let controller = controller();
        let snapshot = controller.get_snapshot().await;

        assert_eq!(snapshot.state.selection, PeriodSelection::Today);
        assert_eq!(snapshot.views.range, DateRange::single(fixed_today()));
        assert_eq!(snapshot.hint, "Today (2025-12-16)");
        assert!(!snapshot.views.is_empty);
    }

    #[tokio::test]
    async fn selecting_yesterday_publishes_new_views() {
        let controller = controller();
        let mut rx = controller.subscribe();

        let state = controller.select_period(PeriodSelection::Yesterday).await;
        let views = wait_for_range(&mut rx, state.applied).await;

        assert_eq!(views.range.start, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        assert_eq!(views, controller.get_snapshot().await.views);
    }

    #[tokio::test]
    async fn rejected_custom_range_keeps_applied_range() {
        let controller = controller();
        let before = controller.get_snapshot().await;

        controller.select_period(PeriodSelection::Custom).await;
        controller
            .set_draft_start(NaiveDate::from_ymd_opt(2025, 12, 16))
            .await;
        controller
            .set_draft_end(NaiveDate::from_ymd_opt(2025, 12, 10))
            .await;

        assert!(controller.apply_custom().await.is_err());

        let after = controller.get_snapshot().await;
        assert_eq!(after.state.applied, before.state.applied);
        assert_eq!(after.views, before.views);
    }

    #[tokio::test]
    async fn no_background_views_without_subscribers() {
        let controller = controller();

        let state = controller.select_period(PeriodSelection::Yesterday).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(controller.latest_views().is_none());
        assert_eq!(controller.get_snapshot().await.views.range, state.applied);
    }

    #[tokio::test]
    async fn latest_applied_range_wins() {
        let controller = controller();
        let mut rx = controller.subscribe();

        controller.select_period(PeriodSelection::Yesterday).await;
        controller.select_period(PeriodSelection::Custom).await;
        let last = controller.apply_custom().await.unwrap();

        let views = wait_for_range(&mut rx, last.applied).await;
        assert_eq!(views.range, DateRange::trailing(fixed_today(), 7));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.latest_views().map(|v| v.range), Some(last.applied));
    }
}
