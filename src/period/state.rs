use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::DateRange;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PeriodSelection {
    #[default]
    Today,
    Yesterday,
    Custom,
}

/// Reasons a custom range is refused. The previously applied range stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    /// Confirm was requested while Today or Yesterday is selected.
    NotInCustomMode,
    /// The start field is empty.
    MissingStart,
    /// The end field is empty.
    MissingEnd,
    /// The start date is after the end date.
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::NotInCustomMode => write!(f, "custom range can only be applied in custom mode"),
            PeriodError::MissingStart => write!(f, "select a start date"),
            PeriodError::MissingEnd => write!(f, "select an end date"),
            PeriodError::InvertedRange { start, end } => {
                write!(f, "start date {start} is after end date {end}")
            }
        }
    }
}

impl std::error::Error for PeriodError {}

/// Which period the operator picked and which range filtering currently uses.
///
/// Transitions never mutate in place: each returns the next state, so a
/// rejected transition simply leaves the caller holding the old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodState {
    pub selection: PeriodSelection,
    /// The only range the filter ever sees.
    pub applied: DateRange,
    /// Unconfirmed custom fields; `None` is an empty field.
    pub draft_start: Option<NaiveDate>,
    pub draft_end: Option<NaiveDate>,
}

fn yesterday_of(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

impl PeriodState {
    /// Starts on Today, with the custom draft prefilled to `draft_window`.
    pub fn new(today: NaiveDate, draft_window: DateRange) -> Self {
        Self {
            selection: PeriodSelection::default(),
            applied: DateRange::single(today),
            draft_start: Some(draft_window.start),
            draft_end: Some(draft_window.end),
        }
    }

    pub fn select(&self, selection: PeriodSelection, today: NaiveDate) -> Self {
        let applied = match selection {
            PeriodSelection::Today => DateRange::single(today),
            PeriodSelection::Yesterday => DateRange::single(yesterday_of(today)),
            // Custom only opens the draft fields; nothing is applied until confirm.
            PeriodSelection::Custom => self.applied,
        };

        Self {
            selection,
            applied,
            ..self.clone()
        }
    }

    pub fn with_draft_start(&self, start: Option<NaiveDate>) -> Self {
        Self {
            draft_start: start,
            ..self.clone()
        }
    }

    pub fn with_draft_end(&self, end: Option<NaiveDate>) -> Self {
        Self {
            draft_end: end,
            ..self.clone()
        }
    }

    pub fn confirm_custom(&self) -> Result<Self, PeriodError> {
        if self.selection != PeriodSelection::Custom {
            return Err(PeriodError::NotInCustomMode);
        }
        let start = self.draft_start.ok_or(PeriodError::MissingStart)?;
        let end = self.draft_end.ok_or(PeriodError::MissingEnd)?;
        let applied =
            DateRange::checked(start, end).ok_or(PeriodError::InvertedRange { start, end })?;

        Ok(Self {
            applied,
            ..self.clone()
        })
    }

    /// Short caption next to the period buttons.
    pub fn hint(&self, today: NaiveDate) -> String {
        match self.selection {
            PeriodSelection::Today => format!("Today ({})", today.format("%Y-%m-%d")),
            PeriodSelection::Yesterday => {
                format!("Yesterday ({})", yesterday_of(today).format("%Y-%m-%d"))
            }
            PeriodSelection::Custom => {
                let start = self
                    .draft_start
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "start date".into());
                let end = self
                    .draft_end
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "end date".into());
                format!("{start} ~ {end}")
            }
        }
    }
}
