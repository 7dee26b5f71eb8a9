//! Itinerary walker — steps through a destination's days, then a summary.
//!
//! The cursor ranges over `0..=N` where `N` is the number of days: values
//! below `N` index a day, `N` itself is the summary screen. It only ever
//! moves by one or resets to zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::store::validate_days;
use crate::catalog::{Catalog, ItineraryDay, SummaryContent, builtin};
use crate::error::CatalogError;

/// Where the walker currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum WalkerStep {
    /// Showing the day at this index.
    Day(usize),
    /// Showing inclusions, exclusions, and things to carry.
    Summary,
}

impl WalkerStep {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

impl std::fmt::Display for WalkerStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(i) => write!(f, "day_{i}"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Per-day marker for the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMarker {
    Completed,
    Current,
    Upcoming,
}

/// Pick the day list for a destination: `provided` when non-empty, then the
/// catalog entry, then the generic three-day plan.
///
/// A provided list is held to the same rules as catalog itineraries.
pub fn resolve_itinerary(
    catalog: &Catalog,
    destination: &str,
    provided: Option<Vec<ItineraryDay>>,
) -> Result<Vec<ItineraryDay>, CatalogError> {
    if let Some(days) = provided.filter(|days| !days.is_empty()) {
        validate_days(destination, &days)?;
        return Ok(days);
    }
    match catalog.itinerary_for(destination) {
        Some(days) => Ok(days.to_vec()),
        None => {
            debug!(destination = %destination, "Using default itinerary");
            Ok(builtin::default_itinerary())
        }
    }
}

/// Walk state for one open itinerary view.
#[derive(Debug, Clone)]
pub struct ItineraryWalker {
    destination: String,
    days: Vec<ItineraryDay>,
    summary: SummaryContent,
    cursor: usize,
}

impl ItineraryWalker {
    /// Open a walk for `destination` at its first day.
    pub fn open(
        catalog: &Catalog,
        destination: &str,
        provided: Option<Vec<ItineraryDay>>,
    ) -> Result<Self, CatalogError> {
        let days = resolve_itinerary(catalog, destination, provided)?;
        let summary = catalog.summary_for(destination).clone();
        let walker = Self::with_days(destination, days, summary);
        info!(
            destination = %walker.destination,
            days = walker.days.len(),
            "Itinerary walk opened"
        );
        Ok(walker)
    }

    /// Walk over an explicit day list, bypassing catalog resolution.
    pub fn with_days(
        destination: impl Into<String>,
        days: Vec<ItineraryDay>,
        summary: SummaryContent,
    ) -> Self {
        Self {
            destination: destination.into(),
            days,
            summary,
            cursor: 0,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    pub fn summary(&self) -> &SummaryContent {
        &self.summary
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step(&self) -> WalkerStep {
        if self.cursor < self.days.len() {
            WalkerStep::Day(self.cursor)
        } else {
            WalkerStep::Summary
        }
    }

    pub fn current_day(&self) -> Option<&ItineraryDay> {
        self.days.get(self.cursor)
    }

    /// Advance one step, stopping at the summary.
    pub fn next(&mut self) -> WalkerStep {
        if self.cursor < self.days.len() {
            self.cursor += 1;
            if self.cursor == self.days.len() {
                info!(destination = %self.destination, "Itinerary walk reached summary");
            }
        }
        self.step()
    }

    /// Go back one step. No-op on the first day.
    pub fn previous(&mut self) -> WalkerStep {
        if self.can_go_previous() {
            self.cursor -= 1;
        }
        self.step()
    }

    /// Return to the first day.
    pub fn reset(&mut self) -> WalkerStep {
        self.cursor = 0;
        self.step()
    }

    /// End the walk. The cursor is not kept for the next open.
    pub fn close(self) {
        debug!(destination = %self.destination, step = %self.step(), "Itinerary walk closed");
    }

    /// Backward navigation is offered on every step except the first.
    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Label for the forward button, `None` once at the summary.
    pub fn next_label(&self) -> Option<&'static str> {
        match self.step() {
            WalkerStep::Day(i) if i + 1 < self.days.len() => Some("Next Day"),
            WalkerStep::Day(_) => Some("View Details"),
            WalkerStep::Summary => None,
        }
    }

    pub fn progress(&self) -> Vec<DayMarker> {
        (0..self.days.len())
            .map(|i| match i.cmp(&self.cursor) {
                std::cmp::Ordering::Less => DayMarker::Completed,
                std::cmp::Ordering::Equal => DayMarker::Current,
                std::cmp::Ordering::Greater => DayMarker::Upcoming,
            })
            .collect()
    }

    pub fn title(&self) -> String {
        format!("{} - {} Day Journey", self.destination, self.days.len())
    }

    /// Serializable snapshot of everything a client needs to render the walk.
    pub fn view(&self) -> WalkerView {
        let step = self.step();
        WalkerView {
            destination: self.destination.clone(),
            title: self.title(),
            step,
            cursor: self.cursor,
            total_days: self.days.len(),
            current_day: self.current_day().cloned(),
            progress: self.progress(),
            can_go_previous: self.can_go_previous(),
            next_label: self.next_label().map(String::from),
            summary: step.is_summary().then(|| self.summary.clone()),
        }
    }
}

/// Render-ready walker state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerView {
    pub destination: String,
    pub title: String,
    pub step: WalkerStep,
    pub cursor: usize,
    pub total_days: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_day: Option<ItineraryDay>,
    pub progress: Vec<DayMarker>,
    pub can_go_previous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryContent>,
}
