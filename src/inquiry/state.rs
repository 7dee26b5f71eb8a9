//! Inquiry selection — destination, start date, and party size.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Upper bound on adults, on kids, and on adults + kids together.
pub const MAX_GUESTS: u32 = 10;
pub const MIN_ADULTS: u32 = 1;
pub const DEFAULT_ADULTS: u32 = 2;
/// Length of every trip offered through the inquiry widget.
pub const TRIP_DAYS: u64 = 3;
/// Parties larger than this get the group discount hint.
pub const GROUP_DISCOUNT_THRESHOLD: u32 = 5;

/// A single press of one of the party-size buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyAction {
    IncrementAdults,
    DecrementAdults,
    IncrementKids,
    DecrementKids,
}

/// What the user has picked so far. Created fresh per session; never persisted.
///
/// Counts are only changed through the increment/decrement methods, which
/// keep `1 <= adults`, `adults + kids <= MAX_GUESTS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryState {
    destination: Option<String>,
    date: Option<NaiveDate>,
    adults: u32,
    kids: u32,
}

impl Default for InquiryState {
    fn default() -> Self {
        Self {
            destination: None,
            date: None,
            adults: DEFAULT_ADULTS,
            kids: 0,
        }
    }
}

impl InquiryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from possibly out-of-range counts, clamping them into range.
    /// Adults take priority over kids when the total would exceed the cap.
    pub fn with_counts(
        destination: Option<String>,
        date: Option<NaiveDate>,
        adults: u32,
        kids: u32,
    ) -> Self {
        let adults = adults.clamp(MIN_ADULTS, MAX_GUESTS);
        let kids = kids.min(MAX_GUESTS - adults);
        let mut state = Self {
            destination: None,
            date,
            adults,
            kids,
        };
        if let Some(name) = destination {
            state.select_destination(&name);
        }
        state
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn kids(&self) -> u32 {
        self.kids
    }

    pub fn guests(&self) -> u32 {
        self.adults + self.kids
    }

    /// Pick a destination, stored as given. Catalog membership is not
    /// checked; an empty name clears the selection.
    pub fn select_destination(&mut self, name: &str) {
        self.destination = (!name.is_empty()).then(|| name.to_string());
    }

    /// Pick the trip start date. Rejecting past dates is left to the caller.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Returns whether the count changed.
    pub fn increment_adults(&mut self) -> bool {
        if self.adults < MAX_GUESTS && self.guests() < MAX_GUESTS {
            self.adults += 1;
            true
        } else {
            false
        }
    }

    pub fn decrement_adults(&mut self) -> bool {
        if self.adults > MIN_ADULTS {
            self.adults -= 1;
            true
        } else {
            false
        }
    }

    pub fn increment_kids(&mut self) -> bool {
        if self.kids < MAX_GUESTS && self.guests() < MAX_GUESTS {
            self.kids += 1;
            true
        } else {
            false
        }
    }

    pub fn decrement_kids(&mut self) -> bool {
        if self.kids > 0 {
            self.kids -= 1;
            true
        } else {
            false
        }
    }

    /// Out-of-range presses are no-ops. Returns whether the count changed.
    pub fn apply(&mut self, action: PartyAction) -> bool {
        match action {
            PartyAction::IncrementAdults => self.increment_adults(),
            PartyAction::DecrementAdults => self.decrement_adults(),
            PartyAction::IncrementKids => self.increment_kids(),
            PartyAction::DecrementKids => self.decrement_kids(),
        }
    }

    /// Both a destination and a date are required before submitting.
    pub fn can_submit(&self) -> bool {
        self.destination.is_some() && self.date.is_some()
    }

    /// Names of the fields still needed before `can_submit` holds.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.destination.is_none() {
            missing.push("destination");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }

    /// The dates the trip covers, starting at the selected date.
    pub fn trip_window(&self) -> Vec<NaiveDate> {
        let Some(start) = self.date else {
            return Vec::new();
        };
        (0..TRIP_DAYS)
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .collect()
    }

    /// Short label for the selected window, e.g. `Mar 10 - Mar 12`.
    pub fn date_range_label(&self) -> Option<String> {
        let window = self.trip_window();
        let (first, last) = (window.first()?, window.last()?);
        Some(format!("{} - {}", first.format("%b %d"), last.format("%b %d")))
    }

    pub fn group_discount_hint(&self) -> bool {
        self.guests() > GROUP_DISCOUNT_THRESHOLD
    }

    pub fn view(&self) -> InquiryView {
        InquiryView {
            destination: self.destination.clone(),
            date: self.date,
            adults: self.adults,
            kids: self.kids,
            guests: self.guests(),
            trip_window: self.trip_window(),
            date_range_label: self.date_range_label(),
            group_discount_hint: self.group_discount_hint(),
            can_submit: self.can_submit(),
            missing: self.missing_fields(),
        }
    }
}

/// Render-ready inquiry state.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryView {
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub adults: u32,
    pub kids: u32,
    pub guests: u32,
    pub trip_window: Vec<NaiveDate>,
    pub date_range_label: Option<String>,
    pub group_discount_hint: bool,
    pub can_submit: bool,
    pub missing: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_invariants(state: &InquiryState) {
        assert!((1..=10).contains(&state.adults()), "adults out of range: {state:?}");
        assert!(state.kids() <= 10, "kids out of range: {state:?}");
        assert!(state.guests() <= 10, "too many guests: {state:?}");
    }

    #[test]
    fn defaults() {
        let state = InquiryState::new();
        assert_eq!(state.adults(), 2);
        assert_eq!(state.kids(), 0);
        assert!(state.destination().is_none());
        assert!(state.date().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn decrement_adults_at_one_is_noop() {
        let mut state = InquiryState::new();
        assert!(state.decrement_adults());
        let before = state.clone();
        assert!(!state.decrement_adults());
        assert_eq!(state, before);
        assert_eq!(state.adults(), 1);
    }

    #[test]
    fn increment_kids_at_cap_is_noop() {
        let mut state = InquiryState::new();
        for _ in 0..8 {
            assert!(state.increment_kids());
        }
        assert_eq!(state.guests(), 10);
        let before = state.clone();
        assert!(!state.increment_kids());
        assert_eq!(state, before);

        let mut state = InquiryState::new();
        while state.increment_adults() {}
        assert_eq!(state.adults(), 10);
        assert!(!state.increment_kids());
        assert_eq!(state.kids(), 0);
    }

    #[test]
    fn increment_adults_respects_total_cap() {
        let mut state = InquiryState::new();
        for _ in 0..5 {
            state.increment_kids();
        }
        // 2 adults + 5 kids: three more adults fit, the fourth does not.
        assert!(state.increment_adults());
        assert!(state.increment_adults());
        assert!(state.increment_adults());
        assert!(!state.increment_adults());
        assert_eq!(state.adults(), 5);
        assert_eq!(state.guests(), 10);
    }

    #[test]
    fn decrement_kids_at_zero_is_noop() {
        let mut state = InquiryState::new();
        assert!(!state.decrement_kids());
        assert_eq!(state.kids(), 0);
    }

    #[test]
    fn invariants_hold_for_every_operation_sequence() {
        // Deterministic pseudo-random walk over all four counter operations.
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut state = InquiryState::new();
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let action = match seed % 4 {
                0 => PartyAction::IncrementAdults,
                1 => PartyAction::DecrementAdults,
                2 => PartyAction::IncrementKids,
                _ => PartyAction::DecrementKids,
            };
            state.apply(action);
            assert_invariants(&state);
        }
    }

    #[test]
    fn can_submit_needs_destination_and_date() {
        let mut state = InquiryState::new();
        assert_eq!(state.missing_fields(), vec!["destination", "date"]);

        state.select_destination("Munsiyari");
        assert!(!state.can_submit());
        assert_eq!(state.missing_fields(), vec!["date"]);

        state.select_date(date(2025, 3, 10));
        assert!(state.can_submit());
        assert!(state.missing_fields().is_empty());

        // Counts never affect readiness.
        while state.increment_kids() {}
        assert!(state.can_submit());
    }

    #[test]
    fn empty_destination_clears_selection() {
        let mut state = InquiryState::new();
        state.select_destination("Nepal");
        state.select_destination("");
        assert!(state.destination().is_none());
    }

    #[test]
    fn destination_is_stored_verbatim() {
        let mut state = InquiryState::new();
        state.select_date(date(2025, 3, 10));

        state.select_destination(" Munsiyari ");
        assert_eq!(state.destination(), Some(" Munsiyari "));

        state.select_destination("  ");
        assert_eq!(state.destination(), Some("  "));
        assert!(state.can_submit());
    }

    #[test]
    fn trip_window_is_three_consecutive_days() {
        let mut state = InquiryState::new();
        assert!(state.trip_window().is_empty());
        assert!(state.date_range_label().is_none());

        state.select_date(date(2025, 2, 27));
        assert_eq!(
            state.trip_window(),
            vec![date(2025, 2, 27), date(2025, 2, 28), date(2025, 3, 1)]
        );
        assert_eq!(state.date_range_label().unwrap(), "Feb 27 - Mar 01");
    }

    #[test]
    fn group_discount_above_five_guests() {
        let mut state = InquiryState::new();
        state.increment_kids();
        state.increment_kids();
        state.increment_kids();
        assert_eq!(state.guests(), 5);
        assert!(!state.group_discount_hint());
        state.increment_adults();
        assert!(state.group_discount_hint());
    }

    #[test]
    fn with_counts_clamps_into_range() {
        let state = InquiryState::with_counts(None, None, 0, 3);
        assert_eq!((state.adults(), state.kids()), (1, 3));

        let state = InquiryState::with_counts(None, None, 7, 9);
        assert_eq!((state.adults(), state.kids()), (7, 3));
        assert_invariants(&state);

        let state = InquiryState::with_counts(Some(String::new()), None, 40, 40);
        assert_eq!((state.adults(), state.kids()), (10, 0));
        assert!(state.destination().is_none());
    }
}
