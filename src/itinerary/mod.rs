//! Itinerary walker — day-by-day navigation through a destination's plan,
//! ending on a summary of inclusions, exclusions, and things to carry.

pub mod walker;

pub use walker::{DayMarker, ItineraryWalker, WalkerStep, WalkerView, resolve_itinerary};
