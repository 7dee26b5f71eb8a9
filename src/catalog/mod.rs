//! Destination catalog — the single source of destinations, itineraries,
//! and summary lists.
//!
//! The catalog is either compiled in (`Catalog::builtin`) or loaded from a
//! JSON file at startup, and is read-only afterwards.

pub mod builtin;
pub mod model;
pub mod store;

pub use model::{Category, DestinationEntry, DestinationOption, ItineraryDay, SummaryContent};
pub use store::{Catalog, CatalogFile};
