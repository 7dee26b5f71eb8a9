//! Catalog data model — destinations, itinerary days, and summary content.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouping for a bookable destination. Has no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    National,
    International,
    Trek,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::National => "national",
            Self::International => "international",
            Self::Trek => "trek",
        };
        write!(f, "{s}")
    }
}

/// A bookable place: the minimal identity used by the inquiry picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationOption {
    pub name: String,
    pub category: Category,
}

/// Full catalog record for a destination, as shown on its card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationEntry {
    /// Display name; also the key into the itinerary table.
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
    /// Per-person starting price in rupees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

fn default_duration_days() -> u32 {
    3
}

impl DestinationEntry {
    /// Minimal entry with only a name and category.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            country: None,
            description: String::new(),
            duration_days: default_duration_days(),
            price_inr: None,
            rating: None,
            highlights: Vec::new(),
        }
    }

    pub fn option(&self) -> DestinationOption {
        DestinationOption {
            name: self.name.clone(),
            category: self.category,
        }
    }
}

/// One day of a multi-day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// Ordinal shown to the user. Strictly increasing within one itinerary,
    /// but not necessarily contiguous or 1-based.
    pub day: i32,
    pub title: String,
    /// Activities in display order.
    pub activities: Vec<String>,
}

impl ItineraryDay {
    pub fn new(day: i32, title: &str, activities: &[&str]) -> Self {
        Self {
            day,
            title: title.to_string(),
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Static lists shown once the walker reaches its summary screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryContent {
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub things_to_carry: Vec<String>,
}
