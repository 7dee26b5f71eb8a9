//! Catalog — the canonical destination, itinerary, and summary tables.
//!
//! Every consumer resolves destinations through one `Catalog`, keyed by
//! destination `name`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::CatalogError;

use super::builtin;
use super::model::{Category, DestinationEntry, DestinationOption, ItineraryDay, SummaryContent};

/// On-disk JSON layout of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub destinations: Vec<DestinationEntry>,
    /// Destination name → ordered days.
    #[serde(default)]
    pub itineraries: HashMap<String, Vec<ItineraryDay>>,
    /// Destination name → summary lists overriding `default_summary`.
    #[serde(default)]
    pub summaries: HashMap<String, SummaryContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_summary: Option<SummaryContent>,
}

/// Validated, read-only catalog shared by all sessions.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<DestinationEntry>,
    itineraries: HashMap<String, Vec<ItineraryDay>>,
    summaries: HashMap<String, SummaryContent>,
    default_summary: SummaryContent,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            destinations: builtin::destinations(),
            itineraries: builtin::itineraries().into_iter().collect(),
            summaries: HashMap::new(),
            default_summary: builtin::default_summary(),
        }
    }

    /// Build and validate a catalog from its file representation.
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let catalog = Self {
            destinations: file.destinations,
            itineraries: file.itineraries,
            summaries: file.summaries,
            default_summary: file.default_summary.unwrap_or_else(builtin::default_summary),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            destinations = catalog.destinations.len(),
            itineraries = catalog.itineraries.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog file named by `config`, or the built-in catalog.
    pub fn from_config(config: &ServiceConfig) -> crate::error::Result<Self> {
        match &config.catalog_path {
            Some(path) => Ok(Self::load(path)?),
            None => Ok(Self::builtin()),
        }
    }

    /// Check naming and itinerary ordering rules.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashSet<(Category, &str)> = HashSet::new();
        for entry in &self.destinations {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    category: entry.category.to_string(),
                });
            }
            if !seen.insert((entry.category, entry.name.as_str())) {
                return Err(CatalogError::DuplicateName {
                    category: entry.category.to_string(),
                    name: entry.name.clone(),
                });
            }
        }

        for (destination, days) in &self.itineraries {
            validate_days(destination, days)?;
        }
        Ok(())
    }

    pub fn destinations(&self) -> &[DestinationEntry] {
        &self.destinations
    }

    pub fn options(&self) -> Vec<DestinationOption> {
        self.destinations.iter().map(DestinationEntry::option).collect()
    }

    pub fn options_in(&self, category: Category) -> Vec<DestinationOption> {
        self.destinations
            .iter()
            .filter(|d| d.category == category)
            .map(DestinationEntry::option)
            .collect()
    }

    /// First entry with this name, in catalog order.
    pub fn entry(&self, name: &str) -> Option<&DestinationEntry> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// The destination's own itinerary, if it has one.
    pub fn itinerary_for(&self, name: &str) -> Option<&[ItineraryDay]> {
        self.itineraries.get(name).map(Vec::as_slice)
    }

    /// Summary lists for a destination, falling back to the default summary.
    pub fn summary_for(&self, name: &str) -> &SummaryContent {
        self.summaries.get(name).unwrap_or(&self.default_summary)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Day numbers strictly increasing, every day with at least one activity.
pub(crate) fn validate_days(destination: &str, days: &[ItineraryDay]) -> Result<(), CatalogError> {
    for pair in days.windows(2) {
        if pair[1].day <= pair[0].day {
            return Err(CatalogError::DaysNotIncreasing {
                destination: destination.to_string(),
                previous: pair[0].day,
                next: pair[1].day,
            });
        }
    }
    if let Some(day) = days.iter().find(|d| d.activities.is_empty()) {
        return Err(CatalogError::EmptyActivities {
            destination: destination.to_string(),
            day: day.day,
        });
    }
    Ok(())
}
