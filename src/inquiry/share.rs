//! Parsing of share queries back into an inquiry selection.

use chrono::NaiveDate;

use crate::error::InquiryError;

use super::state::{DEFAULT_ADULTS, InquiryState};

/// Fields recovered from a share query, before range clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareQuery {
    pub destination: Option<String>,
    pub adults: Option<u32>,
    pub kids: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Decode `dest`, `adults`, `kids`, and `date` from a query string.
///
/// A leading `?` is optional and unknown keys are ignored. Dates are
/// `DD-MM-YYYY`.
pub fn parse_share_query(query: &str) -> Result<ShareQuery, InquiryError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut parsed = ShareQuery::default();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(raw)
            .map_err(|e| InquiryError::InvalidShareQuery(format!("{key}: {e}")))?;

        match key {
            "dest" => parsed.destination = Some(value.into_owned()),
            "adults" => parsed.adults = Some(parse_count(key, &value)?),
            "kids" => parsed.kids = Some(parse_count(key, &value)?),
            "date" => {
                let date = NaiveDate::parse_from_str(&value, "%d-%m-%Y").map_err(|e| {
                    InquiryError::InvalidShareQuery(format!("date {value:?}: {e}"))
                })?;
                parsed.date = Some(date);
            }
            _ => {}
        }
    }
    Ok(parsed)
}

fn parse_count(key: &str, value: &str) -> Result<u32, InquiryError> {
    value
        .parse::<u32>()
        .map_err(|e| InquiryError::InvalidShareQuery(format!("{key} {value:?}: {e}")))
}

impl InquiryState {
    /// Restore a selection from a share query, clamping counts into range.
    pub fn from_share_query(query: &str) -> Result<Self, InquiryError> {
        let parsed = parse_share_query(query)?;
        Ok(Self::with_counts(
            parsed.destination,
            parsed.date,
            parsed.adults.unwrap_or(DEFAULT_ADULTS),
            parsed.kids.unwrap_or(0),
        ))
    }
}
