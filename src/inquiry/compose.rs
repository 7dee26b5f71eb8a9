//! Inquiry composition — message text, contact deep link, and share query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{CONTACT_SERVICE_BASE, DEFAULT_CONTACT_PHONE};
use crate::error::InquiryError;

use super::state::InquiryState;

/// Everything the caller needs to hand an inquiry off.
///
/// The caller replaces the page address with `share_query` (no reload, no
/// new history entry) and opens `contact_link` in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub message: String,
    pub contact_link: String,
    pub share_query: String,
}

/// `DD-MM-YYYY`, independent of locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Escapes left undone so the output matches `encodeURIComponent`, which
/// also keeps `! ' ( ) *` literal.
const URI_COMPONENT_KEPT: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode one URI component.
///
/// Every `%` in `urlencoding` output starts an escape triplet, so replacing
/// whole triplets cannot touch an escaped literal `%`.
pub fn encode_uri_component(raw: &str) -> String {
    URI_COMPONENT_KEPT
        .iter()
        .fold(urlencoding::encode(raw).into_owned(), |encoded, (escape, literal)| {
            encoded.replace(escape, literal)
        })
}

/// Human-readable inquiry text. Fails if the destination or date is unset.
pub fn compose_message(state: &InquiryState) -> Result<String, InquiryError> {
    let (Some(destination), Some(date)) = (state.destination(), state.date()) else {
        return Err(InquiryError::Incomplete {
            missing: state.missing_fields(),
        });
    };
    Ok(format!(
        "Hi, I'm interested in your 3-day trip to {destination} for {} adults and {} kids starting {}. Please send details, cost and availability.",
        state.adults(),
        state.kids(),
        format_date(date),
    ))
}

/// Query string reflecting the current selection, with a leading `?`.
///
/// Unset destination/date keys are left out.
pub fn build_share_query(state: &InquiryState) -> String {
    let mut pairs = Vec::with_capacity(4);
    if let Some(destination) = state.destination() {
        pairs.push(format!("dest={}", encode_uri_component(destination)));
    }
    pairs.push(format!("adults={}", state.adults()));
    pairs.push(format!("kids={}", state.kids()));
    if let Some(date) = state.date() {
        pairs.push(format!("date={}", encode_uri_component(&format_date(date))));
    }
    format!("?{}", pairs.join("&"))
}

/// Builds deep links to the chat service for one fixed phone number.
#[derive(Debug, Clone)]
pub struct InquiryComposer {
    contact_phone: String,
}

impl Default for InquiryComposer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_PHONE)
    }
}

impl InquiryComposer {
    /// `contact_phone` is digits only, without the leading `+`.
    pub fn new(contact_phone: impl Into<String>) -> Self {
        Self {
            contact_phone: contact_phone.into(),
        }
    }

    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    /// `https://wa.me/+<phone>?text=<percent-encoded message>`
    pub fn build_contact_link(&self, message: &str) -> String {
        format!(
            "{CONTACT_SERVICE_BASE}+{}?text={}",
            self.contact_phone,
            encode_uri_component(message)
        )
    }

    /// Compose the message, contact link, and share query. Leaves `state` untouched.
    pub fn submit(&self, state: &InquiryState) -> Result<SubmitResult, InquiryError> {
        let message = match compose_message(state) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Inquiry submitted before it was complete");
                return Err(e);
            }
        };
        let contact_link = self.build_contact_link(&message);
        let share_query = build_share_query(state);

        info!(
            destination = state.destination().unwrap_or_default(),
            adults = state.adults(),
            kids = state.kids(),
            "Inquiry composed"
        );

        Ok(SubmitResult {
            message,
            contact_link,
            share_query,
        })
    }
}
