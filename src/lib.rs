//! trekdesk — itinerary walks and trip inquiries for a travel booking page.

pub mod catalog;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod itinerary;
pub mod routes;
pub mod sessions;
